// Logical play field (renderers scale this to their own surface)
pub const FIELD_WIDTH: f64 = 1280.0;
pub const FIELD_HEIGHT: f64 = 720.0;

// Fixed-step timing
pub const TICK_MS: u64 = 16; // ~60 FPS
pub const MAX_FRAME_MS: u64 = 100;
pub const ANIMATION_STEP: f64 = 0.016;

// Bird
pub const BIRD_X: f64 = 100.0;
pub const BIRD_START_Y: f64 = 360.0;
pub const BIRD_SIZE: f64 = 30.0;
pub const GRAVITY: f64 = 0.5;
pub const JUMP_VELOCITY: f64 = -9.0;
pub const ROTATION_PER_VELOCITY: f64 = 3.0;
pub const MIN_ROTATION_DEG: f64 = -30.0;
pub const MAX_ROTATION_DEG: f64 = 90.0;
pub const WING_PHASE_STEP: f64 = 0.2;

// Pipes
pub const PIPE_WIDTH: f64 = 70.0;
pub const PIPE_SPAWN_SPACING: f64 = 400.0;
pub const PIPE_CULL_X: f64 = -100.0;
pub const MIN_PIPE_HEIGHT: f64 = 100.0;
pub const GROUND_MARGIN: f64 = 50.0;
/// Tallest gap that leaves both pipe segments and the ground margin in the field.
pub const MAX_GAP_HEIGHT: f64 = FIELD_HEIGHT - 2.0 * MIN_PIPE_HEIGHT - GROUND_MARGIN;

// Scoring
pub const PERFECT_PASS_TOLERANCE: f64 = 30.0;
pub const PERFECT_PASS_COINS: u64 = 2;
pub const REGULAR_PASS_COINS: u64 = 1;
pub const MAX_SPEED_MULTIPLIER: f64 = 2.0;

// Particles
pub const PARTICLE_SPEED_SPREAD: f64 = 4.0;
pub const PARTICLE_GRAVITY: f64 = 0.1;
pub const PARTICLE_DECAY: f64 = 0.02;
pub const PARTICLE_MIN_RADIUS: f64 = 2.0;
pub const PARTICLE_RADIUS_SPREAD: f64 = 4.0;

// Burst sizes per gameplay event
pub const JUMP_BURST: usize = 10;
pub const PERFECT_BURST: usize = 15;
pub const DIFFICULTY_BURST: usize = 20;
pub const PURCHASE_BURST: usize = 30;
pub const DEATH_BURST: usize = 40;

// Screen shake
pub const DEATH_SHAKE: f64 = 10.0;
pub const SHAKE_DECAY: f64 = 0.9;
pub const SHAKE_CUTOFF: f64 = 0.1;

// Profile
pub const DEFAULT_ITEM_ID: &str = "default";
