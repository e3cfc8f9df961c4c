//! Mode transitions and the per-tick orchestration of the engines.
//!
//! | from                  | intent                   | to        |
//! |-----------------------|--------------------------|-----------|
//! | MainMenu              | StartGame                | Playing   |
//! | MainMenu, Credits     | Open(screen)             | screen    |
//! | Settings/Shop/Credits | Back, CancelAction       | MainMenu  |
//! | Playing               | collision (internal)     | GameOver  |
//! | GameOver              | PrimaryAction, pointer   | Playing   |
//! | GameOver              | CancelAction             | MainMenu  |
//!
//! Everything else is a no-op, except that PrimaryAction and pointer input
//! flap while playing.

use super::events::SoundEvent;
use super::intent::{Intent, UiAction};
use super::layout;
use super::obstacles;
use super::particles::ParticleColor;
use super::physics::{self, Collision};
use super::scoring::{self, PassKind};
use super::types::{Mode, Session};
use crate::config::SkinCategory;
use crate::core::constants::*;
use crate::core::context::GameContext;
use crate::core::game_loop::TickReport;
use crate::profile::{buy_or_equip, ShopOutcome};
use rand::Rng;

/// Apply one intent between ticks.
pub fn handle_intent<R: Rng>(ctx: &mut GameContext, rng: &mut R, intent: Intent) {
    match intent {
        Intent::PointerDown { x, y } => match ctx.mode {
            Mode::Playing => jump(ctx, rng),
            Mode::GameOver => start_session(ctx, rng),
            mode => {
                if let Some(action) = layout::resolve(mode, &ctx.config, x, y) {
                    handle_ui_action(ctx, rng, action);
                }
            }
        },
        Intent::PrimaryAction => match ctx.mode {
            Mode::Playing => jump(ctx, rng),
            Mode::GameOver => start_session(ctx, rng),
            _ => {}
        },
        Intent::CancelAction => {
            if ctx.mode.is_submenu() || ctx.mode == Mode::GameOver {
                go_to(ctx, Mode::MainMenu);
                ctx.emit(SoundEvent::Click);
            }
        }
        Intent::Ui(action) => handle_ui_action(ctx, rng, action),
    }
}

fn handle_ui_action<R: Rng>(ctx: &mut GameContext, rng: &mut R, action: UiAction) {
    match (ctx.mode, action) {
        (Mode::MainMenu | Mode::GameOver, UiAction::StartGame) => start_session(ctx, rng),
        (Mode::MainMenu | Mode::Credits, UiAction::Open(screen)) => {
            go_to(ctx, screen.into());
            ctx.emit(SoundEvent::Click);
        }
        (mode, UiAction::Back) if mode.is_submenu() => {
            go_to(ctx, Mode::MainMenu);
            ctx.emit(SoundEvent::Click);
        }
        (Mode::Settings, UiAction::SelectDifficulty(key)) => select_difficulty(ctx, rng, key),
        (Mode::Settings, UiAction::ToggleParticles) => {
            ctx.settings.particles = !ctx.settings.particles;
            tracing::info!(enabled = ctx.settings.particles, "particle effects toggled");
            ctx.emit(SoundEvent::Click);
        }
        (Mode::Settings, UiAction::ToggleScreenShake) => {
            ctx.settings.screen_shake = !ctx.settings.screen_shake;
            tracing::info!(enabled = ctx.settings.screen_shake, "screen shake toggled");
            ctx.emit(SoundEvent::Click);
        }
        (Mode::Settings, UiAction::CycleVolume(channel)) => {
            let level = ctx.settings.cycle_volume(channel);
            tracing::info!(?channel, level, "volume changed");
            ctx.emit(SoundEvent::Click);
        }
        (Mode::Shop, UiAction::ShopItem { category, id }) => shop_item(ctx, rng, category, &id),
        (mode, action) => {
            tracing::trace!(?mode, ?action, "ignored ui action");
        }
    }
}

fn go_to(ctx: &mut GameContext, mode: Mode) {
    if ctx.mode != mode {
        tracing::info!(from = ?ctx.mode, to = ?mode, "mode change");
        ctx.mode = mode;
    }
}

fn select_difficulty<R: Rng>(ctx: &mut GameContext, rng: &mut R, key: String) {
    // Unknown keys are stored as-is and resolve to the catalog default.
    tracing::info!(difficulty = %key, known = ctx.config.difficulties.contains(&key), "difficulty selected");
    ctx.settings.difficulty = key;
    ctx.burst(
        rng,
        FIELD_WIDTH / 2.0,
        150.0,
        DIFFICULTY_BURST,
        ParticleColor::Accent,
    );
    ctx.emit(SoundEvent::Click);
}

fn shop_item<R: Rng>(ctx: &mut GameContext, rng: &mut R, category: SkinCategory, id: &str) {
    let outcome = buy_or_equip(&mut ctx.profile, &ctx.config.shop, category, id);
    match outcome {
        ShopOutcome::Purchased { price } => {
            tracing::info!(?category, id, price, balance = ctx.profile.coins, "item purchased");
            let (x, y) = layout::shop_item_region(&ctx.config, category, id)
                .map(|region| region.center())
                .unwrap_or((FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0));
            ctx.emit(SoundEvent::Point);
            ctx.burst(rng, x, y, PURCHASE_BURST, ParticleColor::Gold);
        }
        ShopOutcome::Equipped => {
            tracing::info!(?category, id, "item equipped");
            ctx.emit(SoundEvent::Click);
        }
        ShopOutcome::InsufficientCoins { price, balance } => {
            tracing::debug!(?category, id, price, balance, "not enough coins");
        }
        ShopOutcome::UnknownItem => {
            tracing::debug!(?category, id, "unknown shop item");
        }
    }
}

/// Reset everything session-scoped and enter `Playing`. Used for both the
/// first start and restarts.
pub fn start_session<R: Rng>(ctx: &mut GameContext, rng: &mut R) {
    let difficulty = ctx.selected_difficulty();
    let mut session = Session::new(difficulty);
    obstacles::seed_pipes(&mut session, rng);

    ctx.session = Some(session);
    ctx.particles.clear();
    ctx.screen_shake = 0.0;
    tracing::info!(
        difficulty = %ctx.settings.difficulty,
        gap = difficulty.gap_height,
        speed = difficulty.base_speed,
        "session started"
    );
    go_to(ctx, Mode::Playing);
    ctx.emit(SoundEvent::Click);
}

/// Flap. Ignored outside `Playing`.
pub fn jump<R: Rng>(ctx: &mut GameContext, rng: &mut R) {
    if ctx.mode != Mode::Playing {
        return;
    }
    let Some(session) = ctx.session.as_mut() else {
        return;
    };
    physics::apply_jump(&mut session.bird);
    let y = session.bird.y;
    ctx.emit(SoundEvent::Jump);
    ctx.burst(
        rng,
        BIRD_X,
        y + BIRD_SIZE / 2.0,
        JUMP_BURST,
        ParticleColor::White,
    );
}

/// Terminal collision: switch to `GameOver` and settle the run into the
/// profile. Runs at most once per session.
pub fn end_session<R: Rng>(ctx: &mut GameContext, rng: &mut R, collision: Collision) {
    if ctx.mode != Mode::Playing {
        return;
    }
    let Some(session) = ctx.session.as_mut() else {
        return;
    };
    if session.settled {
        return;
    }
    session.settled = true;
    let (score, coins, y) = (session.score, session.coins_earned, session.bird.y);

    go_to(ctx, Mode::GameOver);
    ctx.emit(SoundEvent::Death);
    if ctx.settings.screen_shake {
        ctx.screen_shake = DEATH_SHAKE;
    }
    ctx.burst(rng, BIRD_X, y, DEATH_BURST, ParticleColor::Accent);

    let new_record = ctx.profile.settle_session(score, coins);
    tracing::info!(
        ?collision,
        score,
        coins_earned = coins,
        balance = ctx.profile.coins,
        high_score = ctx.profile.high_score,
        new_record,
        "session over"
    );
}

/// One fixed simulation step.
pub fn step<R: Rng>(ctx: &mut GameContext, rng: &mut R) -> TickReport {
    ctx.animation_time += ANIMATION_STEP;
    let mut report = TickReport::default();

    if ctx.mode == Mode::Playing {
        play_step(ctx, rng, &mut report);
    } else {
        ctx.particles.update();
    }

    if ctx.screen_shake > 0.0 {
        ctx.screen_shake *= SHAKE_DECAY;
        if ctx.screen_shake < SHAKE_CUTOFF {
            ctx.screen_shake = 0.0;
        }
    }

    report.sounds = ctx.drain_sounds();
    report
}

fn play_step<R: Rng>(ctx: &mut GameContext, rng: &mut R, report: &mut TickReport) {
    let Some(session) = ctx.session.as_mut() else {
        return;
    };

    physics::step_bird(&mut session.bird);

    for gap_center in obstacles::scroll_pipes(session) {
        let kind = scoring::register_pass(session, gap_center);
        ctx.sounds.push(SoundEvent::Point);
        if kind == PassKind::Perfect {
            ctx.particles.burst(
                rng,
                ctx.settings.particles,
                BIRD_X,
                session.bird.y,
                PERFECT_BURST,
                ParticleColor::Gold,
            );
        }
        report.passes.push(kind);
    }

    obstacles::cull_pipes(session);
    obstacles::spawn_if_needed(session, rng);
    ctx.particles.update();

    let collision = physics::check_collision(&session.bird, &session.pipes);
    scoring::update_speed(session);

    if let Some(collision) = collision {
        report.collision = Some(collision);
        end_session(ctx, rng, collision);
    }
}
