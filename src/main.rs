use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy_arcade::config::{Difficulty, GameConfig, Settings};
use flappy_arcade::core::constants::TICK_MS;
use flappy_arcade::core::{GameLoop, TickReport};
use flappy_arcade::error::StoreError;
use flappy_arcade::game::layout;
use flappy_arcade::game::{Mode, SoundEvent};
use flappy_arcade::input::{handle_key, handle_mouse, HostAction, MenuFocus};
use flappy_arcade::profile::PlayerProfile;
use flappy_arcade::ui;
use flappy_arcade::utils::{logging, persistence};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Flappy Arcade - flap through the gaps in your terminal.
#[derive(Parser, Debug)]
#[command(name = "flappy_arcade", version, about)]
struct Args {
    /// Difficulty to select on start (easy, normal, hardcore or a config key)
    #[arg(long)]
    difficulty: Option<String>,

    /// Seed for pipe generation and effects, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Start with particle effects disabled
    #[arg(long)]
    no_particles: bool,

    /// TOML file overriding the difficulty and shop catalogs
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for save files and the log (default ~/.flappy_arcade)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let data_dir = match &args.data_dir {
        Some(dir) => dir.clone(),
        None => persistence::default_data_dir().map_err(to_io)?,
    };
    match logging::init_file_logging(&data_dir) {
        Ok(path) => tracing::info!(log = %path.display(), "flappy arcade starting"),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let config = match &args.config {
        Some(path) => GameConfig::load(path).map_err(to_io)?,
        None => GameConfig::default(),
    };
    let profile = persistence::load_profile(&data_dir);
    let mut settings = persistence::load_settings(&data_dir);
    if let Some(key) = &args.difficulty {
        if Difficulty::from_key(key).is_none() && !config.difficulties.contains(key) {
            tracing::warn!(difficulty = %key, "unknown difficulty, default will be used");
        }
        settings.difficulty = key.clone();
    }
    if args.no_particles {
        settings.particles = false;
    }

    let mut game = match args.seed {
        Some(seed) => GameLoop::with_seed(config, profile, settings, seed),
        None => GameLoop::new(config, profile, settings),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, &mut game, &data_dir);

    shutdown(&game, &data_dir, || {
        disable_raw_mode()?;
        terminal.backend_mut().execute(DisableMouseCapture)?;
        terminal.backend_mut().execute(LeaveAlternateScreen)?;
        terminal.show_cursor()
    })?;
    tracing::info!("flappy arcade exiting");
    result
}

/// Save first: a failing terminal restore must not lose the last run.
fn shutdown(
    game: &GameLoop,
    data_dir: &Path,
    restore_terminal: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    save_all(game, data_dir);
    restore_terminal()
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut GameLoop,
    data_dir: &Path,
) -> io::Result<()> {
    let mut focus = MenuFocus::default();
    let mut last_frame = Instant::now();
    let mut saved_profile: PlayerProfile = game.context().profile.clone();
    let mut saved_settings: Settings = game.context().settings.clone();

    loop {
        let snap = game.snapshot();
        let button_count = layout::buttons(snap.mode, &game.context().config).len();
        let focused = focus.index_for(snap.mode, button_count);
        terminal.draw(|frame| ui::draw(frame, &snap, &game.context().config, focused))?;

        if event::poll(Duration::from_millis(TICK_MS))? {
            let mode = game.context().mode;
            let action = match event::read()? {
                Event::Key(key) => handle_key(key, mode, &game.context().config, &mut focus),
                Event::Mouse(mouse) => handle_mouse(mouse, ui::field_area(terminal.size()?)),
                _ => HostAction::Ignored,
            };
            match action {
                HostAction::Quit => return Ok(()),
                HostAction::Game(intent) => {
                    let sounds = game.handle(intent);
                    play_sounds(&sounds, &game.context().settings);
                }
                HostAction::Redraw | HostAction::Ignored => {}
            }
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;
        let report: TickReport = game.advance(dt_ms);
        play_sounds(&report.sounds, &game.context().settings);

        // Persist whenever the profile or settings changed outside of play:
        // after a crash, a purchase or a settings toggle.
        let ctx = game.context();
        if ctx.mode != Mode::Playing
            && (ctx.profile != saved_profile || ctx.settings != saved_settings)
        {
            save_all(game, data_dir);
            saved_profile = ctx.profile.clone();
            saved_settings = ctx.settings.clone();
        }
    }
}

fn to_io(e: StoreError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e)
}

fn save_all(game: &GameLoop, data_dir: &Path) {
    let ctx = game.context();
    if let Err(e) = persistence::save_profile(data_dir, &ctx.profile) {
        tracing::warn!(error = %e, "could not save profile");
    }
    if let Err(e) = persistence::save_settings(data_dir, &ctx.settings) {
        tracing::warn!(error = %e, "could not save settings");
    }
}

/// The terminal has no mixer: sounds are logged and a crash rings the bell
/// unless effects are muted.
fn play_sounds(sounds: &[SoundEvent], settings: &Settings) {
    for sound in sounds {
        tracing::trace!(sound = sound.name(), volume = settings.sfx_volume, "play");
        if *sound == SoundEvent::Death && !settings.sfx_muted() {
            let mut out = io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }
}
