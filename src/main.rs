//! BLOCKFALL - terminal host for the falling-block puzzle
//!
//! `blockfall` plays in the terminal; `blockfall --headless` reads commands
//! from stdin and writes JSON snapshots to stdout.

use blockfall::game::{Game, GameState, TickOutcome};
use blockfall::input::{HostAction, InputHandler};
use blockfall::settings::Settings;
use blockfall::timer::GravityTimer;
use blockfall::{headless, ui};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, stdout},
    time::{Duration, Instant},
};

/// Target frame rate
const TARGET_FPS: u64 = 60;
const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);

/// Get the blockfall temp directory, creating it if needed
fn blockfall_temp_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("blockfall");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    let headless_mode = std::env::args().skip(1).any(|arg| arg == "--headless");

    // Generate session ID for this instance
    let session_id: u32 = rand::random();
    let log_dir = blockfall_temp_dir();
    let log_file = format!("{:08x}.log", session_id);

    // Setup tracing to log file
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("blockfall=debug"));
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .init();

    tracing::info!(
        "BLOCKFALL starting up, session={:08x}, log={}, headless={}",
        session_id,
        log_dir.join(&log_file).display(),
        headless_mode
    );

    let settings = Settings::load();
    let mut game = Game::with_config(settings.game_config());

    if headless_mode {
        return headless::run(&mut game, io::stdin().lock(), io::stdout().lock());
    }

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run app and capture result
    let result = run_app(&mut terminal, &mut game, &settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    if result.is_ok() && game.state != GameState::Idle {
        println!("\nThanks for playing BLOCKFALL!");
        println!("Final Score: {}", game.score.points);
        println!("Lines: {} | Pieces: {}", game.score.lines, game.score.pieces);
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut Game,
    settings: &Settings,
) -> io::Result<()> {
    let input = InputHandler::from_settings(settings);
    let mut gravity = GravityTimer::new(settings.gravity_period());

    loop {
        // Render
        let snapshot = game.snapshot();
        terminal.draw(|frame| ui::render_game(frame, &snapshot, settings))?;

        // Wait for input, but never past the next gravity tick
        let timeout = gravity
            .time_until_due(Instant::now())
            .map_or(FRAME_DURATION, |due| due.min(FRAME_DURATION));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    match input.key_down(key) {
                        Some(HostAction::Quit) => {
                            gravity.cancel();
                            tracing::info!("Quit with score {}", game.score.points);
                            return Ok(());
                        }
                        Some(HostAction::Start) => {
                            if game.accepts_start() {
                                game.restart();
                            }
                        }
                        Some(HostAction::Pause) => game.toggle_pause(),
                        Some(HostAction::Command(command)) => {
                            game.handle_input(command);
                        }
                        None => {}
                    }
                }
            }
        }

        // Gravity
        let now = Instant::now();
        gravity.sync(game.state, now);
        for _ in 0..gravity.poll(now) {
            if let TickOutcome::GameOver { .. } = game.tick() {
                tracing::info!("Game over with score {}", game.score.points);
                break;
            }
        }
        gravity.sync(game.state, now);
    }
}
