//! Delve CLI - terminal front end for the roguelike engine.

// Allow print in the CLI binary; seed derivation truncates intentionally
#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::cast_possible_truncation
)]

use std::error::Error;
use std::fmt;
use std::io::stdout;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use delve::game::{DungeonConfig, Engine, generate_dungeon};
use delve::input::Command;
use delve::render::theme;
use delve::saves;
use delve::Coord;

/// Delve - a turn-based terminal roguelike
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed for dungeon generation (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Dungeon width in tiles
    #[arg(long, default_value = "80")]
    map_width: u16,

    /// Dungeon height in tiles
    #[arg(long, default_value = "44")]
    map_height: u16,

    /// Save file path
    #[arg(long, default_value = "savegame.json")]
    save_file: PathBuf,

    /// Resume from the save file instead of starting a new game
    #[arg(short, long)]
    load: bool,
}

/// App-level error wrapping the fallible pieces of the front end.
#[derive(Debug)]
struct AppError {
    message: String,
}

impl AppError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<delve::error::ActionError> for AppError {
    fn from(e: delve::error::ActionError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<saves::SaveError> for AppError {
    fn from(e: saves::SaveError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<delve::game::DungeonGenError> for AppError {
    fn from(e: delve::game::DungeonGenError) -> Self {
        Self::new(e.to_string())
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let mut engine = if args.load {
        saves::load_game(&args.save_file)?
    } else {
        new_game(args)?
    };

    // Terminal setup
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend).map_err(|e| AppError::new(e.to_string()))?;

    let result = run_loop(&mut terminal, &mut engine);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    result?;
    saves::save_game(&engine, &args.save_file)?;
    Ok(())
}

/// Generate a dungeon and set up a fresh session.
fn new_game(args: &Args) -> Result<Engine, AppError> {
    let seed = args.seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });
    log::info!("new game: seed={seed}");

    let config = DungeonConfig {
        width: args.map_width,
        height: args.map_height,
        ..DungeonConfig::default()
    };
    let (map, player) = generate_dungeon(seed, &config)?;

    let mut engine = Engine::new(map, player);
    engine.message_log.add(
        "Hello and welcome, adventurer, to yet another dungeon!",
        theme::WELCOME,
    );
    engine.update_fov();
    Ok(engine)
}

/// Blocking turn loop: draw, wait for input, advance the game.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    engine: &mut Engine,
) -> Result<(), AppError> {
    loop {
        terminal
            .draw(|frame| engine.render(frame.buffer_mut()))
            .map_err(|e| AppError::new(e.to_string()))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match engine.event_handler.dispatch(key) {
                    Some(Command::Quit) => break,
                    Some(Command::Act(action)) => engine.advance_turn(action)?,
                    None => {}
                }
            }
            Event::Mouse(mouse) => {
                if matches!(mouse.kind, MouseEventKind::Moved) {
                    engine.mouse_location = Coord::new(mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }
    Ok(())
}
