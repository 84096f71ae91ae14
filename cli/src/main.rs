use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sapper_core::{Board, CellCount, Coord, GameSession};
use tracing_subscriber::filter::LevelFilter;

mod command;
mod driver;
mod render;
mod settings;

use driver::Driver;
use settings::Settings;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML file with board_width, board_height and number_of_mines
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the board width
    #[arg(long)]
    width: Option<Coord>,

    /// Override the board height
    #[arg(long)]
    height: Option<Coord>,

    /// Override the number of mines
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn init_logging(level: Option<log::Level>) {
    let filter = match level {
        None => LevelFilter::OFF,
        Some(log::Level::Error) => LevelFilter::ERROR,
        Some(log::Level::Warn) => LevelFilter::WARN,
        Some(log::Level::Info) => LevelFilter::INFO,
        Some(log::Level::Debug) => LevelFilter::DEBUG,
        Some(log::Level::Trace) => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(io::stderr)
        .init();
}

/// Seed taken from the wall clock when none is forced.
fn clock_seed() -> u64 {
    use web_time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level());

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(width) = args.width {
        settings.board_width = width;
    }
    if let Some(height) = args.height {
        settings.board_height = height;
    }
    if let Some(mines) = args.mines {
        settings.number_of_mines = mines;
    }
    log::debug!("settings: {:?}", settings);

    let config = settings.game_config().context("Cannot start a game")?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("seed: {}", seed);

    let board = Board::random(config, seed)?;
    let mut driver = Driver::new(GameSession::new(board), io::stdin().lock(), io::stdout().lock());
    let ending = driver.run()?;
    log::debug!(
        "Game ended: {:?}, {} safe cells left",
        ending,
        driver.session().unrevealed_safe_count()
    );
    Ok(())
}
