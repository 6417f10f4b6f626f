use anyhow::{Context, Result};
use clap::Parser;
use friendsy_snake::game::{GameConfig, GameEngine};
use friendsy_snake::logging::init_file_logging;
use friendsy_snake::modes::PlayMode;
use friendsy_snake::persistence::{DEFAULT_HIGH_SCORE_FILE, HighScoreStore};
use friendsy_snake::session::Session;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "friendsy_snake")]
#[command(version, about = "Snake with obstacles, power-ups and a persistent high score")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "24")]
    width: usize,

    /// Grid height
    #[arg(long, default_value = "24")]
    height: usize,

    /// Seed for food and power-up placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where the high score is kept
    #[arg(long, default_value = DEFAULT_HIGH_SCORE_FILE)]
    high_score_file: PathBuf,

    /// Write logs to this file (verbosity via RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    // Create game configuration from CLI arguments
    let config = GameConfig {
        seed: cli.seed,
        ..GameConfig::new(cli.width, cli.height)
    };
    let engine = GameEngine::new(config).context("Invalid game configuration")?;

    let session = Session::new(engine, Some(HighScoreStore::new(cli.high_score_file)));
    let mut play_mode = PlayMode::new(session);
    play_mode.run().await?;

    Ok(())
}
