//! `chess` - two players, one terminal, first to take the king wins.

use chess_cli::{stdio_terminal, GameConfig};
use chess_engine::Game;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Two-player king-capture chess in the terminal.
#[derive(Parser)]
#[command(name = "chess")]
#[command(about = "Two-player chess played until a king is captured")]
struct Args {
    /// Name of the White player
    #[arg(long)]
    white: Option<String>,

    /// Name of the Black player
    #[arg(long)]
    black: Option<String>,

    /// Starting placement, e.g. "4k3/8/8/8/8/8/8/4K2R"
    #[arg(long)]
    layout: Option<String>,

    /// Path to the configuration file
    #[arg(long, default_value = GameConfig::DEFAULT_PATH)]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config =
        GameConfig::load(&args.config)?.with_overrides(args.white, args.black, args.layout);
    tracing::info!(config = %args.config.display(), "configuration loaded");

    let mut game = Game::from_layout(&config.layout, config.white_name, config.black_name)?;
    let result = stdio_terminal().play(&mut game)?;
    tracing::info!(%result, plies = game.ply_count(), "finished");
    Ok(())
}
