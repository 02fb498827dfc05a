use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use connect_four::config::{AppConfig, OutputFormat};
use connect_four::game::{Chip, GameStatus};
use connect_four::replay::{replay, ReplaySummary};

/// Replay a sequence of Connect Four moves and report the outcome.
#[derive(Parser)]
#[command(name = "replay", about = "Replay a sequence of Connect Four moves")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Color of the first chip: red or black
    #[arg(long)]
    first: Option<Chip>,

    /// Output format: text or json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Skip rejected moves instead of stopping at the first one
    #[arg(long)]
    keep_going: bool,

    /// Print the built-in default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,

    /// Columns to drop into, 0-based, in play order
    #[arg(allow_negative_numbers = true)]
    moves: Vec<i32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("rendering default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(first) = cli.first {
        config.replay.first_chip = first;
    }
    if let Some(format) = cli.format {
        config.replay.format = format;
    }
    if cli.keep_going {
        config.replay.stop_on_error = false;
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    info!(
        "replaying {} moves, {} first",
        cli.moves.len(),
        config.replay.first_chip
    );
    let summary = replay(
        config.replay.first_chip,
        &cli.moves,
        config.replay.stop_on_error,
    )
    .context("replay stopped at a rejected move")?;

    match config.replay.format {
        OutputFormat::Text => print_text(&summary),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("serializing summary")?
        ),
    }

    Ok(())
}

fn print_text(summary: &ReplaySummary) {
    println!("{}", summary.board);
    println!();
    match summary.status {
        GameStatus::InProgress => match summary.board.last_played() {
            Some(chip) => println!("In progress, {} to move", chip.other()),
            None => println!("In progress, no moves yet"),
        },
        GameStatus::Won { winner, placement } => println!(
            "{winner} wins: four {:?} from column {}, row {}",
            placement.direction(),
            placement.starting_column(),
            placement.starting_row()
        ),
        GameStatus::Stalemate => println!("Stalemate: the board is full"),
    }
    println!(
        "{} moves played, {} rejected",
        summary.moves_played, summary.rejected
    );
}
