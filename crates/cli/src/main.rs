//! Shrine content tooling.
//!
//! Lists and validates recipe definitions, and fires triggers against a
//! scratch world to preview what a recipe does.
mod commands;
mod config;
mod dirs;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use commands::{List, Simulate, Validate};
use config::CliConfig;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Shrine recipe tooling
#[derive(Parser)]
#[command(name = "shrine")]
#[command(about = "Inspect and simulate shrine recipes", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory (overrides SHRINE_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List recipes in lookup order
    List(List),

    /// Decode recipe files and report failures
    Validate(Validate),

    /// Fire a trigger against a scratch world
    Simulate(Simulate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = CliConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let log_dir = config.log_dir.clone().unwrap_or_else(dirs::log_dir);
    setup_logging(&log_dir)?;

    match cli.command {
        Command::List(cmd) => cmd.execute(&config),
        Command::Validate(cmd) => cmd.execute(&config),
        Command::Simulate(cmd) => cmd.execute(&config),
    }
}

/// Setup logging to a file in `log_dir`, with warnings echoed to stderr
fn setup_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, "shrine.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    tracing::info!("Log file: {}/shrine.log", log_dir.display());
    Ok(())
}
