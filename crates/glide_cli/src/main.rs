//! Glide CLI
//!
//! Run implicit animation scenarios headlessly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glide_animation::AnimationConfig;
use glide_cli::{run_loaded_scenario, Scenario};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "glide")]
#[command(author, version, about = "Glide implicit animation runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Engine config (glide.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario and report the result
    Run {
        /// Scenario file (JSON)
        scenario: PathBuf,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Print the effective config as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run { scenario, report } => {
            let loaded = Scenario::from_path(&scenario)?;
            info!(scenario = %scenario.display(), node = ?loaded.node, "running scenario");
            let outcome = run_loaded_scenario(&loaded, &config)?;
            match report {
                Some(path) => outcome
                    .report()
                    .write_to_path(&path)
                    .with_context(|| format!("failed to write report {}", path.display()))?,
                None => outcome.report().write_to_writer(&mut std::io::stdout().lock())?,
            }
            if outcome.is_failed() {
                std::process::exit(1);
            }
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<AnimationConfig> {
    match path {
        Some(path) => AnimationConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(AnimationConfig::default()),
    }
}
