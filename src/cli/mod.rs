//! CLI interface for trend-tracker
//!
//! Provides subcommands for:
//! - `run`: Start the keeper polling loop
//! - `replay`: Replay a CSV of observations through the engine
//! - `status`: Show the persisted tracker state
//! - `config`: Show effective configuration

mod replay;
mod run;

pub use replay::ReplayArgs;
pub use run::RunArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "trend-tracker")]
#[command(about = "Daily price-trend tracker driving dynamic NFT metadata bands")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the keeper polling loop
    Run(RunArgs),
    /// Replay a CSV of observations through the engine
    Replay(ReplayArgs),
    /// Show the persisted tracker state
    Status,
    /// Show effective configuration
    Config,
}
