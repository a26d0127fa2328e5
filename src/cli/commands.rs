//! CLI commands implementation.

mod init;
mod seed;
mod serve;
mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::load_settings;

#[derive(Parser)]
#[command(name = "annotext")]
#[command(about = "Text sample quality annotation backend")]
#[command(version)]
pub struct Cli {
    /// Config file path (JSON, TOML, or YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data directory or database file
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and database
    Init,

    /// Start the annotation API server
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT (default: 127.0.0.1:3030)
        #[arg(default_value = "127.0.0.1:3030")]
        bind: String,
    },

    /// Insert the demonstration seed samples (idempotent)
    Seed,

    /// Show collection counts and annotation progress
    Status,
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref(), cli.data.as_deref()).await;

    match cli.command {
        Commands::Init => init::cmd_init(&settings).await,
        Commands::Serve { bind } => serve::cmd_serve(&settings, &bind).await,
        Commands::Seed => seed::cmd_seed(&settings).await,
        Commands::Status => status::cmd_status(&settings).await,
    }
}
