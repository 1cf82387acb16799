// src/cli.rs
use clap::{Parser, Subcommand};

/// ct-dash: query a Certificate Transparency monitoring dashboard
///
/// Talks to the dashboard backend's HTTP API and prints log inventory,
/// tree heads and monitoring status, either human-readable or as JSON.
#[derive(Parser, Debug, Clone)]
#[command(name = "ct-dash")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to TOML config file
    #[arg(short = 'c', long = "config", default_value = "config.toml")]
    pub config: String,

    /// Override backend base URL from config
    #[arg(long = "backend-url")]
    pub backend_url: Option<String>,

    /// Override request timeout in seconds
    #[arg(long = "timeout")]
    pub timeout: Option<u64>,

    /// Print raw JSON instead of human-readable output
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Verbose logging (set log level to debug)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Quiet logging (set log level to warn)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show counts of monitored and known logs
    Stats,

    /// List logs with their latest signed tree head
    Logs {
        /// Also list logs no longer being monitored
        #[arg(long = "include-retired")]
        include_retired: bool,
    },

    /// Show full detail for one log
    Log {
        /// Log id (hex hash as shown in the listing)
        id: String,
    },

    /// Show one stored signed tree head of a log
    Sth {
        /// Log id the tree head belongs to
        log_id: String,
        /// Numeric id of the stored tree head
        sth_id: i64,
    },
}
