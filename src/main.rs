// src/main.rs
use base64::Engine;
use chrono::{DateTime, Utc};
use clap::Parser;
use colored::Colorize;
use ct_dash::cli::{Cli, Command};
use ct_dash::client::{ApiClient, ReqwestFetch};
use ct_dash::config::Config;
use ct_dash::duration::rough_duration;
use ct_dash::types::{BasicCtLogInfo, CtLog, Stats, Sth};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config file (defaults if absent)
    let mut config = Config::load_or_default(Path::new(&cli.config))?;

    // Apply CLI overrides
    if let Some(ref url) = cli.backend_url {
        config.backend.url = url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.backend.timeout_secs = timeout;
    }

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        &config.logging.level
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if !is_terminal::is_terminal(std::io::stdout()) {
        colored::control::set_override(false);
    }

    tracing::debug!("Using backend at {}", config.backend.url);

    let fetch = ReqwestFetch::new(Duration::from_secs(config.backend.timeout_secs))?;
    let client = ApiClient::new(config.backend.url.clone(), Box::new(fetch));

    match cli.command {
        Command::Stats => {
            let stats = client.stats().await?;
            if cli.json {
                print_json(&stats)?;
            } else {
                print_stats(&stats);
            }
        }
        Command::Logs { include_retired } => {
            let logs = client.ctlogs(include_retired).await?;
            if cli.json {
                print_json(&logs)?;
            } else {
                print_log_listing(&logs);
            }
        }
        Command::Log { id } => {
            let log = client.log(&id).await?;
            if cli.json {
                print_json(&log)?;
            } else {
                print_log_detail(&log);
            }
        }
        Command::Sth { log_id, sth_id } => {
            let sth = client.sth(&log_id, sth_id).await?;
            if cli.json {
                print_json(&sth)?;
            } else {
                print_sth_detail(&sth);
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Relative time since a millisecond epoch timestamp, e.g. "5mins"
fn ago(epoch_ms: i64) -> String {
    let now = Utc::now().timestamp_millis();
    rough_duration(now.saturating_sub(epoch_ms).max(0) as u64)
}

/// Absolute UTC rendering of a millisecond epoch timestamp
fn format_timestamp(epoch_ms: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{}", epoch_ms),
    }
}

fn print_stats(stats: &Stats) {
    println!(
        "{} of {} known logs are being monitored",
        stats.nb_logs_active.to_string().bold(),
        stats.nb_logs_total
    );
}

fn print_log_listing(logs: &[BasicCtLogInfo]) {
    if logs.is_empty() {
        println!("No logs known to the backend.");
        return;
    }

    for log in logs {
        let marker = if log.monitoring {
            "●".green()
        } else {
            "○".dimmed()
        };
        println!("{} {}", marker, log.name.bold());
        println!("    id:       {}", log.log_id);
        println!("    endpoint: {}", log.endpoint_url);

        if let Some(ref sth) = log.latest_sth {
            println!(
                "    tree:     {} entries, head received {} ago",
                sth.tree_size,
                ago(sth.received_time)
            );
        }
        if let Some(ref err) = log.last_sth_error {
            println!("    {} {}", "last error:".red(), err);
        }
    }
}

fn print_log_detail(log: &CtLog) {
    println!("{}", log.name.bold());
    println!("    id:         {}", log.log_id);
    println!("    endpoint:   {}", log.endpoint_url);
    println!(
        "    monitoring: {}",
        if log.monitoring {
            "yes".green()
        } else {
            "no".dimmed()
        }
    );

    // RFC 6962 defines the log id as the SHA-256 of the DER public key;
    // recompute it so a mismatch with the reported id stands out.
    match base64::engine::general_purpose::STANDARD.decode(&log.public_key) {
        Ok(der) => {
            let digest = Sha256::digest(&der);
            println!("    key sha256: {}", hex::encode(digest));
        }
        Err(e) => {
            tracing::warn!("Failed to decode log public key: {}", e);
        }
    }

    match log.latest_sth {
        Some(sth_id) => println!("    latest sth: #{}", sth_id),
        None => println!("    latest sth: none recorded"),
    }
    if let Some(ref err) = log.last_sth_error {
        println!("    {} {}", "last error:".red(), err);
    }
}

fn print_sth_detail(sth: &Sth) {
    println!("{}", format!("Signed tree head #{}", sth.id).bold());
    println!("    log:       {}", sth.log_id);
    println!("    tree size: {}", sth.tree_size);
    println!("    tree hash: {}", sth.tree_hash);
    println!(
        "    claimed:   {} ({} ago)",
        format_timestamp(sth.sth_timestamp),
        ago(sth.sth_timestamp)
    );
    println!(
        "    received:  {} ({} ago)",
        format_timestamp(sth.received_time),
        ago(sth.received_time)
    );
    println!("    signature: {}", sth.signature);
    println!(
        "    consistency with latest head: {}",
        if sth.checked_consistent_with_latest {
            "verified".green()
        } else {
            "not verified".yellow()
        }
    );
}
