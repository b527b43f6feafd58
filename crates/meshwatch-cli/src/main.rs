//! Operator tool for meshwatch frame logs: replay one into memory and
//! summarize it, convert legacy text logs to the canonical framing, or dump
//! raw frames.

use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use chrono::DateTime;
use clap::{Parser, Subcommand};
use tracing::warn;

use meshwatch_core::{catch_up, ChannelKeys, CoreConfig, FrameLog, FrameLogReader, MeshState};

#[derive(Parser)]
#[command(name = "meshwatch", about = "Inspect and replay meshwatch frame logs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a frame log into memory and report what it contains.
    Replay {
        /// Frame log, canonical or legacy format.
        log: PathBuf,

        /// Channel key material (base64), defaults to the well-known key.
        #[arg(long)]
        key: Option<String>,

        /// History bound per store.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Rewrite a legacy text log into the canonical framed format.
    Convert {
        input: PathBuf,
        output: PathBuf,
    },

    /// Print the first frames of a log without decoding them.
    Peek {
        log: PathBuf,

        #[arg(long, default_value_t = 10)]
        count: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match Cli::parse().command {
        Command::Replay { log, key, limit } => replay(&log, key.as_deref(), limit),
        Command::Convert { input, output } => convert(&input, &output),
        Command::Peek { log, count } => peek(&log, count),
    }
}

fn replay(log: &Path, key: Option<&str>, limit: Option<usize>) -> Result<()> {
    let config = CoreConfig::default();
    let keys = ChannelKeys::new(key.unwrap_or(&config.channel_key))
        .context("invalid channel key material")?;

    let state = MeshState::new(limit.unwrap_or(config.retention_limit));
    let cancel = AtomicBool::new(false);
    let replayed = catch_up(&state, &keys, log, &cancel)?;

    println!("replayed {replayed} frames from {}", log.display());
    println!();
    println!("  all messages:    {}", state.all_messages.len());
    println!("  users:           {}", state.users.len());
    println!("  telemetry:       {}", state.telemetry.len());
    println!("  positions:       {}", state.positions.len());
    println!("  neighbors:       {}", state.neighbors.len());
    println!("  traceroutes:     {}", state.traceroutes.len());
    println!("  chats:           {}", state.chats.len());
    println!("  non-decryptable: {}", state.non_decryptable.len());

    let nodes = state.users.latest_per_record_field("id");
    if !nodes.is_empty() {
        println!();
        println!("nodes heard:");
        for obs in nodes {
            println!(
                "  {:12} {:>5}  {}",
                obs.record.id, obs.record.short_name, obs.record.long_name
            );
        }
    }

    if let Some(chat) = state.chats.last_by("last") {
        println!();
        println!("last chat message (from {}): {}", chat.meta.from, chat.record);
    }

    Ok(())
}

fn convert(input: &Path, output: &Path) -> Result<()> {
    let reader = FrameLogReader::open(input)
        .with_context(|| format!("opening {}", input.display()))?;
    let writer = FrameLog::open(output)
        .with_context(|| format!("creating {}", output.display()))?;

    let mut written: u64 = 0;
    let mut skipped: u64 = 0;
    for item in reader {
        match item {
            Ok(record) => {
                writer.append_record(&record)?;
                written += 1;
            }
            Err(err) => {
                skipped += 1;
                warn!(error = %err, "skipping unreadable frame record");
            }
        }
    }

    println!("wrote {written} frames to {} ({skipped} skipped)", output.display());
    Ok(())
}

fn peek(log: &Path, count: usize) -> Result<()> {
    let reader = FrameLogReader::open(log)?;

    for item in reader.take(count) {
        match item {
            Ok(record) => {
                let when = DateTime::from_timestamp(record.received_at, 0)
                    .map(|dt| dt.to_rfc3339())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{when}  topic={}  {} bytes",
                    if record.topic.is_empty() { "-" } else { &record.topic },
                    record.payload.len()
                );
            }
            Err(err) => println!("unreadable record: {err}"),
        }
    }

    Ok(())
}
