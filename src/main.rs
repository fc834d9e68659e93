/// `LogWarden` - an in-memory security log store with anomaly detection
///
/// Copyright (C) 2026 Daniel Freiermuth
///
/// This program is free software: you can redistribute it and/or modify
/// it under the terms of the GNU General Public License as published by
/// the Free Software Foundation, either version 3 of the License, or
/// (at your option) any later version.
///
/// This program is distributed in the hope that it will be useful,
/// but WITHOUT ANY WARRANTY; without even the implied warranty of
/// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
/// GNU General Public License for more details.
///
/// You should have received a copy of the GNU General Public License
/// along with this program.  If not, see <https://www.gnu.org/licenses/>.
use anyhow::{Context, Result};
use clap::Parser;
use logwarden::{create_default_engine, LogEntry, LogService, LogStore};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "logwarden")]
#[command(version)]
#[command(about = "Scan security log files for anomalies", long_about = None)]
struct Args {
    /// Log files to ingest: NDJSON, or a single JSON array of entries
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Print findings as a JSON array instead of text lines
    #[arg(long)]
    findings_json: bool,
}

fn main() -> Result<()> {
    // Set RUST_LOG to override (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        git = env!("GIT_HASH"),
        "logwarden starting up"
    );

    let args = Args::parse();
    let store = LogStore::new();
    let service = LogService::new(Arc::clone(&store));

    for path in &args.files {
        let entries = read_entries(path)?;
        let stored = service.ingest_bulk(entries);
        tracing::info!(file = %path.display(), count = stored.len(), "ingested");
    }

    let engine = create_default_engine();
    let findings = engine
        .detect(&store.snapshot())
        .context("anomaly detection failed")?;

    if args.findings_json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
    } else if findings.is_empty() {
        println!("no anomalies detected in {} entries", store.len());
    } else {
        for finding in &findings {
            println!("[{}] {}", finding.kind, finding.reason);
        }
    }

    Ok(())
}

/// Read log entries from a file: a JSON array when the document starts
/// with `[`, one JSON object per line otherwise. Blank lines are skipped.
fn read_entries(path: &Path) -> Result<Vec<LogEntry>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    if text.trim_start().starts_with('[') {
        return serde_json::from_str(&text)
            .with_context(|| format!("bad entry array in {}", path.display()));
    }

    text.lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("bad entry on line {} of {}", idx + 1, path.display()))
        })
        .collect()
}
