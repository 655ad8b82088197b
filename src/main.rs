//! Command-line front end for the advisor.
//!
//! Reads a `ParameterSnapshot` as JSON from a file argument (or stdin),
//! resolves it against the knowledge tables, and prints the
//! `RecommendationResult` as JSON.
//!
//! ```text
//! arcmate snapshot.json
//! arcmate --knowledge shop_tables.toml snapshot.json
//! echo '{"electrode":"E6010",...}' | arcmate
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use arcmate::advisor::{ParameterSnapshot, RecommendationEngine};
use arcmate::knowledge::{default_knowledge, load_knowledge, validate_knowledge};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut snapshot_path: Option<PathBuf> = None;
    let mut knowledge_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--knowledge" => {
                let path = args.next().context("--knowledge requires a path")?;
                knowledge_path = Some(PathBuf::from(path));
            }
            _ => snapshot_path = Some(PathBuf::from(arg)),
        }
    }

    let knowledge = match &knowledge_path {
        Some(path) => load_knowledge(path)
            .with_context(|| format!("loading knowledge tables from {}", path.display()))?,
        None => default_knowledge(),
    };

    for warning in validate_knowledge(&knowledge) {
        tracing::warn!(field = %warning.field, value = %warning.value, "{}", warning.message);
    }

    let raw = match &snapshot_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading snapshot from stdin")?;
            buf
        }
    };
    let snapshot: ParameterSnapshot =
        serde_json::from_str(&raw).context("snapshot is not valid JSON")?;

    let engine = RecommendationEngine::new(knowledge);
    let result = engine.recommend(&snapshot);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
