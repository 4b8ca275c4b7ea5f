//! Tracing setup.
//!
//! The UI owns the terminal, so logs go to a file with ANSI colors off.

use anyhow::{Context, Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber writing to `log_file`.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init(log_file: &Path, default_filter: &str) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
