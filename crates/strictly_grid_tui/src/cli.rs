//! Command-line interface for strictly_grid.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Grid - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_grid")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_grid.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "strictly_grid=trace" (RUST_LOG wins if set)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["strictly_grid"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "strictly_grid",
            "-c",
            "custom.toml",
            "--log-file",
            "/tmp/grid.log",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/grid.log")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
