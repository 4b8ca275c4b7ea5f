//! TOML configuration for the terminal UI.

use crate::theme::Theme;
use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_grid.toml";

/// Application configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where tracing output goes (the terminal is owned by the UI).
    log_file: PathBuf,

    /// Default log filter when `RUST_LOG` is unset.
    log_level: String,

    /// Color names for the board.
    theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("strictly_grid.log"),
            log_level: "info".to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Color names as written in the config file.
///
/// Anything ratatui's `Color` parses is accepted: names such as `"blue"` or
/// `"lightgreen"`, indexed colors, and `"#rrggbb"` hex.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color of X marks.
    x: String,
    /// Color of O marks.
    o: String,
    /// Background of the winning line.
    highlight: String,
    /// Background of the cursor cell.
    cursor: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            x: "blue".to_string(),
            o: "red".to_string(),
            highlight: "lightgreen".to_string(),
            cursor: "white".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parses every color name.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            x: parse_color("x", &self.x)?,
            o: parse_color("o", &self.o)?,
            highlight: parse_color("highlight", &self.highlight)?,
            cursor: parse_color("cursor", &self.cursor)?,
        })
    }
}

fn parse_color(field: &str, name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name)
        .map_err(|_| ConfigError::new(format!("Unknown color '{}' for theme.{}", name, field)))
}

impl Config {
    /// Loads configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// used if present, otherwise defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    info!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::parse(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        // Surface bad color names at load time rather than on first draw.
        config.theme.resolve()?;
        Ok(config)
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, log_file: Option<PathBuf>, log_level: Option<String>) -> Self {
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
