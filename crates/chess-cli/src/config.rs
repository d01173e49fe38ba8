//! Configuration file loading.
//!
//! Player names and the starting layout may be set in a TOML file. Every
//! field is optional; missing fields fall back to the standard game.

use chess_core::Layout;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Game settings.
///
/// ```toml
/// white_name = "Ana"
/// black_name = "Bo"
/// layout = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    /// Name shown for the White player.
    pub white_name: String,
    /// Name shown for the Black player.
    pub black_name: String,
    /// Starting placement string.
    pub layout: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            white_name: "White".to_string(),
            black_name: "Black".to_string(),
            layout: Layout::STANDARD.to_string(),
        }
    }
}

impl GameConfig {
    /// Default configuration file name, looked up in the working directory.
    pub const DEFAULT_PATH: &'static str = "chess.toml";

    /// Loads the configuration at `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if it contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(Self::parse(&content)?)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Replaces any field given on the command line.
    pub fn with_overrides(
        mut self,
        white_name: Option<String>,
        black_name: Option<String>,
        layout: Option<String>,
    ) -> Self {
        if let Some(name) = white_name {
            self.white_name = name;
        }
        if let Some(name) = black_name {
            self.black_name = name;
        }
        if let Some(layout) = layout {
            self.layout = layout;
        }
        self
    }
}
