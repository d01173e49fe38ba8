//! Terminal front-end for two-player king-capture chess.
//!
//! - [`GameConfig`] - player names and starting layout from `chess.toml`
//! - [`Terminal`] - the prompting loop over any reader and writer

mod config;
mod terminal;

pub use config::{ConfigError, GameConfig};
pub use terminal::{parse_coordinate, stdio_terminal, Terminal, TerminalError, INVALID_CHOICE};
