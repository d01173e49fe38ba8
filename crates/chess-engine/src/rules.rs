//! Win condition.
//!
//! A game ends when a roster no longer holds a king. There is no check,
//! checkmate, stalemate or draw: capturing the king is the only way to win.

use crate::Player;
use chess_core::Color;
use std::fmt;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black's king was captured.
    WhiteWins,
    /// White's king was captured.
    BlackWins,
}

impl GameResult {
    /// Returns the result in favour of `color`.
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// Returns the winning color.
    pub const fn winner(self) -> Color {
        match self {
            GameResult::WhiteWins => Color::White,
            GameResult::BlackWins => Color::Black,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wins", self.winner())
    }
}

/// Checks both rosters for a king, White first.
///
/// Returns the result in favour of the other player as soon as one roster
/// has lost its king.
pub fn king_capture_result(white: &Player, black: &Player) -> Option<GameResult> {
    if !white.has_king() {
        return Some(GameResult::BlackWins);
    }
    if !black.has_king() {
        return Some(GameResult::WhiteWins);
    }
    None
}
