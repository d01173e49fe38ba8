//! King-capture chess rule engine.
//!
//! This crate provides:
//! - [`Board`] - 8x8 occupancy snapshot rebuilt from both rosters
//! - [`Piece`] - a piece with its square, color and moved flag
//! - [`Player`] - a named roster of pieces
//! - [`Game`] - the turn state machine, captures and the win check
//! - Pseudo-legal move generation for every piece kind
//!
//! # Rules
//!
//! Pieces move as in standard chess, without castling, en passant or
//! promotion. There is no check: a king may be left attacked, and the game
//! ends when a king is captured.
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_engine::Game;
//!
//! let mut game = Game::new();
//! let from = Square::new(6, 4).unwrap();
//! let to = Square::new(4, 4).unwrap();
//! let outcome = game.make_move(from, to).unwrap();
//! assert!(outcome.captured.is_none());
//! println!("{}", game.board());
//! ```

mod board;
mod game;
pub mod movegen;
mod piece;
mod player;
pub mod rules;

pub use board::{Board, Occupant};
pub use game::{Game, GameError, GameMove, MoveOutcome, TurnPhase};
pub use movegen::{generate_moves, piece_moves};
pub use piece::{Piece, PieceId};
pub use player::{Player, RosterReport};
pub use rules::{king_capture_result, GameResult};
