//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rule engine:
//! - [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Move`] for move representation
//! - [`Layout`] parsing and serialization of piece placements

mod color;
mod layout;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use layout::{Layout, LayoutError, Placement};
pub use mov::Move;
pub use piece::PieceKind;
pub use square::{Square, BOARD_SIZE};
