//! Pieces owned by a player's roster.

use crate::board::{Board, Occupant};
use crate::movegen;
use chess_core::{Color, PieceKind, Square};
use std::fmt;

/// Stable identity of a piece within a game.
///
/// Two pieces never share an id, even if their kind, color and square
/// coincide, so removal from a roster is unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId {
    color: Color,
    serial: u8,
}

impl PieceId {
    /// Creates a new piece id.
    #[inline]
    pub const fn new(color: Color, serial: u8) -> Self {
        PieceId { color, serial }
    }

    /// Returns the color of the owning player.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Returns the serial number within the owning roster.
    #[inline]
    pub const fn serial(self) -> u8 {
        self.serial
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.color, self.serial)
    }
}

/// A chess piece with its position and movement state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    color: Color,
    square: Square,
    has_moved: bool,
}

impl Piece {
    /// Creates an unmoved piece.
    pub const fn new(id: PieceId, kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            id,
            kind,
            color,
            square,
            has_moved: false,
        }
    }

    /// Returns the piece with its moved flag set to `has_moved`.
    pub const fn with_moved(mut self, has_moved: bool) -> Self {
        self.has_moved = has_moved;
        self
    }

    #[inline]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// Returns true once the piece has made a move.
    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Returns the board glyph for this piece.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }

    /// Returns the squares this piece may move to on the given board.
    ///
    /// Moves are pseudo-legal: they respect movement and occupancy rules
    /// only. The order follows the direction tables and carries no meaning.
    pub fn legal_moves(&self, board: &Board) -> Vec<Square> {
        movegen::piece_moves(self, board)
    }

    /// Returns true if `to` is among this piece's legal moves.
    pub fn can_move_to(&self, board: &Board, to: Square) -> bool {
        self.legal_moves(board).contains(&to)
    }

    /// Relocates the piece and marks it as moved.
    pub(crate) fn move_to(&mut self, to: Square) {
        self.square = to;
        self.has_moved = true;
    }

    pub(crate) fn occupant(&self) -> Occupant {
        Occupant {
            id: self.id,
            kind: self.kind,
            color: self.color,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.color, self.kind, self.square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_to_sets_flag() {
        let sq = Square::new(6, 0).unwrap();
        let mut pawn = Piece::new(PieceId::new(Color::White, 0), PieceKind::Pawn, Color::White, sq);
        assert!(!pawn.has_moved());

        let to = Square::new(4, 0).unwrap();
        pawn.move_to(to);
        assert_eq!(pawn.square(), to);
        assert!(pawn.has_moved());
    }

    #[test]
    fn symbol_and_display() {
        let sq = Square::new(7, 4).unwrap();
        let king = Piece::new(PieceId::new(Color::White, 12), PieceKind::King, Color::White, sq);
        assert_eq!(king.symbol(), '♔');
        assert_eq!(king.to_string(), "White King at 1,5");
        assert_eq!(king.id().to_string(), "White#12");
    }

    #[test]
    fn ids_distinguish_identical_pieces() {
        let sq = Square::new(3, 3).unwrap();
        let a = Piece::new(PieceId::new(Color::Black, 1), PieceKind::Knight, Color::Black, sq);
        let b = Piece::new(PieceId::new(Color::Black, 2), PieceKind::Knight, Color::Black, sq);
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
    }
}
