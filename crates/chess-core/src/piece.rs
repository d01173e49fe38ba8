//! Piece kind representation.

use crate::Color;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Back rank order from file 0 to file 7.
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Returns the board glyph for this kind in the given color.
    pub const fn symbol(self, color: Color) -> char {
        match (self, color) {
            (PieceKind::Pawn, Color::White) => '♙',
            (PieceKind::Pawn, Color::Black) => '♟',
            (PieceKind::Rook, Color::White) => '♖',
            (PieceKind::Rook, Color::Black) => '♜',
            (PieceKind::Knight, Color::White) => '♘',
            (PieceKind::Knight, Color::Black) => '♞',
            (PieceKind::Bishop, Color::White) => '♗',
            (PieceKind::Bishop, Color::Black) => '♝',
            (PieceKind::Queen, Color::White) => '♕',
            (PieceKind::Queen, Color::Black) => '♛',
            (PieceKind::King, Color::White) => '♔',
            (PieceKind::King, Color::Black) => '♚',
        }
    }

    /// Returns the layout letter for this kind (uppercase for White).
    pub const fn to_layout_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a layout letter into a piece kind and color.
    pub const fn from_layout_char(c: char) -> Option<(PieceKind, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, color))
    }

    /// Returns true if this piece moves along rays (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_differ_by_color() {
        for kind in PieceKind::ALL {
            assert_ne!(kind.symbol(Color::White), kind.symbol(Color::Black));
        }
        assert_eq!(PieceKind::King.symbol(Color::White), '♔');
        assert_eq!(PieceKind::Pawn.symbol(Color::Black), '♟');
    }

    #[test]
    fn layout_chars() {
        assert_eq!(PieceKind::Pawn.to_layout_char(Color::White), 'P');
        assert_eq!(PieceKind::Knight.to_layout_char(Color::Black), 'n');
        assert_eq!(
            PieceKind::from_layout_char('K'),
            Some((PieceKind::King, Color::White))
        );
        assert_eq!(
            PieceKind::from_layout_char('q'),
            Some((PieceKind::Queen, Color::Black))
        );
        assert_eq!(PieceKind::from_layout_char('x'), None);
    }

    #[test]
    fn is_slider() {
        assert!(!PieceKind::Pawn.is_slider());
        assert!(!PieceKind::Knight.is_slider());
        assert!(PieceKind::Bishop.is_slider());
        assert!(PieceKind::Rook.is_slider());
        assert!(PieceKind::Queen.is_slider());
        assert!(!PieceKind::King.is_slider());
    }

    #[test]
    fn back_rank_has_one_king() {
        let kings = PieceKind::BACK_RANK
            .iter()
            .filter(|&&k| k == PieceKind::King)
            .count();
        assert_eq!(kings, 1);
        assert_eq!(PieceKind::BACK_RANK[4], PieceKind::King);
    }
}
