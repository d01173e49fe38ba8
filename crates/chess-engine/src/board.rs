//! Board occupancy snapshot.

use crate::{Piece, PieceId, Player};
use chess_core::{Color, Layout, PieceKind, Square};
use std::fmt;

/// A non-owning reference to the piece standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    /// Identity of the piece in its owner's roster.
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
}

impl Occupant {
    /// Returns the board glyph of the occupant.
    #[inline]
    pub fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }
}

/// An 8x8 grid of optional occupants.
///
/// The board owns no pieces. It is a snapshot of both rosters, rebuilt with
/// [`Board::rebuild`] so that every roster piece appears at its square and
/// every other cell is empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Occupant>; 64],
}

impl Board {
    /// Creates an empty board.
    pub const fn new() -> Self {
        Board { cells: [None; 64] }
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        self.cells = [None; 64];
    }

    /// Writes every piece of a roster at its current square, overwriting
    /// whatever was there.
    pub fn populate_from(&mut self, roster: &[Piece]) {
        for piece in roster {
            self.cells[piece.square().index() as usize] = Some(piece.occupant());
        }
    }

    /// Clears the board and places both rosters, White first.
    pub fn rebuild(&mut self, white: &Player, black: &Player) {
        self.clear();
        self.populate_from(white.pieces());
        self.populate_from(black.pieces());
    }

    /// Returns the occupant of a square, if any.
    #[inline]
    pub fn occupant(&self, sq: Square) -> Option<Occupant> {
        self.cells[sq.index() as usize]
    }

    /// Returns true if the coordinates are on the board and the cell is empty.
    ///
    /// Off-board coordinates are never empty, so a ray walking off the edge
    /// stops exactly like one running into a piece.
    pub fn is_empty(&self, rank: i8, file: i8) -> bool {
        match Square::from_coords(rank, file) {
            Some(sq) => self.occupant(sq).is_none(),
            None => false,
        }
    }

    /// Returns true if the coordinates hold a piece of the other color.
    pub fn is_enemy(&self, rank: i8, file: i8, color: Color) -> bool {
        Square::from_coords(rank, file)
            .and_then(|sq| self.occupant(sq))
            .is_some_and(|occupant| occupant.color != color)
    }

    /// Returns the number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Returns the board as a layout string.
    pub fn to_layout(&self) -> String {
        Layout::write(|sq| self.occupant(sq).map(|o| (o.kind, o.color)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

const COLUMN_HEADER: &str = "    1  2  3  4  5  6  7  8";
const RULE: &str = "   ------------------------";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", COLUMN_HEADER)?;
        writeln!(f, "{}", RULE)?;
        for rank in 0..8u8 {
            let label = 8 - rank;
            write!(f, "{} |", label)?;
            for file in 0..8u8 {
                match Square::new(rank, file).and_then(|sq| self.occupant(sq)) {
                    Some(occupant) => write!(f, " {} ", occupant.symbol())?,
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f, "| {}", label)?;
        }
        writeln!(f, "{}", RULE)?;
        writeln!(f, "{}", COLUMN_HEADER)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_layout())
    }
}
