//! Board square representation.

use std::fmt;

/// Number of ranks and files on the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the chess board, indexed 0-63.
///
/// Squares are indexed row-major from the top of the board:
/// - rank index 0 is the top row (rank 8, Black's back rank)
/// - rank index 7 is the bottom row (rank 1, White's back rank)
/// - file index 0 is the leftmost column
///
/// So `index = rank * 8 + file`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from rank and file indices (each 0-7).
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < BOARD_SIZE && file < BOARD_SIZE {
            Some(Square(rank * BOARD_SIZE + file))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, returning `None` off the board.
    #[inline]
    pub const fn from_coords(rank: i8, file: i8) -> Option<Self> {
        if Self::on_board(rank, file) {
            Some(Square(rank as u8 * BOARD_SIZE + file as u8))
        } else {
            None
        }
    }

    /// Returns true if the signed coordinates lie on the board.
    #[inline]
    pub const fn on_board(rank: i8, file: i8) -> bool {
        rank >= 0 && rank < BOARD_SIZE as i8 && file >= 0 && file < BOARD_SIZE as i8
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from the player-facing coordinate pair.
    ///
    /// `x` is the printed row label (8 at the top, 1 at the bottom) and `y`
    /// is the printed column label (1-8, left to right).
    pub const fn from_display(x: i64, y: i64) -> Option<Self> {
        if x < 1 || x > BOARD_SIZE as i64 || y < 1 || y > BOARD_SIZE as i64 {
            return None;
        }
        Self::new(BOARD_SIZE - x as u8, y as u8 - 1)
    }

    /// Returns the player-facing `(x, y)` coordinate pair for this square.
    #[inline]
    pub const fn to_display(self) -> (u8, u8) {
        (BOARD_SIZE - self.rank(), self.file() + 1)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the rank index (0 = top row).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Returns the file index (0 = leftmost column).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Returns the square shifted by the given rank and file deltas, if on the board.
    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        Self::from_coords(self.rank() as i8 + d_rank, self.file() as i8 + d_file)
    }

    /// Iterates over all 64 squares, top row first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.rank(), self.file())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.to_display();
        write!(f, "{},{}", x, y)
    }
}
