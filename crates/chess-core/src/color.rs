//! The two sides and where their pieces start.

/// A side of the board. White sits at the bottom and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, in turn order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the rank-index step of a pawn push for this color.
    ///
    /// Rank index 0 is the top row of the board (Black's side), so White
    /// pawns move towards decreasing indices.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Returns the rank index of this color's back rank.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Returns the rank index this color's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Returns the color's name as shown to players.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_order() {
        assert_eq!(Color::ALL[0].opposite(), Color::ALL[1]);
        assert_eq!(Color::ALL[1].opposite(), Color::ALL[0]);
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn pawns_advance_towards_the_enemy_back_rank() {
        for color in Color::ALL {
            let step = color.pawn_direction();
            let next = color.pawn_rank() as i8 + step;
            assert_eq!(next - step * 2, color.back_rank() as i8);
        }
    }

    #[test]
    fn home_ranks() {
        assert_eq!(Color::White.back_rank(), 7);
        assert_eq!(Color::White.pawn_rank(), 6);
        assert_eq!(Color::Black.back_rank(), 0);
        assert_eq!(Color::Black.pawn_rank(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(Color::White.to_string(), "White");
        assert_eq!(Color::Black.name(), "Black");
    }
}
