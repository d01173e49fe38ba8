//! Piece placement strings.
//!
//! A layout is the first field of a FEN record: eight ranks separated by
//! `/`, listed from the top of the board (rank index 0) down. Letters
//! `PNBRQK` are White pieces, `pnbrqk` Black pieces, and digits 1-8 are runs
//! of empty squares.

use crate::{Color, PieceKind, Square};
use thiserror::Error;

/// Errors that can occur when parsing a layout string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid layout: invalid character '{character}' in rank {rank}")]
    InvalidCharacter { character: char, rank: u8 },

    #[error("invalid layout: rank {rank} has {squares} squares, expected 8")]
    InvalidRankWidth { rank: u8, squares: u32 },
}

/// A single piece on a parsed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub square: Square,
    pub kind: PieceKind,
    pub color: Color,
}

/// A parsed piece placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    placements: Vec<Placement>,
}

impl Layout {
    /// The standard starting layout.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Parses a layout string.
    pub fn parse(layout: &str) -> Result<Self, LayoutError> {
        let ranks: Vec<&str> = layout.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::InvalidRankCount(ranks.len()));
        }

        let mut placements = Vec::new();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = rank_idx as u8;
            // Printed row label, as shown beside the rendered board.
            let label = 8 - rank;
            let mut file = 0u32;

            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += run;
                } else if let Some((kind, color)) = PieceKind::from_layout_char(c) {
                    if let Some(square) = u8::try_from(file)
                        .ok()
                        .and_then(|f| Square::new(rank, f))
                    {
                        placements.push(Placement {
                            square,
                            kind,
                            color,
                        });
                    }
                    file += 1;
                } else {
                    return Err(LayoutError::InvalidCharacter {
                        character: c,
                        rank: label,
                    });
                }
            }

            if file != 8 {
                return Err(LayoutError::InvalidRankWidth {
                    rank: label,
                    squares: file,
                });
            }
        }

        Ok(Layout { placements })
    }

    /// Returns the pieces in reading order (top row first, left to right).
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns the pieces of one color in reading order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.color == color)
    }

    /// Serializes occupied squares back into a layout string.
    pub fn write<F>(mut occupant: F) -> String
    where
        F: FnMut(Square) -> Option<(PieceKind, Color)>,
    {
        let mut out = String::new();
        for rank in 0..8u8 {
            let mut empty = 0;
            for file in 0..8u8 {
                let piece = Square::new(rank, file).and_then(&mut occupant);
                match piece {
                    Some((kind, color)) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(kind.to_layout_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank < 7 {
                out.push('/');
            }
        }
        out
    }
}
