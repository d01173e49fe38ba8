//! Players and their piece rosters.

use crate::{Piece, PieceId};
use chess_core::{Color, PieceKind, Square};
use std::fmt;

/// A player and the pieces they currently own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: Color,
    pieces: Vec<Piece>,
}

impl Player {
    /// Creates a player holding the standard 16-piece starting roster.
    ///
    /// The roster lists the eight pawns by file, then the back rank by file.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        let pawns = (0..8u8).map(|file| (PieceKind::Pawn, color.pawn_rank(), file));
        let back = PieceKind::BACK_RANK
            .iter()
            .zip(0u8..)
            .map(|(&kind, file)| (kind, color.back_rank(), file));

        let pieces = pawns
            .chain(back)
            .filter_map(|(kind, rank, file)| Square::new(rank, file).map(|sq| (kind, sq)))
            .enumerate()
            .map(|(serial, (kind, sq))| {
                Piece::new(PieceId::new(color, serial as u8), kind, color, sq)
            })
            .collect();

        Player {
            name: name.into(),
            color,
            pieces,
        }
    }

    /// Creates a player holding exactly the given pieces, in the given order.
    ///
    /// Pawns standing off their starting rank count as having moved.
    pub fn with_pieces(
        name: impl Into<String>,
        color: Color,
        pieces: &[(PieceKind, Square)],
    ) -> Self {
        let pieces = pieces
            .iter()
            .enumerate()
            .map(|(serial, &(kind, sq))| {
                let moved = kind == PieceKind::Pawn && sq.rank() != color.pawn_rank();
                Piece::new(PieceId::new(color, serial as u8), kind, color, sq).with_moved(moved)
            })
            .collect();

        Player {
            name: name.into(),
            color,
            pieces,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the roster in order.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns the owned piece standing on `sq`, if any.
    pub fn find_piece_at(&self, sq: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square() == sq)
    }

    /// Returns the owned piece with the given id, if still in the roster.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id() == id)
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.id() == id)
    }

    /// Removes a piece by identity, returning it. Removal is permanent.
    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let index = self.pieces.iter().position(|p| p.id() == id)?;
        Some(self.pieces.remove(index))
    }

    /// Returns true while the roster still holds a king.
    pub fn has_king(&self) -> bool {
        self.pieces.iter().any(|p| p.kind() == PieceKind::King)
    }

    /// Groups the roster by kind, kinds in order of first appearance.
    pub fn grouped(&self) -> Vec<(PieceKind, Vec<&Piece>)> {
        let mut groups: Vec<(PieceKind, Vec<&Piece>)> = Vec::new();
        for piece in &self.pieces {
            match groups.iter_mut().find(|(kind, _)| *kind == piece.kind()) {
                Some((_, members)) => members.push(piece),
                None => groups.push((piece.kind(), vec![piece])),
            }
        }
        groups
    }

    /// Returns the roster report: a header, then one line of symbols per kind.
    pub fn roster_report(&self) -> RosterReport<'_> {
        RosterReport(self)
    }
}

/// Display adapter for [`Player::roster_report`].
pub struct RosterReport<'a>(&'a Player);

impl fmt::Display for RosterReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player = self.0;
        writeln!(f, "{} ({}) pieces:", player.name, player.color)?;
        for (kind, members) in player.grouped() {
            write!(f, "{}:", kind)?;
            for piece in members {
                write!(f, " {}", piece.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
