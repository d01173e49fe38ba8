//! Move generation.
//!
//! Every piece kind produces pseudo-legal destinations: movement and
//! occupancy rules apply, but nothing checks whether the mover's own king is
//! left capturable. Sliding pieces cast rays that stop at the first occupied
//! square; stepping pieces hop to fixed offsets; pawns follow their own
//! push/capture rules.

mod attacks;
pub mod perft;

use crate::{Board, Piece, Player};
use chess_core::{Move, PieceKind, Square};

pub use attacks::{
    offsets, slide, step, Offset, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS,
    PAWN_CAPTURE_FILES, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

/// Returns the destinations available to a single piece.
pub fn piece_moves(piece: &Piece, board: &Board) -> Vec<Square> {
    let mut moves = Vec::new();
    let (from, color) = (piece.square(), piece.color());

    match piece.kind() {
        PieceKind::Pawn => generate_pawn_moves(piece, board, &mut moves),
        kind if kind.is_slider() => slide(board, from, color, offsets(kind), &mut moves),
        kind => step(board, from, color, offsets(kind), &mut moves),
    }

    moves
}

/// Generates every move available to a player, roster order first.
pub fn generate_moves(player: &Player, board: &Board) -> Vec<Move> {
    player
        .pieces()
        .iter()
        .flat_map(|piece| {
            let from = piece.square();
            piece_moves(piece, board)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Generates pawn pushes and diagonal captures.
fn generate_pawn_moves(pawn: &Piece, board: &Board, moves: &mut Vec<Square>) {
    let color = pawn.color();
    let dir = color.pawn_direction();
    let rank = pawn.square().rank() as i8;
    let file = pawn.square().file() as i8;

    // Single push, then the double push from an unmoved pawn.
    if board.is_empty(rank + dir, file) {
        moves.extend(Square::from_coords(rank + dir, file));

        if !pawn.has_moved() && board.is_empty(rank + 2 * dir, file) {
            moves.extend(Square::from_coords(rank + 2 * dir, file));
        }
    }

    for d_file in PAWN_CAPTURE_FILES {
        if board.is_enemy(rank + dir, file + d_file, color) {
            moves.extend(Square::from_coords(rank + dir, file + d_file));
        }
    }
}
