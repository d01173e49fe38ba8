//! Direction tables and the ray/step walkers shared by all piece kinds.

use crate::Board;
use chess_core::{Color, PieceKind, Square};

/// A `(rank delta, file delta)` pair.
pub type Offset = (i8, i8);

/// Orthogonal rays.
pub const ROOK_DIRECTIONS: [Offset; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Diagonal rays.
pub const BISHOP_DIRECTIONS: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Orthogonal rays followed by diagonal rays.
pub const QUEEN_DIRECTIONS: [Offset; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Knight hops.
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// King steps, one square in every direction.
pub const KING_OFFSETS: [Offset; 8] = QUEEN_DIRECTIONS;

/// Pawn capture file deltas: left, then right.
pub const PAWN_CAPTURE_FILES: [i8; 2] = [-1, 1];

/// Returns the ray or hop table for a kind. Pawns have none.
pub fn offsets(kind: PieceKind) -> &'static [Offset] {
    match kind {
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        PieceKind::Knight => &KNIGHT_OFFSETS,
        PieceKind::King => &KING_OFFSETS,
        PieceKind::Pawn => &[],
    }
}

/// Walks each ray outward from `from`, collecting destinations.
///
/// Empty squares are added and the walk continues. The first occupied
/// square ends the ray and is added only if it holds an enemy. Leaving the
/// board ends the ray.
pub fn slide(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[Offset],
    out: &mut Vec<Square>,
) {
    for &(d_rank, d_file) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_rank, d_file) {
            let (rank, file) = (next.rank() as i8, next.file() as i8);
            if board.is_empty(rank, file) {
                out.push(next);
            } else {
                if board.is_enemy(rank, file, color) {
                    out.push(next);
                }
                break;
            }
            current = next;
        }
    }
}

/// Collects each single-hop destination that is on the board and not held
/// by a friendly piece. Intervening squares are irrelevant.
pub fn step(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[Offset],
    out: &mut Vec<Square>,
) {
    for &(d_rank, d_file) in offsets {
        let Some(to) = from.offset(d_rank, d_file) else {
            continue;
        };
        let (rank, file) = (to.rank() as i8, to.file() as i8);
        if board.is_empty(rank, file) || board.is_enemy(rank, file, color) {
            out.push(to);
        }
    }
}
