//! Leaf counting over the game tree.
//!
//! Every move is played on a cloned [`Game`], so captures, turn switching
//! and the king-capture ending all take part. A game that has ended has no
//! children. Up to depth 3 from the standard start no capture can reach a
//! king, and the counts equal the well-known chess values.

use crate::Game;
use chess_core::Move;

/// Counts the positions reachable in exactly `depth` plies.
pub fn perft(game: &Game, depth: u32) -> u64 {
    match depth {
        0 => 1,
        1 => game.legal_moves().len() as u64,
        _ => game
            .legal_moves()
            .into_iter()
            .filter_map(|m| play(game, m))
            .map(|child| perft(&child, depth - 1))
            .sum(),
    }
}

/// Splits [`perft`] by first move, in generation order.
pub fn perft_divide(game: &Game, depth: u32) -> Vec<(Move, u64)> {
    game.legal_moves()
        .into_iter()
        .filter_map(|m| {
            let child = play(game, m)?;
            Some((m, perft(&child, depth.saturating_sub(1))))
        })
        .collect()
}

fn play(game: &Game, m: Move) -> Option<Game> {
    let mut child = game.clone();
    child.make_move(m.from(), m.to()).ok()?;
    Some(child)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Square;

    fn sq(rank: u8, file: u8) -> Square {
        Square::new(rank, file).unwrap()
    }

    #[test]
    fn opening_counts_match_chess() {
        let game = Game::new();
        assert_eq!(perft(&game, 0), 1);
        assert_eq!(perft(&game, 1), 20);
        assert_eq!(perft(&game, 2), 400);
        assert_eq!(perft(&game, 3), 8902);
    }

    #[test]
    fn finished_game_has_no_leaves() {
        let game = Game::from_layout("8/8/8/8/8/8/8/4K3", "White", "Black").unwrap();
        assert!(game.is_game_over());
        assert_eq!(perft(&game, 2), 0);
    }

    #[test]
    fn king_capture_prunes_the_subtree() {
        // Rook on e1 takes the king on e8; nothing follows.
        let game = Game::from_layout("4k3/8/8/8/8/8/8/4R2K", "White", "Black").unwrap();
        let divided = perft_divide(&game, 2);

        let capture = Move::new(sq(7, 4), sq(0, 4));
        let (_, after_capture) = divided.iter().find(|(m, _)| *m == capture).unwrap();
        assert_eq!(*after_capture, 0);

        // Any other rook move leaves Black's king five replies.
        let quiet = Move::new(sq(7, 4), sq(4, 4));
        let (_, after_quiet) = divided.iter().find(|(m, _)| *m == quiet).unwrap();
        assert_eq!(*after_quiet, 5);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = Game::new();
        let divided = perft_divide(&game, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|&(_, n)| n == 20));
        let total: u64 = divided.iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&game, 2));
    }
}
