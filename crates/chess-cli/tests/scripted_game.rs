use chess_cli::{GameConfig, Terminal, TerminalError, INVALID_CHOICE};
use chess_core::Color;
use chess_engine::{Game, GameResult};
use std::io::Cursor;

/// Each ply as four lines: piece x, piece y, target x, target y.
fn script(plies: &[[i64; 4]]) -> String {
    plies
        .iter()
        .flat_map(|ply| ply.iter().map(|c| format!("{c}\n")))
        .collect()
}

#[test]
fn queen_takes_king_after_four_cycles() {
    let config = GameConfig::parse("white_name = \"Ana\"\nblack_name = \"Bo\"").unwrap();
    let mut game = Game::from_layout(&config.layout, config.white_name, config.black_name).unwrap();

    let input = script(&[
        [2, 5, 4, 5],
        [7, 5, 5, 5],
        [1, 6, 4, 3],
        [8, 2, 6, 3],
        [1, 4, 5, 8],
        [8, 7, 6, 6],
        [5, 8, 7, 6],
        [7, 1, 6, 1],
        [7, 6, 8, 5],
    ]);
    let mut terminal = Terminal::new(Cursor::new(input), Vec::new());
    let result = terminal.play(&mut game).unwrap();
    let output = String::from_utf8(terminal.into_writer()).unwrap();

    assert_eq!(result, GameResult::WhiteWins);
    assert_eq!(game.winner(), Some(Color::White));
    assert_eq!(game.ply_count(), 9);
    assert!(output.ends_with("Ana wins!\n"));
    assert_eq!(output.matches("Ana, your move").count(), 5);
    assert_eq!(output.matches("Bo, your move").count(), 4);
    assert_eq!(output.matches("Bo (Black) pieces:").count(), 4);
    assert!(!output.contains(INVALID_CHOICE));
}

#[test]
fn input_ending_mid_turn_leaves_game_untouched() {
    let mut game = Game::new();
    // A piece is chosen but the target never arrives.
    let mut terminal = Terminal::new(Cursor::new("2\n5\n4\n"), Vec::new());
    let err = terminal.play(&mut game).unwrap_err();

    assert!(matches!(err, TerminalError::InputClosed));
    assert_eq!(game.ply_count(), 0);
    assert_eq!(game.side_to_move(), Color::White);
}
