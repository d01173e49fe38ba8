//! Interactive prompting loop.
//!
//! [`Terminal`] drives a [`Game`] from any line-oriented reader and writer,
//! so the same loop runs against stdin/stdout or scripted input in tests.

use chess_core::{Color, Square};
use chess_engine::{Game, GameError, GameResult, MoveOutcome};
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use thiserror::Error;

pub const INVALID_CHOICE: &str = "Invalid choice";

const PIECE_X_PROMPT: &str = "Choose piece, x coordinate: ";
const PIECE_Y_PROMPT: &str = "Choose piece, y coordinate: ";
const TARGET_X_PROMPT: &str = "Move to, x coordinate: ";
const TARGET_Y_PROMPT: &str = "Move to, y coordinate: ";

#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before the game ended")]
    InputClosed,
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Parses a coordinate the way a lenient integer read does.
///
/// Leading whitespace is skipped, then an optional sign and the longest run
/// of digits are read. Anything unparseable is 0.
pub fn parse_coordinate(input: &str) -> i64 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let sign = if negative { -1 } else { 1 };
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10)
                .saturating_add(sign * i64::from(d - b'0'))
        })
}

/// Terminal front-end over a reader and a writer.
pub struct Terminal<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the terminal, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Plays `game` until a king is captured.
    ///
    /// The board is shown before every turn and both roster reports after
    /// every White+Black cycle.
    pub fn play(&mut self, game: &mut Game) -> Result<GameResult, TerminalError> {
        if let Some(result) = game.result() {
            self.show_board(game)?;
            self.announce(game, result)?;
            return Ok(result);
        }

        loop {
            self.show_board(game)?;
            let outcome = self.play_turn(game)?;

            if let Some(result) = outcome.result {
                self.announce(game, result)?;
                if outcome.cycle_complete {
                    self.show_rosters(game)?;
                }
                return Ok(result);
            }
            if outcome.cycle_complete {
                self.show_rosters(game)?;
            }
        }
    }

    /// Plays one turn for the side to move: select a piece, then a target.
    pub fn play_turn(&mut self, game: &mut Game) -> Result<MoveOutcome, TerminalError> {
        writeln!(self.writer, "{}, your move", game.current_player().name())?;

        loop {
            let Some(from) = self.read_square(PIECE_X_PROMPT, PIECE_Y_PROMPT)? else {
                self.say(INVALID_CHOICE)?;
                continue;
            };
            match game.select_piece(from) {
                Ok(piece) => {
                    let symbol = piece.symbol();
                    writeln!(self.writer, "{}", symbol)?;
                    break;
                }
                Err(GameError::NoOwnPieceAt { .. }) => self.say(INVALID_CHOICE)?,
                Err(err) => return Err(err.into()),
            }
        }

        loop {
            let Some(to) = self.read_square(TARGET_X_PROMPT, TARGET_Y_PROMPT)? else {
                self.say(INVALID_CHOICE)?;
                continue;
            };
            match game.select_destination(to) {
                Ok(outcome) => return Ok(outcome),
                Err(GameError::IllegalDestination { .. }) => self.say(INVALID_CHOICE)?,
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Reads an `x` then a `y` coordinate; `None` if they name no square.
    fn read_square(
        &mut self,
        x_prompt: &str,
        y_prompt: &str,
    ) -> Result<Option<Square>, TerminalError> {
        self.say(x_prompt)?;
        let x = parse_coordinate(&self.read_line()?);
        self.say(y_prompt)?;
        let y = parse_coordinate(&self.read_line()?);
        tracing::debug!(x, y, "coordinates read");
        Ok(Square::from_display(x, y))
    }

    fn read_line(&mut self) -> Result<String, TerminalError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(TerminalError::InputClosed);
        }
        Ok(line)
    }

    fn say(&mut self, line: &str) -> Result<(), TerminalError> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }

    fn show_board(&mut self, game: &Game) -> Result<(), TerminalError> {
        write!(self.writer, "{}", game.board())?;
        Ok(())
    }

    fn show_rosters(&mut self, game: &Game) -> Result<(), TerminalError> {
        for color in Color::ALL {
            write!(self.writer, "{}", game.player(color).roster_report())?;
        }
        Ok(())
    }

    fn announce(&mut self, game: &Game, result: GameResult) -> Result<(), TerminalError> {
        let winner = game.player(result.winner()).name();
        writeln!(self.writer, "{} wins!", winner)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Creates a terminal on the process's stdin and stdout.
pub fn stdio_terminal() -> Terminal<StdinLock<'static>, Stdout> {
    Terminal::new(io::stdin().lock(), io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Cursor;

    fn run(game: &mut Game, input: &str) -> (Result<GameResult, TerminalError>, String) {
        let mut terminal = Terminal::new(Cursor::new(input.to_string()), Vec::new());
        let result = terminal.play(game);
        let output = String::from_utf8(terminal.into_writer()).unwrap();
        (result, output)
    }

    #[test]
    fn lenient_parsing() {
        assert_eq!(parse_coordinate("5\n"), 5);
        assert_eq!(parse_coordinate("  42abc"), 42);
        assert_eq!(parse_coordinate("-3"), -3);
        assert_eq!(parse_coordinate("+7"), 7);
        assert_eq!(parse_coordinate(""), 0);
        assert_eq!(parse_coordinate("x1"), 0);
        assert_eq!(parse_coordinate("-"), 0);
        assert_eq!(parse_coordinate("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_coordinate("-99999999999999999999999"), i64::MIN);
    }

    proptest! {
        #[test]
        fn printed_integers_parse_back(n in any::<i64>(), pad in "[ \t]{0,3}") {
            prop_assert_eq!(parse_coordinate(&n.to_string()), n);
            prop_assert_eq!(parse_coordinate(&format!("{pad}{n}\n")), n);
        }

        #[test]
        fn digits_stop_at_first_non_digit(n in 0i64..1000, tail in "[a-z.,]{1,5}[0-9]{0,3}") {
            prop_assert_eq!(parse_coordinate(&format!("{n}{tail}")), n);
        }

        #[test]
        fn text_without_leading_number_is_zero(input in "[a-zA-Z_.,;:!?*/][a-zA-Z0-9 ]{0,8}") {
            prop_assert_eq!(parse_coordinate(&input), 0);
        }
    }

    #[test]
    fn rook_captures_king() {
        let mut game = Game::from_layout("4k3/8/8/8/8/8/8/4R2K", "Ana", "Bo").unwrap();
        let (result, output) = run(&mut game, "1\n5\n8\n5\n");

        assert_eq!(result.unwrap(), GameResult::WhiteWins);
        assert!(output.contains("Ana, your move"));
        assert!(output.contains(PIECE_X_PROMPT));
        assert!(output.contains(TARGET_Y_PROMPT));
        assert!(output.contains("♖\n"));
        assert!(output.ends_with("Ana wins!\n"));
        assert!(!output.contains(INVALID_CHOICE));
        assert_eq!(game.winner(), Some(Color::White));
    }

    #[test]
    fn invalid_choices_reprompt() {
        let mut game = Game::from_layout("4k3/8/8/8/8/8/8/4R2K", "Ana", "Bo").unwrap();
        // Unparseable x, then an empty square, then the rook.
        // Then an unreachable target, then an off-board one, then the king.
        let input = "abc\n5\n3\n3\n1\n5\n8\n6\n9\n5\n8\n5\n";
        let (result, output) = run(&mut game, input);

        assert_eq!(result.unwrap(), GameResult::WhiteWins);
        assert_eq!(output.matches(INVALID_CHOICE).count(), 4);
        assert_eq!(output.matches("Ana, your move").count(), 1);
    }

    #[test]
    fn opponent_piece_cannot_be_selected() {
        let mut game = Game::from_layout("4k3/8/8/8/8/8/8/4R2K", "Ana", "Bo").unwrap();
        let (result, output) = run(&mut game, "8\n5\n1\n5\n8\n5\n");
        assert!(result.is_ok());
        assert_eq!(output.matches(INVALID_CHOICE).count(), 1);
    }

    #[test]
    fn black_win_prints_rosters() {
        let mut game = Game::from_layout("4k3/8/8/8/8/8/8/r3K3", "Ana", "Bo").unwrap();
        // White king steps sideways along the rook's row; the rook takes it.
        let (result, output) = run(&mut game, "1\n5\n1\n6\n1\n1\n1\n6\n");

        assert_eq!(result.unwrap(), GameResult::BlackWins);
        let win = output.find("Bo wins!").unwrap();
        let rosters = output.find("Ana (White) pieces:").unwrap();
        assert!(win < rosters);
        assert!(output.contains("Bo (Black) pieces:"));
        assert!(output.contains("Rook: ♜"));
        assert!(output.contains("King: ♚"));
        assert!(!output.contains("King: ♔"));
    }

    #[test]
    fn rosters_follow_each_full_cycle() {
        let mut game = Game::new();
        // e-pawns two squares each, then input runs out.
        let (result, output) = run(&mut game, "2\n5\n4\n5\n7\n5\n5\n5\n");

        assert!(matches!(result, Err(TerminalError::InputClosed)));
        assert_eq!(output.matches("White (White) pieces:").count(), 1);
        assert_eq!(output.matches("Black (Black) pieces:").count(), 1);
        assert_eq!(output.matches(" 1  2  3  4  5  6  7  8").count(), 6);
        assert_eq!(game.ply_count(), 2);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut game = Game::new();
        let (result, output) = run(&mut game, "");
        assert!(matches!(result, Err(TerminalError::InputClosed)));
        assert!(output.contains("White, your move"));
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn finished_layout_announces_immediately() {
        let mut game = Game::from_layout("8/8/8/8/8/8/8/4K3", "Ana", "Bo").unwrap();
        let (result, output) = run(&mut game, "");
        assert_eq!(result.unwrap(), GameResult::WhiteWins);
        assert!(output.ends_with("Ana wins!\n"));
    }
}
