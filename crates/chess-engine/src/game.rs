//! Turn-based game management.
//!
//! The [`Game`] struct owns both players and the board snapshot and drives
//! each ply through its phases:
//! - [`TurnPhase::SelectingPiece`]: the side to move picks one of its pieces
//! - [`TurnPhase::SelectingDestination`]: a destination is checked against
//!   that piece's legal moves and the move is applied
//! - [`TurnPhase::GameOver`]: a roster lost its king
//!
//! Failed selections leave the state untouched, so a front-end can simply ask
//! again.

use crate::movegen::generate_moves;
use crate::rules::{king_capture_result, GameResult};
use crate::{Board, Piece, PieceId, Player};
use chess_core::{Color, Layout, LayoutError, Move, PieceKind, Square};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The side to move owns no piece on the square.
    #[error("{color} has no piece at {square}")]
    NoOwnPieceAt { square: Square, color: Color },
    /// The destination is not among the selected piece's legal moves.
    #[error("illegal move: {from} -> {to}")]
    IllegalDestination { from: Square, to: Square },
    /// A destination was given before a piece was selected.
    #[error("no piece selected")]
    NoPieceSelected,
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
    /// The starting layout could not be parsed.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Where the current ply stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for the side to move to pick a piece.
    SelectingPiece,
    /// A piece is picked; waiting for its destination.
    SelectingDestination { piece: PieceId },
    /// A king has been captured.
    GameOver,
}

/// A recorded move in game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMove {
    /// The move played.
    pub mov: Move,
    /// Color of the side that moved.
    pub color: Color,
    /// Kind of the moving piece.
    pub kind: PieceKind,
    /// Kind of the captured piece, if any.
    pub captured: Option<PieceKind>,
}

/// Everything that happened when a move was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move played.
    pub mov: Move,
    /// The moved piece, at its new square.
    pub piece: Piece,
    /// The opposing piece removed from its roster, if any.
    pub captured: Option<Piece>,
    /// The game result, if this move ended the game.
    pub result: Option<GameResult>,
    /// True when this move completed a White + Black pair of plies.
    pub cycle_complete: bool,
}

/// A game of king-capture chess between two players.
#[derive(Debug, Clone)]
pub struct Game {
    /// Rosters, indexed by color.
    players: [Player; 2],
    /// Occupancy snapshot of both rosters.
    board: Board,
    side_to_move: Color,
    phase: TurnPhase,
    result: Option<GameResult>,
    moves: Vec<GameMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting rosters.
    pub fn new() -> Self {
        Self::with_names("White", "Black")
    }

    /// Creates a standard game with named players.
    pub fn with_names(white: impl Into<String>, black: impl Into<String>) -> Self {
        Self::from_players(
            Player::new(white, Color::White),
            Player::new(black, Color::Black),
        )
    }

    /// Creates a game from a layout string, White to move.
    pub fn from_layout(
        layout: &str,
        white: impl Into<String>,
        black: impl Into<String>,
    ) -> Result<Self, GameError> {
        let layout = Layout::parse(layout)?;
        let roster = |color: Color| -> Vec<(PieceKind, Square)> {
            layout.pieces_of(color).map(|p| (p.kind, p.square)).collect()
        };
        Ok(Self::from_players(
            Player::with_pieces(white, Color::White, &roster(Color::White)),
            Player::with_pieces(black, Color::Black, &roster(Color::Black)),
        ))
    }

    /// Creates a game from two rosters, White to move.
    ///
    /// If a roster already lacks its king the game starts finished.
    pub fn from_players(white: Player, black: Player) -> Self {
        let mut game = Game {
            players: [white, black],
            board: Board::new(),
            side_to_move: Color::White,
            phase: TurnPhase::SelectingPiece,
            result: None,
            moves: Vec::new(),
        };
        game.rebuild_board();
        game.check_result();
        tracing::info!(
            white = game.player(Color::White).name(),
            black = game.player(Color::Black).name(),
            "game started"
        );
        game
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player of the given color.
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.side_to_move)
    }

    /// Returns the color whose turn it is.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the current turn phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Returns the currently selected piece, if any.
    pub fn selected_piece(&self) -> Option<&Piece> {
        match self.phase {
            TurnPhase::SelectingDestination { piece } => self.current_player().piece(piece),
            _ => None,
        }
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns the winning color if the game is over.
    pub fn winner(&self) -> Option<Color> {
        self.result.map(GameResult::winner)
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the number of plies played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns all moves available to the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        generate_moves(self.current_player(), &self.board)
    }

    /// Returns the destinations of the side to move's piece on `from`.
    pub fn legal_moves_from(&self, from: Square) -> Result<Vec<Square>, GameError> {
        self.ensure_in_progress()?;
        Ok(self.own_piece_at(from)?.legal_moves(&self.board))
    }

    /// Selects the side to move's piece on `from`.
    ///
    /// Re-selecting while a destination is pending replaces the selection.
    pub fn select_piece(&mut self, from: Square) -> Result<&Piece, GameError> {
        self.ensure_in_progress()?;
        let id = self.own_piece_at(from)?.id();
        self.phase = TurnPhase::SelectingDestination { piece: id };
        tracing::debug!(color = %self.side_to_move, square = %from, "piece selected");
        self.own_piece_at(from)
    }

    /// Moves the selected piece to `to` if that is one of its legal moves.
    ///
    /// On failure the selection is kept and the state is unchanged.
    pub fn select_destination(&mut self, to: Square) -> Result<MoveOutcome, GameError> {
        self.ensure_in_progress()?;
        let piece = self.selected_piece().ok_or(GameError::NoPieceSelected)?;

        if !piece.can_move_to(&self.board, to) {
            tracing::debug!(from = %piece.square(), to = %to, "destination rejected");
            return Err(GameError::IllegalDestination {
                from: piece.square(),
                to,
            });
        }

        let id = piece.id();
        self.apply_move(id, to)
    }

    /// Selects the piece on `from` and moves it to `to` in one step.
    ///
    /// On failure the game is left exactly as it was.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, GameError> {
        let previous = self.phase;
        self.select_piece(from)?;
        self.select_destination(to).inspect_err(|_| {
            self.phase = previous;
        })
    }

    /// Runs the win check against the current rosters.
    ///
    /// Ends the game as soon as a roster has lost its king.
    pub fn check_result(&mut self) -> Option<GameResult> {
        if self.result.is_none() {
            let [white, black] = &self.players;
            self.result = king_capture_result(white, black);
            if let Some(result) = self.result {
                self.phase = TurnPhase::GameOver;
                tracing::info!(%result, "game over");
            }
        }
        self.result
    }

    /// Returns the board as a layout string.
    pub fn to_layout(&self) -> String {
        self.board.to_layout()
    }

    /// Applies a validated move: capture, relocation, win check, turn switch.
    fn apply_move(&mut self, id: PieceId, to: Square) -> Result<MoveOutcome, GameError> {
        let us = self.side_to_move;
        let them = us.opposite();

        let mover = self.players[us.index()]
            .piece_mut(id)
            .ok_or(GameError::NoPieceSelected)?;
        let from = mover.square();
        mover.move_to(to);
        let piece = mover.clone();

        let opponent = &mut self.players[them.index()];
        let victim = opponent.find_piece_at(to).map(Piece::id);
        let captured = victim.and_then(|victim| opponent.remove(victim));

        let mov = Move::new(from, to);
        self.moves.push(GameMove {
            mov,
            color: us,
            kind: piece.kind(),
            captured: captured.as_ref().map(Piece::kind),
        });

        match &captured {
            Some(victim) => tracing::debug!(%mov, captured = %victim, "capture"),
            None => tracing::debug!(%mov, "move"),
        }

        self.rebuild_board();

        let result = self.check_result();
        if result.is_none() {
            self.side_to_move = them;
            self.phase = TurnPhase::SelectingPiece;
        }

        Ok(MoveOutcome {
            mov,
            piece,
            captured,
            result,
            cycle_complete: us == Color::Black,
        })
    }

    fn rebuild_board(&mut self) {
        let [white, black] = &self.players;
        self.board.rebuild(white, black);
    }

    fn own_piece_at(&self, sq: Square) -> Result<&Piece, GameError> {
        self.current_player()
            .find_piece_at(sq)
            .ok_or(GameError::NoOwnPieceAt {
                square: sq,
                color: self.side_to_move,
            })
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_game_over() {
            Err(GameError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}
