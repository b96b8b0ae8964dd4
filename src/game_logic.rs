use std::num::NonZeroU32;

use shakmaty::fen::{Fen, LossyFenError};
use shakmaty::{Color, Piece, Setup};
use thiserror::Error;

use crate::board::{Board, Coord};
use crate::movegen::MoveGenerator;

/// Reasons a checked move is refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySquare(Coord),
    #[error("piece on {square} belongs to {owner:?}, but it is {turn:?}'s turn")]
    NotYourPiece {
        square: Coord,
        owner: Color,
        turn: Color,
    },
    #[error("{from} to {to} is not a legal move")]
    IllegalMove { from: Coord, to: Coord },
}

/// Error when loading a game from FEN.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid FEN '{fen}': {reason}")]
pub struct SetupError {
    fen: String,
    reason: String,
}

/// A chess game in progress: the board and whose turn it is.
///
/// Validation (`is_valid_move`, `legal_moves`) never mutates; `make_move`
/// and `try_make_move` are the only state changes.
#[derive(Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    /// Half-moves played since the loaded position.
    plies: u32,
    /// Full-move number of the loaded position.
    start_fullmove: NonZeroU32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move.
    #[inline]
    pub fn new() -> Self {
        Self::from_board(Board::starting(), Color::White)
    }

    /// Creates a game from an existing board and side to move.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            plies: 0,
            start_fullmove: NonZeroU32::MIN,
        }
    }

    /// Loads piece placement, side to move and move number from FEN.
    ///
    /// Castling rights, en passant and the halfmove clock are ignored.
    pub fn from_fen(fen: &str) -> Result<Self, SetupError> {
        let parsed = fen.trim().parse::<Fen>().map_err(|e| SetupError {
            fen: fen.to_string(),
            reason: format!("{e}"),
        })?;
        let setup = parsed.as_setup();
        let mut game = Self::from_board(Board::from_shakmaty(&setup.board), setup.turn);
        game.start_fullmove = setup.fullmoves;
        Ok(game)
    }

    /// Renders the position as FEN. Castling and en passant are always `-`.
    pub fn to_fen(&self) -> String {
        let mut setup = Setup::empty();
        setup.board = self.board.to_shakmaty();
        setup.turn = self.turn;
        setup.fullmoves = self.fullmove_number();
        // Without castling rights or an en passant square nothing is lost.
        Fen::try_from_setup(setup)
            .unwrap_or_else(LossyFenError::ignore)
            .to_string()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the piece at a given square, if any
    #[inline]
    pub fn piece_at(&self, square: Coord) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn is_white_to_move(&self) -> bool {
        self.turn.is_white()
    }

    /// Number of half-moves committed since this game was created.
    #[inline]
    pub fn plies(&self) -> u32 {
        self.plies
    }

    pub fn fullmove_number(&self) -> NonZeroU32 {
        // Black moving first from a loaded position advances the number after one ply.
        let black_first = u32::from(self.turn.is_white() != (self.plies % 2 == 0));
        self.start_fullmove
            .saturating_add((self.plies + black_first) / 2)
    }

    /// True if `square` holds a piece of the side to move.
    pub fn is_players_piece(&self, square: Coord) -> bool {
        self.piece_at(square)
            .is_some_and(|piece| piece.color == self.turn)
    }

    /// Move generator for the side to move.
    #[inline]
    pub fn generator(&self) -> MoveGenerator<'_> {
        MoveGenerator::new(&self.board, self.turn)
    }

    /// Destinations of the piece on `origin`.
    ///
    /// Empty when the square is empty or holds a piece of the side not to move.
    pub fn legal_moves(&self, origin: Coord) -> Vec<Coord> {
        if !self.is_players_piece(origin) {
            return Vec::new();
        }
        self.generator().moves_from(origin)
    }

    /// True iff `to` is among `legal_moves(from)`.
    pub fn is_valid_move(&self, from: Coord, to: Coord) -> bool {
        self.legal_moves(from).contains(&to)
    }

    /// Relocates the piece on `from` to `to` and passes the turn.
    ///
    /// # Preconditions
    ///
    /// The move must already have been accepted by [`Game::is_valid_move`].
    /// Nothing is re-checked here: an unvalidated pair silently corrupts the
    /// position. Use [`Game::try_make_move`] when the move is untrusted.
    pub fn make_move(&mut self, from: Coord, to: Coord) {
        let moving = self.board.piece_at(from);
        let captured = self.board.relocate(from, to);
        log::debug!(
            "{:?} {from}->{to}{}",
            moving,
            captured.map_or(String::new(), |p| format!(" takes {p:?}"))
        );
        self.advance_turn();
    }

    /// Validates and commits a move, leaving the game untouched on error.
    pub fn try_make_move(&mut self, from: Coord, to: Coord) -> Result<(), MoveError> {
        if let Err(err) = self.check_move(from, to) {
            log::warn!("rejected move: {err}");
            return Err(err);
        }
        self.make_move(from, to);
        Ok(())
    }

    fn check_move(&self, from: Coord, to: Coord) -> Result<(), MoveError> {
        let piece = self.piece_at(from).ok_or(MoveError::EmptySquare(from))?;
        if piece.color != self.turn {
            return Err(MoveError::NotYourPiece {
                square: from,
                owner: piece.color,
                turn: self.turn,
            });
        }
        if !self.is_valid_move(from, to) {
            return Err(MoveError::IllegalMove { from, to });
        }
        Ok(())
    }

    fn advance_turn(&mut self) {
        self.turn = self.turn.other();
        self.plies += 1;
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("position", &self.to_fen())
            .field("plies", &self.plies)
            .finish()
    }
}
