use crate::board::Coord;
use crate::game_logic::Game;

/// Type of visual feedback for an individual square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareFeedback {
    /// The selected piece stands here
    Origin,
    /// The selected piece may move here
    Destination,
    /// Moving here captures an opponent piece
    Capture,
}

/// Squares to highlight for the current selection.
///
/// `BoardFeedback` is computed by [`compute_feedback`] and consumed by a
/// [`BoardDisplay`](crate::BoardDisplay) to show drop targets for a picked-up
/// piece.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardFeedback {
    squares: Vec<(Coord, SquareFeedback)>,
}

impl BoardFeedback {
    /// Create empty feedback (no highlights)
    #[inline]
    pub const fn new() -> Self {
        Self {
            squares: Vec::new(),
        }
    }

    /// Get all square feedback entries
    #[inline]
    pub fn squares(&self) -> &[(Coord, SquareFeedback)] {
        &self.squares
    }

    /// Get feedback for a specific square, if any
    #[inline]
    pub fn get(&self, square: Coord) -> Option<SquareFeedback> {
        self.squares
            .iter()
            .find(|(sq, _)| *sq == square)
            .map(|(_, feedback)| *feedback)
    }

    /// Set feedback for a square, replacing any previous entry.
    pub fn set(&mut self, square: Coord, feedback: SquareFeedback) {
        match self.squares.iter_mut().find(|(sq, _)| *sq == square) {
            Some(entry) => entry.1 = feedback,
            None => self.squares.push((square, feedback)),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

impl From<Vec<(Coord, SquareFeedback)>> for BoardFeedback {
    fn from(squares: Vec<(Coord, SquareFeedback)>) -> Self {
        Self { squares }
    }
}

/// Compute highlight feedback for the square the player has selected.
///
/// - Nothing selected, an empty square, or an opponent piece: no feedback
/// - Own piece: the origin plus every destination, captures marked apart
pub fn compute_feedback(game: &Game, selected: Option<Coord>) -> BoardFeedback {
    match selected {
        Some(from) if game.is_players_piece(from) => show_destinations_for(game, from),
        _ => BoardFeedback::default(),
    }
}

/// Show legal destinations for a selected piece
fn show_destinations_for(game: &Game, from: Coord) -> BoardFeedback {
    std::iter::once((from, SquareFeedback::Origin))
        .chain(
            game.legal_moves(from)
                .into_iter()
                .map(|to| classify_move(game, to)),
        )
        .collect::<Vec<_>>()
        .into()
}

/// Classify a destination as either a capture or regular destination
fn classify_move(game: &Game, to: Coord) -> (Coord, SquareFeedback) {
    if game.piece_at(to).is_some() {
        (to, SquareFeedback::Capture)
    } else {
        (to, SquareFeedback::Destination)
    }
}
