pub mod board;
pub mod direction;
pub mod feedback;
pub mod game_logic;
pub mod movegen;
pub mod terminal;

pub use board::{Board, Coord};
pub use game_logic::{Game, MoveError};
pub use movegen::MoveGenerator;

/// Trait for displaying the board and move feedback to the player.
///
/// Abstracts over terminal rendering and any richer front end that wants
/// to show drop targets for a selected piece.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the board with the given feedback highlighted.
    ///
    /// Implementations map [`feedback::SquareFeedback`] variants
    /// to their own output (terminal colors, UI highlights, etc.).
    fn show(
        &mut self,
        board: &Board,
        feedback: &feedback::BoardFeedback,
    ) -> Result<(), Self::Error>;
}
