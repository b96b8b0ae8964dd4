use std::io::{self, Write};

use shakmaty::Piece;

use crate::BoardDisplay;
use crate::board::{BOARD_SIZE, Board, Coord};
use crate::feedback::{BoardFeedback, SquareFeedback};

/// Terminal-based board display for development and testing.
///
/// Renders the board as an 8×8 grid of FEN letters with ANSI color-coded
/// backgrounds matching the feedback type (destinations, captures, etc.).
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    /// Create a new terminal display.
    pub fn new() -> Self {
        Self
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl BoardDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, board: &Board, feedback: &BoardFeedback) -> Result<(), Self::Error> {
        render_board(&mut io::stdout(), board, feedback)
    }
}

/// Render board and feedback to any writer. Extracted for testability.
pub(crate) fn render_board(
    w: &mut impl Write,
    board: &Board,
    feedback: &BoardFeedback,
) -> Result<(), DisplayError> {
    for row in 0..BOARD_SIZE as u8 {
        write!(w, " {} ", BOARD_SIZE as u8 - row)?;
        for col in 0..BOARD_SIZE as u8 {
            let Some(square) = Coord::new(row, col) else {
                continue;
            };
            let cell = format_square(board.piece_at(square), feedback.get(square));
            write!(w, "{cell}")?;
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    w.flush()?;
    Ok(())
}

/// Map a piece and feedback variant to an ANSI-colored cell string.
fn format_square(piece: Option<Piece>, feedback: Option<SquareFeedback>) -> String {
    let symbol = piece.map_or('·', |p| p.char());
    match feedback {
        Some(SquareFeedback::Destination) => format!("\x1b[44m {symbol} \x1b[0m"),
        Some(SquareFeedback::Capture) => format!("\x1b[41m {symbol} \x1b[0m"),
        Some(SquareFeedback::Origin) => format!("\x1b[42m {symbol} \x1b[0m"),
        None => format!(" {symbol} "),
    }
}
