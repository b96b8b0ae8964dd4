use std::collections::VecDeque;

use thiserror::Error;

use crate::board::Coord;
use crate::game_logic::{Game, MoveError};

/// Error when parsing a move script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid square notation: '{0}'")]
    InvalidSquare(String),
    #[error("square '{0}' has no destination")]
    MissingDestination(Coord),
}

/// A queued origin/destination pair.
pub type ScriptMove = (Coord, Coord);

/// A queue of moves parsed from a compact text script.
///
/// New script can be appended at any time for interactive use.
#[derive(Debug, Clone, Default)]
pub struct MoveScript {
    pending: VecDeque<ScriptMove>,
}

impl MoveScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and queue additional moves.
    ///
    /// Format:
    /// - Squares are 2 characters (e.g., "e2", "a1")
    /// - Consecutive squares pair up as origin then destination
    /// - Spaces and periods are separators
    ///
    /// Examples:
    /// - `"e2e4."` - e2 to e4
    /// - `"e2 e4. e7e5"` - e2 to e4, then e7 to e5
    ///
    /// Nothing is queued if any part of the script is invalid.
    pub fn push_script(&mut self, script: &str) -> Result<(), ParseError> {
        let moves = parse_script(script)?;
        self.pending.extend(moves);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Play the next queued move through [`Game::try_make_move`].
    ///
    /// Returns `None` when the queue is empty. A rejected move is consumed.
    pub fn step(&mut self, game: &mut Game) -> Option<Result<ScriptMove, MoveError>> {
        let (from, to) = self.pending.pop_front()?;
        Some(game.try_make_move(from, to).map(|()| (from, to)))
    }

    /// Play every queued move, stopping at the first rejection.
    ///
    /// The remaining moves are discarded on error.
    pub fn drain(&mut self, game: &mut Game) -> Result<usize, MoveError> {
        let mut played = 0;
        while let Some(result) = self.step(game) {
            if let Err(err) = result {
                self.pending.clear();
                return Err(err);
            }
            played += 1;
        }
        Ok(played)
    }
}

/// Parse a script string into origin/destination pairs.
fn parse_script(script: &str) -> Result<Vec<ScriptMove>, ParseError> {
    let mut squares: Vec<Coord> = Vec::new();
    let mut current_token = String::new();

    for ch in script.chars() {
        match ch {
            '.' => flush_token(&mut current_token, &mut squares)?,
            c if c.is_whitespace() => flush_token(&mut current_token, &mut squares)?,
            _ => {
                current_token.push(ch);

                // Squares are exactly 2 characters (e.g., "e2", "a1")
                if current_token.chars().count() == 2 {
                    flush_token(&mut current_token, &mut squares)?;
                }
            }
        }
    }

    // Flush any remaining token
    flush_token(&mut current_token, &mut squares)?;

    let pairs = squares.chunks_exact(2);
    if let [dangling] = pairs.remainder() {
        return Err(ParseError::MissingDestination(*dangling));
    }
    Ok(pairs.map(|pair| (pair[0], pair[1])).collect())
}

/// Parse the current token onto the square list and clear it.
fn flush_token(token: &mut String, squares: &mut Vec<Coord>) -> Result<(), ParseError> {
    if !token.is_empty() {
        let square: Coord = token
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidSquare(token.clone()))?;
        squares.push(square);
        token.clear();
    }
    Ok(())
}
