use std::fmt;
use std::str::FromStr;

use shakmaty::{Bitboard, Color, File, Piece, Rank, Role, Square};
use thiserror::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// Returns true if both coordinates lie on the board.
#[inline]
pub const fn in_bounds(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
}

/// A square addressed by grid row and column.
///
/// Row 0 is Black's back rank and row 7 is White's, so `(6, 4)` is `e2`.
/// A `Coord` can only be constructed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate if both `row` and `col` are in `0..8`.
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Steps by `(d_row, d_col)`, returning `None` when the result leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if in_bounds(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// The matching `shakmaty` square (row 0 is rank 8).
    pub fn to_square(self) -> Square {
        Square::from_coords(
            File::new(u32::from(self.col)),
            Rank::new(u32::from(7 - self.row)),
        )
    }

    pub fn from_square(square: Square) -> Self {
        let col = u32::from(square.file()) as u8;
        let rank = u32::from(square.rank()) as u8;
        Self { row: 7 - rank, col }
    }

    /// Iterates all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Coord { row, col }))
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = ParseCoordError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col).ok_or(ParseCoordError::OutOfRange { row, col })
    }
}

/// Error type for parsing or building a [`Coord`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseCoordError {
    #[error("invalid square notation: '{0}'")]
    Notation(String),
    #[error("square ({row}, {col}) is off the board")]
    OutOfRange { row: u8, col: u8 },
}

/// Parse algebraic notation like "e2" into a `Coord`.
///
/// # Examples
/// ```
/// # use chess_move_core::board::Coord;
/// let e2: Coord = "e2".parse().unwrap();
/// assert_eq!((e2.row(), e2.col()), (6, 4));
/// ```
impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.to_ascii_lowercase()
            .parse::<Square>()
            .map(Self::from_square)
            .map_err(|_| ParseCoordError::Notation(s.to_string()))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_square())
    }
}

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// An 8×8 grid of optional pieces.
///
/// No validation of piece counts is performed; move generation trusts
/// whatever placement it is given.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard starting position.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (col, role) in BACK_RANK.into_iter().enumerate() {
            board.cells[0][col] = Some(Piece {
                color: Color::Black,
                role,
            });
            board.cells[1][col] = Some(Color::Black.pawn());
            board.cells[6][col] = Some(Color::White.pawn());
            board.cells[7][col] = Some(Piece {
                color: Color::White,
                role,
            });
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.cells[coord.row as usize][coord.col as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.piece_at(coord).is_none()
    }

    /// True if `coord` holds a piece of the color opposing `mover`.
    #[inline]
    pub fn is_capturable(&self, coord: Coord, mover: Color) -> bool {
        self.piece_at(coord)
            .is_some_and(|piece| piece.color == mover.other())
    }

    pub fn set_piece_at(&mut self, coord: Coord, piece: Option<Piece>) {
        self.cells[coord.row as usize][coord.col as usize] = piece;
    }

    /// Moves whatever is on `from` to `to`, replacing the target and clearing the origin.
    pub fn relocate(&mut self, from: Coord, to: Coord) -> Option<Piece> {
        let moving = self.piece_at(from);
        let replaced = self.piece_at(to);
        self.set_piece_at(to, moving);
        self.set_piece_at(from, None);
        replaced
    }

    /// Squares occupied by `color`.
    pub fn by_color(&self, color: Color) -> Bitboard {
        Coord::all()
            .filter(|&coord| self.piece_at(coord).is_some_and(|p| p.color == color))
            .map(Coord::to_square)
            .collect()
    }

    /// Squares occupied by either side.
    pub fn occupied(&self) -> Bitboard {
        self.by_color(Color::White) | self.by_color(Color::Black)
    }

    pub fn to_shakmaty(&self) -> shakmaty::Board {
        let mut board = shakmaty::Board::empty();
        for coord in Coord::all() {
            if let Some(piece) = self.piece_at(coord) {
                board.set_piece_at(coord.to_square(), piece);
            }
        }
        board
    }

    pub fn from_shakmaty(board: &shakmaty::Board) -> Self {
        let mut out = Self::empty();
        for coord in Coord::all() {
            out.set_piece_at(coord, board.piece_at(coord.to_square()));
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

/// Rows from 0 to 7, one line each, using FEN piece letters.
impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', |piece| piece.char()))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Coord {
        Coord::new(row, col).expect("test coordinate out of range")
    }

    #[test]
    fn test_coord_creation() {
        assert!(Coord::new(0, 0).is_some());
        assert!(Coord::new(7, 7).is_some());
        assert!(Coord::new(8, 0).is_none());
        assert!(Coord::new(0, 8).is_none());
        assert!(Coord::new(255, 255).is_none());
    }

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(0, 0));
        assert!(in_bounds(7, 7));
        assert!(!in_bounds(-1, 0));
        assert!(!in_bounds(0, -1));
        assert!(!in_bounds(8, 3));
        assert!(!in_bounds(3, 8));
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(sq(6, 4).offset(-2, 0), Some(sq(4, 4)));
        assert_eq!(sq(0, 0).offset(-1, 0), None);
        assert_eq!(sq(7, 7).offset(0, 1), None);
        assert_eq!(sq(7, 1).offset(-2, -1), Some(sq(5, 0)));
        assert_eq!(sq(7, 0).offset(-2, -1), None);
    }

    #[test]
    fn test_coord_algebraic() {
        assert_eq!("e2".parse::<Coord>().unwrap(), sq(6, 4));
        assert_eq!("a8".parse::<Coord>().unwrap(), sq(0, 0));
        assert_eq!("h1".parse::<Coord>().unwrap(), sq(7, 7));
        assert_eq!("E4".parse::<Coord>(), "e4".parse::<Coord>());
        assert_eq!(sq(6, 4).to_string(), "e2");
        assert_eq!(sq(0, 7).to_string(), "h8");
    }

    #[test]
    fn test_coord_parse_invalid() {
        assert_eq!(
            "z9".parse::<Coord>(),
            Err(ParseCoordError::Notation("z9".to_string()))
        );
        assert!("".parse::<Coord>().is_err());
        assert!("e".parse::<Coord>().is_err());
        assert!("e22".parse::<Coord>().is_err());
    }

    #[test]
    fn test_coord_try_from_tuple() {
        assert_eq!(Coord::try_from((4, 4)), Ok(sq(4, 4)));
        assert_eq!(
            Coord::try_from((8, 1)),
            Err(ParseCoordError::OutOfRange { row: 8, col: 1 })
        );
    }

    #[test]
    fn test_square_conversion_matches_notation() {
        assert_eq!(sq(6, 4).to_square(), Square::E2);
        assert_eq!(sq(0, 0).to_square(), Square::A8);
        assert_eq!(Coord::from_square(Square::H1), sq(7, 7));
        for coord in Coord::all() {
            assert_eq!(Coord::from_square(coord.to_square()), coord);
        }
    }

    #[test]
    fn test_all_visits_every_square_once() {
        let all: Vec<Coord> = Coord::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], sq(0, 0));
        assert_eq!(all[63], sq(7, 7));
    }

    #[test]
    fn test_starting_layout() {
        let board = Board::starting();
        assert_eq!(
            board.piece_at(sq(7, 4)),
            Some(Piece {
                color: Color::White,
                role: Role::King
            })
        );
        assert_eq!(
            board.piece_at(sq(0, 3)),
            Some(Piece {
                color: Color::Black,
                role: Role::Queen
            })
        );
        assert_eq!(board.piece_at(sq(1, 5)), Some(Color::Black.pawn()));
        assert_eq!(board.piece_at(sq(6, 0)), Some(Color::White.pawn()));
        for row in 2..6 {
            for col in 0..8 {
                assert!(board.is_empty_at(sq(row, col)));
            }
        }
    }

    #[test]
    fn test_starting_layout_matches_shakmaty() {
        assert_eq!(Board::starting().to_shakmaty(), shakmaty::Board::new());
        assert_eq!(Board::from_shakmaty(&shakmaty::Board::new()), Board::starting());
    }

    #[test]
    fn test_occupancy_bitboards() {
        let board = Board::starting();
        assert_eq!(board.by_color(Color::White).count(), 16);
        assert_eq!(board.by_color(Color::Black).count(), 16);
        assert_eq!(board.occupied().count(), 32);
        assert!(board.occupied().contains(Square::E2));
        assert!(!board.occupied().contains(Square::E4));
    }

    #[test]
    fn test_is_capturable() {
        let board = Board::starting();
        assert!(board.is_capturable(sq(1, 0), Color::White));
        assert!(!board.is_capturable(sq(6, 0), Color::White));
        assert!(!board.is_capturable(sq(4, 4), Color::White));
        assert!(board.is_capturable(sq(6, 0), Color::Black));
    }

    #[test]
    fn test_relocate_clears_origin() {
        let mut board = Board::starting();

        let replaced = board.relocate(sq(6, 4), sq(4, 4));

        assert_eq!(replaced, None);
        assert!(board.is_empty_at(sq(6, 4)));
        assert_eq!(board.piece_at(sq(4, 4)), Some(Color::White.pawn()));
    }

    #[test]
    fn test_relocate_onto_piece_returns_replaced() {
        let mut board = Board::starting();

        let replaced = board.relocate(sq(7, 0), sq(0, 0));

        assert_eq!(
            replaced,
            Some(Piece {
                color: Color::Black,
                role: Role::Rook
            })
        );
        assert_eq!(board.occupied().count(), 31);
    }

    #[test]
    fn test_debug_renders_rows() {
        let rendered = format!("{:?}", Board::starting());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "rnbqkbnr");
        assert_eq!(lines[3], "........");
        assert_eq!(lines[7], "RNBQKBNR");
    }
}
