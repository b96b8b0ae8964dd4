use shakmaty::Color;

use crate::board::{BOARD_SIZE, Board, Coord};

/// Whether a direction moves like a rook or like a bishop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionKind {
    Orthogonal,
    Diagonal,
}

/// One of the eight unit steps on the board.
///
/// "Up" is towards row 0 (Black's back rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Directions tagged with `kind`, in [`Direction::ALL`] order.
    pub fn of_kind(kind: DirectionKind) -> impl Iterator<Item = Direction> {
        Self::ALL
            .into_iter()
            .filter(move |direction| direction.kind() == kind)
    }

    /// The `(row, col)` step of this direction.
    #[inline]
    pub const fn step(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    #[inline]
    pub const fn kind(self) -> DirectionKind {
        match self {
            Direction::Up | Direction::Down | Direction::Left | Direction::Right => {
                DirectionKind::Orthogonal
            }
            _ => DirectionKind::Diagonal,
        }
    }
}

/// Longest ray a sliding piece can travel.
pub const SLIDER_RANGE: usize = BOARD_SIZE as usize;

/// Walks from `origin` in `direction`, collecting the squares `mover` may stop on.
///
/// Empty squares are collected and the walk continues. The first occupied
/// square ends the walk; it is collected only if it holds an opposing piece.
/// At most `max_steps` squares are visited, and the walk ends at the edge.
pub fn cast_ray(
    board: &Board,
    mover: Color,
    origin: Coord,
    direction: Direction,
    max_steps: usize,
) -> Vec<Coord> {
    let (d_row, d_col) = direction.step();
    let mut stops = Vec::new();
    let mut current = origin;

    for _ in 0..max_steps {
        let Some(next) = current.offset(d_row, d_col) else {
            break;
        };
        match board.piece_at(next) {
            None => stops.push(next),
            Some(piece) => {
                if piece.color != mover {
                    stops.push(next);
                }
                break;
            }
        }
        current = next;
    }

    stops
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Piece;
    use test_case::test_case;

    fn sq(row: u8, col: u8) -> Coord {
        Coord::new(row, col).expect("test coordinate out of range")
    }

    #[test]
    fn test_kinds_split_directions_in_half() {
        let orthogonal: Vec<Direction> = Direction::of_kind(DirectionKind::Orthogonal).collect();
        let diagonal: Vec<Direction> = Direction::of_kind(DirectionKind::Diagonal).collect();

        assert_eq!(
            orthogonal,
            vec![
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right
            ]
        );
        assert_eq!(
            diagonal,
            vec![
                Direction::UpLeft,
                Direction::UpRight,
                Direction::DownLeft,
                Direction::DownRight
            ]
        );
    }

    #[test]
    fn test_steps_are_unit_vectors() {
        for direction in Direction::ALL {
            let (d_row, d_col) = direction.step();
            assert!(d_row.abs() <= 1 && d_col.abs() <= 1);
            assert_ne!((d_row, d_col), (0, 0));
            match direction.kind() {
                DirectionKind::Orthogonal => assert_eq!(d_row.abs() + d_col.abs(), 1),
                DirectionKind::Diagonal => assert_eq!(d_row.abs() + d_col.abs(), 2),
            }
        }
    }

    #[test_case(Direction::Up, 4; "up")]
    #[test_case(Direction::Down, 3; "down")]
    #[test_case(Direction::Left, 4; "left")]
    #[test_case(Direction::Right, 3; "right")]
    #[test_case(Direction::UpLeft, 4; "up left")]
    #[test_case(Direction::DownRight, 3; "down right")]
    fn test_ray_on_empty_board_runs_to_edge(direction: Direction, expected: usize) {
        let board = Board::empty();

        let stops = cast_ray(&board, Color::White, sq(4, 4), direction, SLIDER_RANGE);

        assert_eq!(stops.len(), expected);
    }

    #[test]
    fn test_ray_respects_max_steps() {
        let board = Board::empty();

        let stops = cast_ray(&board, Color::White, sq(4, 4), Direction::Up, 1);

        assert_eq!(stops, vec![sq(3, 4)]);
    }

    #[test]
    fn test_ray_from_edge_is_empty() {
        let board = Board::empty();

        assert!(cast_ray(&board, Color::White, sq(0, 3), Direction::Up, SLIDER_RANGE).is_empty());
        assert!(
            cast_ray(&board, Color::Black, sq(7, 7), Direction::DownRight, SLIDER_RANGE)
                .is_empty()
        );
    }

    #[test]
    fn test_ray_stops_before_own_piece() {
        let mut board = Board::empty();
        board.set_piece_at(sq(1, 4), Some(Color::White.pawn()));

        let stops = cast_ray(&board, Color::White, sq(4, 4), Direction::Up, SLIDER_RANGE);

        assert_eq!(stops, vec![sq(3, 4), sq(2, 4)]);
    }

    #[test]
    fn test_ray_includes_capture_then_stops() {
        let mut board = Board::empty();
        board.set_piece_at(sq(2, 4), Some(Color::Black.knight()));
        board.set_piece_at(sq(1, 4), Some(Color::Black.rook()));

        let stops = cast_ray(&board, Color::White, sq(4, 4), Direction::Up, SLIDER_RANGE);

        assert_eq!(stops, vec![sq(3, 4), sq(2, 4)]);
    }

    #[test]
    fn test_ray_capture_depends_on_mover() {
        let mut board = Board::empty();
        let piece = Piece {
            color: Color::Black,
            role: shakmaty::Role::Bishop,
        };
        board.set_piece_at(sq(3, 3), Some(piece));

        let white = cast_ray(&board, Color::White, sq(4, 4), Direction::UpLeft, SLIDER_RANGE);
        let black = cast_ray(&board, Color::Black, sq(4, 4), Direction::UpLeft, SLIDER_RANGE);

        assert_eq!(white, vec![sq(3, 3)]);
        assert!(black.is_empty());
    }
}
