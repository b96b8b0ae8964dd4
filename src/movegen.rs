use shakmaty::{Color, Piece, Role};

use crate::board::{Board, Coord};
use crate::direction::{Direction, DirectionKind, SLIDER_RANGE, cast_ray};

/// Knight jumps as `(row, col)` offsets.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (2, 1),
    (-2, -1),
    (-2, 1),
    (2, -1),
];

/// Row a pawn of `color` starts on.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row step of a pawn of `color`.
#[inline]
pub const fn pawn_forward(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Pseudo-legal destination generator for one side on a borrowed board.
///
/// Captures are judged relative to `mover`: squares holding a `mover` piece
/// block, squares holding the other color may be taken. Check, castling,
/// en passant and promotion are not considered.
#[derive(Debug, Clone, Copy)]
pub struct MoveGenerator<'a> {
    board: &'a Board,
    mover: Color,
}

impl<'a> MoveGenerator<'a> {
    #[inline]
    pub fn new(board: &'a Board, mover: Color) -> Self {
        Self { board, mover }
    }

    /// Destinations for `piece` standing on `origin`. An empty square has none.
    pub fn legal_moves(&self, piece: Option<Piece>, origin: Coord) -> Vec<Coord> {
        let Some(piece) = piece else {
            return Vec::new();
        };
        let moves = match piece.role {
            Role::Pawn => self.pawn_moves(origin),
            Role::Knight => self.knight_moves(origin),
            Role::Bishop => self.bishop_moves(origin),
            Role::Rook => self.rook_moves(origin),
            Role::Queen => self.queen_moves(origin),
            Role::King => self.king_moves(origin),
        };
        log::trace!("{:?} on {origin}: {} destinations", piece, moves.len());
        moves
    }

    /// Destinations for whatever stands on `origin`.
    #[inline]
    pub fn moves_from(&self, origin: Coord) -> Vec<Coord> {
        self.legal_moves(self.board.piece_at(origin), origin)
    }

    fn rays(
        &self,
        origin: Coord,
        directions: impl Iterator<Item = Direction>,
        max_steps: usize,
    ) -> Vec<Coord> {
        directions
            .flat_map(|direction| cast_ray(self.board, self.mover, origin, direction, max_steps))
            .collect()
    }

    pub fn rook_moves(&self, origin: Coord) -> Vec<Coord> {
        self.rays(origin, Direction::of_kind(DirectionKind::Orthogonal), SLIDER_RANGE)
    }

    pub fn bishop_moves(&self, origin: Coord) -> Vec<Coord> {
        self.rays(origin, Direction::of_kind(DirectionKind::Diagonal), SLIDER_RANGE)
    }

    pub fn queen_moves(&self, origin: Coord) -> Vec<Coord> {
        let mut moves = self.rook_moves(origin);
        moves.extend(self.bishop_moves(origin));
        moves
    }

    pub fn king_moves(&self, origin: Coord) -> Vec<Coord> {
        self.rays(origin, Direction::ALL.into_iter(), 1)
    }

    pub fn knight_moves(&self, origin: Coord) -> Vec<Coord> {
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| origin.offset(d_row, d_col))
            .filter(|&target| {
                self.board.is_empty_at(target) || self.board.is_capturable(target, self.mover)
            })
            .collect()
    }

    /// Pushes and diagonal captures. Direction and start row follow the mover.
    pub fn pawn_moves(&self, origin: Coord) -> Vec<Coord> {
        let forward = pawn_forward(self.mover);
        let mut moves = Vec::new();

        // The double push is only reachable through a clear single push.
        if let Some(one) = origin.offset(forward, 0)
            && self.board.is_empty_at(one)
        {
            moves.push(one);
            if origin.row() == pawn_start_row(self.mover)
                && let Some(two) = one.offset(forward, 0)
                && self.board.is_empty_at(two)
            {
                moves.push(two);
            }
        }

        for d_col in [1, -1] {
            if let Some(target) = origin.offset(forward, d_col)
                && self.board.is_capturable(target, self.mover)
            {
                moves.push(target);
            }
        }

        moves
    }
}
