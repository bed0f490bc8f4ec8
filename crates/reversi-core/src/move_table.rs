//! Legal-move tables derived from a board.
//!
//! A table is a snapshot: it is only valid for the board it was computed
//! from. Any placement invalidates every table obtained earlier, so callers
//! ask [`Board::evaluate`](crate::board::Board::evaluate) again after each
//! mutation.

use crate::constants::BOARD_SIZE;
use crate::disc::Side;
use crate::square::Square;

/// Capture counts for one side, indexed `[y][x]`.
///
/// Each entry is the number of opposing discs that a disc placed on that
/// cell would flip. Zero marks an illegal cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveTable {
    captures: [[u32; BOARD_SIZE]; BOARD_SIZE],
}

impl MoveTable {
    pub(crate) fn set(&mut self, sq: Square, count: u32) {
        self.captures[sq.y()][sq.x()] = count;
    }

    /// Number of discs captured by playing on `sq`.
    #[inline]
    pub fn get(&self, sq: Square) -> u32 {
        self.captures[sq.y()][sq.x()]
    }

    /// Returns `true` if `sq` is a legal move.
    #[inline]
    pub fn is_legal(&self, sq: Square) -> bool {
        self.get(sq) > 0
    }

    /// Number of legal moves.
    pub fn legal_count(&self) -> usize {
        self.captures.iter().flatten().filter(|&&c| c > 0).count()
    }

    /// Iterates legal moves as `(square, captures)` from A1 to H8.
    pub fn iter(&self) -> impl Iterator<Item = (Square, u32)> + '_ {
        Square::iter()
            .map(|sq| (sq, self.get(sq)))
            .filter(|&(_, captures)| captures > 0)
    }
}

/// Result of evaluating a board for both sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    black: MoveTable,
    white: MoveTable,
    black_count: usize,
    white_count: usize,
}

impl Evaluation {
    pub(crate) fn new(black: MoveTable, white: MoveTable) -> Self {
        Evaluation {
            black_count: black.legal_count(),
            white_count: white.legal_count(),
            black,
            white,
        }
    }

    /// The capture table of `side`.
    #[inline]
    pub fn table(&self, side: Side) -> &MoveTable {
        match side {
            Side::Black => &self.black,
            Side::White => &self.white,
        }
    }

    /// Number of legal moves for `side`.
    #[inline]
    pub fn count(&self, side: Side) -> usize {
        match side {
            Side::Black => self.black_count,
            Side::White => self.white_count,
        }
    }

    /// Returns `true` if `side` has at least one legal move.
    #[inline]
    pub fn has_moves(&self, side: Side) -> bool {
        self.count(side) > 0
    }

    /// Returns `true` when neither side can move.
    #[inline]
    pub fn no_moves_for_both(&self) -> bool {
        self.black_count == 0 && self.white_count == 0
    }
}
