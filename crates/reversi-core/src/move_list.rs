//! Legal move lists with per-move scores used by the strategies.

use arrayvec::ArrayVec;
use std::slice;

use crate::constants::BOARD_SQUARES;
use crate::disc::Side;
use crate::move_table::{Evaluation, MoveTable};
use crate::square::Square;

/// Upper bound on legal moves for one side.
const MAX_MOVES: usize = BOARD_SQUARES;

/// Represents a single legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    /// The square where the disc is placed.
    pub sq: Square,
    /// Number of opposing discs flipped by this move.
    pub captures: u32,
    /// Strategy score (higher = better).
    pub value: i32,
}

impl Move {
    /// Creates a new move with the specified square and capture count.
    #[inline]
    pub fn new(sq: Square, captures: u32) -> Move {
        debug_assert!(captures > 0, "Move must flip at least one disc");
        Move {
            sq,
            captures,
            value: 0,
        }
    }
}

/// Container for all legal moves of one side, in A1-to-H8 order.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: ArrayVec<Move, MAX_MOVES>,
}

impl MoveList {
    /// Collects the legal moves recorded in a capture table.
    pub fn new(table: &MoveTable) -> MoveList {
        let moves = table
            .iter()
            .map(|(sq, captures)| Move::new(sq, captures))
            .collect();
        MoveList { moves }
    }

    /// Collects the legal moves of `side` from an evaluation.
    #[inline]
    pub fn for_side(evaluation: &Evaluation, side: Side) -> MoveList {
        Self::new(evaluation.table(side))
    }

    /// Returns the number of legal moves.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` when there is no legal move, i.e. the side must pass.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns an iterator over all moves in the list.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Assigns `value` to every move with the given scoring function.
    pub fn score_with(&mut self, score: impl Fn(&Move) -> i32) {
        for mv in self.moves.iter_mut() {
            mv.value = score(mv);
        }
    }

    /// Returns every move sharing the highest value, in list order.
    pub fn best_moves(&self) -> ArrayVec<Move, MAX_MOVES> {
        let Some(best) = self.moves.iter().map(|mv| mv.value).max() else {
            return ArrayVec::new();
        };
        self.moves
            .iter()
            .filter(|mv| mv.value == best)
            .copied()
            .collect()
    }
}
