//! Reversi board representation as an 8x8 grid of discs.

use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES, DIRECTIONS};
use crate::disc::{Disc, Side};
use crate::error::{MoveError, ParseBoardError};
use crate::move_table::{Evaluation, MoveTable};
use crate::square::{self, Square};

/// Represents a Reversi board.
///
/// Cells are stored row-major and indexed `[y][x]`, where `x` is the column
/// (file A-H) and `y` the row (rank 1-8). Legal-move data is never cached on
/// the board; [`Board::evaluate`] recomputes it from the grid on every call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Disc; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    /// Creates a board with the starting position.
    ///
    /// The initial position has:
    /// - Black discs on D4 and E5
    /// - White discs on D5 and E4
    fn default() -> Self {
        let mut board = Board::empty();
        board.set(Square::D4, Disc::Black);
        board.set(Square::E5, Disc::Black);
        board.set(Square::D5, Disc::White);
        board.set(Square::E4, Disc::White);
        board
    }
}

impl Board {
    /// Creates a new `Board` with the initial setup.
    pub fn new() -> Board {
        Default::default()
    }

    /// Creates a board with no discs.
    pub fn empty() -> Board {
        Board {
            cells: [[Disc::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string lists the 64 squares from A1 to H8. Whitespace is ignored,
    /// so the board may be written as eight lines of eight characters.
    /// Characters are interpreted as:
    /// - `X` (or `*`) for Black
    /// - `O` for White
    /// - `-` (or `.`) for empty squares
    ///
    /// # Errors
    ///
    /// Returns [`ParseBoardError`] on an unknown character or when the string
    /// does not describe exactly 64 squares.
    pub fn from_string(board_string: &str) -> Result<Board, ParseBoardError> {
        let mut board = Board::empty();
        let mut n = 0;
        for c in board_string.chars().filter(|c| !c.is_whitespace()) {
            let disc = Disc::from_char(c).ok_or(ParseBoardError::InvalidChar(c))?;
            if let Some(sq) = Square::from_usize(n) {
                board.set(sq, disc);
            }
            n += 1;
        }
        if n != BOARD_SQUARES {
            return Err(ParseBoardError::WrongLength(n));
        }
        Ok(board)
    }

    #[inline]
    fn set(&mut self, sq: Square, disc: Disc) {
        self.cells[sq.y()][sq.x()] = disc;
    }

    /// Gets the disc at a specific square.
    #[inline]
    pub fn disc_at(&self, sq: Square) -> Disc {
        self.cells[sq.y()][sq.x()]
    }

    /// Gets the disc at `(x, y)`, or `None` when off the board.
    #[inline]
    pub fn disc_at_xy(&self, x: i32, y: i32) -> Option<Disc> {
        Square::from_xy(x, y).map(|sq| self.disc_at(sq))
    }

    /// Returns `true` iff `(x, y)` lies on the board.
    #[inline]
    pub fn is_on_board(x: i32, y: i32) -> bool {
        square::is_on_board(x, y)
    }

    /// Checks if a given square is empty.
    #[inline]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        self.disc_at(sq) == Disc::Empty
    }

    /// Length of the opposing run starting next to `sq` along `(dx, dy)`
    /// that is closed by a disc of `side`. Zero if the run is empty, runs
    /// off the board, or ends on an empty cell.
    fn bracketed_run(&self, sq: Square, side: Side, dx: i32, dy: i32) -> u32 {
        let opponent = side.other().disc();
        let mut run = 0;
        let mut cursor = sq.offset(dx, dy);
        while let Some(cur) = cursor {
            let disc = self.disc_at(cur);
            if disc == opponent {
                run += 1;
                cursor = cur.offset(dx, dy);
            } else if disc == side.disc() {
                return run;
            } else {
                return 0;
            }
        }
        0
    }

    /// Number of opposing discs captured if `side` placed a disc at `(x, y)`.
    ///
    /// Returns 0 for an occupied or off-board cell. A positive value means
    /// the move is legal.
    pub fn capture_count(&self, x: i32, y: i32, side: Side) -> u32 {
        Square::from_xy(x, y).map_or(0, |sq| self.captures_at(sq, side))
    }

    /// Square-addressed form of [`Board::capture_count`].
    pub fn captures_at(&self, sq: Square, side: Side) -> u32 {
        if !self.is_square_empty(sq) {
            return 0;
        }
        DIRECTIONS
            .iter()
            .map(|&(dx, dy)| self.bracketed_run(sq, side, dx, dy))
            .sum()
    }

    /// Computes the capture tables and legal-move counts for both sides.
    pub fn evaluate(&self) -> Evaluation {
        let mut black = MoveTable::default();
        let mut white = MoveTable::default();
        for sq in Square::iter() {
            black.set(sq, self.captures_at(sq, Side::Black));
            white.set(sq, self.captures_at(sq, Side::White));
        }
        let evaluation = Evaluation::new(black, white);
        tracing::trace!(
            black_moves = evaluation.count(Side::Black),
            white_moves = evaluation.count(Side::White),
            "evaluated board"
        );
        evaluation
    }

    /// Places a disc for `side` on `sq` and flips every bracketed run.
    ///
    /// # Returns
    ///
    /// The number of discs flipped.
    ///
    /// # Errors
    ///
    /// [`MoveError::Occupied`] or [`MoveError::NoCapture`] when the move is
    /// illegal. The board is left untouched in that case.
    pub fn place_and_flip(&mut self, sq: Square, side: Side) -> Result<u32, MoveError> {
        if !self.is_square_empty(sq) {
            return Err(MoveError::Occupied(sq));
        }

        let runs = DIRECTIONS.map(|(dx, dy)| self.bracketed_run(sq, side, dx, dy));
        let flipped: u32 = runs.iter().sum();
        if flipped == 0 {
            return Err(MoveError::NoCapture(sq));
        }

        self.set(sq, side.disc());
        for (&(dx, dy), &run) in DIRECTIONS.iter().zip(runs.iter()) {
            let mut cur = sq;
            for _ in 0..run {
                // The run was just measured on this board, so every step is in bounds.
                let Some(next) = cur.offset(dx, dy) else {
                    break;
                };
                self.set(next, side.disc());
                cur = next;
            }
        }

        tracing::debug!(%sq, %side, flipped, "placed disc");
        Ok(flipped)
    }

    /// Total number of cells holding `disc`.
    pub fn count_discs(&self, disc: Disc) -> u32 {
        self.cells.iter().flatten().filter(|&&d| d == disc).count() as u32
    }

    /// Returns the number of empty squares on the board.
    pub fn empty_count(&self) -> u32 {
        self.count_discs(Disc::Empty)
    }

    /// Returns `true` once all 64 cells hold a disc.
    pub fn is_full(&self) -> bool {
        self.count_discs(Disc::Black) + self.count_discs(Disc::White) == BOARD_SQUARES as u32
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    /// Formats the board as eight lines of `X`, `O` and `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for disc in row {
                write!(f, "{}", disc.to_char())?;
            }
        }
        Ok(())
    }
}
