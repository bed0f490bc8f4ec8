use std::fmt;
use std::str::FromStr;

use crate::constants::{BOARD_SIZE, BOARD_SQUARES};

/// Represents a square on a reversi board, ranging from A1 to H8.
///
/// Files (columns, `x`) are labeled A-H and ranks (rows, `y`) are labeled
/// 1-8. The board is indexed as follows:
///
/// ```text
///   A B C D E F G H
/// 1 00 01 02 03 04 05 06 07
/// 2 08 09 10 11 12 13 14 15
/// 3 16 17 18 19 20 21 22 23
/// 4 24 25 26 27 28 29 30 31
/// 5 32 33 34 35 36 37 38 39
/// 6 40 41 42 43 44 45 46 47
/// 7 48 49 50 51 52 53 54 55
/// 8 56 57 58 59 60 61 62 63
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

use Square::*;

#[rustfmt::skip]
const ALL: [Square; BOARD_SQUARES] = [
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
];

/// Returns `true` iff `(x, y)` lies on the board.
#[inline]
pub fn is_on_board(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
}

impl Square {
    /// Converts the `Square` into a `usize` index (0-63).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Safely converts a `usize` value into a `Square`.
    ///
    /// # Returns
    /// `Some(Square)` if the index is in 0-63, `None` otherwise.
    #[inline]
    pub fn from_usize(index: usize) -> Option<Square> {
        ALL.get(index).copied()
    }

    /// Creates a `Square` from board coordinates.
    ///
    /// # Arguments
    ///
    /// * `x` - Column, 0 is file A.
    /// * `y` - Row, 0 is rank 1.
    ///
    /// # Returns
    ///
    /// `None` when `(x, y)` is off the board.
    #[inline]
    pub fn from_xy(x: i32, y: i32) -> Option<Square> {
        if !is_on_board(x, y) {
            return None;
        }
        Some(ALL[y as usize * BOARD_SIZE + x as usize])
    }

    /// Column (file) index, 0 for A through 7 for H.
    #[inline]
    pub fn x(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Row (rank) index, 0 for rank 1 through 7 for rank 8.
    #[inline]
    pub fn y(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Steps one cell along `(dx, dy)`, or `None` past the edge.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Square> {
        Square::from_xy(self.x() as i32 + dx, self.y() as i32 + dy)
    }

    /// Returns an iterator over all 64 squares from A1 to H8.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        ALL.into_iter()
    }
}

/// Error type for square-related operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    #[error("Invalid square format: must be 2 characters (e.g., 'a1')")]
    InvalidFormat,
    /// Invalid file character (must be a-h or A-H)
    #[error("Invalid file '{0}': must be a-h or A-H")]
    InvalidFile(char),
    /// Invalid rank character (must be 1-8)
    #[error("Invalid rank '{0}': must be 1-8")]
    InvalidRank(char),
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation such as `"d3"`. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let file = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        let x = (file as u8 - b'a') as i32;
        let y = (rank_char as u8 - b'1') as i32;
        Square::from_xy(x, y).ok_or(SquareError::InvalidFormat)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (self.x() as u8 + b'a') as char;
        let rank = (self.y() as u8 + b'1') as char;
        write!(f, "{file}{rank}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index() {
        assert_eq!(Square::A1.index(), 0);
        assert_eq!(Square::H1.index(), 7);
        assert_eq!(Square::A2.index(), 8);
        assert_eq!(Square::D4.index(), 27);
        assert_eq!(Square::E5.index(), 36);
        assert_eq!(Square::H8.index(), 63);
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(Square::from_usize(0), Some(Square::A1));
        assert_eq!(Square::from_usize(63), Some(Square::H8));
        assert_eq!(Square::from_usize(64), None);
    }

    #[test]
    fn test_xy() {
        assert_eq!(Square::D5.x(), 3);
        assert_eq!(Square::D5.y(), 4);
        assert_eq!(Square::from_xy(4, 3), Some(Square::E4));
        assert_eq!(Square::from_xy(-1, 0), None);
        assert_eq!(Square::from_xy(0, 8), None);
    }

    #[test]
    fn test_is_on_board() {
        assert!(is_on_board(0, 0));
        assert!(is_on_board(7, 7));
        assert!(!is_on_board(8, 0));
        assert!(!is_on_board(0, -1));
    }

    #[test]
    fn test_offset() {
        assert_eq!(Square::A1.offset(1, 1), Some(Square::B2));
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
        assert_eq!(Square::D4.offset(-1, -1), Some(Square::C3));
    }

    #[test]
    fn test_iter() {
        let squares: Vec<Square> = Square::iter().collect();
        assert_eq!(squares.len(), 64);
        assert!(squares.iter().enumerate().all(|(i, sq)| sq.index() == i));
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!(Square::from_str("a1").unwrap(), Square::A1);
        assert_eq!(Square::from_str("H8").unwrap(), Square::H8);
        assert_eq!(Square::from_str(" d3 ").unwrap(), Square::D3);
        assert_eq!(Square::from_str("").unwrap_err(), SquareError::InvalidFormat);
        assert_eq!(Square::from_str("abc").unwrap_err(), SquareError::InvalidFormat);
        assert_eq!(Square::from_str("z1").unwrap_err(), SquareError::InvalidFile('z'));
        assert_eq!(Square::from_str("a0").unwrap_err(), SquareError::InvalidRank('0'));
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::A1.to_string(), "a1");
        assert_eq!(Square::E6.to_string(), "e6");
        for sq in Square::iter() {
            assert_eq!(sq.to_string().parse::<Square>(), Ok(sq));
        }
    }
}
