use std::fmt;

/// Represents the content of one cell.
///
/// The `Disc` enum has three variants:
///
/// * `Empty` - No disc has been placed on the cell.
/// * `Black` - A black disc (side A, moves first).
/// * `White` - A white disc (side B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Disc {
    #[default]
    Empty,
    Black,
    White,
}

impl Disc {
    /// Converts the disc to its corresponding character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Disc::Empty`
    /// * `'X'` for `Disc::Black`
    /// * `'O'` for `Disc::White`
    pub fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Black => 'X',
            Disc::White => 'O',
        }
    }

    /// Parses the character written by [`Disc::to_char`].
    pub fn from_char(c: char) -> Option<Disc> {
        match c {
            '-' | '.' => Some(Disc::Empty),
            'X' | 'x' | '*' => Some(Disc::Black),
            'O' | 'o' => Some(Disc::White),
            _ => None,
        }
    }

    /// Returns the side owning this disc, or `None` for an empty cell.
    pub fn side(self) -> Option<Side> {
        match self {
            Disc::Black => Some(Side::Black),
            Disc::White => Some(Side::White),
            Disc::Empty => None,
        }
    }
}

/// The side to move. A placed disc always belongs to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Returns the opposing side.
    #[inline]
    pub fn other(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Returns the disc this side places.
    #[inline]
    pub fn disc(self) -> Disc {
        match self {
            Side::Black => Disc::Black,
            Side::White => Disc::White,
        }
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Side::Black => "Black",
            Side::White => "White",
        }
    }
}

impl From<Side> for Disc {
    fn from(side: Side) -> Self {
        side.disc()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
