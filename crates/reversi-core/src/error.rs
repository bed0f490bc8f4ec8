//! Error types for the Reversi engine.

use crate::square::Square;

/// A move or pass that the rules do not allow.
///
/// Returned before any mutation: the board and side to move are unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The target cell already holds a disc.
    #[error("Illegal move {0}: square is occupied")]
    Occupied(Square),
    /// Placing on the target cell would capture nothing.
    #[error("Illegal move {0}: no discs to flip")]
    NoCapture(Square),
    /// A pass was requested while a legal move exists.
    #[error("Cannot pass when legal moves are available")]
    PassWithLegalMoves,
    /// The game has already ended.
    #[error("The game is over")]
    GameOver,
}

/// Invalid player configuration, rejected before a game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Player side must be black (1) or white (2): {0}")]
    InvalidSide(i64),
    #[error("Player type must be human (0) or computer (1): {0}")]
    InvalidPlayerType(i64),
    #[error("Both players are assigned to {0}")]
    DuplicateSide(crate::disc::Side),
}

/// Failure to read a board from its 64-character text form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("Unexpected character '{0}' in board string")]
    InvalidChar(char),
    #[error("Board string must describe 64 squares, found {0}")]
    WrongLength(usize),
}
