//! Global constants

/// Number of squares along one edge of the board.
pub const BOARD_SIZE: usize = 8;

/// Number of squares on the Reversi board.
pub const BOARD_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Unit vectors `(dx, dy)` scanned when counting and flipping captures.
///
/// Evaluation and flipping walk the same table in the same order.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Positional bonus used by the weighted strategy, indexed `[y][x]`.
#[rustfmt::skip]
pub const POSITION_WEIGHT: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -20, 10,  5,  5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [ 10,  -2,  5,  1,  1,  5,  -2,  10],
    [  5,  -2,  1,  0,  0,  1,  -2,   5],
    [  5,  -2,  1,  0,  0,  1,  -2,   5],
    [ 10,  -2,  5,  1,  1,  5,  -2,  10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10,  5,  5, 10, -20, 100],
];
