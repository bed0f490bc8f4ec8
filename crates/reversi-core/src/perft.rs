use crate::board::Board;
use crate::disc::Side;
use crate::move_list::MoveList;

/// Executes a perft run starting from the initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total node count the search visits from the initial position.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), Side::Black, depth)
}

/// Counts leaf nodes reachable from `board` with `side` to move.
///
/// A pass does not consume depth. A position where neither side can move
/// counts as a single leaf.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    let evaluation = board.evaluate();
    let move_list = MoveList::for_side(&evaluation, side);

    if move_list.is_empty() {
        if evaluation.has_moves(side.other()) {
            return perft(board, side.other(), depth);
        }
        return 1;
    }

    if depth <= 1 {
        return move_list.count() as u64;
    }

    let mut nodes = 0;
    for mv in move_list.iter() {
        let mut next = *board;
        let flipped = next.place_and_flip(mv.sq, side);
        debug_assert_eq!(flipped, Ok(mv.captures), "move list out of sync at {}", mv.sq);
        nodes += perft(&next, side.other(), depth - 1);
    }
    nodes
}
