//! Game state management for Reversi.
//!
//! This module provides the `GameState` struct which drives a game turn by
//! turn: it validates and applies moves, handles passes, detects the end of
//! the game and reports the result.

use std::cmp::Ordering;

use crate::board::Board;
use crate::disc::{Disc, Side};
use crate::error::MoveError;
use crate::move_list::MoveList;
use crate::move_table::Evaluation;
use crate::random::RandomSource;
use crate::square::Square;
use crate::strategy::{self, Strategy};

/// Final outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The side holding strictly more discs.
    Win(Side),
    Draw,
}

/// What happened during one call to [`GameState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A disc was placed on the square and `flipped` discs changed owner.
    Played { sq: Square, flipped: u32 },
    /// The side to move had no legal move.
    Passed,
    /// Nothing to do, the game had already ended.
    GameOver,
}

/// Represents the state of a Reversi game.
///
/// Handles move execution, passing, move history tracking, and undo.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current board position.
    board: Board,
    /// Which player's turn it is to move.
    side_to_move: Side,
    /// Move history: (move, board_before_move, side_to_move_before).
    /// None for move indicates a pass.
    history: Vec<(Option<Square>, Board, Side)>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the initial position with Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Side::Black)
    }

    /// Creates a new game state from an existing board position.
    ///
    /// # Arguments
    ///
    /// * `board` - The board position to start from
    /// * `side_to_move` - Which player moves next
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Evaluates the current board for both sides.
    pub fn evaluation(&self) -> Evaluation {
        self.board.evaluate()
    }

    /// Returns the legal moves of the side to move in A1-to-H8 order.
    pub fn legal_moves(&self) -> MoveList {
        MoveList::for_side(&self.evaluation(), self.side_to_move)
    }

    /// Checks if `sq` is a legal move for the side to move.
    pub fn is_legal_move(&self, sq: Square) -> bool {
        self.board.captures_at(sq, self.side_to_move) > 0
    }

    /// Returns `true` when the side to move has no legal move.
    pub fn must_pass(&self) -> bool {
        !self.evaluation().has_moves(self.side_to_move)
    }

    /// Places a disc for the side to move and hands the turn over.
    ///
    /// # Returns
    ///
    /// The number of discs flipped.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has ended, otherwise the error
    /// from [`Board::place_and_flip`]. The state is unchanged on error.
    pub fn play(&mut self, sq: Square) -> Result<u32, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let before = self.board;
        let flipped = self.board.place_and_flip(sq, self.side_to_move)?;
        self.history.push((Some(sq), before, self.side_to_move));
        self.side_to_move = self.side_to_move.other();
        Ok(flipped)
    }

    /// Passes the turn without placing a disc.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has ended, or
    /// [`MoveError::PassWithLegalMoves`] when the side to move can still play.
    pub fn pass(&mut self) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if !self.must_pass() {
            return Err(MoveError::PassWithLegalMoves);
        }

        self.handle_pass();
        Ok(())
    }

    /// Internal method to handle a pass move.
    fn handle_pass(&mut self) {
        self.history.push((None, self.board, self.side_to_move));
        self.side_to_move = self.side_to_move.other();
    }

    /// Plays one computer turn for the side to move.
    ///
    /// Passes when there is no legal move, otherwise plays the square picked
    /// by `strategy`.
    ///
    /// # Errors
    ///
    /// Propagates a [`MoveError`] from [`GameState::play`]; strategies only
    /// pick legal squares, so this does not happen in practice.
    pub fn advance<R>(&mut self, strategy: Strategy, rng: &mut R) -> Result<TurnOutcome, MoveError>
    where
        R: RandomSource + ?Sized,
    {
        if self.is_game_over() {
            return Ok(TurnOutcome::GameOver);
        }

        let evaluation = self.evaluation();
        match strategy::choose_move(&evaluation, self.side_to_move, strategy, rng) {
            Some(sq) => {
                let flipped = self.play(sq)?;
                Ok(TurnOutcome::Played { sq, flipped })
            }
            None => {
                self.handle_pass();
                Ok(TurnOutcome::Passed)
            }
        }
    }

    /// Checks if the game has ended.
    ///
    /// A game ends when the board holds 64 discs or neither side has a
    /// legal move.
    pub fn is_game_over(&self) -> bool {
        self.board.is_full() || self.evaluation().no_moves_for_both()
    }

    /// Returns the disc count for both players as `(black, white)`.
    pub fn score(&self) -> (u32, u32) {
        (
            self.board.count_discs(Disc::Black),
            self.board.count_discs(Disc::White),
        )
    }

    /// Returns the outcome once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }
        let (black, white) = self.score();
        Some(match black.cmp(&white) {
            Ordering::Greater => GameResult::Win(Side::Black),
            Ordering::Less => GameResult::Win(Side::White),
            Ordering::Equal => GameResult::Draw,
        })
    }

    /// Returns the last move played.
    ///
    /// `None` if the last turn was a pass or no moves have been played yet.
    pub fn last_move(&self) -> Option<Square> {
        self.history.last().and_then(|(sq, _, _)| *sq)
    }

    /// Returns the move history as (move, board_before_move, side_to_move_before).
    /// `None` for the move indicates a pass.
    pub fn move_history(&self) -> &[(Option<Square>, Board, Side)] {
        &self.history
    }

    /// Undoes the last move or pass.
    ///
    /// # Returns
    ///
    /// `true` if a turn was undone, `false` if the history is empty
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((_, prev_board, prev_side)) => {
                self.board = prev_board;
                self.side_to_move = prev_side;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngSource, SequenceSource};

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.side_to_move(), Side::Black);
        assert!(!game.is_game_over());
        assert!(!game.must_pass());
        assert_eq!(game.score(), (2, 2));
        assert_eq!(game.result(), None);
        assert_eq!(game.legal_moves().count(), 4);
    }

    #[test]
    fn test_play() {
        let mut game = GameState::new();
        assert_eq!(game.play(Square::E3), Ok(1));
        assert_eq!(game.side_to_move(), Side::White);
        assert_eq!(game.score(), (4, 1));
    }

    #[test]
    fn test_is_legal_move_follows_side_to_move() {
        let mut game = GameState::new();
        assert!(game.is_legal_move(Square::E3));
        assert!(!game.is_legal_move(Square::D3));
        assert!(!game.is_legal_move(Square::D4));

        game.play(Square::E3).unwrap();
        assert!(!game.is_legal_move(Square::E3));
        for sq in [Square::D3, Square::F3, Square::F5] {
            assert!(game.is_legal_move(sq), "{sq}");
        }
        let legal: Vec<Square> = game.legal_moves().iter().map(|mv| mv.sq).collect();
        assert_eq!(legal, vec![Square::D3, Square::F3, Square::F5]);
    }

    #[test]
    fn test_illegal_move_keeps_turn() {
        let mut game = GameState::new();
        assert_eq!(game.play(Square::A1), Err(MoveError::NoCapture(Square::A1)));
        assert_eq!(game.play(Square::D4), Err(MoveError::Occupied(Square::D4)));
        assert_eq!(game.side_to_move(), Side::Black);
        assert_eq!(*game.board(), Board::new());
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn test_pass_rejected_with_legal_moves() {
        let mut game = GameState::new();
        assert_eq!(game.pass(), Err(MoveError::PassWithLegalMoves));
        assert_eq!(game.side_to_move(), Side::Black);
    }

    #[test]
    fn test_pass() {
        // White has no move, Black can still play h8.
        let board = Board::from_string(
            "XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXXX\
             XXXXXXX-\
             XXXXXXO-",
        )
        .unwrap();
        let mut game = GameState::from_board(board, Side::White);
        assert!(game.must_pass());
        assert!(!game.is_game_over());

        let mut rng = SequenceSource::new([0]);
        assert_eq!(
            strategy::choose_move(&game.evaluation(), Side::White, Strategy::Greedy, &mut rng),
            None
        );

        assert_eq!(game.pass(), Ok(()));
        assert_eq!(game.side_to_move(), Side::Black);
        assert_eq!(game.last_move(), None);
        assert_eq!(game.play(Square::H8), Ok(1));
    }

    #[test]
    fn test_game_over_when_neither_side_can_move() {
        // Only black discs remain: nobody can capture anything.
        let board = Board::from_string(&format!("{}{}", "X".repeat(10), "-".repeat(54))).unwrap();
        let mut game = GameState::from_board(board, Side::White);
        assert!(game.is_game_over());
        assert_eq!(game.result(), Some(GameResult::Win(Side::Black)));
        assert_eq!(game.play(Square::H8), Err(MoveError::GameOver));
        assert_eq!(game.pass(), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_board_result() {
        let draw = Board::from_string(&"XO".repeat(32)).unwrap();
        let game = GameState::from_board(draw, Side::Black);
        assert!(game.is_game_over());
        assert_eq!(game.result(), Some(GameResult::Draw));

        let white = Board::from_string(&format!("{}{}", "X".repeat(31), "O".repeat(33))).unwrap();
        let game = GameState::from_board(white, Side::Black);
        assert_eq!(game.result(), Some(GameResult::Win(Side::White)));
    }

    #[test]
    fn test_advance_plays_until_game_over() {
        let mut game = GameState::new();
        let mut rng = RngSource::seeded(11);
        let mut turns = 0;
        loop {
            let before = game.board().count_discs(Disc::Empty);
            match game.advance(Strategy::Greedy, &mut rng).unwrap() {
                TurnOutcome::Played { flipped, .. } => {
                    assert!(flipped > 0);
                    assert_eq!(game.board().count_discs(Disc::Empty), before - 1);
                }
                TurnOutcome::Passed => {}
                TurnOutcome::GameOver => break,
            }
            turns += 1;
            assert!(turns <= 128, "game did not terminate");
        }
        assert!(game.is_game_over());
        assert!(game.result().is_some());
    }

    #[test]
    fn test_undo() {
        let mut game = GameState::new();
        let original_board = *game.board();

        game.play(Square::E3).unwrap();
        assert_ne!(*game.board(), original_board);

        assert!(game.undo());
        assert_eq!(*game.board(), original_board);
        assert_eq!(game.side_to_move(), Side::Black);
        assert!(!game.undo());
    }

    #[test]
    fn test_history_complete_record() {
        let mut game = GameState::new();
        game.play(Square::E3).unwrap();
        game.play(Square::F3).unwrap();
        game.play(Square::E6).unwrap_err();
        game.play(Square::F4).unwrap();

        let history = game.move_history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].0, Some(Square::E3));
        assert_eq!(history[0].2, Side::Black);
        assert_eq!(history[1].0, Some(Square::F3));
        assert_eq!(history[1].2, Side::White);
        assert_eq!(history[2].0, Some(Square::F4));
        assert_eq!(game.last_move(), Some(Square::F4));
    }

    #[test]
    fn test_game_record_black_57_white_7() {
        // Recorded from the mirrored opening (black on d5/e4), so each rank is reflected.
        let moves_str = "e6f4c3c4d3d6e3d2f3f5c1c2b4b3a3e2c5c6f6g5g4a2a1a4f2h5g3f7h6h3f8f1e1d1h4h7a5g7h8g6g1g8b6e8b5g2d8b7a6h2e7d7c8a8a7b8c7h1b2b1";

        let mut game = GameState::new();
        for (i, chunk) in moves_str.as_bytes().chunks(2).enumerate() {
            let recorded: Square = std::str::from_utf8(chunk).unwrap().parse().unwrap();
            let sq = Square::from_xy(recorded.x() as i32, 7 - recorded.y() as i32).unwrap();

            if game.must_pass() {
                game.pass().unwrap();
            }
            game.play(sq)
                .unwrap_or_else(|e| panic!("Failed to make move #{} ({}): {}", i + 1, sq, e));
        }

        assert!(game.is_game_over());
        assert_eq!(game.score(), (57, 7));
        assert_eq!(game.result(), Some(GameResult::Win(Side::Black)));
        assert!(game.board().is_full());
    }
}
