//! Terminal rendering for a Reversi game.
//!
//! This module wraps the core `GameState` and adds colored board output.

use colored::Colorize;
use reversi_core::disc::{Disc, Side};
use reversi_core::error::MoveError;
use reversi_core::game_state::{self, GameResult, TurnOutcome};
use reversi_core::player::Players;
use reversi_core::random::RandomSource;
use reversi_core::square::Square;
use reversi_core::strategy::Strategy;

/// Core game state with CLI display capabilities.
pub struct GameState {
    core: game_state::GameState,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            core: game_state::GameState::new(),
        }
    }

    pub fn side_to_move(&self) -> Side {
        self.core.side_to_move()
    }

    pub fn play(&mut self, sq: Square) -> Result<u32, MoveError> {
        self.core.play(sq)
    }

    pub fn pass(&mut self) -> Result<(), MoveError> {
        self.core.pass()
    }

    pub fn advance<R>(&mut self, strategy: Strategy, rng: &mut R) -> Result<TurnOutcome, MoveError>
    where
        R: RandomSource + ?Sized,
    {
        self.core.advance(strategy, rng)
    }

    pub fn must_pass(&self) -> bool {
        self.core.must_pass()
    }

    /// Takes back the last turn and any computer replies after it, so the
    /// next side to move is a human again.
    ///
    /// # Returns
    ///
    /// `false` if there was nothing to undo.
    pub fn undo_turn(&mut self, players: &Players) -> bool {
        if !self.core.undo() {
            return false;
        }
        while players.for_side(self.core.side_to_move()).is_computer() && self.core.undo() {}
        true
    }

    /// Final message in the form `[Black: 40, White: 24] Black wins`.
    pub fn result_line(&self) -> Option<String> {
        let (black, white) = self.core.score();
        let verdict = match self.core.result()? {
            GameResult::Win(side) => format!("{side} wins"),
            GameResult::Draw => "Draw".to_string(),
        };
        Some(format!("[Black: {black}, White: {white}] {verdict}"))
    }

    /// Prints a colored representation of the board to the terminal.
    ///
    /// Legal moves of the side to move are marked with a dot and the last
    /// placed disc is highlighted.
    pub fn print(&self) {
        let board = self.core.board();
        let side_to_move = self.core.side_to_move();
        let last_move = self.core.last_move();
        let evaluation = self.core.evaluation();
        let legal = evaluation.table(side_to_move);
        let (black_count, white_count) = self.core.score();
        let game_over = self.core.is_game_over();

        println!("      a   b   c   d   e   f   g   h");
        println!("    ┌───┬───┬───┬───┬───┬───┬───┬───┐");

        for y in 0..8 {
            print!("  {} │", y + 1);

            for x in 0..8 {
                let Some(sq) = Square::from_xy(x, y) else {
                    continue;
                };
                let is_last_move = Some(sq) == last_move;

                let symbol = match board.disc_at(sq) {
                    Disc::Black if is_last_move => " X ".on_bright_black().bright_green(),
                    Disc::White if is_last_move => " O ".on_bright_black().bright_yellow(),
                    Disc::Black => " X ".bright_green(),
                    Disc::White => " O ".bright_yellow(),
                    Disc::Empty if !game_over && legal.is_legal(sq) => " · ".bright_cyan(),
                    Disc::Empty => "   ".black(),
                };
                print!("{symbol}│");
            }

            match y {
                2 if !game_over => {
                    let player_info = match side_to_move {
                        Side::Black => "Black's turn (X)".bright_green(),
                        Side::White => "White's turn (O)".bright_yellow(),
                    };
                    println!("   {player_info}");
                }
                3 => println!("   Black: {}", format!("{black_count:2}").bright_green()),
                4 => println!("   White: {}", format!("{white_count:2}").bright_yellow()),
                6 if game_over => println!("   {}", "*** Game Over ***".bright_red()),
                _ => println!(),
            }

            if y < 7 {
                println!("    ├───┼───┼───┼───┼───┼───┼───┼───┤");
            }
        }

        println!("    └───┴───┴───┴───┴───┴───┴───┴───┘");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_core::board::Board;
    use reversi_core::player::Player;
    use reversi_core::random::SequenceSource;

    fn from_board(board: &str, side_to_move: Side) -> GameState {
        GameState {
            core: game_state::GameState::from_board(
                Board::from_string(board).unwrap(),
                side_to_move,
            ),
        }
    }

    #[test]
    fn test_result_line_in_progress() {
        let mut game = GameState::new();
        assert_eq!(game.result_line(), None);
        game.play(Square::E3).unwrap();
        assert_eq!(game.result_line(), None);
    }

    #[test]
    fn test_result_line_win() {
        let board = format!("{}{}", "X".repeat(10), "-".repeat(54));
        let game = from_board(&board, Side::White);
        assert_eq!(
            game.result_line().as_deref(),
            Some("[Black: 10, White: 0] Black wins")
        );
    }

    #[test]
    fn test_result_line_draw() {
        let board = format!("{}{}", "X".repeat(32), "O".repeat(32));
        let game = from_board(&board, Side::Black);
        assert_eq!(
            game.result_line().as_deref(),
            Some("[Black: 32, White: 32] Draw")
        );
    }

    fn computer_turn(game: &mut GameState) -> Square {
        let mut rng = SequenceSource::new([0]);
        match game.advance(Strategy::Greedy, &mut rng).unwrap() {
            TurnOutcome::Played { sq, .. } => sq,
            other => panic!("expected a move, got {other:?}"),
        }
    }

    #[test]
    fn test_undo_turn_human_black() {
        let players = Players::new(
            Player::human(Side::Black),
            Player::computer(Side::White, Strategy::Greedy),
        )
        .unwrap();
        let mut game = GameState::new();
        assert!(!game.undo_turn(&players));

        game.play(Square::E3).unwrap();
        computer_turn(&mut game);
        let after_first_turn = *game.core.board();
        let sq = game.core.legal_moves().iter().next().unwrap().sq;
        game.play(sq).unwrap();
        computer_turn(&mut game);

        assert!(game.undo_turn(&players));
        assert_eq!(*game.core.board(), after_first_turn);
        assert_eq!(game.side_to_move(), Side::Black);

        assert!(game.undo_turn(&players));
        assert_eq!(*game.core.board(), Board::new());
        assert_eq!(game.side_to_move(), Side::Black);
        assert!(!game.undo_turn(&players));
    }

    #[test]
    fn test_undo_turn_human_white() {
        let players = Players::new(
            Player::computer(Side::Black, Strategy::Greedy),
            Player::human(Side::White),
        )
        .unwrap();
        let mut game = GameState::new();

        computer_turn(&mut game);
        let before_human = *game.core.board();
        let sq = game.core.legal_moves().iter().next().unwrap().sq;
        game.play(sq).unwrap();
        computer_turn(&mut game);

        assert!(game.undo_turn(&players));
        assert_eq!(*game.core.board(), before_human);
        assert_eq!(game.side_to_move(), Side::White);

        // Only the computer's opening move is left; undoing it hands the
        // first move back to the computer.
        assert!(game.undo_turn(&players));
        assert_eq!(*game.core.board(), Board::new());
        assert_eq!(game.side_to_move(), Side::Black);
    }
}
