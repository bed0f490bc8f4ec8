//! Board engine for an 8x8 Reversi game against a computer opponent.
//!
//! The [`board::Board`] computes capture tables and applies moves,
//! [`strategy::choose_move`] picks computer moves, and
//! [`game_state::GameState`] sequences turns, passes and the end of the game.

pub mod board;
pub mod constants;
pub mod disc;
pub mod error;
pub mod game_state;
pub mod move_list;
pub mod move_table;
pub mod perft;
pub mod player;
pub mod random;
pub mod square;
pub mod strategy;
