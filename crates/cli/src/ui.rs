//! Line-based interactive loop for playing against the computer.

use std::thread;
use std::time::Duration;

use reversi_core::game_state::TurnOutcome;
use reversi_core::player::{PlayerKind, Players};
use reversi_core::random::{RandomSource, RngSource};
use reversi_core::square::Square;
use rustyline::{DefaultEditor, error::ReadlineError};

use crate::game::GameState;

const HELP: &str = "\
Commands:
  <square>   place a disc, e.g. e3
  undo, u    take back your last move
  new, n     start a new game
  help, h    show this message
  quit, q    leave the game";

/// Runs the game until it ends or the user quits.
///
/// # Arguments
///
/// * `players` - Who controls each side
/// * `think_ms` - Delay before each computer move
/// * `seed` - Optional seed for the tie-break random source
pub fn ui_loop(players: Players, think_ms: u64, seed: Option<u64>) -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;
    let mut rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::from_entropy()),
    };
    let think_time = Duration::from_millis(think_ms);
    let mut game = GameState::new();

    println!("{HELP}\n");

    loop {
        game.print();
        println!();

        if let Some(result) = game.result_line() {
            println!("{result}");
            tracing::info!(%result, "game over");
            return Ok(());
        }

        let side = game.side_to_move();
        if let PlayerKind::Computer(strategy) = players.for_side(side).kind {
            println!("{side} is thinking...");
            thread::sleep(think_time);
            match game.advance(strategy, rng.as_mut()).map_err(|e| e.to_string())? {
                TurnOutcome::Played { sq, flipped } => {
                    println!("{side} plays {sq}, flipping {flipped}.\n");
                }
                TurnOutcome::Passed => println!("{side} has no legal move and passes.\n"),
                TurnOutcome::GameOver => {}
            }
            continue;
        }

        if game.must_pass() {
            println!("You have no legal move and pass.\n");
            game.pass().map_err(|e| e.to_string())?;
            continue;
        }

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err.to_string()),
        };
        let _ = rl.add_history_entry(&line);

        let Some(cmd) = line.split_whitespace().next() else {
            continue;
        };
        println!();

        match cmd {
            "new" | "n" => game = GameState::new(),
            "undo" | "u" => {
                if !game.undo_turn(&players) {
                    println!("Cannot undo.\n");
                }
            }
            "help" | "h" => println!("{HELP}\n"),
            "quit" | "q" => return Ok(()),
            _ => match cmd.parse::<Square>() {
                Ok(sq) => {
                    if let Err(err) = game.play(sq) {
                        println!("{err}\n");
                    }
                }
                Err(_) => println!("Unknown command: {cmd}\n"),
            },
        }
    }
}
