mod game;
mod ui;

use clap::{Parser, ValueEnum};
use reversi_core::disc::Side;
use reversi_core::player::{Player, Players};
use reversi_core::strategy::{self, Strategy, StrategyArgError};
use tracing_subscriber::EnvFilter;

/// Which side the person at the terminal plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HumanSide {
    Black,
    White,
    /// Both sides are played by the computer.
    None,
}

#[derive(Parser, Debug)]
#[command(version, about = "Play Reversi against the computer")]
struct Cli {
    /// Computer strategy: 1 = random, 2 = greedy, 3 = weighted
    #[arg(value_name = "STRATEGY")]
    strategy: Option<String>,

    /// Side played by the human
    #[arg(long, value_enum, default_value = "black")]
    human: HumanSide,

    /// Thinking delay before each computer move, in milliseconds
    #[arg(long, default_value = "2000")]
    think_ms: u64,

    /// Seed for the tie-break random source
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let strategy = resolve_strategy(args.strategy.as_deref());

    let players = build_players(args.human, strategy).unwrap_or_else(|err| {
        eprintln!("Invalid player configuration: {err}");
        std::process::exit(1);
    });

    tracing::info!(%strategy, human = ?args.human, seed = ?args.seed, "starting game");
    if let Err(err) = ui::ui_loop(players, args.think_ms, args.seed) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Maps the positional argument to a strategy, falling back to random play.
fn resolve_strategy(arg: Option<&str>) -> Strategy {
    match strategy::parse_strategy_arg(arg) {
        Ok(strategy) => strategy,
        Err(err) => {
            match err {
                StrategyArgError::Missing => {
                    eprintln!("No strategy given, using 1 (random).")
                }
                StrategyArgError::NotAnInteger(_) => {
                    eprintln!("The strategy must be one of the integers 1, 2 or 3. Using 1 (random).")
                }
                StrategyArgError::OutOfRange(_) => {
                    eprintln!("The strategy must be between 1 and 3. Using 1 (random).")
                }
            }
            tracing::warn!(%err, "falling back to random strategy");
            Strategy::Random
        }
    }
}

fn build_players(
    human: HumanSide,
    strategy: Strategy,
) -> Result<Players, reversi_core::error::ConfigError> {
    let (black, white) = match human {
        HumanSide::Black => (
            Player::human(Side::Black),
            Player::computer(Side::White, strategy),
        ),
        HumanSide::White => (
            Player::computer(Side::Black, strategy),
            Player::human(Side::White),
        ),
        HumanSide::None => (
            Player::computer(Side::Black, strategy),
            Player::computer(Side::White, strategy),
        ),
    };
    Players::new(black, white)
}
