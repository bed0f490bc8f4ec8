//! One-ply move selection policies for the computer player.

use std::fmt;

use crate::constants::POSITION_WEIGHT;
use crate::disc::Side;
use crate::move_list::{Move, MoveList};
use crate::move_table::Evaluation;
use crate::random::RandomSource;
use crate::square::Square;

/// Move selection policy.
///
/// Every policy scores the legal moves, keeps those sharing the best score
/// and picks one of them uniformly at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Uniform choice among all legal moves.
    #[default]
    Random,
    /// Maximise the number of flipped discs.
    Greedy,
    /// Maximise flipped discs plus the positional weight of the square.
    Weighted,
}

impl Strategy {
    /// Maps the numeric codes 1, 2 and 3. Any other value selects `Random`.
    pub fn from_code(code: i64) -> Strategy {
        match code {
            2 => Strategy::Greedy,
            3 => Strategy::Weighted,
            _ => Strategy::Random,
        }
    }

    /// Numeric code of the strategy.
    pub fn code(self) -> u8 {
        match self {
            Strategy::Random => 1,
            Strategy::Greedy => 2,
            Strategy::Weighted => 3,
        }
    }

    fn score(self, mv: &Move) -> i32 {
        match self {
            Strategy::Random => 0,
            Strategy::Greedy => mv.captures as i32,
            Strategy::Weighted => mv.captures as i32 + POSITION_WEIGHT[mv.sq.y()][mv.sq.x()],
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Random => "random",
            Strategy::Greedy => "greedy",
            Strategy::Weighted => "weighted",
        };
        f.write_str(name)
    }
}

/// Problems with a strategy given on the command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyArgError {
    #[error("no strategy given")]
    Missing,
    #[error("strategy must be an integer 1, 2 or 3: '{0}'")]
    NotAnInteger(String),
    #[error("strategy must be one of 1 to 3: {0}")]
    OutOfRange(i64),
}

/// Parses a command-line strategy argument.
///
/// Callers that want the lenient behaviour fall back to
/// [`Strategy::Random`] on error.
pub fn parse_strategy_arg(arg: Option<&str>) -> Result<Strategy, StrategyArgError> {
    let arg = arg.ok_or(StrategyArgError::Missing)?;
    let code: i64 = arg
        .trim()
        .parse()
        .map_err(|_| StrategyArgError::NotAnInteger(arg.to_string()))?;
    if !(1..=3).contains(&code) {
        return Err(StrategyArgError::OutOfRange(code));
    }
    Ok(Strategy::from_code(code))
}

/// Picks a move for `side` from an up-to-date evaluation.
///
/// # Returns
///
/// `Some(square)` holding a legal move, or `None` when `side` has no legal
/// move and must pass.
pub fn choose_move<R>(
    evaluation: &Evaluation,
    side: Side,
    strategy: Strategy,
    rng: &mut R,
) -> Option<Square>
where
    R: RandomSource + ?Sized,
{
    let mut move_list = MoveList::for_side(evaluation, side);
    if move_list.is_empty() {
        tracing::debug!(%side, "no legal move, passing");
        return None;
    }

    move_list.score_with(|mv| strategy.score(mv));
    let candidates = move_list.best_moves();
    let chosen = candidates[rng.next_index(candidates.len())];

    tracing::debug!(
        %side,
        %strategy,
        sq = %chosen.sq,
        value = chosen.value,
        candidates = candidates.len(),
        "chose move"
    );
    Some(chosen.sq)
}
