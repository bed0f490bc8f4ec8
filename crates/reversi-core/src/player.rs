//! Player configuration: who controls each side.

use crate::disc::Side;
use crate::error::ConfigError;
use crate::strategy::Strategy;

/// How a side chooses its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves are entered by a person.
    Human,
    /// Moves are picked by a strategy.
    Computer(Strategy),
}

/// A participant bound to one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub side: Side,
    pub kind: PlayerKind,
}

impl Player {
    pub fn human(side: Side) -> Self {
        Player {
            side,
            kind: PlayerKind::Human,
        }
    }

    pub fn computer(side: Side, strategy: Strategy) -> Self {
        Player {
            side,
            kind: PlayerKind::Computer(strategy),
        }
    }

    /// Builds a player from numeric codes.
    ///
    /// # Arguments
    ///
    /// * `side_code` - 1 for Black, 2 for White
    /// * `type_code` - 0 for human, 1 for computer
    /// * `strategy_code` - 1, 2 or 3; anything else selects random play
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidSide`] or [`ConfigError::InvalidPlayerType`].
    pub fn from_codes(side_code: i64, type_code: i64, strategy_code: i64) -> Result<Self, ConfigError> {
        let side = match side_code {
            1 => Side::Black,
            2 => Side::White,
            other => return Err(ConfigError::InvalidSide(other)),
        };
        match type_code {
            0 => Ok(Player::human(side)),
            1 => Ok(Player::computer(side, Strategy::from_code(strategy_code))),
            other => Err(ConfigError::InvalidPlayerType(other)),
        }
    }

    #[inline]
    pub fn is_computer(&self) -> bool {
        matches!(self.kind, PlayerKind::Computer(_))
    }
}

/// The two participants of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Players {
    black: Player,
    white: Player,
}

impl Players {
    /// Pairs two players, one per side, in either order.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DuplicateSide`] when both players claim the same side.
    pub fn new(first: Player, second: Player) -> Result<Self, ConfigError> {
        if first.side == second.side {
            return Err(ConfigError::DuplicateSide(first.side));
        }
        let (black, white) = match first.side {
            Side::Black => (first, second),
            Side::White => (second, first),
        };
        Ok(Players { black, white })
    }

    /// The player controlling `side`.
    #[inline]
    pub fn for_side(&self, side: Side) -> &Player {
        match side {
            Side::Black => &self.black,
            Side::White => &self.white,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_codes() {
        assert_eq!(Player::from_codes(1, 0, 0), Ok(Player::human(Side::Black)));
        assert_eq!(
            Player::from_codes(2, 1, 3),
            Ok(Player::computer(Side::White, Strategy::Weighted))
        );
        // Unknown strategy codes fall back to random play.
        assert_eq!(
            Player::from_codes(2, 1, 9),
            Ok(Player::computer(Side::White, Strategy::Random))
        );
    }

    #[test]
    fn test_from_codes_rejects_invalid() {
        assert_eq!(Player::from_codes(0, 0, 1), Err(ConfigError::InvalidSide(0)));
        assert_eq!(Player::from_codes(3, 1, 1), Err(ConfigError::InvalidSide(3)));
        assert_eq!(
            Player::from_codes(1, 2, 1),
            Err(ConfigError::InvalidPlayerType(2))
        );
    }

    #[test]
    fn test_players() {
        let human = Player::human(Side::Black);
        let computer = Player::computer(Side::White, Strategy::Greedy);
        let players = Players::new(computer, human).unwrap();

        assert_eq!(*players.for_side(Side::Black), human);
        assert_eq!(*players.for_side(Side::White), computer);
        assert!(players.for_side(Side::White).is_computer());
        assert!(!players.for_side(Side::Black).is_computer());
    }

    #[test]
    fn test_players_duplicate_side() {
        let a = Player::human(Side::White);
        let b = Player::computer(Side::White, Strategy::Random);
        assert_eq!(
            Players::new(a, b),
            Err(ConfigError::DuplicateSide(Side::White))
        );
    }
}
