//! Round outcomes and the running score.

use crate::game::Side;

/// How a game ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Player wins (computer bursts or player has the higher value).
    Win,
    /// Computer wins (higher value or a computer-only blackjack).
    Lose,
    /// Equal values, including both sides holding blackjack.
    Draw,
    /// Player has blackjack and the computer does not.
    Blackjack,
    /// Player's field went over 21.
    Burst,
}

impl Outcome {
    /// Returns the side that won, or `None` for a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::Win | Self::Blackjack => Some(Side::Player),
            Self::Lose | Self::Burst => Some(Side::Computer),
            Self::Draw => None,
        }
    }
}

/// Result of a resolved game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// The outcome.
    pub outcome: Outcome,
    /// The player's final field value.
    pub player_value: u8,
    /// The computer's final field value.
    pub computer_value: u8,
    /// Whether the player's field was a blackjack.
    pub player_blackjack: bool,
    /// Whether the computer's field was a blackjack.
    pub computer_blackjack: bool,
    /// Points added to the player's score.
    pub player_points: u32,
    /// Points added to the computer's score.
    pub computer_points: u32,
}

/// Running totals across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    /// The player's score.
    pub player: u32,
    /// The computer's score.
    pub computer: u32,
}

impl Scoreboard {
    /// Adds the points of a resolved game.
    pub const fn record(&mut self, result: &RoundResult) {
        self.player += result.player_points;
        self.computer += result.computer_points;
    }
}
