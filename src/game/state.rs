//! Game state types.

use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{RoundResult, Scoreboard};

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Nothing dealt yet.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Waiting for the driver to run the computer's move.
    ComputerTurn,
    /// The game is over and its result recorded.
    Resolved,
}

/// One of the two sides at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Computer,
}

/// A complete snapshot of one game plus the running score.
///
/// The value carries no randomness and no callbacks; transitions take the
/// deck and options explicitly. Every transition checks its preconditions
/// before touching anything, so a rejected action leaves the value as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub(super) player: Hand,
    pub(super) computer: Hand,
    pub(super) scores: Scoreboard,
    pub(super) phase: Phase,
    pub(super) result: Option<RoundResult>,
}

impl GameState {
    /// Creates an undealt state carrying the given scores.
    #[must_use]
    pub const fn new(scores: Scoreboard) -> Self {
        Self {
            player: Hand::new(),
            computer: Hand::new(),
            scores,
            phase: Phase::Dealing,
            result: None,
        }
    }

    /// Deals both reserves and hands the turn to the player.
    ///
    /// The player's reserve is filled first, then the computer's.
    ///
    /// # Errors
    ///
    /// Returns an error if the state has already been dealt.
    pub fn deal(&mut self, deck: &mut Deck, options: &GameOptions) -> Result<(), ActionError> {
        if self.phase != Phase::Dealing {
            return Err(ActionError::InvalidState);
        }

        let size = usize::from(options.reserve_size);
        self.player.refill(deck, size);
        self.computer.refill(deck, size);
        self.phase = Phase::PlayerTurn;
        Ok(())
    }

    /// Returns the player's cards.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the computer's cards.
    #[must_use]
    pub const fn computer(&self) -> &Hand {
        &self.computer
    }

    /// Returns the cards of the given side.
    #[must_use]
    pub const fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    /// Returns the running scores.
    #[must_use]
    pub const fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the game still accepts turn actions.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.phase, Phase::PlayerTurn | Phase::ComputerTurn)
    }

    /// Returns whose turn it is, or `None` when the game is not active.
    #[must_use]
    pub const fn turn(&self) -> Option<Side> {
        match self.phase {
            Phase::PlayerTurn => Some(Side::Player),
            Phase::ComputerTurn => Some(Side::Computer),
            Phase::Dealing | Phase::Resolved => None,
        }
    }

    /// Returns the result once the game is resolved.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Checks that `side` may act now.
    pub(super) fn ensure_turn(&self, side: Side) -> Result<(), ActionError> {
        match self.phase {
            Phase::Dealing => Err(ActionError::InvalidState),
            Phase::Resolved => Err(ActionError::GameOver),
            _ if self.turn() != Some(side) => Err(ActionError::NotYourTurn),
            _ => Ok(()),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Scoreboard::default())
    }
}
