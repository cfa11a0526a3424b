use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState, Phase, Side};

impl GameState {
    /// Computer action: play one card chosen by the policy.
    ///
    /// A full computer field resolves the game without playing. After the
    /// card is played and the reserve refilled:
    /// - over 21 resolves as a player win,
    /// - exactly 21, a full field, or the stand value resolves by comparison,
    /// - anything lower hands the turn back to the player.
    ///
    /// Returns the card played, or `None` if there was nothing left to play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the computer's turn.
    pub fn computer_play(
        &mut self,
        deck: &mut Deck,
        options: &GameOptions,
    ) -> Result<Option<Card>, ActionError> {
        self.ensure_turn(Side::Computer)?;

        let limit = usize::from(options.field_limit);
        if self.computer.field().len() >= limit {
            self.settle(options);
            return Ok(None);
        }

        let index = options.policy().choose(
            self.computer.reserve(),
            self.computer.field(),
            self.player.value(),
        );
        // Only an empty reserve leaves nothing to play.
        let Some(card) = self.computer.play(index) else {
            self.settle(options);
            return Ok(None);
        };
        self.computer.refill(deck, usize::from(options.reserve_size));

        let value = self.computer.value();
        log::debug!("computer plays {card}, field value {value}");

        if value >= BLACKJACK
            || self.computer.field().len() >= limit
            || value >= options.stand_value
        {
            self.settle(options);
        } else {
            self.phase = Phase::PlayerTurn;
        }

        Ok(Some(card))
    }

    /// Compares both fields, records the result, and ends the game.
    pub(super) fn settle(&mut self, options: &GameOptions) {
        let player_value = self.player.value();
        let computer_value = self.computer.value();
        let player_blackjack = self.player.is_blackjack();
        let computer_blackjack = self.computer.is_blackjack();

        let (outcome, player_points, computer_points) = if player_value > BLACKJACK {
            (Outcome::Burst, 0, 1)
        } else if computer_value > BLACKJACK {
            (Outcome::Win, 1, 0)
        } else if player_blackjack && !computer_blackjack {
            (Outcome::Blackjack, options.blackjack_bonus, 0)
        } else if computer_blackjack && !player_blackjack {
            (Outcome::Lose, 0, options.blackjack_bonus)
        } else if player_value > computer_value {
            (Outcome::Win, 1, 0)
        } else if player_value < computer_value {
            (Outcome::Lose, 0, 1)
        } else {
            // Includes both sides holding blackjack.
            (Outcome::Draw, 0, 0)
        };

        let result = RoundResult {
            outcome,
            player_value,
            computer_value,
            player_blackjack,
            computer_blackjack,
            player_points,
            computer_points,
        };

        self.scores.record(&result);
        self.result = Some(result);
        self.phase = Phase::Resolved;
        log::info!(
            "game over: {outcome:?} ({player_value} vs {computer_value}), score {}-{}",
            self.scores.player,
            self.scores.computer
        );
    }
}

impl Game {
    /// Runs the computer's turn.
    ///
    /// The engine does no scheduling; a driver that wants the computer to
    /// "think" waits before calling this.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the computer's turn. The game is
    /// unchanged and no observer is notified.
    pub fn computer_play(&mut self) -> Result<Option<Card>, ActionError> {
        let card = self.state.computer_play(&mut self.deck, &self.options)?;
        self.publish();
        Ok(card)
    }
}
