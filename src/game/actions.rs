use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::options::GameOptions;

use super::{Game, GameState, Phase, Side};

impl GameState {
    /// Player action: commit the reserve card at `index` to the field.
    ///
    /// The reserve is refilled afterwards. A field over 21 resolves the game
    /// as a burst; otherwise the turn passes to the computer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the player's field is
    /// full, or `index` is outside the reserve.
    pub fn player_hit(
        &mut self,
        index: usize,
        deck: &mut Deck,
        options: &GameOptions,
    ) -> Result<Card, ActionError> {
        self.ensure_turn(Side::Player)?;

        if self.player.field().len() >= usize::from(options.field_limit) {
            return Err(ActionError::FieldFull);
        }

        let len = self.player.reserve().len();
        let card = self
            .player
            .play(index)
            .ok_or(ActionError::ReserveIndexOutOfRange { index, len })?;
        self.player.refill(deck, usize::from(options.reserve_size));
        log::debug!("player plays {card}, field value {}", self.player.value());

        if self.player.is_bust() {
            self.settle(options);
        } else {
            self.phase = Phase::ComputerTurn;
        }

        Ok(card)
    }

    /// Player action: pass the turn to the computer without playing a card.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn player_stand(&mut self) -> Result<(), ActionError> {
        self.ensure_turn(Side::Player)?;

        log::debug!("player stands on {}", self.player.value());
        self.phase = Phase::ComputerTurn;
        Ok(())
    }
}

impl Game {
    /// Player action: commit the reserve card at `index` to the field.
    ///
    /// Returns the card played.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the player's field is
    /// full, or `index` is outside the reserve. The game is unchanged and no
    /// observer is notified.
    pub fn player_hit(&mut self, index: usize) -> Result<Card, ActionError> {
        let card = self.state.player_hit(index, &mut self.deck, &self.options)?;
        self.publish();
        Ok(card)
    }

    /// Player action: end the turn without playing a card.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn. The game is unchanged
    /// and no observer is notified.
    pub fn player_stand(&mut self) -> Result<(), ActionError> {
        self.state.player_stand()?;
        self.publish();
        Ok(())
    }
}
