//! Game engine and state management.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{RoundResult, Scoreboard};

mod actions;
mod computer;
pub mod observer;
pub mod state;

pub use observer::{GameEvent, GameObserver};
pub use state::{GameState, Phase, Side};

/// A field blackjack table: one human player against the computer.
///
/// The game owns the deck, the current [`GameState`], and the registered
/// observers. Turns strictly alternate: the player hits or stands, then the
/// driver calls [`Game::computer_play`], possibly after a delay of its own.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The draw source.
    deck: Deck,
    /// The current game.
    state: GameState,
    /// Registered observers, notified in subscription order.
    observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// Creates a game with a deck shuffled from `seed` and deals the first hand.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldjack::{Game, GameOptions, Side};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state().turn(), Some(Side::Player));
    /// assert_eq!(game.state().player().reserve().len(), 5);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Creates a game that draws from `deck` and deals the first hand.
    #[must_use]
    pub fn with_deck(options: GameOptions, mut deck: Deck) -> Self {
        let state = Self::dealt(&mut deck, &options, Scoreboard::default());
        Self {
            options,
            deck,
            state,
            observers: Vec::new(),
        }
    }

    fn dealt(deck: &mut Deck, options: &GameOptions, scores: Scoreboard) -> GameState {
        let mut state = GameState::new(scores);
        // A fresh state is always in the dealing phase.
        let _ = state.deal(deck, options);
        state
    }

    /// Registers an observer.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Discards the current game and deals a new one with a freshly reset deck.
    ///
    /// Scores carry over. The new state is built separately and swapped in,
    /// so a game interrupted mid-turn is dropped whole.
    pub fn start_new_game(&mut self) {
        self.deck.reset();
        self.state = Self::dealt(&mut self.deck, &self.options, self.state.scores());
        log::info!(
            "new game, score {}-{}",
            self.state.scores.player,
            self.state.scores.computer
        );
        self.publish();
    }

    /// Notifies observers of the current state, and of the result if resolved.
    fn publish(&mut self) {
        for observer in &mut self.observers {
            observer.state_changed(&self.state);
        }
        // Only a resolved game carries a result.
        if let Some(result) = &self.state.result {
            for observer in &mut self.observers {
                observer.outcome(result);
            }
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Returns whether the game still accepts turn actions.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Returns whose turn it is, or `None` once the game is resolved.
    #[must_use]
    pub const fn turn(&self) -> Option<Side> {
        self.state.turn()
    }

    /// Returns the player's cards.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.state.player
    }

    /// Returns the computer's cards.
    #[must_use]
    pub const fn computer(&self) -> &Hand {
        &self.state.computer
    }

    /// Returns the running scores.
    #[must_use]
    pub const fn scores(&self) -> Scoreboard {
        self.state.scores
    }

    /// Returns the result of the current game once it is resolved.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.state.result()
    }

    /// Returns the number of cards left before the deck resets.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }
}
