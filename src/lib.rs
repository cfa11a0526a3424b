//! A five-card field blackjack engine with optional `no_std` support.
//!
//! Each side keeps a reserve of five cards and commits them one at a time to
//! a field of at most five cards, which is scored like a blackjack hand. The
//! human player moves first; the computer answers with a simple heuristic.
//! The crate provides a [`Game`] type that manages dealing, turn order,
//! resolution and the running score, and notifies a presentation layer
//! through [`GameObserver`].
//!
//! # Example
//!
//! ```
//! use fieldjack::{Game, GameOptions, Side};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.player_hit(0).unwrap();
//! if game.turn() == Some(Side::Computer) {
//!     game.computer_play().unwrap();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod policy;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, full_deck};
pub use deck::Deck;
pub use error::ActionError;
pub use game::{Game, GameEvent, GameObserver, GameState, Phase, Side};
pub use hand::{BLACKJACK, Hand, hand_value, is_blackjack, is_soft};
pub use options::GameOptions;
pub use policy::ComputerPolicy;
pub use result::{Outcome, RoundResult, Scoreboard};
