//! The draw source shared by both sides.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, full_deck};

/// A single 52-card deck that reshuffles itself when it runs out.
///
/// Cards are drawn from the end of the internal sequence. Because an empty
/// deck is regenerated before the next draw, a card can reappear within one
/// game once the first 52 have been used.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards; the next draw is the last element.
    cards: Vec<Card>,
    /// Random number generator used for every shuffle.
    rng: ChaCha8Rng,
    /// Number of resets since construction.
    reshuffles: usize,
}

impl Deck {
    /// Creates a freshly shuffled deck from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: full_deck(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            reshuffles: 0,
        };
        deck.shuffle();
        deck
    }

    /// Creates a deck whose next draws are exactly `draws`, in order.
    ///
    /// Once those cards are used up the deck resets to a full shuffled deck
    /// seeded with `seed`, like any other deck.
    ///
    /// ```
    /// use fieldjack::{Card, Deck, Suit};
    ///
    /// let ace = Card::new(Suit::Spades, Card::ACE);
    /// let two = Card::new(Suit::Hearts, 2);
    /// let mut deck = Deck::stacked(&[ace, two], 7);
    /// assert_eq!(deck.draw(), ace);
    /// assert_eq!(deck.draw(), two);
    /// ```
    #[must_use]
    pub fn stacked(draws: &[Card], seed: u64) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
            reshuffles: 0,
        }
    }

    /// Draws a card, resetting the deck first if it is empty.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            self.reset();
        }
    }

    /// Regenerates all 52 cards and shuffles them.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.shuffle();
        self.reshuffles += 1;
        log::trace!("deck reset ({} so far)", self.reshuffles);
    }

    /// Shuffles the remaining cards with a uniform Fisher-Yates permutation.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Returns the number of cards left before the next reset.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns how many times the deck has been reset since construction.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }
}
