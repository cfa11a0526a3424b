//! Hand evaluation and the per-side reserve/field pair.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;

/// Highest value that is not a burst.
pub const BLACKJACK: u8 = 21;

fn evaluate<'a>(cards: impl IntoIterator<Item = &'a Card>) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.base_value());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Calculates the best value of a set of cards.
///
/// Aces are counted as 11 and reduced to 1, one at a time, while the total
/// exceeds 21. The result may still exceed 21; the caller decides on a burst.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate(cards).0
}

/// Value of `cards` with `extra` appended, without allocating.
pub(crate) fn value_with(cards: &[Card], extra: &Card) -> u8 {
    evaluate(cards.iter().chain(core::iter::once(extra))).0
}

/// Returns whether the cards contain an ace still counted as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate(cards).1
}

/// Returns whether the cards are exactly two totalling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards) == BLACKJACK
}

/// One side's cards: the reserve it plays from and the field it is scored on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    /// Cards available to play, kept topped up.
    reserve: Vec<Card>,
    /// Committed cards, in play order.
    field: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reserve: Vec::new(),
            field: Vec::new(),
        }
    }

    /// Returns the reserve cards.
    #[must_use]
    pub fn reserve(&self) -> &[Card] {
        &self.reserve
    }

    /// Returns the field cards.
    #[must_use]
    pub fn field(&self) -> &[Card] {
        &self.field
    }

    /// Calculates the value of the field.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.field)
    }

    /// Returns whether the field is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.field)
    }

    /// Returns whether the field is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.field)
    }

    /// Returns whether the field is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Moves the reserve card at `index` to the end of the field.
    ///
    /// The remaining reserve cards keep their order. Returns `None` if the
    /// index is out of range.
    pub(crate) fn play(&mut self, index: usize) -> Option<Card> {
        if index >= self.reserve.len() {
            return None;
        }
        let card = self.reserve.remove(index);
        self.field.push(card);
        Some(card)
    }

    /// Draws into the reserve until it holds `size` cards.
    pub(crate) fn refill(&mut self, deck: &mut Deck, size: usize) {
        while self.reserve.len() < size {
            self.reserve.push(deck.draw());
        }
    }
}
