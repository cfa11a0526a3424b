//! Card types and deck utilities.

use alloc::vec::Vec;
use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits, in the order a fresh deck is generated.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    /// Returns whether the suit is rendered red (hearts and diamonds).
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Rank of an ace.
    pub const ACE: u8 = 1;
    /// Rank of a jack.
    pub const JACK: u8 = 11;
    /// Rank of a queen.
    pub const QUEEN: u8 = 12;
    /// Rank of a king.
    pub const KING: u8 = 13;

    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but count as zero when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the value of the card before any soft-ace reduction.
    ///
    /// Aces count 11, face cards 10, numeric cards their rank.
    #[must_use]
    pub const fn base_value(self) -> u8 {
        match self.rank {
            Self::ACE => 11,
            2..=10 => self.rank,
            Self::JACK..=Self::KING => 10,
            _ => 0,
        }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == Self::ACE
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = self.suit.symbol();
        match self.rank {
            Self::ACE => write!(f, "{suit}A"),
            Self::JACK => write!(f, "{suit}J"),
            Self::QUEEN => write!(f, "{suit}Q"),
            Self::KING => write!(f, "{suit}K"),
            rank => write!(f, "{suit}{rank}"),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns the 52 unique cards, suit by suit, ace through king.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Card::ACE..=Card::KING {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}
