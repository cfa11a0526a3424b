//! The computer's card-selection heuristic.

use crate::card::Card;
use crate::hand::{BLACKJACK, value_with};

/// Chooses which reserve card the computer commits on its turn.
///
/// Every candidate is scored by the field value it would produce, and
/// candidates that would take the field over 21 are skipped. While the
/// player's value is below the threshold the computer builds the highest
/// safe total. At or above the threshold it takes the highest total that
/// beats the player, falling back to the highest safe total when nothing
/// does. Ties go to the earliest reserve position.
///
/// If no candidate is safe the first reserve card is played even though it
/// busts the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerPolicy {
    /// Player value at which the policy switches from building to beating.
    pub threshold: u8,
}

/// Best candidate seen so far: reserve index and resulting field value.
type Candidate = Option<(usize, u8)>;

fn improve(best: &mut Candidate, index: usize, potential: u8) {
    if best.is_none_or(|(_, value)| potential > value) {
        *best = Some((index, potential));
    }
}

impl ComputerPolicy {
    /// Creates a policy with the given threshold.
    #[must_use]
    pub const fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    /// Returns the reserve index to play.
    ///
    /// `field` is the computer's current field and `player_value` the value
    /// of the player's field. Returns 0 when the reserve is empty or when no
    /// candidate keeps the field at 21 or below.
    #[must_use]
    pub fn choose(&self, reserve: &[Card], field: &[Card], player_value: u8) -> usize {
        let mut highest: Candidate = None;
        let mut beating: Candidate = None;

        for (index, card) in reserve.iter().enumerate() {
            let potential = value_with(field, card);
            if potential > BLACKJACK {
                continue;
            }
            improve(&mut highest, index, potential);
            if potential > player_value {
                improve(&mut beating, index, potential);
            }
        }

        let best = if player_value < self.threshold {
            highest
        } else {
            beating.or(highest)
        };

        best.map_or(0, |(index, _)| index)
    }
}

impl Default for ComputerPolicy {
    fn default() -> Self {
        Self::new(17)
    }
}
