//! Game configuration options.

use crate::policy::ComputerPolicy;

/// Configuration options for a field game.
///
/// The defaults are the standard table: five-card reserves and fields, a
/// computer that stands on 17, and two points for a blackjack.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use fieldjack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_stand_value(18)
///     .with_blackjack_bonus(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Number of cards each reserve is topped up to.
    pub reserve_size: u8,
    /// Maximum number of cards on each field.
    pub field_limit: u8,
    /// Computer field value at which the computer stands.
    pub stand_value: u8,
    /// Player value at which the computer stops building and tries to beat the player.
    pub policy_threshold: u8,
    /// Points awarded for a blackjack win.
    pub blackjack_bonus: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            reserve_size: 5,
            field_limit: 5,
            stand_value: 17,
            policy_threshold: 17,
            blackjack_bonus: 2,
        }
    }
}

impl GameOptions {
    /// Sets the reserve size.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_reserve_size(4);
    /// assert_eq!(options.reserve_size, 4);
    /// ```
    #[must_use]
    pub const fn with_reserve_size(mut self, reserve_size: u8) -> Self {
        self.reserve_size = reserve_size;
        self
    }

    /// Sets the field limit.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_field_limit(6);
    /// assert_eq!(options.field_limit, 6);
    /// ```
    #[must_use]
    pub const fn with_field_limit(mut self, field_limit: u8) -> Self {
        self.field_limit = field_limit;
        self
    }

    /// Sets the value the computer stands on.
    #[must_use]
    pub const fn with_stand_value(mut self, stand_value: u8) -> Self {
        self.stand_value = stand_value;
        self
    }

    /// Sets the player value that switches the computer into beating mode.
    #[must_use]
    pub const fn with_policy_threshold(mut self, policy_threshold: u8) -> Self {
        self.policy_threshold = policy_threshold;
        self
    }

    /// Sets the points awarded for a blackjack.
    ///
    /// # Example
    ///
    /// ```
    /// use fieldjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_bonus(3);
    /// assert_eq!(options.blackjack_bonus, 3);
    /// ```
    #[must_use]
    pub const fn with_blackjack_bonus(mut self, blackjack_bonus: u32) -> Self {
        self.blackjack_bonus = blackjack_bonus;
        self
    }

    /// Returns the computer policy configured by these options.
    #[must_use]
    pub const fn policy(&self) -> ComputerPolicy {
        ComputerPolicy::new(self.policy_threshold)
    }
}
