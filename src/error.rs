//! Error types for game operations.

use thiserror::Error;

/// Errors returned when a command is not legal in the current state.
///
/// A rejected command never changes the game, so drivers that prefer to
/// ignore invalid input can discard the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No game has been dealt yet.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The game is resolved; start a new one.
    #[error("the game is over")]
    GameOver,
    /// It is the other side's turn.
    #[error("not this side's turn")]
    NotYourTurn,
    /// The field already holds the maximum number of cards.
    #[error("the field is full")]
    FieldFull,
    /// The reserve index does not name a card.
    #[error("reserve index {index} is out of range (reserve holds {len})")]
    ReserveIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of cards in the reserve.
        len: usize,
    },
}
