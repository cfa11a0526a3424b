//! Notifications for the presentation layer.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::result::RoundResult;

use super::GameState;

/// Receives game notifications.
///
/// Both methods default to doing nothing, so an observer only implements
/// what it renders.
pub trait GameObserver {
    /// Called once after every accepted command with the resulting state.
    fn state_changed(&mut self, state: &GameState) {
        let _ = state;
    }

    /// Called once when a game resolves, after [`GameObserver::state_changed`].
    fn outcome(&mut self, result: &RoundResult) {
        let _ = result;
    }
}

/// A recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// State snapshot after a command.
    StateChanged(GameState),
    /// Result of a resolved game.
    Outcome(RoundResult),
}

impl GameObserver for Vec<GameEvent> {
    fn state_changed(&mut self, state: &GameState) {
        self.push(GameEvent::StateChanged(state.clone()));
    }

    fn outcome(&mut self, result: &RoundResult) {
        self.push(GameEvent::Outcome(*result));
    }
}

impl<O: GameObserver> GameObserver for Rc<RefCell<O>> {
    fn state_changed(&mut self, state: &GameState) {
        self.borrow_mut().state_changed(state);
    }

    fn outcome(&mut self, result: &RoundResult) {
        self.borrow_mut().outcome(result);
    }
}
