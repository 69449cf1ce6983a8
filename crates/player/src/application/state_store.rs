//! Handles onto the mirrored player state
//!
//! The UI keeps `PlayerState` in a Dioxus signal; tests keep it in a
//! `RefCell`. Services only need to read and update it, so they are written
//! against this trait.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use vidframe_domain::PlayerState;

/// Shared, cloneable handle to one player's state
pub trait PlayerStateStore: Clone + 'static {
    /// Mutate the state in place and return whatever the closure returns
    fn update<R>(&mut self, f: impl FnOnce(&mut PlayerState) -> R) -> R;

    /// Copy of the current state
    fn snapshot(&self) -> PlayerState;
}

impl PlayerStateStore for Signal<PlayerState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut PlayerState) -> R) -> R {
        let mut state = self.write();
        f(&mut state)
    }

    fn snapshot(&self) -> PlayerState {
        self.read().clone()
    }
}

impl PlayerStateStore for Rc<RefCell<PlayerState>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut PlayerState) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn snapshot(&self) -> PlayerState {
        self.borrow().clone()
    }
}
