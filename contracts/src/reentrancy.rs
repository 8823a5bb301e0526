//! Reentrancy guard for mutating entry points.

use odra::prelude::*;
use crate::errors::EngineError;

#[odra::module]
pub struct ReentrancyGuard {
    locked: Var<bool>,
}

#[odra::module]
impl ReentrancyGuard {
    /// Take the lock, reverting with `ReentrantCall` if it is already held.
    pub fn enter(&mut self) {
        if self.is_locked() {
            self.env().revert(EngineError::ReentrantCall);
        }
        self.locked.set(true);
    }

    /// Release the lock. A reverted call discards the lock with the rest of
    /// its state, so only successful paths need to call this.
    pub fn exit(&mut self) {
        self.locked.set(false);
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get_or_default()
    }
}
