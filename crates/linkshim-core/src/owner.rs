#![forbid(unsafe_code)]

//! The stateful owner a keyed link writes back into.

use std::rc::Weak;

use crate::value::Value;

/// A component or store whose state links are derived from.
///
/// Both methods take `&self`: owners are shared (`Rc`) and keep their state
/// behind interior mutability.
pub trait StateOwner {
    /// Current value for `key`, `None` if unset.
    fn state(&self, key: &str) -> Option<Value>;

    /// Merge `{key: value}` into the owner's state and schedule a re-render.
    ///
    /// Must tolerate being called repeatedly with the same value.
    fn apply_partial_update(&self, key: &str, value: Value);
}

/// Apply an update through a weak owner handle.
///
/// Once the owner is gone the update is dropped and logged.
pub(crate) fn apply_weak<O: StateOwner + ?Sized>(owner: &Weak<O>, key: &str, value: Value) {
    match owner.upgrade() {
        Some(owner) => owner.apply_partial_update(key, value),
        None => tracing::warn!(key, "change requested after owner was dropped"),
    }
}
