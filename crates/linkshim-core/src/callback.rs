#![forbid(unsafe_code)]

//! Identity-carrying callbacks.
//!
//! Consumers of a link compare handlers by identity to decide whether to
//! re-render or re-subscribe, so every callback carries a [`CallbackId`]
//! assigned once at construction. Clones share the id; two separately
//! constructed closures never do, even when their bodies are identical.
//!
//! # Invariants
//!
//! 1. Ids are unique for the life of the process (monotonic counter).
//! 2. `a.same_as(&b)` iff `a` and `b` descend, by cloning, from one
//!    constructor call.
//! 3. Calling a callback never touches its id.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::value::{ChangeEvent, Value};

static NEXT_CALLBACK_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a callback, stable across clones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallbackId(u64);

impl CallbackId {
    fn next() -> Self {
        Self(NEXT_CALLBACK_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric id, for logging.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cb#{}", self.0)
    }
}

/// A shared closure tagged with a [`CallbackId`].
pub struct Callback<F: ?Sized> {
    id: CallbackId,
    func: Rc<F>,
}

impl<F: ?Sized> Callback<F> {
    /// Identity of this callback.
    #[must_use]
    pub fn id(&self) -> CallbackId {
        self.id
    }

    /// Whether `self` and `other` are the same function.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<F: ?Sized> Clone for Callback<F> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            func: Rc::clone(&self.func),
        }
    }
}

impl<F: ?Sized> PartialEq for Callback<F> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<F: ?Sized> Eq for Callback<F> {}

impl<F: ?Sized> fmt::Debug for Callback<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callback").field(&self.id).finish()
    }
}

/// A link's change function: receives the new value.
pub type RequestChange = Callback<dyn Fn(Value)>;

/// An event-shaped change handler.
pub type EventHandler = Callback<dyn Fn(&ChangeEvent)>;

impl Callback<dyn Fn(Value)> {
    /// Wrap `f` as a new change function with a fresh identity.
    pub fn new(f: impl Fn(Value) + 'static) -> Self {
        Self {
            id: CallbackId::next(),
            func: Rc::new(f),
        }
    }

    /// Request that the bound state become `value`.
    pub fn call(&self, value: impl Into<Value>) {
        (self.func)(value.into());
    }
}

impl Callback<dyn Fn(&ChangeEvent)> {
    /// Wrap `f` as a new event handler with a fresh identity.
    pub fn new(f: impl Fn(&ChangeEvent) + 'static) -> Self {
        Self {
            id: CallbackId::next(),
            func: Rc::new(f),
        }
    }

    /// Dispatch `event` to the handler.
    pub fn call(&self, event: &ChangeEvent) {
        (self.func)(event);
    }
}
