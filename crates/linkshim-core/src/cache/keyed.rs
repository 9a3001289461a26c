#![forbid(unsafe_code)]

//! Per-owner cache of state-key links.
//!
//! # Invariants
//!
//! 1. `link_for(o, k)` twice with no change to `o`'s value for `k` returns the
//!    same `Rc` (pointer-equal).
//! 2. When the value changes, the returned link is new but its three handlers
//!    are the ones created on the first call for `k`.
//! 3. Distinct keys never share a link or a handler.
//! 4. A cache serves one owner. The first owner passed to `link_for` binds
//!    it; entries are replaced, never removed, while that binding holds.
//!
//! # Failure Modes
//!
//! - Owner dropped while a handler is still held: the handler logs and does
//!   nothing (it holds only a `Weak`).
//! - Cache called with a second owner: every cached link is discarded, the
//!   cache rebinds to the new owner and a warning is logged. Handlers already
//!   handed out keep writing to the first owner.
//! - `Value::Float(NaN)` state never equals itself, so each call builds a
//!   new link. Handlers are still reused.

use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use ahash::AHashMap;

use crate::callback::{EventHandler, RequestChange};
use crate::link::AdaptedLink;
use crate::owner::{StateOwner, apply_weak};
use crate::value::Value;

/// Links derived from an owner's state, one per key.
#[derive(Default)]
pub struct LinkCache {
    owner: RefCell<Option<Weak<dyn Any>>>,
    links: RefCell<AHashMap<String, Rc<AdaptedLink>>>,
}

impl LinkCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Link to `owner`'s state under `key`.
    ///
    /// See the module docs for the identity guarantees.
    pub fn link_for<O: StateOwner + 'static>(&self, owner: &Rc<O>, key: &str) -> Rc<AdaptedLink> {
        self.bind(owner);
        let current = owner.state(key).unwrap_or_default();
        let mut links = self.links.borrow_mut();

        let link = match links.get(key) {
            Some(cached) if cached.value == current => {
                tracing::trace!(key, "keyed link hit");
                return Rc::clone(cached);
            }
            Some(cached) => {
                tracing::trace!(key, "keyed link refreshed");
                Rc::new(cached.with_value(current))
            }
            None => {
                tracing::trace!(key, "keyed link created");
                Rc::new(bind_owner_key(owner, key, current))
            }
        };

        links.insert(key.to_owned(), Rc::clone(&link));
        link
    }

    /// Tie the cache to `owner`, dropping entries built for any other.
    fn bind<O: StateOwner + 'static>(&self, owner: &Rc<O>) {
        let mut bound = self.owner.borrow_mut();
        if let Some(current) = bound.as_ref() {
            if std::ptr::addr_eq(current.as_ptr(), Rc::as_ptr(owner)) {
                return;
            }
            let mut links = self.links.borrow_mut();
            tracing::warn!(
                discarded = links.len(),
                "link cache used with a second owner; rebinding"
            );
            links.clear();
        }
        let weak: Weak<dyn Any> = Rc::downgrade(owner) as Weak<O>;
        *bound = Some(weak);
    }

    /// The cached link for `key`, without consulting the owner.
    #[must_use]
    pub fn cached(&self, key: &str) -> Option<Rc<AdaptedLink>> {
        self.links.borrow().get(key).cloned()
    }

    /// Number of keys with a cached link.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.borrow().is_empty()
    }
}

impl std::fmt::Debug for LinkCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkCache")
            .field("len", &self.len())
            .finish()
    }
}

/// Build the three handlers for `(owner, key)`, each writing a single-key
/// partial update.
fn bind_owner_key<O: StateOwner + 'static>(owner: &Rc<O>, key: &str, value: Value) -> AdaptedLink {
    let request_change = {
        let owner = Rc::downgrade(owner);
        let key = key.to_owned();
        RequestChange::new(move |v| apply_weak(&owner, &key, v))
    };
    let on_value_change = {
        let owner = Rc::downgrade(owner);
        let key = key.to_owned();
        EventHandler::new(move |e| apply_weak(&owner, &key, e.target_value()))
    };
    let on_checked_change = {
        let owner = Rc::downgrade(owner);
        let key = key.to_owned();
        EventHandler::new(move |e| apply_weak(&owner, &key, e.target_checked()))
    };

    AdaptedLink {
        value,
        request_change,
        on_value_change,
        on_checked_change,
    }
}
