#![forbid(unsafe_code)]

//! Stand-ins for the stateful owners a view tree provides.
//!
//! - [`MockState`]: a bare key/value store that hands out raw links with one
//!   stable setter per key, the way an external store would.
//! - [`LinkedComponent`]: a component that owns its state *and* an
//!   [`AdaptedLinkCache`], exposing `link_state` / `adapt_link`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ahash::AHashMap;
use linkshim_core::{
    AdaptedLink, AdaptedLinkCache, Link, LinkConfig, RawLink, RequestChange, StateOwner, Value,
};

type StateMap = Rc<RefCell<AHashMap<String, Value>>>;

/// Key/value store producing raw links.
///
/// `link_state(k)` always pairs the current value with the same setter for
/// `k`, so links handed out for one key share a change function.
#[derive(Default)]
pub struct MockState {
    state: StateMap,
    setters: RefCell<AHashMap<String, RequestChange>>,
}

impl MockState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with `entries`.
    #[must_use]
    pub fn with_state<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let store = Self::new();
        store.set_state(entries);
        store
    }

    /// Current value for `key`; `Null` if unset.
    #[must_use]
    pub fn get(&self, key: &str) -> Value {
        self.state.borrow().get(key).cloned().unwrap_or_default()
    }

    /// Merge `entries` into the store.
    pub fn set_state<K, V>(&self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut state = self.state.borrow_mut();
        for (k, v) in entries {
            state.insert(k.into(), v.into());
        }
    }

    /// A raw link to `key`.
    #[must_use]
    pub fn link_state(&self, key: &str) -> RawLink {
        RawLink::new(self.get(key), self.setter(key))
    }

    /// The change function for `key`, created on first request.
    #[must_use]
    pub fn setter(&self, key: &str) -> RequestChange {
        self.setters
            .borrow_mut()
            .entry(key.to_owned())
            .or_insert_with(|| {
                let state = Rc::clone(&self.state);
                let key = key.to_owned();
                RequestChange::new(move |v| {
                    state.borrow_mut().insert(key.clone(), v);
                })
            })
            .clone()
    }
}

impl StateOwner for MockState {
    fn state(&self, key: &str) -> Option<Value> {
        self.state.borrow().get(key).cloned()
    }

    fn apply_partial_update(&self, key: &str, value: Value) {
        self.set_state([(key, value)]);
    }
}

/// A component owning its state and its link caches.
///
/// Every applied update counts as a re-render request.
#[derive(Default)]
pub struct LinkedComponent {
    state: RefCell<AHashMap<String, Value>>,
    links: AdaptedLinkCache,
    updates: Cell<u64>,
}

impl LinkedComponent {
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    #[must_use]
    pub fn with_config(config: LinkConfig) -> Rc<Self> {
        Rc::new(Self {
            links: AdaptedLinkCache::with_config(config),
            ..Self::default()
        })
    }

    /// Link to this component's own state under `key`.
    #[must_use]
    pub fn link_state(self: &Rc<Self>, key: &str) -> Rc<AdaptedLink> {
        self.links.link_for(self, key)
    }

    /// Adapt a link received from elsewhere.
    #[must_use]
    pub fn adapt_link(&self, link: &Link) -> Rc<AdaptedLink> {
        self.links.adapt(link)
    }

    /// Current value for `key`; `Null` if unset.
    #[must_use]
    pub fn get(&self, key: &str) -> Value {
        self.state.borrow().get(key).cloned().unwrap_or_default()
    }

    /// Merge `{key: value}` into state, counting it as an update.
    pub fn set_state(&self, key: &str, value: impl Into<Value>) {
        self.apply_partial_update(key, value.into());
    }

    /// Updates applied since construction.
    #[must_use]
    pub fn update_count(&self) -> u64 {
        self.updates.get()
    }

    #[must_use]
    pub fn links(&self) -> &AdaptedLinkCache {
        &self.links
    }
}

impl StateOwner for LinkedComponent {
    fn state(&self, key: &str) -> Option<Value> {
        self.state.borrow().get(key).cloned()
    }

    fn apply_partial_update(&self, key: &str, value: Value) {
        tracing::trace!(key, %value, "component state updated");
        self.state.borrow_mut().insert(key.to_owned(), value);
        self.updates.set(self.updates.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn setters_are_stable_per_key() {
        let store = MockState::new();
        assert!(store.setter("a").same_as(&store.setter("a")));
        assert!(!store.setter("a").same_as(&store.setter("b")));
    }

    #[test]
    fn link_state_writes_back() {
        let store = MockState::with_state([("val", "Ada")]);
        let link = store.link_state("val");
        assert_eq!(link.value, Value::from("Ada"));
        link.request_change.call("Grace");
        assert_eq!(store.get("val"), Value::from("Grace"));
    }

    #[test]
    fn component_counts_updates() {
        let c = LinkedComponent::new();
        c.set_state("val", 1_i64);
        c.link_state("val").request_change.call(2_i64);
        assert_eq!(c.get("val"), Value::Int(2));
        assert_eq!(c.update_count(), 2);
    }

    #[test]
    #[traced_test]
    fn component_traces_updates() {
        let c = LinkedComponent::new();
        c.link_state("val")
            .on_value_change
            .call(&linkshim_core::ChangeEvent::value("Lovelace"));
        assert!(logs_contain("component state updated"));
        assert!(logs_contain("Lovelace"));
    }
}
