#![forbid(unsafe_code)]

//! Per-owner cache that adapts externally supplied links.
//!
//! An owner may be handed links built by someone else (another component's
//! [`LinkCache`], a store, a hand-written `{value, requestChange}` pair). The
//! owner renders them through event-shaped handlers, and those handlers must
//! keep their identity as long as the underlying change function does.
//!
//! Entries are keyed by the raw link's [`CallbackId`]. The cached
//! `RequestChange` keeps the id alive, so an id is never observed for two
//! different functions.
//!
//! # Invariants
//!
//! 1. Adapting an already-adapted link returns that link.
//! 2. Adapting raw links sharing a change function yields links with the same
//!    handlers; equal values yield the same `Rc`.
//! 3. The adapted link's `request_change` is the raw link's own function.
//!
//! # Failure Modes
//!
//! - A caller building a fresh change function on every render grows the
//!   cache without bound. Nothing is evicted; a warning is logged once when
//!   the configured `adapted_cache_warn_threshold` is crossed.
//! - A raw link whose value is `Value::Float(NaN)` never matches its cached
//!   entry, so every call builds a new link. Handlers are still reused.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ahash::AHashMap;

use super::keyed::LinkCache;
use crate::callback::CallbackId;
use crate::config::LinkConfig;
use crate::error::Result;
use crate::link::{AdaptedLink, Link, RawLink};
use crate::link_utils;
use crate::owner::StateOwner;
use crate::props::Props;

/// Owner-side adapter for both state-key links and external links.
#[derive(Default)]
pub struct AdaptedLinkCache {
    keyed: LinkCache,
    adapted: RefCell<AHashMap<CallbackId, Rc<AdaptedLink>>>,
    config: LinkConfig,
    growth_warned: Cell<bool>,
}

impl AdaptedLinkCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: LinkConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Link to `owner`'s state under `key`. See [`LinkCache::link_for`].
    pub fn link_for<O: StateOwner + 'static>(&self, owner: &Rc<O>, key: &str) -> Rc<AdaptedLink> {
        self.keyed.link_for(owner, key)
    }

    /// Adapt `link` into event-shaped form with stable handlers.
    pub fn adapt(&self, link: &Link) -> Rc<AdaptedLink> {
        match link {
            Link::Adapted(adapted) => Rc::clone(adapted),
            Link::Raw(raw) => self.adapt_raw(raw),
        }
    }

    /// Validate a loosely-typed link and adapt it.
    ///
    /// # Errors
    ///
    /// [`BindingError::InvalidLinkShape`](crate::error::BindingError::InvalidLinkShape)
    /// if `props` is not a well-formed link.
    pub fn adapt_props(&self, props: &Props) -> Result<Rc<AdaptedLink>> {
        let raw = RawLink::try_from(props)?;
        Ok(self.adapt_raw(&raw))
    }

    fn adapt_raw(&self, raw: &RawLink) -> Rc<AdaptedLink> {
        let id = raw.request_change.id();
        let mut adapted = self.adapted.borrow_mut();

        let link = match adapted.get(&id) {
            Some(cached) if cached.value == raw.value => {
                tracing::trace!(callback_id = id.get(), "adapted link hit");
                return Rc::clone(cached);
            }
            Some(cached) => {
                tracing::trace!(callback_id = id.get(), "adapted link refreshed");
                Rc::new(cached.with_value(raw.value.clone()))
            }
            None => {
                tracing::trace!(callback_id = id.get(), "adapted link created");
                Rc::new(AdaptedLink {
                    value: raw.value.clone(),
                    request_change: raw.request_change.clone(),
                    on_value_change: link_utils::value_change_handler(raw),
                    on_checked_change: link_utils::checked_change_handler(raw),
                })
            }
        };

        adapted.insert(id, Rc::clone(&link));
        let len = adapted.len();
        drop(adapted);
        self.note_growth(len);
        link
    }

    fn note_growth(&self, len: usize) {
        if !self.growth_warned.get() && self.config.exceeds_warn_threshold(len) {
            self.growth_warned.set(true);
            tracing::warn!(
                entries = len,
                threshold = self.config.adapted_cache_warn_threshold,
                "adapted link cache keeps growing; is a new requestChange built on every render?"
            );
        }
    }

    /// The state-key cache.
    #[must_use]
    pub fn keyed(&self) -> &LinkCache {
        &self.keyed
    }

    /// Number of distinct external change functions seen.
    #[must_use]
    pub fn adapted_len(&self) -> usize {
        self.adapted.borrow().len()
    }

    #[must_use]
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }
}

impl std::fmt::Debug for AdaptedLinkCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdaptedLinkCache")
            .field("keyed", &self.keyed.len())
            .field("adapted", &self.adapted_len())
            .field("config", &self.config)
            .finish()
    }
}
