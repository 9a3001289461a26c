#![forbid(unsafe_code)]

//! Link records.
//!
//! - [`RawLink`]: the minimal `{value, request_change}` pair an owner hands out.
//! - [`AdaptedLink`]: a raw link plus event-shaped handlers derived from it.
//! - [`Link`]: either of the above. Adaptation dispatches on the variant
//!   instead of probing for handler fields.
//!
//! Links are immutable. A changed value means a new link instance; caches hand
//! adapted links out as `Rc<AdaptedLink>` so "the same link" is checkable with
//! [`Rc::ptr_eq`].

use std::rc::Rc;

use crate::callback::{EventHandler, RequestChange};
use crate::value::Value;

/// Anything exposing a current value and a change function.
pub trait LinkSource {
    fn value(&self) -> &Value;
    fn request_change(&self) -> &RequestChange;
}

/// Minimal two-way link: current value plus change function.
#[derive(Clone, Debug, PartialEq)]
pub struct RawLink {
    pub value: Value,
    pub request_change: RequestChange,
}

impl RawLink {
    #[must_use]
    pub fn new(value: impl Into<Value>, request_change: RequestChange) -> Self {
        Self {
            value: value.into(),
            request_change,
        }
    }
}

impl LinkSource for RawLink {
    fn value(&self) -> &Value {
        &self.value
    }

    fn request_change(&self) -> &RequestChange {
        &self.request_change
    }
}

/// A link carrying both the raw change function and event-shaped adapters
/// over it.
#[derive(Clone, Debug, PartialEq)]
pub struct AdaptedLink {
    pub value: Value,
    pub request_change: RequestChange,
    pub on_value_change: EventHandler,
    pub on_checked_change: EventHandler,
}

impl AdaptedLink {
    /// A link with `value` that reuses every handler of `self`.
    #[must_use]
    pub fn with_value(&self, value: Value) -> Self {
        Self {
            value,
            request_change: self.request_change.clone(),
            on_value_change: self.on_value_change.clone(),
            on_checked_change: self.on_checked_change.clone(),
        }
    }

    /// Whether `other` carries exactly the same handler identities.
    #[must_use]
    pub fn shares_handlers(&self, other: &Self) -> bool {
        self.request_change.same_as(&other.request_change)
            && self.on_value_change.same_as(&other.on_value_change)
            && self.on_checked_change.same_as(&other.on_checked_change)
    }
}

impl LinkSource for AdaptedLink {
    fn value(&self) -> &Value {
        &self.value
    }

    fn request_change(&self) -> &RequestChange {
        &self.request_change
    }
}

/// A link in either shape.
#[derive(Clone, Debug)]
pub enum Link {
    Raw(RawLink),
    Adapted(Rc<AdaptedLink>),
}

impl LinkSource for Link {
    fn value(&self) -> &Value {
        match self {
            Self::Raw(raw) => &raw.value,
            Self::Adapted(adapted) => &adapted.value,
        }
    }

    fn request_change(&self) -> &RequestChange {
        match self {
            Self::Raw(raw) => &raw.request_change,
            Self::Adapted(adapted) => &adapted.request_change,
        }
    }
}

impl From<RawLink> for Link {
    fn from(raw: RawLink) -> Self {
        Self::Raw(raw)
    }
}

impl From<Rc<AdaptedLink>> for Link {
    fn from(adapted: Rc<AdaptedLink>) -> Self {
        Self::Adapted(adapted)
    }
}
