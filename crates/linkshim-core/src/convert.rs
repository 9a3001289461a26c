#![forbid(unsafe_code)]

//! Shape validation and one-shot conversion of raw links.
//!
//! [`convert`] checks that a loosely-typed link has a `value` and a callable
//! `requestChange`, then derives `{value, on_change, checked_on_change}` from
//! it. Nothing is cached here; identity-stable conversion lives in
//! [`crate::cache::AdaptedLinkCache`].

use crate::callback::EventHandler;
use crate::error::{BindingError, Result, ShapeViolation};
use crate::link::{LinkSource, RawLink};
use crate::link_utils;
use crate::props::{Prop, Props};
use crate::value::Value;

/// Prop name of a link's value.
pub const VALUE_PROP: &str = "value";
/// Prop name of a link's change function.
pub const REQUEST_CHANGE_PROP: &str = "requestChange";

/// A link converted into direct value/handler form.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertedLink {
    pub value: Value,
    /// Text-input handler (forwards `target.value`).
    pub on_change: EventHandler,
    /// Checkbox handler (forwards `target.checked`).
    pub checked_on_change: EventHandler,
}

/// Validate `link` and convert it.
///
/// # Errors
///
/// [`BindingError::InvalidLinkShape`] when `value` or `requestChange` is
/// absent, or `requestChange` is not a change function.
pub fn convert(link: &Props) -> Result<ConvertedLink> {
    let raw = RawLink::try_from(link)?;
    Ok(convert_link(&raw))
}

/// Convert an already well-typed link.
#[must_use]
pub fn convert_link<L: LinkSource + ?Sized>(link: &L) -> ConvertedLink {
    ConvertedLink {
        value: link.value().clone(),
        on_change: link_utils::value_change_handler(link),
        checked_on_change: link_utils::checked_change_handler(link),
    }
}

impl TryFrom<&Props> for RawLink {
    type Error = BindingError;

    fn try_from(props: &Props) -> Result<Self> {
        let value = match props.get(VALUE_PROP) {
            Some(Prop::Value(v)) => v.clone(),
            Some(other) => {
                tracing::debug!(kind = other.kind(), "link value prop has wrong kind");
                return Err(ShapeViolation::WrongPropKind {
                    prop: VALUE_PROP.to_owned(),
                    expected: "a value",
                }
                .into());
            }
            None => return Err(ShapeViolation::MissingValue.into()),
        };

        let request_change = match props.get(REQUEST_CHANGE_PROP) {
            Some(Prop::Function(f)) => f.clone(),
            Some(_) => return Err(ShapeViolation::RequestChangeNotCallable.into()),
            None => return Err(ShapeViolation::MissingRequestChange.into()),
        };

        Ok(Self {
            value,
            request_change,
        })
    }
}
