#![forbid(unsafe_code)]

//! The binding façade a view component holds.
//!
//! A component accepts its binding either as a link (`valueLink` /
//! `checkedLink`) or as direct props (`value` / `checked` plus `onChange`).
//! [`BindingResolver`] hides the difference: the view reads `value()`,
//! `checked()` and `on_change()` and never looks at the mode.
//!
//! # Lifecycle
//!
//! ```ignore
//! let mut resolver = BindingResolver::mount(BindingConfig::new().value_link(link))?;
//! render(resolver.value(), resolver.on_change());
//! resolver.receive(next_config)?; // on every prop change
//! ```
//!
//! # Invariants
//!
//! 1. At most one of `valueLink` / `checkedLink` is configured.
//! 2. A configured link excludes its direct equivalents (`value`/`onChange`
//!    for `valueLink`; `checked`/`onChange` for `checkedLink`).
//! 3. `on_change()` returns the same handler for as long as the configured
//!    link's change function stays the same.
//! 4. Accessors never log and never touch the configuration; `on_change()`
//!    only fills its handler cache.
//!
//! A `Null` direct value counts as absent, as an unset prop would.

use std::cell::RefCell;
use std::sync::Arc;

use ahash::AHashMap;

use crate::callback::{CallbackId, EventHandler};
use crate::config::LinkConfig;
use crate::error::{BindingError, Conflict, Result, ShapeViolation};
use crate::link::{Link, LinkSource, RawLink};
use crate::link_utils;
use crate::notice::DeprecationNotice;
use crate::props::{Prop, Props};
use crate::value::Value;

pub const VALUE_LINK_PROP: &str = "valueLink";
pub const CHECKED_LINK_PROP: &str = "checkedLink";
pub const VALUE_PROP: &str = "value";
pub const CHECKED_PROP: &str = "checked";
pub const ON_CHANGE_PROP: &str = "onChange";

/// Which binding convention a configuration uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingMode {
    /// Nothing bound.
    Unbound,
    ValueLinked,
    CheckedLinked,
    /// `value` / `checked` and/or `onChange` supplied directly.
    DirectValue,
}

impl BindingMode {
    #[must_use]
    pub const fn is_linked(self) -> bool {
        matches!(self, Self::ValueLinked | Self::CheckedLinked)
    }
}

/// A component's binding inputs.
#[derive(Clone, Debug, Default)]
pub struct BindingConfig {
    pub value_link: Option<Link>,
    pub checked_link: Option<Link>,
    pub value: Option<Value>,
    pub checked: Option<Value>,
    pub on_change: Option<EventHandler>,
}

impl BindingConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value_link(mut self, link: impl Into<Link>) -> Self {
        self.value_link = Some(link.into());
        self
    }

    #[must_use]
    pub fn checked_link(mut self, link: impl Into<Link>) -> Self {
        self.checked_link = Some(link.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn checked(mut self, checked: impl Into<Value>) -> Self {
        self.checked = Some(checked.into());
        self
    }

    #[must_use]
    pub fn on_change(mut self, handler: EventHandler) -> Self {
        self.on_change = Some(handler);
        self
    }

    /// Read a configuration out of loosely-typed props.
    ///
    /// A link prop may be a [`Prop::Link`] or an object shaped like
    /// `{value, requestChange}`. `Null` props are treated as absent.
    ///
    /// Only prop shapes are checked here. Exclusivity is left to
    /// [`validate`](Self::validate), which the resolver runs when it observes
    /// the configuration.
    ///
    /// # Errors
    ///
    /// [`BindingError::InvalidLinkShape`] for props of the wrong kind or
    /// malformed link objects.
    pub fn from_props(props: &Props) -> Result<Self> {
        Ok(Self {
            value_link: link_prop(props, VALUE_LINK_PROP)?,
            checked_link: link_prop(props, CHECKED_LINK_PROP)?,
            value: value_prop(props, VALUE_PROP)?,
            checked: value_prop(props, CHECKED_PROP)?,
            on_change: handler_prop(props, ON_CHANGE_PROP)?,
        })
    }

    /// Check exclusivity and report the mode.
    ///
    /// # Errors
    ///
    /// [`BindingError::ConflictingBindingModes`] naming the broken rule.
    pub fn validate(&self) -> Result<BindingMode> {
        self.check_single_link()?;
        if self.value_link.is_some() && (present(&self.value) || self.on_change.is_some()) {
            return Err(Conflict::ValueLinkWithDirectProps.into());
        }
        if self.checked_link.is_some() && (present(&self.checked) || self.on_change.is_some()) {
            return Err(Conflict::CheckedLinkWithDirectProps.into());
        }
        Ok(self.mode())
    }

    /// The mode this configuration selects, assuming it is valid.
    #[must_use]
    pub fn mode(&self) -> BindingMode {
        if self.value_link.is_some() {
            BindingMode::ValueLinked
        } else if self.checked_link.is_some() {
            BindingMode::CheckedLinked
        } else if present(&self.value) || present(&self.checked) || self.on_change.is_some() {
            BindingMode::DirectValue
        } else {
            BindingMode::Unbound
        }
    }

    fn check_single_link(&self) -> Result<()> {
        if self.value_link.is_some() && self.checked_link.is_some() {
            return Err(Conflict::BothLinks.into());
        }
        Ok(())
    }
}

fn present(value: &Option<Value>) -> bool {
    value.as_ref().is_some_and(|v| !v.is_null())
}

fn link_prop(props: &Props, name: &str) -> Result<Option<Link>> {
    match props.get(name) {
        None | Some(Prop::Value(Value::Null)) => Ok(None),
        Some(Prop::Link(link)) => Ok(Some(link.clone())),
        Some(Prop::Object(obj)) => Ok(Some(Link::Raw(RawLink::try_from(obj)?))),
        Some(_) => Err(ShapeViolation::NotALink {
            prop: name.to_owned(),
        }
        .into()),
    }
}

fn value_prop(props: &Props, name: &str) -> Result<Option<Value>> {
    match props.get(name) {
        None | Some(Prop::Value(Value::Null)) => Ok(None),
        Some(Prop::Value(v)) => Ok(Some(v.clone())),
        Some(_) => Err(ShapeViolation::WrongPropKind {
            prop: name.to_owned(),
            expected: "a value",
        }
        .into()),
    }
}

fn handler_prop(props: &Props, name: &str) -> Result<Option<EventHandler>> {
    match props.get(name) {
        None | Some(Prop::Value(Value::Null)) => Ok(None),
        Some(Prop::Handler(h)) => Ok(Some(h.clone())),
        Some(_) => Err(ShapeViolation::WrongPropKind {
            prop: name.to_owned(),
            expected: "an event handler",
        }
        .into()),
    }
}

/// Resolves `value` / `checked` / `onChange` for a component, whatever
/// binding convention its parent used.
pub struct BindingResolver {
    config: BindingConfig,
    settings: LinkConfig,
    notice: Arc<DeprecationNotice>,
    value_handlers: RefCell<AHashMap<CallbackId, EventHandler>>,
    checked_handlers: RefCell<AHashMap<CallbackId, EventHandler>>,
}

impl BindingResolver {
    /// Validate the initial configuration, using the process-wide
    /// deprecation notice and default settings.
    ///
    /// # Errors
    ///
    /// [`BindingError::ConflictingBindingModes`] if `config` is not exclusive.
    pub fn mount(config: BindingConfig) -> Result<Self> {
        Self::mount_with(config, LinkConfig::default(), DeprecationNotice::global())
    }

    /// [`mount`](Self::mount) with explicit settings and notice.
    ///
    /// # Errors
    ///
    /// [`BindingError::ConflictingBindingModes`] if `config` is not exclusive.
    pub fn mount_with(
        config: BindingConfig,
        settings: LinkConfig,
        notice: Arc<DeprecationNotice>,
    ) -> Result<Self> {
        let resolver = Self {
            config: BindingConfig::default(),
            settings,
            notice,
            value_handlers: RefCell::new(AHashMap::new()),
            checked_handlers: RefCell::new(AHashMap::new()),
        };
        let mode = resolver.observe(&config)?;
        tracing::debug!(?mode, "binding mounted");
        Ok(Self { config, ..resolver })
    }

    /// Replace the configuration. On error the previous one stays in effect.
    ///
    /// # Errors
    ///
    /// [`BindingError::ConflictingBindingModes`] if `next` is not exclusive.
    pub fn receive(&mut self, next: BindingConfig) -> Result<BindingMode> {
        let mode = self.observe(&next)?;
        self.config = next;
        Ok(mode)
    }

    /// [`receive`](Self::receive) from loosely-typed props.
    ///
    /// # Errors
    ///
    /// Any error from [`BindingConfig::from_props`] or
    /// [`receive`](Self::receive).
    pub fn receive_props(&mut self, props: &Props) -> Result<BindingMode> {
        let next = BindingConfig::from_props(props)?;
        self.receive(next)
    }

    fn observe(&self, config: &BindingConfig) -> Result<BindingMode> {
        config.check_single_link()?;
        if config.mode().is_linked() && self.settings.emit_deprecation_notice {
            self.notice.notify_once();
        }
        config.validate().inspect_err(|err: &BindingError| {
            tracing::debug!(%err, "binding configuration rejected");
        })
    }

    #[must_use]
    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> BindingMode {
        self.config.mode()
    }

    /// The value to display in a text-like input.
    #[must_use]
    pub fn value(&self) -> Option<Value> {
        match &self.config.value_link {
            Some(link) => link_utils::extract_value(Some(link)),
            None => self.config.value.clone(),
        }
    }

    /// The state of a checkbox-like input.
    #[must_use]
    pub fn checked(&self) -> Option<Value> {
        match &self.config.checked_link {
            Some(link) => link_utils::extract_value(Some(link)),
            None => self.config.checked.clone(),
        }
    }

    /// The change handler to attach, stable per underlying change function.
    #[must_use]
    pub fn on_change(&self) -> Option<EventHandler> {
        if let Some(handler) = &self.config.on_change {
            return Some(handler.clone());
        }
        if let Some(link) = &self.config.value_link {
            return Some(match link {
                Link::Adapted(adapted) => adapted.on_value_change.clone(),
                Link::Raw(raw) => {
                    cached_handler(&self.value_handlers, raw, link_utils::value_change_handler)
                }
            });
        }
        if let Some(link) = &self.config.checked_link {
            return Some(match link {
                Link::Adapted(adapted) => adapted.on_checked_change.clone(),
                Link::Raw(raw) => {
                    cached_handler(&self.checked_handlers, raw, link_utils::checked_change_handler)
                }
            });
        }
        None
    }

    /// Number of distinct change functions with a cached handler.
    #[must_use]
    pub fn cached_handler_count(&self) -> usize {
        self.value_handlers.borrow().len() + self.checked_handlers.borrow().len()
    }
}

fn cached_handler(
    cache: &RefCell<AHashMap<CallbackId, EventHandler>>,
    raw: &RawLink,
    derive: fn(&RawLink) -> EventHandler,
) -> EventHandler {
    let id = raw.request_change().id();
    cache
        .borrow_mut()
        .entry(id)
        .or_insert_with(|| {
            tracing::trace!(callback_id = id.get(), "change handler derived");
            derive(raw)
        })
        .clone()
}

impl std::fmt::Debug for BindingResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingResolver")
            .field("mode", &self.mode())
            .field("cached_handlers", &self.cached_handler_count())
            .finish()
    }
}
