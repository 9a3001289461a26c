#![forbid(unsafe_code)]

//! A parent component that renders an [`Input`] bound to its own state.
//!
//! [`FormHost`] keeps a single `"value"` state key and passes it down in one
//! of four [`BindingStyle`]s. After each simulated change it re-renders, the
//! way a real parent would after its state changed.

use std::rc::{Rc, Weak};
use std::sync::Arc;

use linkshim_core::{
    BindingConfig, ChangeEvent, DeprecationNotice, EventHandler, LinkConfig, Result, StateOwner,
    Value,
};

use crate::input::{Input, InputKind};
use crate::mock_state::LinkedComponent;

/// State key the host binds.
pub const HOST_KEY: &str = "value";

/// How the host hands its state to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingStyle {
    /// `valueLink={link_state("value")}`
    ValueLink,
    /// `checkedLink={link_state("value")}`
    CheckedLink,
    /// `value={state.value} onChange={..}`
    Value,
    /// `checked={state.value} onChange={..}`
    Checked,
}

/// Parent component owning the bound state.
pub struct FormHost<K: InputKind> {
    owner: Rc<LinkedComponent>,
    style: BindingStyle,
    on_change: EventHandler,
    input: Input<K>,
}

impl<K: InputKind> FormHost<K> {
    /// Mount with `initial` state (empty text when `None`).
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from the input.
    pub fn mount(style: BindingStyle, initial: Option<Value>) -> Result<Self> {
        Self::mount_with(
            style,
            initial,
            LinkConfig::default(),
            DeprecationNotice::global(),
        )
    }

    /// [`mount`](Self::mount) with explicit settings and notice.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from the input.
    pub fn mount_with(
        style: BindingStyle,
        initial: Option<Value>,
        settings: LinkConfig,
        notice: Arc<DeprecationNotice>,
    ) -> Result<Self> {
        let owner = LinkedComponent::with_config(settings);
        owner.set_state(HOST_KEY, initial.unwrap_or_else(|| Value::from("")));
        let on_change = direct_handler(&owner, style);
        let config = props_for(&owner, style, &on_change);
        let input = Input::mount_with(config, settings, notice)?;
        Ok(Self {
            owner,
            style,
            on_change,
            input,
        })
    }

    /// Re-render the input from current state.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from the input.
    pub fn render(&mut self) -> Result<()> {
        let config = props_for(&self.owner, self.style, &self.on_change);
        self.input.set_props(config)
    }

    /// Dispatch `event` to the input, then re-render.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from the re-render.
    pub fn simulate_change(&mut self, event: &ChangeEvent) -> Result<bool> {
        let handled = self.input.simulate_change(event);
        self.render()?;
        Ok(handled)
    }

    /// Current bound state.
    #[must_use]
    pub fn state(&self) -> Value {
        self.owner.get(HOST_KEY)
    }

    #[must_use]
    pub fn input(&self) -> &Input<K> {
        &self.input
    }

    #[must_use]
    pub fn owner(&self) -> &Rc<LinkedComponent> {
        &self.owner
    }
}

fn props_for(owner: &Rc<LinkedComponent>, style: BindingStyle, on_change: &EventHandler) -> BindingConfig {
    match style {
        BindingStyle::ValueLink => BindingConfig::new().value_link(owner.link_state(HOST_KEY)),
        BindingStyle::CheckedLink => BindingConfig::new().checked_link(owner.link_state(HOST_KEY)),
        BindingStyle::Value => BindingConfig::new()
            .value(owner.get(HOST_KEY))
            .on_change(on_change.clone()),
        BindingStyle::Checked => BindingConfig::new()
            .checked(owner.get(HOST_KEY))
            .on_change(on_change.clone()),
    }
}

/// The host's own `onChange`, used by the direct styles.
fn direct_handler(owner: &Rc<LinkedComponent>, style: BindingStyle) -> EventHandler {
    let owner: Weak<LinkedComponent> = Rc::downgrade(owner);
    let checked = matches!(style, BindingStyle::Checked | BindingStyle::CheckedLink);
    EventHandler::new(move |event| {
        let Some(owner) = owner.upgrade() else {
            return;
        };
        let value = if checked {
            event.target_checked()
        } else {
            event.target_value()
        };
        owner.apply_partial_update(HOST_KEY, value);
    })
}
