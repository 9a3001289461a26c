#![forbid(unsafe_code)]

//! Simulated form inputs backed by a [`BindingResolver`].
//!
//! An [`Input`] plays the part of a view component: on every prop change it
//! asks its resolver for `value` / `checked` / `on_change` and records what
//! it would hand to the rendered element. Tests inspect the
//! [`RenderedInput`] and dispatch events through
//! [`simulate_change`](Input::simulate_change).

use std::marker::PhantomData;
use std::sync::Arc;

use linkshim_core::{
    BindingConfig, BindingResolver, ChangeEvent, DeprecationNotice, EventHandler, LinkConfig,
    Result, Value,
};

/// What an input renders from its resolver.
pub trait InputKind {
    /// The element's `type` attribute.
    const TYPE: &'static str;

    fn render(resolver: &BindingResolver) -> RenderedInput;
}

/// `<input type="text">`: renders `value`.
#[derive(Debug)]
pub struct Text;

/// `<input type="checkbox">`: renders `checked`.
#[derive(Debug)]
pub struct Checkbox;

impl InputKind for Text {
    const TYPE: &'static str = "text";

    fn render(resolver: &BindingResolver) -> RenderedInput {
        RenderedInput {
            input_type: Self::TYPE,
            value: resolver.value(),
            checked: None,
            on_change: resolver.on_change(),
        }
    }
}

impl InputKind for Checkbox {
    const TYPE: &'static str = "checkbox";

    fn render(resolver: &BindingResolver) -> RenderedInput {
        RenderedInput {
            input_type: Self::TYPE,
            value: None,
            checked: resolver.checked(),
            on_change: resolver.on_change(),
        }
    }
}

/// The props an input passed to its element on the last render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedInput {
    pub input_type: &'static str,
    pub value: Option<Value>,
    pub checked: Option<Value>,
    pub on_change: Option<EventHandler>,
}

/// A mounted input component.
#[derive(Debug)]
pub struct Input<K: InputKind> {
    resolver: BindingResolver,
    rendered: RenderedInput,
    renders: u64,
    _kind: PhantomData<K>,
}

pub type TextInput = Input<Text>;
pub type CheckboxInput = Input<Checkbox>;

impl<K: InputKind> Input<K> {
    /// Mount with `config` and render once.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from [`BindingResolver::mount`].
    pub fn mount(config: BindingConfig) -> Result<Self> {
        Self::from_resolver(BindingResolver::mount(config)?)
    }

    /// Mount with explicit settings and deprecation notice.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from [`BindingResolver::mount_with`].
    pub fn mount_with(
        config: BindingConfig,
        settings: LinkConfig,
        notice: Arc<DeprecationNotice>,
    ) -> Result<Self> {
        Self::from_resolver(BindingResolver::mount_with(config, settings, notice)?)
    }

    fn from_resolver(resolver: BindingResolver) -> Result<Self> {
        let rendered = K::render(&resolver);
        Ok(Self {
            resolver,
            rendered,
            renders: 1,
            _kind: PhantomData,
        })
    }

    /// Replace props and re-render.
    ///
    /// # Errors
    ///
    /// On a conflicting configuration the previous props and render stay.
    pub fn set_props(&mut self, config: BindingConfig) -> Result<()> {
        self.resolver.receive(config)?;
        self.render();
        Ok(())
    }

    fn render(&mut self) {
        self.rendered = K::render(&self.resolver);
        self.renders += 1;
    }

    /// Dispatch `event` to the rendered change handler. Returns whether a
    /// handler was attached.
    pub fn simulate_change(&self, event: &ChangeEvent) -> bool {
        match &self.rendered.on_change {
            Some(handler) => {
                handler.call(event);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn rendered(&self) -> &RenderedInput {
        &self.rendered
    }

    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    #[must_use]
    pub fn resolver(&self) -> &BindingResolver {
        &self.resolver
    }
}
