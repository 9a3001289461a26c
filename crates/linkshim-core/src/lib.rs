#![forbid(unsafe_code)]

//! Two-way link adaptation with identity-stable handlers.
//!
//! A view component can be bound to external state either through a link
//! (`{value, requestChange}`) or through a bare value plus change callbacks.
//! This crate converts between the two and memoizes every handler it derives,
//! so consumers that compare callbacks by identity see the same function for
//! as long as the underlying change function is unchanged.
//!
//! - [`link_utils`]: stateless handler derivation.
//! - [`convert`]: shape validation and one-shot conversion.
//! - [`LinkCache`] / [`AdaptedLinkCache`]: per-owner memoization.
//! - [`BindingResolver`]: the façade a component queries during render.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use linkshim_core::{AdaptedLinkCache, ChangeEvent, StateOwner, Value};
//!
//! #[derive(Default)]
//! struct Form {
//!     name: RefCell<Value>,
//! }
//!
//! impl StateOwner for Form {
//!     fn state(&self, _key: &str) -> Option<Value> {
//!         Some(self.name.borrow().clone())
//!     }
//!     fn apply_partial_update(&self, _key: &str, value: Value) {
//!         *self.name.borrow_mut() = value;
//!     }
//! }
//!
//! let form = Rc::new(Form::default());
//! *form.name.borrow_mut() = Value::from("Ada");
//! let links = AdaptedLinkCache::new();
//!
//! let link = links.link_for(&form, "name");
//! link.on_value_change.call(&ChangeEvent::value("Grace"));
//!
//! let next = links.link_for(&form, "name");
//! assert_eq!(next.value, Value::from("Grace"));
//! assert!(next.request_change.same_as(&link.request_change));
//! ```

pub mod cache;
pub mod callback;
pub mod config;
pub mod convert;
pub mod error;
pub mod link;
pub mod link_utils;
pub mod notice;
pub mod owner;
pub mod props;
pub mod resolver;
pub mod value;

pub use cache::{AdaptedLinkCache, LinkCache};
pub use callback::{Callback, CallbackId, EventHandler, RequestChange};
pub use config::LinkConfig;
pub use convert::{ConvertedLink, convert, convert_link};
pub use error::{BindingError, Conflict, Result, ShapeViolation};
pub use link::{AdaptedLink, Link, LinkSource, RawLink};
pub use notice::DeprecationNotice;
pub use owner::StateOwner;
pub use props::{Prop, Props};
pub use resolver::{BindingConfig, BindingMode, BindingResolver};
pub use value::{ChangeEvent, EventTarget, Value};
