#![forbid(unsafe_code)]

//! Test harness for linkshim bindings.
//!
//! Provides the collaborators the core deliberately leaves out:
//!
//! - [`MockState`] / [`LinkedComponent`]: stateful owners.
//! - [`TextInput`] / [`CheckboxInput`]: view components that hold a
//!   [`BindingResolver`](linkshim_core::BindingResolver) and record what they
//!   render.
//! - [`FormHost`]: a parent binding its own state into one of those inputs.

pub mod host;
pub mod input;
pub mod mock_state;

pub use host::{BindingStyle, FormHost, HOST_KEY};
pub use input::{Checkbox, CheckboxInput, Input, InputKind, RenderedInput, Text, TextInput};
pub use mock_state::{LinkedComponent, MockState};
