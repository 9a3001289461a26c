#![forbid(unsafe_code)]

//! Error types for link validation and binding configuration.
//!
//! Both kinds signal caller misuse, not transient conditions: they are
//! returned at the point of detection and never retried.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BindingError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("conflicting binding modes: {0}")]
    ConflictingBindingModes(Conflict),

    #[error("invalid link shape: {0}")]
    InvalidLinkShape(ShapeViolation),
}

/// Which exclusivity rule a configuration broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Conflict {
    #[error("cannot provide both a 'valueLink' and a 'checkedLink' at the same time")]
    BothLinks,

    #[error("cannot provide a 'valueLink' when there is a 'value' prop or 'onChange' event")]
    ValueLinkWithDirectProps,

    #[error("cannot provide a 'checkedLink' when there is a 'checked' prop or 'onChange' event")]
    CheckedLinkWithDirectProps,
}

/// How a supplied link failed shape validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeViolation {
    #[error("a link must have a 'value' property")]
    MissingValue,

    #[error("a link must have a 'requestChange' property")]
    MissingRequestChange,

    #[error("the 'requestChange' property of a link must be a function")]
    RequestChangeNotCallable,

    #[error("prop '{prop}' is not a link")]
    NotALink { prop: String },

    #[error("prop '{prop}' must be {expected}")]
    WrongPropKind { prop: String, expected: &'static str },
}

impl From<Conflict> for BindingError {
    fn from(conflict: Conflict) -> Self {
        Self::ConflictingBindingModes(conflict)
    }
}

impl From<ShapeViolation> for BindingError {
    fn from(violation: ShapeViolation) -> Self {
        Self::InvalidLinkShape(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_rule() {
        let err = BindingError::from(Conflict::BothLinks);
        assert_eq!(
            err.to_string(),
            "conflicting binding modes: cannot provide both a 'valueLink' and a 'checkedLink' at the same time"
        );

        let err = BindingError::from(ShapeViolation::NotALink {
            prop: "valueLink".into(),
        });
        assert_eq!(err.to_string(), "invalid link shape: prop 'valueLink' is not a link");
    }
}
