#![forbid(unsafe_code)]

//! Link values and the event records that change handlers consume.
//!
//! A [`Value`] is the dynamic scalar a link carries. State keys are untyped
//! from the binding layer's point of view (a text field and a checkbox may be
//! bound to keys of the same owner), so values are modelled as a small closed
//! sum rather than a type parameter.
//!
//! A [`ChangeEvent`] mirrors the DOM-style `{target: {value | checked}}`
//! record. Missing target fields are forwarded as [`Value::Null`].

use core::fmt;

/// Dynamic link value.
///
/// `Null` stands in for "no value": an unset state key, or an event target
/// without the field a handler extracts.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Whether this is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// The element an event originated from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventTarget {
    /// Current text of a text-like input.
    pub value: Option<String>,
    /// Current state of a checkbox-like input.
    pub checked: Option<bool>,
}

/// A DOM-style change event: `{target: {value | checked}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeEvent {
    pub target: EventTarget,
}

impl ChangeEvent {
    /// Event from a text input whose content became `value`.
    #[must_use]
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            target: EventTarget {
                value: Some(value.into()),
                checked: None,
            },
        }
    }

    /// Event from a checkbox toggled to `checked`.
    #[must_use]
    pub fn checked(checked: bool) -> Self {
        Self {
            target: EventTarget {
                value: None,
                checked: Some(checked),
            },
        }
    }

    /// `target.value` as a link value.
    #[must_use]
    pub fn target_value(&self) -> Value {
        self.target.value.clone().into()
    }

    /// `target.checked` as a link value.
    #[must_use]
    pub fn target_checked(&self) -> Value {
        self.target.checked.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_target_fields_read_as_null() {
        let ev = ChangeEvent::default();
        assert!(ev.target_value().is_null());
        assert!(ev.target_checked().is_null());
    }

    #[test]
    fn target_fields_convert() {
        assert_eq!(ChangeEvent::value("Grace").target_value(), Value::from("Grace"));
        assert_eq!(ChangeEvent::checked(true).target_checked(), Value::Bool(true));
        assert!(ChangeEvent::checked(true).target_value().is_null());
    }

    #[test]
    fn default_is_null() {
        assert_eq!(Value::default(), Value::Null);
        assert!(Value::default().is_null());
        assert!(!Value::Bool(false).is_null());
    }

    #[test]
    fn display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Int(-4).to_string(), "-4");
        assert_eq!(Value::from("Ada").to_string(), "Ada");
    }
}
