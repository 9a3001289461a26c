#![forbid(unsafe_code)]

//! Loosely-typed property bags.
//!
//! View layers that assemble component inputs dynamically hand the binding
//! layer a [`Props`] map rather than a typed config. Shape validation
//! ([`crate::convert`], [`crate::resolver::BindingConfig::from_props`]) runs
//! against this surface, which is where a link can be missing its value or
//! carry something other than a change function.

use ahash::AHashMap;

use crate::callback::{EventHandler, RequestChange};
use crate::link::Link;
use crate::value::Value;

/// One property value.
#[derive(Clone, Debug)]
pub enum Prop {
    Value(Value),
    /// A value-receiving change function.
    Function(RequestChange),
    /// An event-receiving handler.
    Handler(EventHandler),
    Link(Link),
    /// A nested bag, e.g. a link written out as `{value, requestChange}`.
    Object(Props),
}

impl Prop {
    /// Short description of the variant, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Value(_) => "a value",
            Self::Function(_) => "a change function",
            Self::Handler(_) => "an event handler",
            Self::Link(_) => "a link",
            Self::Object(_) => "an object",
        }
    }
}

impl From<Value> for Prop {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

impl From<RequestChange> for Prop {
    fn from(f: RequestChange) -> Self {
        Self::Function(f)
    }
}

impl From<EventHandler> for Prop {
    fn from(h: EventHandler) -> Self {
        Self::Handler(h)
    }
}

impl From<Link> for Prop {
    fn from(l: Link) -> Self {
        Self::Link(l)
    }
}

impl From<Props> for Prop {
    fn from(p: Props) -> Self {
        Self::Object(p)
    }
}

/// Name-to-[`Prop`] map.
#[derive(Clone, Debug, Default)]
pub struct Props {
    entries: AHashMap<String, Prop>,
}

impl Props {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, prop: impl Into<Prop>) -> Self {
        self.insert(name, prop);
        self
    }

    /// Insert or replace `name`, returning the previous prop.
    pub fn insert(&mut self, name: impl Into<String>, prop: impl Into<Prop>) -> Option<Prop> {
        self.entries.insert(name.into(), prop.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Prop> {
        self.entries.remove(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Prop> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_lookup() {
        let props = Props::new()
            .with("value", Value::from("Ada"))
            .with("onChange", EventHandler::new(|_| {}));
        assert_eq!(props.len(), 2);
        assert!(props.contains("value"));
        assert!(matches!(props.get("onChange"), Some(Prop::Handler(_))));
        assert!(props.get("checked").is_none());
    }

    #[test]
    fn insert_replaces() {
        let mut props = Props::new();
        assert!(props.insert("value", Value::Int(1)).is_none());
        let prev = props.insert("value", Value::Int(2));
        assert!(matches!(prev, Some(Prop::Value(Value::Int(1)))));
        assert!(props.remove("value").is_some());
        assert!(props.is_empty());
    }

    #[test]
    fn kind_names() {
        assert_eq!(Prop::Value(Value::Null).kind(), "a value");
        assert_eq!(Prop::Object(Props::new()).kind(), "an object");
    }
}
