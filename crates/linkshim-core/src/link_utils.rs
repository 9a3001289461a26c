#![forbid(unsafe_code)]

//! Stateless helpers that turn a link into event-shaped handlers.
//!
//! Every call allocates a new closure with a new [`CallbackId`]. Callers that
//! need stable identity cache the result (see [`crate::cache`] and
//! [`crate::resolver`]).
//!
//! [`CallbackId`]: crate::callback::CallbackId

use crate::callback::EventHandler;
use crate::link::LinkSource;
use crate::value::Value;

/// The link's current value, or `None` when there is no link.
#[must_use]
pub fn extract_value<L: LinkSource + ?Sized>(link: Option<&L>) -> Option<Value> {
    link.map(|l| l.value().clone())
}

/// A handler forwarding `event.target.value` to the link's change function.
#[must_use]
pub fn derive_value_change_handler<L: LinkSource + ?Sized>(link: Option<&L>) -> Option<EventHandler> {
    link.map(value_change_handler)
}

/// A handler forwarding `event.target.checked` to the link's change function.
#[must_use]
pub fn derive_checked_change_handler<L: LinkSource + ?Sized>(
    link: Option<&L>,
) -> Option<EventHandler> {
    link.map(checked_change_handler)
}

/// [`derive_value_change_handler`] for a link known to be present.
#[must_use]
pub fn value_change_handler<L: LinkSource + ?Sized>(link: &L) -> EventHandler {
    let request_change = link.request_change().clone();
    EventHandler::new(move |event| request_change.call(event.target_value()))
}

/// [`derive_checked_change_handler`] for a link known to be present.
#[must_use]
pub fn checked_change_handler<L: LinkSource + ?Sized>(link: &L) -> EventHandler {
    let request_change = link.request_change().clone();
    EventHandler::new(move |event| request_change.call(event.target_checked()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::RequestChange;
    use crate::link::RawLink;
    use crate::value::ChangeEvent;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_link(value: impl Into<Value>) -> (RawLink, Rc<RefCell<Vec<Value>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let l = Rc::clone(&log);
        let link = RawLink::new(value, RequestChange::new(move |v| l.borrow_mut().push(v)));
        (link, log)
    }

    #[test]
    fn absent_link_yields_nothing() {
        let none: Option<&RawLink> = None;
        assert_eq!(extract_value(none), None);
        assert!(derive_value_change_handler(none).is_none());
        assert!(derive_checked_change_handler(none).is_none());
    }

    #[test]
    fn extract_value_reads_link() {
        let (link, _) = recording_link("Ada");
        assert_eq!(extract_value(Some(&link)), Some(Value::from("Ada")));
    }

    #[test]
    fn value_handler_unwraps_target_value() {
        let (link, log) = recording_link("Ada");
        let h = derive_value_change_handler(Some(&link)).expect("link present");
        h.call(&ChangeEvent::value("Grace"));
        assert_eq!(*log.borrow(), vec![Value::from("Grace")]);
    }

    #[test]
    fn checked_handler_unwraps_target_checked() {
        let (link, log) = recording_link(false);
        let h = derive_checked_change_handler(Some(&link)).expect("link present");
        h.call(&ChangeEvent::checked(true));
        assert_eq!(*log.borrow(), vec![Value::Bool(true)]);
    }

    #[test]
    fn each_call_allocates_a_new_handler() {
        let (link, _) = recording_link(1_i64);
        let a = derive_value_change_handler(Some(&link)).expect("link present");
        let b = derive_value_change_handler(Some(&link)).expect("link present");
        assert!(!a.same_as(&b));
    }
}
