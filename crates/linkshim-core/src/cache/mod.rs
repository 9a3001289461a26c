#![forbid(unsafe_code)]

//! Identity-preserving link caches.
//!
//! Both caches belong to a single owner and live exactly as long as it does.
//!
//! - [`LinkCache`]: links derived from the owner's own state, keyed by state
//!   key.
//! - [`AdaptedLinkCache`]: a [`LinkCache`] plus adaptation of links supplied
//!   from outside, keyed by the identity of their change function.
//!
//! # Architecture
//!
//! Caches use `RefCell` for interior mutability so owners can call them from
//! `&self` render paths. No borrow is held while a handler runs; handlers
//! reach the owner through a `Weak`, so an owner may store its own cache
//! without forming an `Rc` cycle.

pub mod adapted;
pub mod keyed;

pub use adapted::AdaptedLinkCache;
pub use keyed::LinkCache;
