#![forbid(unsafe_code)]

//! One-shot deprecation notice for link-style bindings.
//!
//! The notice fires at most once per [`DeprecationNotice`] instance. The
//! process-wide instance returned by [`DeprecationNotice::global`] is what
//! resolvers use by default; tests inject their own so they do not depend on
//! which test happened to run first.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static GLOBAL_NOTICE: OnceLock<Arc<DeprecationNotice>> = OnceLock::new();

/// A check-and-set flag guarding a single warning.
#[derive(Debug, Default)]
pub struct DeprecationNotice {
    fired: AtomicBool,
}

impl DeprecationNotice {
    /// A fresh, unfired notice.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
        }
    }

    /// The process-wide notice. Never reset.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL_NOTICE.get_or_init(|| Arc::new(Self::new())))
    }

    /// Emit the notice if it has not fired yet. Returns `true` if this call
    /// emitted it.
    pub fn notify_once(&self) -> bool {
        if self.fired.swap(true, Ordering::AcqRel) {
            return false;
        }
        tracing::warn!(
            "the use of 'valueLink' and 'checkedLink' is deprecated; pass 'value'/'checked' with 'onChange' instead"
        );
        true
    }

    /// Whether the notice has been emitted.
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}
