#![forbid(unsafe_code)]

//! Tunables shared by the caches and the resolver.

/// Configuration for link adaptation.
///
/// With the `serde` feature, missing fields fall back to their defaults, so a
/// policy file only needs to name what it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LinkConfig {
    /// Emit the one-time deprecation notice when a link binding is first seen.
    pub emit_deprecation_notice: bool,
    /// Warn once when an owner's adapted-link cache grows past this many
    /// entries. `0` disables the warning. Entries are never evicted.
    pub adapted_cache_warn_threshold: usize,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            emit_deprecation_notice: true,
            adapted_cache_warn_threshold: 64,
        }
    }
}

impl LinkConfig {
    /// Builder: toggle the deprecation notice.
    #[must_use]
    pub fn deprecation_notice(mut self, emit: bool) -> Self {
        self.emit_deprecation_notice = emit;
        self
    }

    /// Builder: set the adapted-cache growth warning threshold.
    #[must_use]
    pub fn adapted_cache_warn_threshold(mut self, threshold: usize) -> Self {
        self.adapted_cache_warn_threshold = threshold;
        self
    }

    /// Whether a cache holding `len` entries has crossed the threshold.
    #[must_use]
    pub fn exceeds_warn_threshold(&self, len: usize) -> bool {
        self.adapted_cache_warn_threshold != 0 && len > self.adapted_cache_warn_threshold
    }
}
