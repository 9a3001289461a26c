#![forbid(unsafe_code)]

//! Loading `LinkConfig` from JSON. Run with `--features serde`.

use linkshim_core::{AdaptedLinkCache, LinkConfig};

#[test]
fn partial_json_uses_defaults() {
    let cfg: LinkConfig =
        serde_json::from_str(r#"{"emit_deprecation_notice": false}"#).expect("valid json");
    assert!(!cfg.emit_deprecation_notice);
    assert_eq!(cfg.adapted_cache_warn_threshold, 64);
}

#[test]
fn empty_object_is_default() {
    let cfg: LinkConfig = serde_json::from_str("{}").expect("valid json");
    assert_eq!(cfg, LinkConfig::default());
}

#[test]
fn json_roundtrip() {
    let cfg = LinkConfig::default().adapted_cache_warn_threshold(8);
    let json = serde_json::to_string(&cfg).expect("serialize");
    let back: LinkConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, cfg);
}

#[test]
fn loaded_config_reaches_the_cache() {
    let cfg: LinkConfig =
        serde_json::from_str(r#"{"adapted_cache_warn_threshold": 0}"#).expect("valid json");
    let cache = AdaptedLinkCache::with_config(cfg);
    assert!(cache.config().emit_deprecation_notice);
    assert!(!cache.config().exceeds_warn_threshold(usize::MAX));
}

#[test]
fn unknown_type_is_rejected() {
    let err = serde_json::from_str::<LinkConfig>(r#"{"adapted_cache_warn_threshold": "many"}"#);
    assert!(err.is_err());
}
