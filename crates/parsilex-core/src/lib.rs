//! Shared text logic and types for the parsilex workspace.
//!
//! Everything in this crate is pure and synchronous: the Persian
//! canonicalizer, match-key expansion, the yeh/hamza rescue rules, the
//! record types the indices store, and environment-driven settings.
//! Dataset I/O and indexing live in `parsilex-lexicon`.

pub mod config;
pub mod keys;
pub mod normalize;
pub mod rescue;
pub mod types;

pub use config::{load_settings, load_settings_from_env, ConfigError, Settings};
pub use keys::{expand_keys, ExpandOptions, KeyMode};
pub use normalize::{canonicalize, ZWNJ};
pub use rescue::rescue_candidates;
pub use types::{AffectRecord, AffectSource, FrequencyRecord, ResolvedEntry};

#[cfg(test)]
mod normalize_test;
