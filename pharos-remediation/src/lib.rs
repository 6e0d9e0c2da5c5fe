//! # pharos-remediation
//!
//! Turns one broken content path into zero-or-one fix suggestion.
//!
//! ## Rule chain
//! 1. **Publish-on-author** (priority 1) — the exact path exists on the
//!    authoring system; publish it
//! 2. **Similar-path** (priority 3) — collapse doubled slashes, else match
//!    parent-directory siblings by locale-stripped edit distance, widening
//!    across sibling locales through the path index
//!
//! Rules run in ascending priority order; the first fix wins. Authoring
//! client errors abort resolution for the path in progress.

pub mod availability_cache;
#[cfg(feature = "authoring-http")]
pub mod http;
pub mod locale;
pub mod matcher;
pub mod path_index;
pub mod rules;

pub use availability_cache::CachedAvailabilityClient;
pub use matcher::find_similar_path;
pub use path_index::{DisabledPathIndex, TreePathIndex};
pub use rules::{RemediationRule, RuleChain};
