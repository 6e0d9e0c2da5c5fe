use serde::{Deserialize, Serialize};

use super::defaults;

/// Broken-path remediation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemediationConfig {
    /// Maximum accepted edit distance for similar-path matching.
    pub max_edit_distance: usize,
    /// Search sibling-locale parents through the path index when the
    /// direct parent yields no match.
    pub widen_locale_search: bool,
    /// Availability-cache capacity (entries).
    pub availability_cache_entries: u64,
    /// Availability-cache TTL (seconds).
    pub availability_cache_ttl_secs: u64,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        Self {
            max_edit_distance: defaults::max_edit_distance(),
            widen_locale_search: true,
            availability_cache_entries: defaults::availability_cache_entries(),
            availability_cache_ttl_secs: defaults::availability_cache_ttl_secs(),
        }
    }
}
