//! Aggregation-key policy: which issue types are guidance-eligible and at
//! what granularity their issues merge.

use std::collections::HashMap;
use std::sync::LazyLock;

use pharos_core::config::{AggregationConfig, AggregationGranularity};
use pharos_core::constants::KEY_SEPARATOR;

/// Built-in policy table. An issue type absent from the merged table is
/// not guidance-eligible and never reaches key computation.
static BUILTIN_POLICY: LazyLock<HashMap<&'static str, AggregationGranularity>> =
    LazyLock::new(|| {
        use AggregationGranularity::*;
        HashMap::from([
            // Site-wide semantics: one bucket per issue type.
            ("aria-prohibited-attr", PerType),
            ("aria-allowed-attr", PerType),
            ("color-contrast", PerType),
            ("image-alt", PerType),
            // Page-scoped semantics.
            ("html-has-lang", PerPage),
            // Component-scoped semantics: issues from different page
            // components never merge.
            ("button-name", PerPagePerComponent),
            ("link-name", PerPagePerComponent),
            ("label", PerPagePerComponent),
            ("select-name", PerPagePerComponent),
        ])
    });

/// Merged policy: built-in table plus per-tenant overrides.
#[derive(Debug, Clone)]
pub struct AggregationPolicy {
    table: HashMap<String, AggregationGranularity>,
}

impl AggregationPolicy {
    pub fn from_config(config: &AggregationConfig) -> Self {
        let mut table: HashMap<String, AggregationGranularity> = BUILTIN_POLICY
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        for (issue_type, granularity) in &config.granularity_overrides {
            table.insert(issue_type.clone(), *granularity);
        }
        Self { table }
    }

    /// Whether the issue type is forwarded to the guidance engine.
    pub fn is_eligible(&self, issue_type: &str) -> bool {
        self.table.contains_key(issue_type)
    }

    pub fn granularity_for(&self, issue_type: &str) -> Option<AggregationGranularity> {
        self.table.get(issue_type).copied()
    }
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        Self::from_config(&AggregationConfig::default())
    }
}

/// Deterministic grouping key for one issue.
///
/// `source` contributes a segment only when present and non-empty; an
/// empty segment is never emitted, so "with source" and "without source"
/// issues for the same url+type land in different keys.
pub fn compute_aggregation_key(
    granularity: AggregationGranularity,
    issue_type: &str,
    url: &str,
    source: Option<&str>,
) -> String {
    match granularity {
        AggregationGranularity::PerType => issue_type.to_string(),
        AggregationGranularity::PerPage => url.to_string(),
        AggregationGranularity::PerPagePerComponent => match source {
            Some(s) if !s.is_empty() => {
                format!("{url}{KEY_SEPARATOR}{issue_type}{KEY_SEPARATOR}{s}")
            }
            _ => format!("{url}{KEY_SEPARATOR}{issue_type}"),
        },
    }
}
