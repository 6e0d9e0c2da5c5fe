//! Folds active suggestions into grouped opportunity buckets.

use std::collections::HashMap;

use tracing::debug;

use pharos_core::models::{AggregationGroup, Suggestion};

use crate::granularity::{compute_aggregation_key, AggregationPolicy};
use crate::normalizer::normalize_issue;

/// Groups guidance-eligible issues by aggregation key.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    policy: AggregationPolicy,
}

impl Aggregator {
    pub fn new(policy: AggregationPolicy) -> Self {
        Self { policy }
    }

    /// Pure fold over the input list: no network, no persistence.
    ///
    /// Terminal-status suggestions are dropped. Within the rest, an issue
    /// is skipped when its type is not guidance-eligible or when its first
    /// markup occurrence already carries resolved guidance. Groups come
    /// back in first-seen-key order; within a group, issues stay in
    /// suggestion-iteration order.
    pub fn aggregate(&self, suggestions: &[Suggestion]) -> Vec<AggregationGroup> {
        let mut groups: Vec<AggregationGroup> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();

        for suggestion in suggestions {
            if suggestion.status.is_terminal() {
                continue;
            }
            for issue in &suggestion.data.issues {
                let Some(granularity) = self.policy.granularity_for(&issue.issue_type) else {
                    continue;
                };
                if issue
                    .html_with_issues
                    .first()
                    .is_some_and(|occ| occ.has_resolved_guidance())
                {
                    continue;
                }

                let key = compute_aggregation_key(
                    granularity,
                    &issue.issue_type,
                    &suggestion.data.url,
                    suggestion.data.source.as_deref(),
                );
                let record = normalize_issue(suggestion, issue);

                match slots.get(&key) {
                    Some(&slot) => groups[slot].issues_list.push(record),
                    None => {
                        slots.insert(key.clone(), groups.len());
                        groups.push(AggregationGroup::open(key, record));
                    }
                }
            }
        }

        debug!(
            suggestions = suggestions.len(),
            groups = groups.len(),
            "aggregation pass complete"
        );
        groups
    }
}
