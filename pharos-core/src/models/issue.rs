use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Flat, uniform issue record derived from one suggestion payload entry.
///
/// Transient: built fresh on every aggregation pass, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub issue_name: String,
    pub suggestion_id: String,
    pub target_selector: String,
    pub faulty_line: String,
    pub issue_description: String,
    pub url: String,
}

/// Issues sharing one aggregation key.
///
/// `url` is taken from the first issue seen for the key and never changes
/// afterward; issues stay in suggestion-iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AggregationGroup {
    pub aggregation_key: String,
    pub url: String,
    pub issues_list: Vec<Issue>,
}

impl AggregationGroup {
    /// Open a new group for `key` with its first issue.
    pub fn open(key: String, first: Issue) -> Self {
        Self {
            aggregation_key: key,
            url: first.url.clone(),
            issues_list: vec![first],
        }
    }
}
