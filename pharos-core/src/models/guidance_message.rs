use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::issue::{AggregationGroup, Issue};

/// Wire shape of one aggregation group on the guidance queue.
///
/// Delivery is at-least-once; the consumer deduplicates per
/// `aggregation_key`, so re-delivery of the same key is tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceMessage {
    pub url: String,
    pub aggregation_key: String,
    pub issues_list: Vec<Issue>,
}

impl From<&AggregationGroup> for GuidanceMessage {
    fn from(group: &AggregationGroup) -> Self {
        Self {
            url: group.url.clone(),
            aggregation_key: group.aggregation_key.clone(),
            issues_list: group.issues_list.clone(),
        }
    }
}
