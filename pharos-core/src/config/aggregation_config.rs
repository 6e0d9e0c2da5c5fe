use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How issues of one type are grouped into opportunity buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregationGranularity {
    /// One bucket per issue type, across all pages.
    PerType,
    /// One bucket per page.
    PerPage,
    /// One bucket per page and page component.
    PerPagePerComponent,
}

/// Aggregation subsystem configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Per-tenant granularity overrides, merged over the built-in policy
    /// table. An entry here also makes the issue type eligible.
    pub granularity_overrides: HashMap<String, AggregationGranularity>,
}
