use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregate outcome of one guidance-queue dispatch fan-out.
///
/// Per-item failures are logged and counted; the fan-out itself never
/// fails on the first error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DispatchOutcome {
    pub sent: usize,
    pub failed: usize,
}

/// Aggregate outcome of one fix-entity reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationSummary {
    /// Entities transitioned DEPLOYED → PUBLISHED.
    pub published: usize,
    /// Entities left DEPLOYED (still broken, missing data, or no
    /// associated suggestions).
    pub skipped: usize,
    /// Entities whose transition failed to persist.
    pub errors: usize,
}

impl ReconciliationSummary {
    pub fn total(&self) -> usize {
        self.published + self.skipped + self.errors
    }
}
