use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Deployment state of a fix entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixStatus {
    Pending,
    Deployed,
    Published,
    Failed,
    RolledBack,
}

/// A deployed (or deployable) fix, owned by the data-access layer.
///
/// This workspace only reads fix entities and flips DEPLOYED → PUBLISHED
/// during reconciliation; every other transition belongs to the deployer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FixEntity {
    pub id: String,
    #[serde(default, alias = "opportunity_id")]
    pub opportunity_id: String,
    pub status: FixStatus,
    #[serde(default, alias = "updated_by")]
    pub updated_by: String,
    #[serde(default, alias = "updated_at", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl FixEntity {
    /// Transition to PUBLISHED, recording the actor and the time.
    pub fn mark_published(&mut self, updated_by: &str) {
        self.status = FixStatus::Published;
        self.updated_by = updated_by.to_string();
        self.updated_at = Some(Utc::now());
    }
}
