use serde::{Deserialize, Serialize};

use super::defaults;

/// Fix-entity reconciliation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Actor recorded on entities published by the reconciliation pass.
    pub updated_by: String,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            updated_by: defaults::updated_by(),
        }
    }
}
