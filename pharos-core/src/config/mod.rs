//! Subsystem configuration, deserializable from TOML.
//!
//! Every field has a default so a partial (or absent) config file is
//! always valid.

pub mod aggregation_config;
mod defaults;
pub mod reconcile_config;
pub mod remediation_config;

pub use aggregation_config::{AggregationConfig, AggregationGranularity};
pub use reconcile_config::ReconcileConfig;
pub use remediation_config::RemediationConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{PharosError, PharosResult};

/// Umbrella configuration for the whole engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PharosConfig {
    pub aggregation: AggregationConfig,
    pub remediation: RemediationConfig,
    pub reconcile: ReconcileConfig,
}

impl PharosConfig {
    /// Parse a TOML document. Unknown keys are ignored; missing sections
    /// fall back to defaults.
    pub fn from_toml_str(raw: &str) -> PharosResult<Self> {
        toml::from_str(raw).map_err(|e| PharosError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Load a TOML config file from disk.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> PharosResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            PharosError::InvalidConfig {
                reason: format!("{}: {e}", path.as_ref().display()),
            }
        })?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = PharosConfig::from_toml_str("").unwrap();
        assert_eq!(
            cfg.remediation.max_edit_distance,
            crate::constants::DEFAULT_MAX_EDIT_DISTANCE
        );
        assert_eq!(cfg.reconcile.updated_by, crate::constants::SYSTEM_UPDATED_BY);
    }

    #[test]
    fn partial_section_overrides() {
        let cfg = PharosConfig::from_toml_str(
            r#"
            [remediation]
            max_edit_distance = 3
            widen_locale_search = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.remediation.max_edit_distance, 3);
        assert!(!cfg.remediation.widen_locale_search);
        // Untouched sections keep defaults.
        assert!(cfg.aggregation.granularity_overrides.is_empty());
    }

    #[test]
    fn malformed_document_is_a_config_error() {
        let err = PharosConfig::from_toml_str("[remediation\nmax_edit_distance = 3").unwrap_err();
        assert!(matches!(err, PharosError::InvalidConfig { .. }));
    }

    #[test]
    fn loads_from_a_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[reconcile]\nupdated_by = \"ops\"").unwrap();

        let cfg = PharosConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(cfg.reconcile.updated_by, "ops");

        let err = PharosConfig::from_toml_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, PharosError::InvalidConfig { .. }));
    }
}
