use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Remediation produced by the rule chain.
///
/// At most one fix is produced per broken path per resolution pass, by
/// whichever rule first returns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type")]
pub enum PathFix {
    /// The exact path exists on the authoring system; publish it.
    #[serde(rename = "publish", rename_all = "camelCase")]
    Publish { original_path: String },

    /// A nearby sibling was found; replace the broken path with it.
    #[serde(rename = "similar", rename_all = "camelCase")]
    Similar {
        original_path: String,
        suggested_path: String,
    },

    /// The path was malformed by a doubled slash; publish the collapsed form.
    #[serde(rename = "double-slash-fix", rename_all = "camelCase")]
    DoubleSlashFix {
        original_path: String,
        suggested_path: String,
    },
}

impl PathFix {
    /// The broken path this fix was produced for.
    pub fn original_path(&self) -> &str {
        match self {
            Self::Publish { original_path }
            | Self::Similar { original_path, .. }
            | Self::DoubleSlashFix { original_path, .. } => original_path,
        }
    }

    /// The replacement path, when the fix proposes one.
    pub fn suggested_path(&self) -> Option<&str> {
        match self {
            Self::Publish { .. } => None,
            Self::Similar { suggested_path, .. }
            | Self::DoubleSlashFix { suggested_path, .. } => Some(suggested_path),
        }
    }
}
