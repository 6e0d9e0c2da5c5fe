use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lifecycle status of a stored suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionStatus {
    New,
    Approved,
    InProgress,
    Fixed,
    Skipped,
    Error,
}

impl SuggestionStatus {
    /// Terminal statuses never re-enter aggregation or remediation.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Fixed | Self::Skipped)
    }
}

/// One markup occurrence of an issue inside a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MarkupOccurrence {
    /// The faulty markup as found on the page.
    #[serde(default, alias = "update_from")]
    pub update_from: String,
    /// CSS selector locating the occurrence.
    #[serde(default, alias = "target_selector")]
    pub target_selector: String,
    /// Set once the guidance engine has answered for this occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<serde_json::Value>,
}

impl MarkupOccurrence {
    /// True when guidance is present and a non-empty object.
    pub fn has_resolved_guidance(&self) -> bool {
        self.guidance
            .as_ref()
            .and_then(|g| g.as_object())
            .is_some_and(|o| !o.is_empty())
    }
}

/// One issue entry inside a suggestion payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionIssue {
    #[serde(rename = "type")]
    pub issue_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "html_with_issues")]
    pub html_with_issues: Vec<MarkupOccurrence>,
}

/// Payload of a stored suggestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionData {
    /// Page the suggestion was raised against.
    #[serde(default)]
    pub url: String,
    /// Owning page component (e.g. a form selector), when the audit
    /// distinguishes components within a page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub issues: Vec<SuggestionIssue>,
}

/// A stored audit suggestion. Owned by the data-access layer; this
/// workspace only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    #[serde(default, alias = "opportunity_id")]
    pub opportunity_id: String,
    pub status: SuggestionStatus,
    pub data: SuggestionData,
}
