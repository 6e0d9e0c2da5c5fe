use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Publication state of a node in the content tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentStatus {
    Published,
    Modified,
    Draft,
    Archived,
    Deleted,
    #[default]
    Unknown,
}

impl ContentStatus {
    /// Parse a raw status string; anything unrecognized maps to `Unknown`.
    /// Comparison is case-insensitive on input, strict everywhere else.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PUBLISHED" => Self::Published,
            "MODIFIED" => Self::Modified,
            "DRAFT" => Self::Draft,
            "ARCHIVED" => Self::Archived,
            "DELETED" => Self::Deleted,
            _ => Self::Unknown,
        }
    }
}

/// Locale tag attached to a content path (`en-US`, `fr_FR`, `de`, …).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Locale(pub String);

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

/// One node of the hierarchical content tree.
///
/// Immutable value object: a changed path is represented by inserting a
/// new `ContentPath`, never by update-in-place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContentPath {
    pub path: String,
    pub status: ContentStatus,
    pub locale: Option<Locale>,
}

impl ContentPath {
    pub fn new(path: impl Into<String>, status: ContentStatus, locale: Option<Locale>) -> Self {
        Self {
            path: path.into(),
            status,
            locale,
        }
    }

    /// A path is valid iff its trimmed form is non-empty.
    pub fn is_valid(&self) -> bool {
        !self.path.trim().is_empty()
    }

    /// Strict: only `PUBLISHED` counts.
    pub fn is_published(&self) -> bool {
        self.status == ContentStatus::Published
    }
}

/// Raw bulk-ingest entry, before the status parser has run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RawContentItem {
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}
