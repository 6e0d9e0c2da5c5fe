//! Domain models shared across the workspace.
//!
//! Wire-facing types serialize camelCase (the control plane is TypeScript)
//! and accept snake_case aliases on input, since stored payloads exist in
//! both spellings depending on which audit produced them.

pub mod content_path;
pub mod fix;
pub mod fix_entity;
pub mod guidance_message;
pub mod issue;
pub mod outcome;
pub mod suggestion;

pub use content_path::{ContentPath, ContentStatus, Locale, RawContentItem};
pub use fix::PathFix;
pub use fix_entity::{FixEntity, FixStatus};
pub use guidance_message::GuidanceMessage;
pub use issue::{AggregationGroup, Issue};
pub use outcome::{DispatchOutcome, ReconciliationSummary};
pub use suggestion::{MarkupOccurrence, Suggestion, SuggestionData, SuggestionIssue, SuggestionStatus};
