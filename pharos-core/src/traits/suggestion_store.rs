use crate::errors::PharosResult;
use crate::models::Suggestion;

/// Read access to stored suggestions.
#[allow(async_fn_in_trait)]
pub trait ISuggestionStore: Send + Sync {
    /// Suggestions for an opportunity whose status is non-terminal
    /// (not FIXED, not SKIPPED).
    async fn active_suggestions(&self, opportunity_id: &str) -> PharosResult<Vec<Suggestion>>;
}
