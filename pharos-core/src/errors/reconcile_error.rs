/// Errors raised during the fix-entity reconciliation pass.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error("failed to list deployed fix entities for opportunity {opportunity_id}: {message}")]
    Listing {
        opportunity_id: String,
        message: String,
    },

    #[error("failed to load suggestions for fix entity {fix_id}: {message}")]
    SuggestionLookup { fix_id: String, message: String },

    #[error("failed to persist fix entity {fix_id}: {message}")]
    Persist { fix_id: String, message: String },
}
