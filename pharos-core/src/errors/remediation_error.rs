/// Errors raised while resolving a broken path through the rule chain.
#[derive(Debug, thiserror::Error)]
pub enum RemediationError {
    #[error("availability check failed for {path}: {message}")]
    AvailabilityCheck { path: String, message: String },

    #[error("child listing failed for {parent_path}: {message}")]
    ChildListing { parent_path: String, message: String },

    #[error("rule {rule} requires an authoring client but none was configured")]
    MissingAuthoringClient { rule: &'static str },
}
