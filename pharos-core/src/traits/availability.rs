use crate::errors::PharosResult;
use crate::models::ContentPath;

/// Read-side client for the authoring ("reference") content system.
///
/// Implementations must surface transport failures as errors, never as
/// `false`/empty results — rule evaluation treats an error here as fatal
/// for the path in progress, not as "rule doesn't apply".
#[allow(async_fn_in_trait)]
pub trait IAvailabilityClient: Send + Sync {
    /// Whether the exact path exists on the authoring system.
    async fn is_available(&self, path: &str) -> PharosResult<bool>;

    /// Direct children of a parent path on the authoring system.
    async fn children_of(&self, parent_path: &str) -> PharosResult<Vec<ContentPath>>;
}
