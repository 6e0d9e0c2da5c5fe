use crate::errors::PharosResult;
use crate::models::GuidanceMessage;

/// At-least-once delivery boundary toward the guidance engine.
///
/// The consumer is idempotent per aggregation key; this side does not
/// deduplicate.
#[allow(async_fn_in_trait)]
pub trait IGuidanceQueue: Send + Sync {
    async fn send(&self, message: &GuidanceMessage) -> PharosResult<()>;
}
