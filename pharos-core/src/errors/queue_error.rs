/// Errors raised while publishing to the guidance queue.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("failed to publish guidance message for key {aggregation_key}: {message}")]
    Publish {
        aggregation_key: String,
        message: String,
    },
}
