use crate::errors::PharosResult;
use crate::models::{FixEntity, Suggestion};

/// Access to fix entities and their associated suggestions.
#[allow(async_fn_in_trait)]
pub trait IFixEntityStore: Send + Sync {
    /// Fix entities in DEPLOYED status tied to the opportunity.
    async fn deployed_fix_entities(&self, opportunity_id: &str) -> PharosResult<Vec<FixEntity>>;

    /// Suggestions originally associated with a fix entity.
    async fn suggestions_for_fix(&self, fix_id: &str) -> PharosResult<Vec<Suggestion>>;

    /// Persist a fix entity after a status transition.
    async fn save_fix_entity(&self, entity: &FixEntity) -> PharosResult<()>;
}
