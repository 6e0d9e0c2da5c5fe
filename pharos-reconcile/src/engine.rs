//! The reconciliation pass.

use std::future::Future;

use futures::future::join_all;
use tracing::{debug, info, warn};

use pharos_core::config::ReconcileConfig;
use pharos_core::errors::PharosResult;
use pharos_core::models::{FixEntity, ReconciliationSummary, Suggestion};
use pharos_core::traits::IFixEntityStore;

enum EntityOutcome {
    Published,
    Skipped,
    Errored,
}

/// Publish every deployed fix entity whose underlying problems no longer
/// reproduce.
///
/// The caller-supplied predicate decides "still broken" per suggestion
/// (typically by re-checking the target URL); this pass owns only the
/// bookkeeping. A fix entity transitions iff every associated suggestion
/// re-checks as resolved; entities with no associated suggestions, or
/// whose suggestions lack a target URL, are left DEPLOYED. Entities are
/// processed launch-all/await-all with no ordering guarantee, and one
/// failing entity never aborts the others — failures come back as a
/// count in the summary.
pub async fn publish_deployed_fix_entities<S, F, Fut>(
    store: &S,
    config: &ReconcileConfig,
    opportunity_id: &str,
    is_issue_still_broken: F,
) -> PharosResult<ReconciliationSummary>
where
    S: IFixEntityStore,
    F: Fn(Suggestion) -> Fut,
    Fut: Future<Output = bool>,
{
    let deployed = store.deployed_fix_entities(opportunity_id).await?;
    debug!(
        opportunity_id,
        deployed = deployed.len(),
        "reconciliation pass start"
    );

    let units = deployed
        .into_iter()
        .map(|entity| reconcile_one(store, config, &is_issue_still_broken, entity));
    let outcomes = join_all(units).await;

    let mut summary = ReconciliationSummary::default();
    for outcome in outcomes {
        match outcome {
            EntityOutcome::Published => summary.published += 1,
            EntityOutcome::Skipped => summary.skipped += 1,
            EntityOutcome::Errored => summary.errors += 1,
        }
    }

    info!(
        opportunity_id,
        published = summary.published,
        skipped = summary.skipped,
        errors = summary.errors,
        "reconciliation pass complete"
    );
    Ok(summary)
}

async fn reconcile_one<S, F, Fut>(
    store: &S,
    config: &ReconcileConfig,
    is_issue_still_broken: &F,
    mut entity: FixEntity,
) -> EntityOutcome
where
    S: IFixEntityStore,
    F: Fn(Suggestion) -> Fut,
    Fut: Future<Output = bool>,
{
    let suggestions = match store.suggestions_for_fix(&entity.id).await {
        Ok(suggestions) => suggestions,
        Err(error) => {
            warn!(fix_id = %entity.id, %error, "suggestion lookup failed");
            return EntityOutcome::Errored;
        }
    };

    // An empty association set never auto-publishes.
    if suggestions.is_empty() {
        debug!(fix_id = %entity.id, "no associated suggestions, leaving deployed");
        return EntityOutcome::Skipped;
    }

    for suggestion in suggestions {
        if suggestion.data.url.trim().is_empty() {
            debug!(
                fix_id = %entity.id,
                suggestion_id = %suggestion.id,
                "no target url to re-check, leaving deployed"
            );
            return EntityOutcome::Skipped;
        }
        if is_issue_still_broken(suggestion).await {
            debug!(fix_id = %entity.id, "still reproduces, leaving deployed");
            return EntityOutcome::Skipped;
        }
    }

    entity.mark_published(&config.updated_by);
    match store.save_fix_entity(&entity).await {
        Ok(()) => EntityOutcome::Published,
        Err(error) => {
            warn!(fix_id = %entity.id, %error, "publish transition failed to persist");
            EntityOutcome::Errored
        }
    }
}
