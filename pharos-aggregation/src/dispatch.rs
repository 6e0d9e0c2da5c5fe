//! Fan-out of aggregation groups to the guidance queue.

use futures::future::join_all;
use tracing::{info, warn};

use pharos_core::errors::PharosResult;
use pharos_core::models::{AggregationGroup, DispatchOutcome, GuidanceMessage};
use pharos_core::traits::{IGuidanceQueue, ISuggestionStore};

use crate::aggregator::Aggregator;

/// Send every group: launch all, await all.
///
/// Completion order is not meaningful; every message is attempted exactly
/// once. A failed send is logged and counted, never retried here and never
/// allowed to abort the rest of the batch.
pub async fn dispatch_groups<Q: IGuidanceQueue>(
    queue: &Q,
    groups: &[AggregationGroup],
) -> DispatchOutcome {
    let sends = groups.iter().map(|group| {
        let message = GuidanceMessage::from(group);
        async move {
            match queue.send(&message).await {
                Ok(()) => true,
                Err(error) => {
                    warn!(
                        aggregation_key = %message.aggregation_key,
                        %error,
                        "guidance message failed"
                    );
                    false
                }
            }
        }
    });

    let results = join_all(sends).await;
    let sent = results.iter().filter(|ok| **ok).count();
    let outcome = DispatchOutcome {
        sent,
        failed: results.len() - sent,
    };
    info!(
        sent = outcome.sent,
        failed = outcome.failed,
        "guidance dispatch complete"
    );
    outcome
}

/// End-to-end pass for one opportunity: list active suggestions,
/// aggregate, dispatch.
pub async fn process_opportunity<S, Q>(
    store: &S,
    queue: &Q,
    aggregator: &Aggregator,
    opportunity_id: &str,
) -> PharosResult<DispatchOutcome>
where
    S: ISuggestionStore,
    Q: IGuidanceQueue,
{
    let suggestions = store.active_suggestions(opportunity_id).await?;
    let groups = aggregator.aggregate(&suggestions);
    if groups.is_empty() {
        info!(opportunity_id, "no guidance-eligible issues");
        return Ok(DispatchOutcome::default());
    }
    Ok(dispatch_groups(queue, &groups).await)
}
