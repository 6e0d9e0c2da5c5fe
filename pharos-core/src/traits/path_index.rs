use crate::models::{ContentPath, ContentStatus, RawContentItem};

/// Pluggable cache over a hierarchical content-path structure.
///
/// Built once per audit run from a bulk source, queried read-only during
/// rule evaluation, discarded at end of run. Strategies are selected by
/// constructor injection, never by runtime type inspection.
pub trait IPathIndex: Send + Sync {
    /// Direct children of `parent_path`. Empty when the index is disabled
    /// or the parent is unknown.
    fn find_children(&self, parent_path: &str) -> Vec<ContentPath>;

    /// Bulk-ingest raw items, parsing each status through `status_parser`.
    /// Items with blank paths are dropped.
    fn cache_items(
        &mut self,
        items: &[RawContentItem],
        status_parser: &dyn Fn(&RawContentItem) -> ContentStatus,
    );

    /// Whether lookups against this index can return anything at all.
    fn is_available(&self) -> bool;
}
