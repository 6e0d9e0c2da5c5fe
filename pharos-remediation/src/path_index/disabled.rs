use pharos_core::models::{ContentPath, ContentStatus, RawContentItem};
use pharos_core::traits::IPathIndex;

/// No-op strategy: always empty, always unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledPathIndex;

impl IPathIndex for DisabledPathIndex {
    fn find_children(&self, _parent_path: &str) -> Vec<ContentPath> {
        Vec::new()
    }

    fn cache_items(
        &mut self,
        _items: &[RawContentItem],
        _status_parser: &dyn Fn(&RawContentItem) -> ContentStatus,
    ) {
    }

    fn is_available(&self) -> bool {
        false
    }
}
