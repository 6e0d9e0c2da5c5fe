use std::collections::BTreeMap;

use tracing::debug;

use pharos_core::models::{ContentPath, ContentStatus, Locale, RawContentItem};
use pharos_core::traits::IPathIndex;

/// Tree-backed strategy: an ordered map keyed by normalized path, with
/// child lookup by path prefix.
///
/// Built once per audit run from a bulk source, then read-only.
#[derive(Debug, Clone, Default)]
pub struct TreePathIndex {
    nodes: BTreeMap<String, ContentPath>,
}

impl TreePathIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&ContentPath> {
        self.nodes.get(path.trim_end_matches('/'))
    }
}

impl IPathIndex for TreePathIndex {
    /// Direct children only: grandchildren carry a further `/` in the
    /// remainder and are excluded.
    fn find_children(&self, parent_path: &str) -> Vec<ContentPath> {
        let parent = parent_path.trim_end_matches('/');
        if parent.is_empty() {
            return Vec::new();
        }
        let prefix = format!("{parent}/");
        self.nodes
            .range(prefix.clone()..)
            .take_while(|(path, _)| path.starts_with(prefix.as_str()))
            .filter(|(path, _)| !path[prefix.len()..].contains('/'))
            .map(|(_, node)| node.clone())
            .collect()
    }

    fn cache_items(
        &mut self,
        items: &[RawContentItem],
        status_parser: &dyn Fn(&RawContentItem) -> ContentStatus,
    ) {
        let before = self.nodes.len();
        for item in items {
            let node = ContentPath::new(
                item.path.trim_end_matches('/'),
                status_parser(item),
                item.locale.as_deref().map(Locale::from),
            );
            if node.is_valid() {
                self.nodes.insert(node.path.clone(), node);
            }
        }
        debug!(
            ingested = self.nodes.len() - before,
            total = self.nodes.len(),
            "path index ingest"
        );
    }

    fn is_available(&self) -> bool {
        !self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(path: &str, status: &str) -> RawContentItem {
        RawContentItem {
            path: path.into(),
            status: Some(status.into()),
            locale: None,
        }
    }

    fn default_parser(item: &RawContentItem) -> ContentStatus {
        ContentStatus::parse(item.status.as_deref().unwrap_or(""))
    }

    #[test]
    fn finds_direct_children_only() {
        let mut index = TreePathIndex::new();
        index.cache_items(
            &[
                item("/content/site/en", "PUBLISHED"),
                item("/content/site/en/products", "PUBLISHED"),
                item("/content/site/en/about", "DRAFT"),
                item("/content/site/en/products/widget", "PUBLISHED"),
                item("/content/site/fr", "PUBLISHED"),
            ],
            &default_parser,
        );

        let children = index.find_children("/content/site/en");
        let paths: Vec<_> = children.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["/content/site/en/about", "/content/site/en/products"]);
    }

    #[test]
    fn trailing_slash_on_parent_is_tolerated() {
        let mut index = TreePathIndex::new();
        index.cache_items(&[item("/content/site/en/a", "PUBLISHED")], &default_parser);
        assert_eq!(index.find_children("/content/site/en/").len(), 1);
    }

    #[test]
    fn blank_paths_are_dropped() {
        let mut index = TreePathIndex::new();
        index.cache_items(
            &[item("   ", "PUBLISHED"), item("", "PUBLISHED")],
            &default_parser,
        );
        assert!(!index.is_available());
    }

    #[test]
    fn status_parser_runs_per_item() {
        let mut index = TreePathIndex::new();
        index.cache_items(&[item("/a/b", "published")], &default_parser);
        assert!(index.get("/a/b").unwrap().is_published());
    }

    #[test]
    fn sibling_prefix_does_not_leak() {
        // "/a/bc" must not be returned as a child of "/a/b".
        let mut index = TreePathIndex::new();
        index.cache_items(
            &[item("/a/b/x", "PUBLISHED"), item("/a/bc/y", "PUBLISHED")],
            &default_parser,
        );
        let paths: Vec<_> = index
            .find_children("/a/b")
            .into_iter()
            .map(|c| c.path)
            .collect();
        assert_eq!(paths, vec!["/a/b/x"]);
    }
}
