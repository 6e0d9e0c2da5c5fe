//! Cache strategies over the hierarchical content tree.
//!
//! Selected by constructor injection: the disabled strategy for runs
//! without an export, the tree-backed strategy when a crawl is available.

pub mod disabled;
pub mod tree;

pub use disabled::DisabledPathIndex;
pub use tree::TreePathIndex;
