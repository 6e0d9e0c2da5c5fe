//! # pharos-core
//!
//! Foundation crate for the Pharos site-audit engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PharosConfig;
pub use errors::{PharosError, PharosResult};
pub use models::{
    AggregationGroup, ContentPath, ContentStatus, FixEntity, FixStatus, GuidanceMessage, Issue,
    PathFix, Suggestion, SuggestionStatus,
};
