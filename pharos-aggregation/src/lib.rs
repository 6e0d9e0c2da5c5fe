//! # pharos-aggregation
//!
//! Converts heterogeneous, per-issue audit findings into deduplicated,
//! correctly-keyed opportunity groups for the guidance engine.
//!
//! ## Pipeline
//! 1. **Filter** — drop terminal-status suggestions, ineligible issue
//!    types, and issues that already carry resolved guidance
//! 2. **Normalize** — flatten each payload entry into a uniform record
//! 3. **Group** — fold records into buckets keyed by the granularity
//!    policy (first-seen-key order, stable within groups)
//! 4. **Dispatch** — fan the groups out to the guidance queue

pub mod aggregator;
pub mod dispatch;
pub mod granularity;
pub mod normalizer;
pub mod source_url;

pub use aggregator::Aggregator;
pub use granularity::{compute_aggregation_key, AggregationPolicy};
