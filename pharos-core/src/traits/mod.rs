//! Collaborator contracts.
//!
//! Pharos is a library: storage, queueing, and the authoring system are
//! reached exclusively through these traits, injected at construction.

pub mod availability;
pub mod fix_entity_store;
pub mod guidance_queue;
pub mod path_index;
pub mod suggestion_store;

pub use availability::IAvailabilityClient;
pub use fix_entity_store::IFixEntityStore;
pub use guidance_queue::IGuidanceQueue;
pub use path_index::IPathIndex;
pub use suggestion_store::ISuggestionStore;
