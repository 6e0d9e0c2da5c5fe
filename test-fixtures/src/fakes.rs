//! In-memory fakes for the collaborator traits.
//!
//! Each fake supports failure injection so partial-batch semantics can be
//! exercised without a real backend.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use pharos_core::errors::{PharosResult, QueueError, ReconcileError, RemediationError};
use pharos_core::models::{ContentPath, FixEntity, GuidanceMessage, Suggestion};
use pharos_core::traits::{
    IAvailabilityClient, IFixEntityStore, IGuidanceQueue, ISuggestionStore,
};

/// Queue fake that records every message and can fail selected keys.
#[derive(Default)]
pub struct RecordingQueue {
    sent: Mutex<Vec<GuidanceMessage>>,
    failing_keys: HashSet<String>,
}

impl RecordingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends for these aggregation keys will fail.
    pub fn failing_on(mut self, keys: &[&str]) -> Self {
        self.failing_keys = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn sent(&self) -> Vec<GuidanceMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl IGuidanceQueue for RecordingQueue {
    async fn send(&self, message: &GuidanceMessage) -> PharosResult<()> {
        if self.failing_keys.contains(&message.aggregation_key) {
            return Err(QueueError::Publish {
                aggregation_key: message.aggregation_key.clone(),
                message: "injected failure".to_string(),
            }
            .into());
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Suggestion store fake keyed by opportunity id.
#[derive(Default)]
pub struct InMemorySuggestionStore {
    by_opportunity: HashMap<String, Vec<Suggestion>>,
}

impl InMemorySuggestionStore {
    pub fn with(opportunity_id: &str, suggestions: Vec<Suggestion>) -> Self {
        let mut by_opportunity = HashMap::new();
        by_opportunity.insert(opportunity_id.to_string(), suggestions);
        Self { by_opportunity }
    }
}

impl ISuggestionStore for InMemorySuggestionStore {
    async fn active_suggestions(&self, opportunity_id: &str) -> PharosResult<Vec<Suggestion>> {
        Ok(self
            .by_opportunity
            .get(opportunity_id)
            .map(|all| {
                all.iter()
                    .filter(|s| !s.status.is_terminal())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// Fix-entity store fake with suggestion associations and failure injection.
#[derive(Default)]
pub struct InMemoryFixStore {
    entities: Mutex<HashMap<String, FixEntity>>,
    suggestions_by_fix: HashMap<String, Vec<Suggestion>>,
    failing_saves: HashSet<String>,
}

impl InMemoryFixStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(self, entity: FixEntity, suggestions: Vec<Suggestion>) -> Self {
        let mut this = self;
        this.suggestions_by_fix
            .insert(entity.id.clone(), suggestions);
        this.entities
            .lock()
            .unwrap()
            .insert(entity.id.clone(), entity);
        this
    }

    /// Saves for these fix-entity ids will fail.
    pub fn failing_on(mut self, fix_ids: &[&str]) -> Self {
        self.failing_saves = fix_ids.iter().map(|id| id.to_string()).collect();
        self
    }

    pub fn entity(&self, fix_id: &str) -> Option<FixEntity> {
        self.entities.lock().unwrap().get(fix_id).cloned()
    }
}

impl IFixEntityStore for InMemoryFixStore {
    async fn deployed_fix_entities(&self, opportunity_id: &str) -> PharosResult<Vec<FixEntity>> {
        use pharos_core::models::FixStatus;
        Ok(self
            .entities
            .lock()
            .unwrap()
            .values()
            .filter(|e| e.opportunity_id == opportunity_id && e.status == FixStatus::Deployed)
            .cloned()
            .collect())
    }

    async fn suggestions_for_fix(&self, fix_id: &str) -> PharosResult<Vec<Suggestion>> {
        Ok(self
            .suggestions_by_fix
            .get(fix_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save_fix_entity(&self, entity: &FixEntity) -> PharosResult<()> {
        if self.failing_saves.contains(&entity.id) {
            return Err(ReconcileError::Persist {
                fix_id: entity.id.clone(),
                message: "injected failure".to_string(),
            }
            .into());
        }
        self.entities
            .lock()
            .unwrap()
            .insert(entity.id.clone(), entity.clone());
        Ok(())
    }
}

/// Authoring-system fake backed by static path sets.
#[derive(Default)]
pub struct StaticAvailabilityClient {
    available: HashSet<String>,
    children: HashMap<String, Vec<ContentPath>>,
    erroring: HashSet<String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StaticAvailabilityClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_available(mut self, paths: &[&str]) -> Self {
        self.available = paths.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_children(mut self, parent: &str, children: Vec<ContentPath>) -> Self {
        self.children.insert(parent.to_string(), children);
        self
    }

    /// Any lookup touching these paths errors (transport failure).
    pub fn erroring_on(mut self, paths: &[&str]) -> Self {
        self.erroring = paths.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Shared handle onto the `is_available` call log; stays valid after
    /// the client moves into the code under test.
    pub fn call_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

impl IAvailabilityClient for StaticAvailabilityClient {
    async fn is_available(&self, path: &str) -> PharosResult<bool> {
        self.calls.lock().unwrap().push(path.to_string());
        if self.erroring.contains(path) {
            return Err(RemediationError::AvailabilityCheck {
                path: path.to_string(),
                message: "injected transport failure".to_string(),
            }
            .into());
        }
        Ok(self.available.contains(path))
    }

    async fn children_of(&self, parent_path: &str) -> PharosResult<Vec<ContentPath>> {
        if self.erroring.contains(parent_path) {
            return Err(RemediationError::ChildListing {
                parent_path: parent_path.to_string(),
                message: "injected transport failure".to_string(),
            }
            .into());
        }
        Ok(self.children.get(parent_path).cloned().unwrap_or_default())
    }
}
