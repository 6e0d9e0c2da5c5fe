//! Memoizing wrapper over an authoring client.
//!
//! Rule evaluation re-checks the same paths across broken links in one
//! run; this tier keeps those lookups sub-microsecond. Only successful
//! responses are cached — errors always propagate to the caller.

use std::time::Duration;

use moka::sync::Cache;

use pharos_core::config::RemediationConfig;
use pharos_core::errors::PharosResult;
use pharos_core::models::ContentPath;
use pharos_core::traits::IAvailabilityClient;

/// Caches availability and child-listing lookups for the duration of a
/// run.
pub struct CachedAvailabilityClient<C> {
    inner: C,
    availability: Cache<String, bool>,
    children: Cache<String, Vec<ContentPath>>,
}

impl<C: IAvailabilityClient> CachedAvailabilityClient<C> {
    pub fn new(inner: C, config: &RemediationConfig) -> Self {
        let ttl = Duration::from_secs(config.availability_cache_ttl_secs);
        Self {
            inner,
            availability: Cache::builder()
                .max_capacity(config.availability_cache_entries)
                .time_to_live(ttl)
                .build(),
            children: Cache::builder()
                .max_capacity(config.availability_cache_entries)
                .time_to_live(ttl)
                .build(),
        }
    }
}

impl<C: IAvailabilityClient> IAvailabilityClient for CachedAvailabilityClient<C> {
    async fn is_available(&self, path: &str) -> PharosResult<bool> {
        if let Some(hit) = self.availability.get(path) {
            return Ok(hit);
        }
        let fresh = self.inner.is_available(path).await?;
        self.availability.insert(path.to_string(), fresh);
        Ok(fresh)
    }

    async fn children_of(&self, parent_path: &str) -> PharosResult<Vec<ContentPath>> {
        if let Some(hit) = self.children.get(parent_path) {
            return Ok(hit);
        }
        let fresh = self.inner.children_of(parent_path).await?;
        self.children.insert(parent_path.to_string(), fresh.clone());
        Ok(fresh)
    }
}
