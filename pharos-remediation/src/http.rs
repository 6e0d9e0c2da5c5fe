//! HTTP implementation of the authoring client (feature `authoring-http`).

use serde::Deserialize;

use pharos_core::errors::{PharosResult, RemediationError};
use pharos_core::models::{ContentPath, ContentStatus, Locale};
use pharos_core::traits::IAvailabilityClient;

/// Queries the authoring system over its JSON HTTP API.
pub struct AuthoringHttpClient {
    base_url: String,
    http: reqwest::Client,
}

impl AuthoringHttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChildEntry {
    path: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    locale: Option<String>,
}

impl IAvailabilityClient for AuthoringHttpClient {
    async fn is_available(&self, path: &str) -> PharosResult<bool> {
        let url = format!("{}/api/content{}", self.base_url, path);
        let response = self.http.head(&url).send().await.map_err(|e| {
            RemediationError::AvailabilityCheck {
                path: path.to_string(),
                message: e.to_string(),
            }
        })?;
        // 404 is a definitive "not available"; other failures propagate.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !response.status().is_success() {
            return Err(RemediationError::AvailabilityCheck {
                path: path.to_string(),
                message: format!("unexpected status {}", response.status()),
            }
            .into());
        }
        Ok(true)
    }

    async fn children_of(&self, parent_path: &str) -> PharosResult<Vec<ContentPath>> {
        let url = format!("{}/api/content{}/children", self.base_url, parent_path);
        let listing_error = |message: String| RemediationError::ChildListing {
            parent_path: parent_path.to_string(),
            message,
        };

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| listing_error(e.to_string()))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        let response = response
            .error_for_status()
            .map_err(|e| listing_error(e.to_string()))?;
        let entries: Vec<ChildEntry> = response
            .json()
            .await
            .map_err(|e| listing_error(e.to_string()))?;

        Ok(entries
            .into_iter()
            .map(|entry| {
                ContentPath::new(
                    entry.path,
                    ContentStatus::parse(entry.status.as_deref().unwrap_or("")),
                    entry.locale.as_deref().map(Locale::from),
                )
            })
            .filter(ContentPath::is_valid)
            .collect())
    }
}
