//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).

use async_trait::async_trait;

use crate::error::DiscoveryError;
use crate::runtime::{ContainerRuntime, ImageRecord};

/// Canned container runtime serving a fixed set of image records.
pub struct StaticRuntime {
    records: Vec<ImageRecord>,
    failure: Option<String>,
}

impl StaticRuntime {
    /// One record per tag.
    pub fn with_tags(tags: &[&str]) -> Self {
        Self {
            records: tags.iter().map(|tag| ImageRecord::new([*tag])).collect(),
            failure: None,
        }
    }

    pub fn with_records(records: Vec<ImageRecord>) -> Self {
        Self {
            records,
            failure: None,
        }
    }

    /// A runtime whose query always fails.
    pub fn failing(reason: &str) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(reason.to_string()),
        }
    }
}

#[async_trait]
impl ContainerRuntime for StaticRuntime {
    async fn list_images(&self) -> Result<Vec<ImageRecord>, DiscoveryError> {
        if let Some(reason) = &self.failure {
            return Err(DiscoveryError::Query(reason.clone()));
        }
        Ok(self.records.clone())
    }
}
