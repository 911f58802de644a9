//! bollard-backed container runtime adapter.

use async_trait::async_trait;
use bollard::query_parameters::ListImagesOptions;
use bollard::Docker;

use super::{ContainerRuntime, ImageRecord};
use crate::error::DiscoveryError;

/// Docker daemon client using the platform's local defaults (unix socket
/// or named pipe).
pub struct DockerRuntime {
    docker: Docker,
}

impl DockerRuntime {
    /// Connect with local defaults. Failure here is the fatal
    /// "runtime unavailable" configuration error.
    pub fn connect() -> Result<Self, DiscoveryError> {
        let docker = Docker::connect_with_local_defaults().map_err(|err| {
            DiscoveryError::RuntimeUnavailable {
                reason: err.to_string(),
            }
        })?;
        Ok(Self { docker })
    }
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    async fn list_images(&self) -> Result<Vec<ImageRecord>, DiscoveryError> {
        let images = self
            .docker
            .list_images(None::<ListImagesOptions>)
            .await
            .map_err(|err| DiscoveryError::Query(err.to_string()))?;
        Ok(images
            .into_iter()
            .map(|image| ImageRecord { tags: image.repo_tags })
            .collect())
    }
}
