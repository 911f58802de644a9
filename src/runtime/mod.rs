//! Container runtime abstraction.
//!
//! Discovery only needs one question answered (which image tags exist),
//! so the port is a single-method trait. The bollard-backed adapter lives
//! behind the `docker` feature; tests use the canned runtime from
//! [`testkit`](crate::testkit).

#[cfg(feature = "docker")]
mod docker;

#[cfg(feature = "docker")]
pub use docker::DockerRuntime;

use async_trait::async_trait;

use crate::error::DiscoveryError;

/// One image known to the runtime, exposing its tag strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRecord {
    pub tags: Vec<String>,
}

impl ImageRecord {
    pub fn new(tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// A client able to enumerate locally known container images.
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// List all known images. One synchronous query, no retries.
    async fn list_images(&self) -> Result<Vec<ImageRecord>, DiscoveryError>;
}
