//! Best-effort discovery of container image profiles.
//!
//! Each retained image tag becomes one registry profile whose options carry
//! the image reference, a per-session network identifier, the configured
//! extra container options, and, when the sidecar answers, GPU runtime
//! arguments. A missing runtime client is fatal, but only when discovery is
//! actually invoked; a failed GPU probe degrades to plain entries.

pub mod gpu;

pub use gpu::{
    GpuArgs, GpuProbe, DEFAULT_SIDECAR_URL, EXTRA_CREATE_KWARGS_OPTION, EXTRA_HOST_CONFIG_OPTION,
    READ_ONLY_VOLUMES_OPTION,
};

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::{BackendKind, OptionMap, Profile};
use crate::error::DiscoveryError;
use crate::runtime::ContainerRuntime;

/// Option name carrying the image reference on discovered profiles.
pub const CONTAINER_IMAGE_OPTION: &str = "container_image";
/// Option name carrying the per-session network identifier.
pub const NETWORK_NAME_OPTION: &str = "network_name";

/// Discovery settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Only tags ending in this suffix are offered.
    pub tag_suffix: String,
    /// Extra options merged into every discovered profile, after the image
    /// and network options and before GPU augmentation.
    pub extra_options: OptionMap,
    /// GPU sidecar endpoint.
    pub sidecar_url: String,
    /// Effective timeout for the single sidecar request.
    pub sidecar_timeout_ms: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            tag_suffix: "jupyterhub".to_string(),
            extra_options: OptionMap::new(),
            sidecar_url: DEFAULT_SIDECAR_URL.to_string(),
            sidecar_timeout_ms: 1_500,
        }
    }
}

/// Synthesizes profiles from the container runtime's image tags.
pub struct ImageDiscovery {
    runtime: Option<Arc<dyn ContainerRuntime>>,
    probe: GpuProbe,
    tag_suffix: String,
    extra_options: OptionMap,
}

impl ImageDiscovery {
    /// `runtime` may be absent; discovery then fails with
    /// [`DiscoveryError::RuntimeUnavailable`] when invoked, and only then.
    pub fn new(config: &DiscoveryConfig, runtime: Option<Arc<dyn ContainerRuntime>>) -> Self {
        Self {
            runtime,
            probe: GpuProbe::new(
                config.sidecar_url.clone(),
                Duration::from_millis(config.sidecar_timeout_ms),
            ),
            tag_suffix: config.tag_suffix.clone(),
            extra_options: config.extra_options.clone(),
        }
    }

    /// One profile per retained tag, in runtime listing order.
    ///
    /// `network_name` is the per-session network identifier injected into
    /// every discovered profile (typically the requesting user's name).
    pub async fn discover(&self, network_name: &str) -> Result<Vec<Profile>, DiscoveryError> {
        let runtime = self
            .runtime
            .as_deref()
            .ok_or_else(|| DiscoveryError::RuntimeUnavailable {
                reason: "no container runtime client configured".to_string(),
            })?;

        let records = runtime.list_images().await?;
        let gpu = self.probe.fetch().await;

        let mut profiles = Vec::new();
        for record in records {
            for tag in record.tags {
                if !tag.ends_with(&self.tag_suffix) {
                    continue;
                }
                profiles.push(self.image_profile(gpu.as_ref(), &tag, network_name));
            }
        }

        debug!(
            count = profiles.len(),
            gpu = gpu.is_some(),
            "discovered container image profiles"
        );
        Ok(profiles)
    }

    fn image_profile(&self, gpu: Option<&GpuArgs>, tag: &str, network_name: &str) -> Profile {
        let mut options = OptionMap::new();
        options.insert(
            CONTAINER_IMAGE_OPTION.to_string(),
            Value::String(tag.to_string()),
        );
        options.insert(
            NETWORK_NAME_OPTION.to_string(),
            Value::String(network_name.to_string()),
        );
        for (name, value) in &self.extra_options {
            options.insert(name.clone(), value.clone());
        }
        let label = match gpu {
            Some(args) => {
                args.apply(&mut options);
                "w/GPU"
            }
            None => "no GPU",
        };

        Profile {
            display: format!("Docker ({label}): {tag}"),
            key: format!("docker-{tag}"),
            backend: BackendKind::DockerContainer,
            options,
        }
    }
}
