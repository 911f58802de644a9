//! GPU sidecar probe.
//!
//! A single GET against the local nvidia-docker plugin endpoint, with a
//! short request timeout. Any failure, whether connect, timeout, status, or
//! body, degrades to "no GPU augmentation"; nothing propagates to the discovery
//! path above.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::domain::OptionMap;

/// Default sidecar endpoint (nvidia-docker plugin CLI arguments).
pub const DEFAULT_SIDECAR_URL: &str = "http://localhost:3476/v1.0/docker/cli/json";

/// Option names the probe contributes to a discovered profile.
pub const READ_ONLY_VOLUMES_OPTION: &str = "read_only_volumes";
pub const EXTRA_CREATE_KWARGS_OPTION: &str = "extra_create_kwargs";
pub const EXTRA_HOST_CONFIG_OPTION: &str = "extra_host_config";

/// Wire format of the sidecar response.
#[derive(Debug, Deserialize)]
struct SidecarResponse {
    #[serde(rename = "Volumes", default)]
    volumes: Vec<String>,
    #[serde(rename = "VolumeDriver", default)]
    volume_driver: String,
    #[serde(rename = "Devices", default)]
    devices: Vec<Value>,
}

/// GPU runtime arguments mapped from the sidecar response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpuArgs {
    pub read_only_volumes: BTreeMap<String, String>,
    pub volume_driver: String,
    pub devices: Vec<Value>,
}

impl GpuArgs {
    /// Merge into a profile option map under the documented option names.
    pub fn apply(&self, options: &mut OptionMap) {
        options.insert(
            READ_ONLY_VOLUMES_OPTION.to_string(),
            json!(self.read_only_volumes),
        );
        options.insert(
            EXTRA_CREATE_KWARGS_OPTION.to_string(),
            json!({ "volume_driver": self.volume_driver }),
        );
        options.insert(
            EXTRA_HOST_CONFIG_OPTION.to_string(),
            json!({ "devices": self.devices }),
        );
    }
}

impl From<SidecarResponse> for GpuArgs {
    fn from(body: SidecarResponse) -> Self {
        // Volume entries are "host:container"; malformed ones are dropped.
        let read_only_volumes = body
            .volumes
            .iter()
            .filter_map(|volume| volume.split_once(':'))
            .map(|(host, container)| (host.to_string(), container.to_string()))
            .collect();
        Self {
            read_only_volumes,
            volume_driver: body.volume_driver,
            devices: body.devices,
        }
    }
}

/// Best-effort HTTP probe of the GPU sidecar.
pub struct GpuProbe {
    client: Client,
    url: String,
    timeout: Duration,
}

impl GpuProbe {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            timeout,
        }
    }

    /// Fetch GPU arguments, or `None` when the sidecar is unreachable or
    /// answers with something unusable.
    pub async fn fetch(&self) -> Option<GpuArgs> {
        let response = match self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                debug!(url = %self.url, error = %err, "GPU sidecar unreachable, skipping GPU augmentation");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(url = %self.url, status = %response.status(), "GPU sidecar returned non-success status");
            return None;
        }

        match response.json::<SidecarResponse>().await {
            Ok(body) => Some(GpuArgs::from(body)),
            Err(err) => {
                warn!(url = %self.url, error = %err, "GPU sidecar body was not parseable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[test]
    fn maps_volumes_driver_and_devices() {
        let body = SidecarResponse {
            volumes: vec![
                "/usr/local/nvidia:/usr/local/nvidia".to_string(),
                "malformed-entry".to_string(),
            ],
            volume_driver: "nvidia-docker".to_string(),
            devices: vec![json!("/dev/nvidia0")],
        };

        let args = GpuArgs::from(body);

        assert_eq!(args.read_only_volumes.len(), 1);
        assert_eq!(
            args.read_only_volumes["/usr/local/nvidia"],
            "/usr/local/nvidia"
        );
        assert_eq!(args.volume_driver, "nvidia-docker");
        assert_eq!(args.devices, vec![json!("/dev/nvidia0")]);
    }

    #[test]
    fn apply_writes_the_three_documented_options() {
        let mut options = OptionMap::new();
        let args = GpuArgs {
            read_only_volumes: BTreeMap::new(),
            volume_driver: "nvidia-docker".to_string(),
            devices: Vec::new(),
        };

        args.apply(&mut options);

        assert_eq!(
            options[EXTRA_CREATE_KWARGS_OPTION],
            json!({ "volume_driver": "nvidia-docker" })
        );
        assert_eq!(options[EXTRA_HOST_CONFIG_OPTION], json!({ "devices": [] }));
        assert!(options.contains_key(READ_ONLY_VOLUMES_OPTION));
    }

    #[tokio::test]
    async fn fetch_degrades_to_none_on_connection_failure() {
        // Port 9 (discard) is refused on any sane test host.
        let probe = GpuProbe::new("http://127.0.0.1:9/v1.0/docker/cli/json", Duration::from_millis(250));
        assert!(probe.fetch().await.is_none());
    }

    #[tokio::test]
    async fn fetch_parses_a_live_sidecar_payload() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let body = r#"{"Volumes":["/usr/local/nvidia:/usr/local/nvidia"],"VolumeDriver":"nvidia-docker","Devices":["/dev/nvidiactl"]}"#;
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
        });

        let probe = GpuProbe::new(
            format!("http://{addr}/v1.0/docker/cli/json"),
            Duration::from_secs(2),
        );
        let args = probe.fetch().await.expect("sidecar answered");

        assert_eq!(
            args.read_only_volumes["/usr/local/nvidia"],
            "/usr/local/nvidia"
        );
        assert_eq!(args.volume_driver, "nvidia-docker");
        assert_eq!(args.devices.len(), 1);
    }
}
