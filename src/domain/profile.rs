//! Selectable backend profiles.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered mapping of backend configuration option names to values.
pub type OptionMap = BTreeMap<String, Value>;

/// The closed set of backend implementations a profile can delegate to.
///
/// The orchestrator owns the actual implementations; this crate only names
/// them. Replaces a dynamically loaded class reference with a build-time
/// enum so an unknown backend kind is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// A session hosted as a local OS process.
    LocalProcess,
    /// A session hosted in a container with a specific image.
    DockerContainer,
}

impl BackendKind {
    /// Stable identifier exposed to templates as `{type}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::LocalProcess => "local_process",
            BackendKind::DockerContainer => "docker_container",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, preconfigured backend choice offered to the user.
///
/// `key` is the form value and must be unique across the registry; the
/// registry's first entry is the implicit default. `options` is the
/// canonical configuration template for this profile; sessions never
/// mutate it directly (see [`ChildSpec`](crate::domain::ChildSpec)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub display: String,
    pub key: String,
    pub backend: BackendKind,
    #[serde(default)]
    pub options: OptionMap,
}

impl Profile {
    pub fn new(display: impl Into<String>, key: impl Into<String>, backend: BackendKind) -> Self {
        Self {
            display: display.into(),
            key: key.into(),
            backend,
            options: OptionMap::new(),
        }
    }

    /// Builder-style option insertion.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_kind_serializes_snake_case() {
        let json = serde_json::to_string(&BackendKind::DockerContainer).unwrap();
        assert_eq!(json, "\"docker_container\"");
    }

    #[test]
    fn with_option_accumulates() {
        let profile = Profile::new("Local", "local", BackendKind::LocalProcess)
            .with_option("start_timeout", 15)
            .with_option("http_timeout", 10);
        assert_eq!(profile.options.len(), 2);
        assert_eq!(profile.options["start_timeout"], 15);
    }
}
