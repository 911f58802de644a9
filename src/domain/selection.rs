//! Resolved child backend configuration.

use serde_json::Value;

use super::{BackendKind, OptionMap, Profile};

/// Option name the chosen image reference is injected under on resolution.
pub const IMAGE_OPTION: &str = "image";

/// Logical state of a session's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// No submission yet.
    Unselected,
    /// Profile and image chosen, child backend not yet materialized.
    Selected,
    /// Child backend kind and merged configuration installed.
    Delegated,
}

/// The backend kind and merged option map handed to the orchestrator's
/// generic construction path once a selection has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildSpec {
    pub backend: BackendKind,
    pub options: OptionMap,
}

impl ChildSpec {
    /// Build a session configuration from a profile's canonical template.
    ///
    /// Copies the template and injects the chosen image under
    /// [`IMAGE_OPTION`], so the registry's entry is never aliased by a live
    /// session.
    pub fn from_profile(profile: &Profile, image_reference: &str) -> Self {
        let mut options = profile.options.clone();
        options.insert(
            IMAGE_OPTION.to_string(),
            Value::String(image_reference.to_string()),
        );
        Self {
            backend: profile.backend,
            options,
        }
    }
}
