//! Per-session selection and delegation.
//!
//! One controller instance belongs to one session; nothing here is shared
//! across sessions. The controller moves from Unselected through
//! Selected to Delegated, and hands the resolved [`ChildSpec`]
//! to the orchestrator's generic construction path. It never starts, stops,
//! or monitors a backend itself.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{ChildSpec, ImageEntry, SelectionPhase};
use crate::error::SelectionError;
use crate::registry::ProfileRegistry;

/// Inbound form field carrying the profile key.
pub const PROFILE_FIELD: &str = "profile";
/// Inbound form field carrying the image reference.
pub const IMAGE_FIELD: &str = "dockerImage";

/// Possibly multi-valued form data; only the first value of each field is
/// used.
pub type FormData = HashMap<String, Vec<String>>;

/// Session-scoped selection state machine.
#[derive(Debug, Default)]
pub struct SelectionController {
    profile_key: String,
    image_reference: String,
    child: Option<ChildSpec>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.child.is_some() {
            SelectionPhase::Delegated
        } else if !self.profile_key.is_empty() || !self.image_reference.is_empty() {
            SelectionPhase::Selected
        } else {
            SelectionPhase::Unselected
        }
    }

    pub fn profile_key(&self) -> &str {
        &self.profile_key
    }

    pub fn image_reference(&self) -> &str {
        &self.image_reference
    }

    /// The resolved child backend spec, once delegated.
    pub fn child_spec(&self) -> Option<&ChildSpec> {
        self.child.as_ref()
    }

    /// Record a form submission.
    ///
    /// Missing or empty fields fall back to the registry's first profile
    /// key and the first image reference of the user's list; submission
    /// never fails outright.
    pub fn submit(&mut self, form: &FormData, registry: &ProfileRegistry, images: &[ImageEntry]) {
        self.profile_key = first_value(form, PROFILE_FIELD)
            .map(str::to_string)
            .unwrap_or_else(|| {
                registry
                    .default_profile()
                    .map(|profile| profile.key.clone())
                    .unwrap_or_default()
            });
        self.image_reference = first_value(form, IMAGE_FIELD)
            .map(str::to_string)
            .unwrap_or_else(|| {
                images
                    .first()
                    .map(|image| image.reference.clone())
                    .unwrap_or_default()
            });
        debug!(
            profile = %self.profile_key,
            image = %self.image_reference,
            "recorded selection"
        );
    }

    /// Resolve the recorded selection against the registry and install the
    /// child backend spec.
    ///
    /// An unknown profile key is a hard error and leaves any previously
    /// resolved spec untouched; the outcome is the same on every retry.
    pub fn resolve(&mut self, registry: &ProfileRegistry) -> Result<&ChildSpec, SelectionError> {
        let profile =
            registry
                .lookup(&self.profile_key)
                .ok_or_else(|| SelectionError::UnknownProfile {
                    key: self.profile_key.clone(),
                })?;
        let spec = ChildSpec::from_profile(profile, &self.image_reference);
        debug!(profile = %self.profile_key, backend = %spec.backend, "delegating to child backend");
        Ok(self.child.insert(spec))
    }

    /// Merge the selection into the orchestrator's generic state blob.
    pub fn persist(&self, state: &mut Map<String, Value>) {
        state.insert(
            PROFILE_FIELD.to_string(),
            Value::String(self.profile_key.clone()),
        );
        state.insert(
            IMAGE_FIELD.to_string(),
            Value::String(self.image_reference.clone()),
        );
    }

    /// Read the selection back from a state blob.
    ///
    /// Missing or non-string keys reset both fields to empty strings;
    /// restore never fails.
    pub fn restore(&mut self, state: &Map<String, Value>) {
        let profile = state.get(PROFILE_FIELD).and_then(Value::as_str);
        let image = state.get(IMAGE_FIELD).and_then(Value::as_str);
        match (profile, image) {
            (Some(profile), Some(image)) => {
                self.profile_key = profile.to_string();
                self.image_reference = image.to_string();
            }
            _ => {
                self.profile_key.clear();
                self.image_reference.clear();
            }
        }
    }

    /// Clear everything on session teardown.
    pub fn reset(&mut self) {
        self.profile_key.clear();
        self.image_reference.clear();
        self.child = None;
    }
}

fn first_value<'a>(form: &'a FormData, field: &str) -> Option<&'a str> {
    form.get(field)
        .and_then(|values| values.first())
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}
