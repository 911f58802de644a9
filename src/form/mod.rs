//! HTML selection form rendering.
//!
//! The renderer substitutes profile and image metadata into configurable
//! string templates and returns one HTML fragment embedding two `<select>`
//! elements. It does not serve HTTP and does not escape anything beyond
//! what the templates themselves contain.

mod template;

pub use template::{placeholders, substitute, validate_placeholders};

use serde::Deserialize;

use crate::domain::ImageEntry;
use crate::error::ConfigError;
use crate::registry::ProfileRegistry;

/// Placeholder names recognized in the per-profile option template.
pub const PROFILE_FIELDS: &[&str] = &["display", "key", "type", "first"];
/// Placeholder names recognized in the per-image option template.
pub const IMAGE_FIELDS: &[&str] = &["display", "key", "first"];
/// Placeholder names recognized in the outer form template.
pub const FORM_FIELDS: &[&str] = &["input_template", "input_image_template"];

/// Form templates and the "selected" marker text.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Outer template; `{input_template}` and `{input_image_template}` are
    /// replaced with the concatenated option renderings.
    pub form: String,
    /// Rendered once per profile with `{display}`, `{key}`, `{type}`,
    /// `{first}`.
    pub profile_option: String,
    /// Rendered once per image with `{display}`, `{key}`, `{first}`.
    pub image_option: String,
    /// Text substituted as `{first}` on the first entry of each list.
    pub selected_marker: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            form: r#"<label for="profile">Select a job profile:</label>
<select class="form-control" name="profile" required autofocus>
{input_template}
</select>

<label for="dockerImage">Select docker image:</label>
<select class="form-control" name="dockerImage" required autofocus>
{input_image_template}
</select>
"#
            .to_string(),
            profile_option: r#"
<option value="{key}" {first}>{display}</option>"#
                .to_string(),
            image_option: r#"
<option value="{key}" {first}>{display}</option>"#
                .to_string(),
            selected_marker: "selected".to_string(),
        }
    }
}

impl TemplateConfig {
    /// Reject unknown placeholders. Run at configuration-load time so
    /// template-author mistakes surface as startup failures, not render
    /// artifacts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_placeholders(&self.form, FORM_FIELDS, "form")?;
        validate_placeholders(&self.profile_option, PROFILE_FIELDS, "profile_option")?;
        validate_placeholders(&self.image_option, IMAGE_FIELDS, "image_option")?;
        Ok(())
    }
}

/// Renders the selection form for a registry and a user's image list.
pub struct FormRenderer<'a> {
    templates: &'a TemplateConfig,
}

impl<'a> FormRenderer<'a> {
    pub fn new(templates: &'a TemplateConfig) -> Self {
        Self { templates }
    }

    /// Produce the HTML fragment.
    ///
    /// The first profile and the first image each carry the configured
    /// selected marker; every other entry gets an empty `{first}`.
    pub fn render(&self, registry: &ProfileRegistry, images: &[ImageEntry]) -> String {
        let marker = self.templates.selected_marker.as_str();

        let mut profile_options = String::new();
        for (index, profile) in registry.profiles().iter().enumerate() {
            let first = if index == 0 { marker } else { "" };
            profile_options.push_str(&substitute(
                &self.templates.profile_option,
                &[
                    ("display", &profile.display),
                    ("key", &profile.key),
                    ("type", profile.backend.as_str()),
                    ("first", first),
                ],
            ));
        }

        let mut image_options = String::new();
        for (index, image) in images.iter().enumerate() {
            let first = if index == 0 { marker } else { "" };
            image_options.push_str(&substitute(
                &self.templates.image_option,
                &[
                    ("display", &image.display),
                    ("key", &image.reference),
                    ("first", first),
                ],
            ));
        }

        substitute(
            &self.templates.form,
            &[
                ("input_template", &profile_options),
                ("input_image_template", &image_options),
            ],
        )
    }
}
