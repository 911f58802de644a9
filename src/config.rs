//! Configuration loading from TOML files.
//!
//! The whole external configuration surface lives here: static profiles,
//! image catalog, form templates, discovery settings, and logging. Template
//! placeholders are validated at load time so a template-author mistake is
//! a startup failure rather than a render artifact.

use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::discovery::DiscoveryConfig;
use crate::domain::{BackendKind, ImageCatalog, Profile};
use crate::error::{ConfigError, Result};
use crate::form::TemplateConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Static profiles, offered before any discovered entries. The first
    /// one is the default selection.
    #[serde(default = "default_profiles")]
    pub profiles: Vec<Profile>,

    /// Image lists per user group, plus a default list.
    #[serde(default)]
    pub images: ImageCatalog,

    #[serde(default)]
    pub templates: TemplateConfig,

    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_profiles() -> Vec<Profile> {
    vec![Profile::new(
        "Local Notebook Server",
        "local",
        BackendKind::LocalProcess,
    )
    .with_option("start_timeout", 15)
    .with_option("http_timeout", 10)]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profiles: default_profiles(),
            images: ImageCatalog::default(),
            templates: TemplateConfig::default(),
            discovery: DiscoveryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.profiles.is_empty() {
            return Err(ConfigError::MissingField { field: "profiles" }.into());
        }
        // Static keys are author-controlled, so a collision here is a
        // mistake; discovered entries collide at runtime under the
        // registry's first-match policy instead.
        for (index, profile) in self.profiles.iter().enumerate() {
            if self.profiles[..index].iter().any(|p| p.key == profile.key) {
                return Err(ConfigError::DuplicateKey {
                    key: profile.key.clone(),
                }
                .into());
            }
        }
        self.templates.validate()?;
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
