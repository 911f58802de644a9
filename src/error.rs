use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("duplicate profile key '{key}' in static profile list")]
    DuplicateKey { key: String },

    #[error("unknown placeholder {{{name}}} in {template} template")]
    UnknownPlaceholder { template: &'static str, name: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Image discovery errors.
///
/// A missing runtime client is fatal, but only once discovery is actually
/// invoked; a registry that never discovers never sees it.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("container runtime unavailable: {reason}")]
    RuntimeUnavailable { reason: String },

    #[error("container runtime query failed: {0}")]
    Query(String),
}

/// Selection resolution errors.
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("submitted profile key '{key}' matches no registry entry")]
    UnknownProfile { key: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("selection error: {0}")]
    Selection(#[from] SelectionError),
}

pub type Result<T> = std::result::Result<T, Error>;
