//! Command-line interface definitions.
//!
//! Operational tooling for deployers: render the form a user would see,
//! run discovery against the local container runtime, and diagnostic
//! checks for the configuration file and the GPU sidecar.

pub mod check;
pub mod discover;
pub mod render;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::runtime::ContainerRuntime;

/// Spawnselect - backend profile selection for session orchestrators.
#[derive(Parser, Debug)]
#[command(name = "spawnselect")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the HTML selection form for a given user
    Render(RenderArgs),

    /// Discover container image profiles from the local runtime
    Discover(DiscoverArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Group memberships of the requesting user (repeatable)
    #[arg(short, long = "group")]
    pub groups: Vec<String>,

    /// Per-session network identifier injected into discovered profiles
    #[arg(short, long, default_value = "spawnselect")]
    pub network_name: String,

    /// Include profiles discovered from the container runtime
    #[arg(long)]
    pub discover: bool,
}

#[derive(Args, Debug)]
pub struct DiscoverArgs {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Per-session network identifier injected into discovered profiles
    #[arg(short, long, default_value = "spawnselect")]
    pub network_name: String,
}

/// Subcommands for `spawnselect check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file
    Config(CheckArgs),
    /// Probe the GPU sidecar endpoint
    Gpu(CheckArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// The container runtime the CLI talks to, when the crate was built with
/// one. Discovery invoked without one fails with the runtime-unavailable
/// configuration error.
#[cfg(feature = "docker")]
pub(crate) fn local_runtime() -> Result<Option<Arc<dyn ContainerRuntime>>> {
    let runtime = crate::runtime::DockerRuntime::connect()?;
    Ok(Some(Arc::new(runtime)))
}

#[cfg(not(feature = "docker"))]
pub(crate) fn local_runtime() -> Result<Option<Arc<dyn ContainerRuntime>>> {
    Ok(None)
}
