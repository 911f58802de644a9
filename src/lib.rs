//! Spawnselect - backend profile selection for session orchestrators.
//!
//! This crate is the configuration/customization layer of a multi-user
//! compute-session orchestrator: it lets a user pick, through an HTML
//! form, which backend profile (a local process or a containerized session
//! with a specific image) hosts their workspace, and persists that choice.
//! The orchestrator itself (process and container lifecycle, auth,
//! proxying) stays external; this crate only decides *which* backend to
//! delegate to.
//!
//! # Architecture
//!
//! - [`registry`] - Ordered registry of selectable profiles; static
//!   entries first, discovered entries appended, first entry is the
//!   default.
//! - [`discovery`] - Best-effort enumeration of container image tags,
//!   each wrapped into a profile, with optional GPU arguments from a local
//!   sidecar probe.
//! - [`form`] - Template-driven rendering of the selection form.
//! - [`controller`] - Per-session state machine: submit → resolve →
//!   delegate, with persistence into the orchestrator's state blob.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Core types: profiles, backend kinds, images, child spec
//! - [`error`] - Error types for the crate
//! - [`runtime`] - Container runtime port (bollard adapter behind the
//!   `docker` feature)
//!
//! # Features
//!
//! - `docker` - Enable the bollard-backed container runtime adapter
//! - `testkit` - Expose canned test doubles to integration tests
//!
//! # Example
//!
//! ```no_run
//! use spawnselect::controller::{FormData, SelectionController, PROFILE_FIELD};
//! use spawnselect::domain::{BackendKind, Profile};
//! use spawnselect::registry::ProfileRegistry;
//!
//! let registry = ProfileRegistry::new(vec![Profile::new(
//!     "Local Notebook Server",
//!     "local",
//!     BackendKind::LocalProcess,
//! )]);
//!
//! let mut form = FormData::new();
//! form.insert(PROFILE_FIELD.to_string(), vec!["local".to_string()]);
//!
//! let mut controller = SelectionController::new();
//! controller.submit(&form, &registry, &[]);
//! let child = controller.resolve(&registry)?;
//! # let _ = child;
//! # Ok::<(), spawnselect::error::SelectionError>(())
//! ```

pub mod cli;
pub mod config;
pub mod controller;
pub mod discovery;
pub mod domain;
pub mod error;
pub mod form;
pub mod registry;
pub mod runtime;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
