//! Orchestrator-agnostic core types: profiles, backend kinds, image
//! entries, and per-session selection state.

mod image;
mod profile;
mod selection;

pub use image::{ImageCatalog, ImageEntry};
pub use profile::{BackendKind, OptionMap, Profile};
pub use selection::{ChildSpec, SelectionPhase, IMAGE_OPTION};
