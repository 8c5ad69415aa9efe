//! Version compatibility gate for native entity-resolution engine bindings
//!
//! Binding layers call [`check_requirements`] once before initializing the
//! engine; a failure means the installed engine or the hosting runtime is
//! not one the bindings were built against.

pub mod config;
pub mod engine;
pub mod logging;
pub mod runtime;
pub mod version;

pub use version::checker::{RequirementChecker, Requirements, check_requirements};
pub use version::range::supports_version;
pub use version::semver::normalize_semantic_version;
