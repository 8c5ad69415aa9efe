//! Boundary to the native entity-resolution engine
//!
//! The engine itself is an external collaborator. This crate only needs the
//! read-only "get version" call of an initialized engine handle, described by
//! [`product::EngineProduct`].
//!
//! # Modules
//!
//! - [`product`]: Trait for engine handles that can report their version
//! - [`report`]: Structured version report parsed from the engine's JSON answer
//! - [`sources`]: Concrete version sources (build-version file, fixed version)

pub mod product;
pub mod report;
pub mod sources;
