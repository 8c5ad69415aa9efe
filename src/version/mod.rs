//! Version compatibility layer for the native engine bindings
//!
//! This module decides whether the hosting runtime and the installed native
//! engine are versions this binding layer was built to support.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Semver    │────▶│    Range    │────▶│   Checker   │
//! │ (normalize) │     │ (validate)  │     │   (gate)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │   Engine    │
//!                                         │  (version)  │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`semver`]: Strict `MAJOR.MINOR.PATCH` parsing and integer normalization
//! - [`range`]: Inclusive `[minimum, maximum]` range validation
//! - [`checker`]: Runtime floor and engine band checks run at startup
//! - [`error`]: Error types for version, engine and requirement failures

pub mod checker;
pub mod error;
pub mod range;
pub mod semver;
