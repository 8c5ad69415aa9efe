//! Identity of the hosting runtime

/// Version of the Rust toolchain that built this crate, as `MAJOR.MINOR.PATCH`.
///
/// Captured by the build script; `"0.0.0"` when it could not be determined,
/// which fails any non-zero runtime floor.
pub fn runtime_version() -> &'static str {
    env!("ENGINE_COMPAT_RUSTC_VERSION")
}
