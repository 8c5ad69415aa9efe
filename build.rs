//! Build script for engine-compat
//!
//! Captures the version of the toolchain building the crate so the
//! requirement checker can compare it against the runtime floor.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .and_then(|stdout| release_of(&stdout))
        .unwrap_or_else(|| "0.0.0".to_string());

    println!("cargo:rustc-env=ENGINE_COMPAT_RUSTC_VERSION={}", version);
}

/// "rustc 1.86.0-nightly (abc 2025-01-01)" -> "1.86.0"
fn release_of(stdout: &str) -> Option<String> {
    let release = stdout.split_whitespace().nth(1)?;
    let core = release.split(['-', '+']).next()?;
    let is_triple = core.split('.').count() == 3
        && core
            .split('.')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));
    is_triple.then(|| core.to_string())
}
