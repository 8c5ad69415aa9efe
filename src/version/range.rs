//! Inclusive version range validation

use semver::Version;

use crate::version::error::VersionError;
use crate::version::semver::parse_semantic_version;

/// Inclusive `[minimum, maximum]` band of acceptable versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    pub minimum: Version,
    pub maximum: Version,
    /// Bounds as written by the caller, reported back in errors
    raw_minimum: String,
    raw_maximum: String,
}

impl VersionRange {
    pub fn new(minimum: Version, maximum: Version) -> Self {
        Self {
            raw_minimum: minimum.to_string(),
            raw_maximum: maximum.to_string(),
            minimum,
            maximum,
        }
    }

    /// Parse both bounds, minimum first
    pub fn parse(minimum: &str, maximum: &str) -> Result<Self, VersionError> {
        Ok(Self {
            minimum: parse_semantic_version(minimum)?,
            maximum: parse_semantic_version(maximum)?,
            raw_minimum: minimum.to_string(),
            raw_maximum: maximum.to_string(),
        })
    }

    /// Check if a version lies within the band, both bounds included.
    ///
    /// Compares component by component, so components of 100 or more
    /// order correctly. A band whose minimum exceeds its maximum contains
    /// nothing.
    pub fn contains(&self, version: &Version) -> bool {
        &self.minimum <= version && version <= &self.maximum
    }

    /// Validate a version string against the band.
    ///
    /// `OutOfRange` carries the bounds as they were given to [`parse`](Self::parse).
    pub fn check(&self, current: &str) -> Result<(), VersionError> {
        let version = parse_semantic_version(current)?;
        if self.contains(&version) {
            Ok(())
        } else {
            Err(VersionError::OutOfRange {
                minimum: self.raw_minimum.clone(),
                maximum: self.raw_maximum.clone(),
                current: current.to_string(),
            })
        }
    }
}

/// Check that `current` lies within `[minimum, maximum]`.
///
/// Returns `Ok(true)` when it does. Out-of-band versions fail with
/// `VersionError::OutOfRange` carrying the three inputs as given.
pub fn supports_version(minimum: &str, maximum: &str, current: &str) -> Result<bool, VersionError> {
    VersionRange::parse(minimum, maximum)?
        .check(current)
        .map(|()| true)
}
