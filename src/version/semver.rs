use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

use crate::version::error::VersionError;

/// Field width of each component in the normalized encoding.
const COMPONENT_WIDTH: u64 = 100;

static SEMANTIC_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)$").unwrap());

/// Parse a strict `MAJOR.MINOR.PATCH` string into a semver::Version.
///
/// Unlike `Version::parse`, leading zeros are accepted and read as plain
/// base-10 ("01" -> 1). Partial versions, prefixes, pre-release and build
/// metadata are rejected.
///
/// Examples:
/// - "1.2.3" -> Version(1, 2, 3)
/// - "01.02.03" -> Version(1, 2, 3)
/// - "1.2" -> Err(Malformed)
pub fn parse_semantic_version(version: &str) -> Result<Version, VersionError> {
    let malformed = || VersionError::Malformed {
        version: version.to_string(),
    };

    let captures = SEMANTIC_VERSION_RE.captures(version).ok_or_else(malformed)?;
    let component = |index: usize| -> Result<u64, VersionError> {
        captures[index].parse::<u64>().map_err(|_| malformed())
    };

    Ok(Version::new(component(1)?, component(2)?, component(3)?))
}

/// Encode a version as `major * 10000 + minor * 100 + patch`.
///
/// The ordering of the encoded values matches version ordering only while
/// every component stays below 100. Larger components are still encoded,
/// but may collide with other versions.
pub fn encode_version(version: &Version) -> Option<u64> {
    version
        .major
        .checked_mul(COMPONENT_WIDTH * COMPONENT_WIDTH)?
        .checked_add(version.minor.checked_mul(COMPONENT_WIDTH)?)?
        .checked_add(version.patch)
}

/// Normalize a `MAJOR.MINOR.PATCH` string into a single comparable integer.
pub fn normalize_semantic_version(version: &str) -> Result<u64, VersionError> {
    let parsed = parse_semantic_version(version)?;
    encode_version(&parsed).ok_or_else(|| VersionError::Malformed {
        version: version.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0.0.0", 0)]
    #[case("1.2.3", 10203)]
    #[case("11.1.13", 110113)]
    #[case("11.12.13", 111213)]
    #[case("99.99.99", 999999)]
    #[case("01.02.03", 10203)] // leading zeros are plain base-10
    fn normalize_semantic_version_encodes_components(
        #[case] version: &str,
        #[case] expected: u64,
    ) {
        assert_eq!(normalize_semantic_version(version), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("1")]
    #[case("1.2")]
    #[case("1.2.3.4")]
    #[case("a.b.c")]
    #[case("v1.2.3")]
    #[case("1.2.3-beta.1")]
    #[case("1.2.3+build")]
    #[case(" 1.2.3")]
    #[case("1..3")]
    #[case("-1.2.3")]
    #[case("99999999999999999999.0.0")] // does not fit in u64
    fn normalize_semantic_version_rejects_malformed_input(#[case] version: &str) {
        assert_eq!(
            normalize_semantic_version(version),
            Err(VersionError::Malformed {
                version: version.to_string()
            })
        );
    }

    #[test]
    fn normalize_semantic_version_rejects_values_overflowing_encoding() {
        let version = format!("{}.0.0", u64::MAX / 100);

        assert!(matches!(
            normalize_semantic_version(&version),
            Err(VersionError::Malformed { .. })
        ));
    }

    #[test]
    fn parse_semantic_version_returns_plain_release() {
        let version = parse_semantic_version("3.5.0").unwrap();

        assert_eq!(version, Version::new(3, 5, 0));
        assert!(version.pre.is_empty());
        assert!(version.build.is_empty());
    }

    #[test]
    fn encoded_order_matches_component_order_below_one_hundred() {
        let versions = [
            "0.0.0", "0.0.1", "0.0.99", "0.1.0", "0.99.99", "1.0.0", "1.2.3", "10.10.9",
            "10.10.10", "10.10.12", "11.0.0", "99.99.99",
        ];

        for a in versions {
            for b in versions {
                let by_component =
                    parse_semantic_version(a).unwrap() < parse_semantic_version(b).unwrap();
                let by_encoding =
                    normalize_semantic_version(a).unwrap() < normalize_semantic_version(b).unwrap();
                assert_eq!(by_component, by_encoding, "{} < {}", a, b);
            }
        }
    }

    #[test]
    fn encoding_collides_once_a_component_reaches_one_hundred() {
        assert_eq!(
            normalize_semantic_version("1.100.0"),
            normalize_semantic_version("2.0.0")
        );
    }
}
