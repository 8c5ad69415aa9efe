//! Runtime and engine requirement checks run before engine initialization

use tracing::{debug, error, info};

use crate::config::{
    DEFAULT_MINIMUM_RUNTIME_VERSION, SUPPORTED_ENGINE_MAXIMUM_VERSION,
    SUPPORTED_ENGINE_MINIMUM_VERSION,
};
use crate::engine::product::EngineProduct;
use crate::engine::report::VersionReport;
use crate::runtime::runtime_version;
use crate::version::error::{RequirementError, VersionError};
use crate::version::range::VersionRange;
use crate::version::semver::parse_semantic_version;

/// Versions a release of the binding layer was built to support
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirements {
    /// Runtime floor used when a check supplies none
    pub minimum_runtime_version: String,
    pub minimum_engine_version: String,
    pub maximum_engine_version: String,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            minimum_runtime_version: DEFAULT_MINIMUM_RUNTIME_VERSION.to_string(),
            minimum_engine_version: SUPPORTED_ENGINE_MINIMUM_VERSION.to_string(),
            maximum_engine_version: SUPPORTED_ENGINE_MAXIMUM_VERSION.to_string(),
        }
    }
}

/// One-shot startup gate over the hosting runtime and the engine binary
pub struct RequirementChecker<E: EngineProduct> {
    engine: E,
    requirements: Requirements,
    runtime_version: String,
}

impl<E: EngineProduct> RequirementChecker<E> {
    pub fn new(engine: E, requirements: Requirements) -> Self {
        Self {
            engine,
            requirements,
            runtime_version: runtime_version().to_string(),
        }
    }

    /// Replace the detected runtime version
    pub fn with_runtime_version(mut self, version: &str) -> Self {
        self.runtime_version = version.to_string();
        self
    }

    pub fn requirements(&self) -> &Requirements {
        &self.requirements
    }

    /// Check the hosting runtime against a floor. There is no ceiling.
    pub fn check_runtime(&self, minimum_runtime_version: &str) -> Result<(), RequirementError> {
        let minimum = parse_semantic_version(minimum_runtime_version)?;
        let current = parse_semantic_version(&self.runtime_version)?;

        debug!(
            "Runtime version {} (minimum {})",
            self.runtime_version, minimum_runtime_version
        );

        if current < minimum {
            return Err(RequirementError::RuntimeTooOld {
                minimum: minimum_runtime_version.to_string(),
                current: self.runtime_version.clone(),
            });
        }
        Ok(())
    }

    /// Ask the engine for its version and check it against the supported band
    pub fn check_engine(&self) -> Result<VersionReport, RequirementError> {
        let report = VersionReport::parse(&self.engine.version()?)?;
        let range = VersionRange::parse(
            &self.requirements.minimum_engine_version,
            &self.requirements.maximum_engine_version,
        )?;

        debug!(
            "Engine version {} (supported [{}, {}])",
            report.version, range.minimum, range.maximum
        );

        match range.check(&report.version) {
            Ok(()) => Ok(report),
            Err(VersionError::OutOfRange {
                minimum,
                maximum,
                current,
            }) => Err(RequirementError::IncompatibleBinary {
                minimum,
                maximum,
                current,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Run the runtime check, then the engine check.
    ///
    /// Uses the configured runtime floor when `minimum_runtime_version` is
    /// `None`. Returns `Ok(true)` when both pass; any failure is fatal to the
    /// caller's startup sequence and is not retried.
    pub fn check_requirements(
        &self,
        minimum_runtime_version: Option<&str>,
    ) -> Result<bool, RequirementError> {
        let minimum_runtime_version =
            minimum_runtime_version.unwrap_or(&self.requirements.minimum_runtime_version);

        self.check_runtime(minimum_runtime_version)
            .and_then(|()| self.check_engine())
            .map(|report| {
                info!(
                    "Requirements satisfied: runtime {}, engine {}",
                    self.runtime_version, report.version
                );
                true
            })
            .inspect_err(|e| error!("Requirement check failed: {}", e))
    }
}

/// Check the running environment against the default requirements
pub fn check_requirements<E: EngineProduct>(
    engine: E,
    minimum_runtime_version: Option<&str>,
) -> Result<bool, RequirementError> {
    RequirementChecker::new(engine, Requirements::default())
        .check_requirements(minimum_runtime_version)
}
