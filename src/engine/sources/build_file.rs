//! Engine version source backed by the installation's build-version file
//!
//! Engine installations ship a small JSON document next to the shared
//! library describing the build, e.g.
//! `{"PLATFORM": "Linux", "VERSION": "3.5.0", "BUILD_NUMBER": "2023_04_06__15_35"}`.
//! Reading it lets the compatibility gate run without loading the library.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::engine::product::EngineProduct;
use crate::engine::report::VersionReport;
use crate::version::error::EngineError;

/// File name of the build-version document inside an installation
pub const BUILD_VERSION_FILE_NAME: &str = "g2BuildVersion.json";

/// Engine source that reads the build-version file on every call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildVersionFile {
    path: PathBuf,
}

impl BuildVersionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate the build-version file inside an installation directory
    pub fn in_install_dir(install_dir: &Path) -> Self {
        Self::new(install_dir.join(BUILD_VERSION_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EngineProduct for BuildVersionFile {
    fn version(&self) -> Result<String, EngineError> {
        debug!("Reading engine build version from {:?}", self.path);

        let content = std::fs::read_to_string(&self.path)?;

        // Validate the document here so a broken file surfaces as an engine
        // error rather than later as a malformed version.
        let report = VersionReport::parse(&content)?;
        Ok(serde_json::to_string(&report)?)
    }
}
