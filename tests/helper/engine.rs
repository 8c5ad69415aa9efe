//! Engine test utilities

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use tempfile::TempDir;

use engine_compat::engine::product::EngineProduct;
use engine_compat::engine::sources::build_file::BUILD_VERSION_FILE_NAME;
use engine_compat::version::error::EngineError;

/// Stand-in for a native engine handle
pub struct FakeEngine {
    version: Option<String>,
    calls: AtomicUsize,
}

impl FakeEngine {
    /// Engine that answers the version call like an initialized handle
    pub fn initialized(version: &str) -> Self {
        Self {
            version: Some(version.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Engine whose handle was never initialized
    pub fn uninitialized() -> Self {
        Self {
            version: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EngineProduct for FakeEngine {
    fn version(&self) -> Result<String, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.version {
            Some(version) => Ok(format!(
                r#"{{"PRODUCT_NAME": "Entity Resolution API", "VERSION": "{}", "BUILD_VERSION": "{}.23041", "COMPATIBILITY_VERSION": {{"CONFIG_VERSION": "10"}}}}"#,
                version, version
            )),
            None => Err(EngineError::Unavailable(
                "engine handle not initialized".to_string(),
            )),
        }
    }
}

/// Create an engine installation directory holding a build-version file
pub fn create_install_dir(version: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(BUILD_VERSION_FILE_NAME),
        format!(
            r#"{{"PLATFORM": "Linux", "VERSION": "{}", "API_VERSION": "{}", "BUILD_NUMBER": "2023_04_06__15_35"}}"#,
            version, version
        ),
    )
    .unwrap();
    temp_dir
}

/// Write a configuration file into `dir` and return its path
pub fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.json");
    std::fs::write(&path, content).unwrap();
    path
}
