//! Engine product trait for querying the native engine's version

#[cfg(test)]
use mockall::automock;

use crate::version::error::EngineError;

/// Trait for engine handles that can answer the "get version" call
#[cfg_attr(test, automock)]
pub trait EngineProduct: Send + Sync {
    /// Returns the engine's version report as a JSON document
    ///
    /// The document carries at least a `VERSION` field holding a
    /// `MAJOR.MINOR.PATCH` string, e.g.
    /// `{"PRODUCT_NAME": "Entity Resolution API", "VERSION": "3.5.0"}`.
    fn version(&self) -> Result<String, EngineError>;
}

impl<T: EngineProduct + ?Sized> EngineProduct for &T {
    fn version(&self) -> Result<String, EngineError> {
        (**self).version()
    }
}

impl<T: EngineProduct + ?Sized> EngineProduct for Box<T> {
    fn version(&self) -> Result<String, EngineError> {
        (**self).version()
    }
}
