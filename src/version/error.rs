use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Malformed version '{version}': expected MAJOR.MINOR.PATCH")]
    Malformed { version: String },

    #[error("Version {current} is outside the supported range [{minimum}, {maximum}]")]
    OutOfRange {
        minimum: String,
        maximum: String,
        current: String,
    },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read engine version: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid engine version report: {0}")]
    InvalidReport(#[from] serde_json::Error),

    #[error("Engine unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum RequirementError {
    #[error("Runtime version {current} is older than the required minimum {minimum}")]
    RuntimeTooOld { minimum: String, current: String },

    #[error(
        "Engine binary version {current} is not compatible: supported range is [{minimum}, {maximum}]"
    )]
    IncompatibleBinary {
        minimum: String,
        maximum: String,
        current: String,
    },

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
