//! Concrete engine version sources

pub mod build_file;
pub mod reported;

pub use build_file::BuildVersionFile;
pub use reported::ReportedVersion;
