//! Engine version source backed by a version supplied by the host

use crate::engine::product::EngineProduct;
use crate::engine::report::VersionReport;
use crate::version::error::EngineError;

/// Engine source that reports a fixed version
///
/// Used when the host already knows the engine version, e.g. passed on the
/// command line or read from its own deployment manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedVersion {
    report: VersionReport,
}

impl ReportedVersion {
    pub fn new(version: &str) -> Self {
        Self {
            report: VersionReport::new(version),
        }
    }
}

impl From<VersionReport> for ReportedVersion {
    fn from(report: VersionReport) -> Self {
        Self { report }
    }
}

impl EngineProduct for ReportedVersion {
    fn version(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(&self.report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_answers_with_report_document() {
        let source = ReportedVersion::new("3.5.0");

        let report = VersionReport::parse(&source.version().unwrap()).unwrap();

        assert_eq!(report, VersionReport::new("3.5.0"));
    }

    #[test]
    fn from_report_keeps_all_fields() {
        let mut report = VersionReport::new("3.4.2");
        report.product_name = Some("Entity Resolution API".to_string());
        let source = ReportedVersion::from(report.clone());

        let answered = VersionReport::parse(&source.version().unwrap()).unwrap();

        assert_eq!(answered, report);
    }
}
