//! Engine version report
//!
//! The engine answers its "get version" call with a JSON document. The same
//! shape (a subset of it) is written to the installation's build-version
//! file. Both are parsed into one [`VersionReport`]; callers choose the
//! output representation with [`ReportFormat`] instead of asking the engine
//! for differently-shaped answers.

use serde::{Deserialize, Serialize};

use crate::version::error::EngineError;

/// Representation used when handing a report back to a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Compact JSON document, field names as the engine writes them
    #[default]
    Json,
    /// One `KEY: value` line per present field
    Text,
}

/// Compatibility block of the engine's version report
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CompatibilityVersion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_version: Option<String>,
}

/// Version report of the native engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct VersionReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// `MAJOR.MINOR.PATCH` of the engine binary
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility_version: Option<CompatibilityVersion>,
}

impl VersionReport {
    /// Create a report that carries nothing but a version
    pub fn new(version: &str) -> Self {
        Self {
            product_name: None,
            version: version.to_string(),
            build_version: None,
            build_date: None,
            build_number: None,
            platform: None,
            compatibility_version: None,
        }
    }

    /// Parse the engine's JSON answer. Unknown fields are ignored.
    pub fn parse(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the report in the requested representation
    pub fn render(&self, format: ReportFormat) -> Result<String, EngineError> {
        match format {
            ReportFormat::Json => Ok(serde_json::to_string(self)?),
            ReportFormat::Text => Ok(self.to_text()),
        }
    }

    fn to_text(&self) -> String {
        let config_version = self
            .compatibility_version
            .as_ref()
            .and_then(|c| c.config_version.as_deref());

        let fields = [
            ("PRODUCT_NAME", self.product_name.as_deref()),
            ("VERSION", Some(self.version.as_str())),
            ("BUILD_VERSION", self.build_version.as_deref()),
            ("BUILD_DATE", self.build_date.as_deref()),
            ("BUILD_NUMBER", self.build_number.as_deref()),
            ("PLATFORM", self.platform.as_deref()),
            ("CONFIG_VERSION", config_version),
        ];

        fields
            .into_iter()
            .filter_map(|(key, value)| {
                value.map(|v| format!("{:<15} {}", format!("{}:", key), v))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
