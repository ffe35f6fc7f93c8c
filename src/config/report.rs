//! Report configuration

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

/// Largest number of decimal places accepted for text reports.
pub const MAX_PRECISION: usize = 12;

/// Report configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Output format of the cost-effectiveness table
    #[serde(default)]
    pub format: ReportFormat,

    /// Decimal places for numbers in text reports
    #[serde(default = "default_precision")]
    pub precision: usize,
}

/// Output format for reports
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned columns for terminals
    #[default]
    Text,
    Json,
    Yaml,
}

impl ReportConfig {
    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.precision > MAX_PRECISION {
            return Err(ValidationError::PrecisionTooLarge(self.precision));
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            precision: default_precision(),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            other => Err(format!("unknown report format '{}'", other)),
        }
    }
}

fn default_precision() -> usize {
    2
}
