//! File-based Strategy Source Adapter
//!
//! Reads strategies from a JSON or YAML document on disk. Each strategy
//! gives its cost and effect either as a single expected value or as a
//! sequence of samples, which is averaged on load.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::analysis::{FrontierError, Strategy};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::StrategySource;

/// Serialization format of a strategy document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            other => Err(ValidationError::invalid_format(
                "path",
                format!("unsupported extension '{}'", other.unwrap_or("")),
            )
            .into()),
        }
    }
}

/// Top-level document shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyDocument {
    pub strategies: Vec<StrategyRecord>,
}

/// One strategy as written in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRecord {
    pub name: String,
    pub cost: Measure,
    pub effect: Measure,
}

/// An expected value, or samples to average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Mean(f64),
    Samples(Vec<f64>),
}

impl Measure {
    fn samples(&self) -> &[f64] {
        match self {
            Measure::Mean(value) => std::slice::from_ref(value),
            Measure::Samples(values) => values,
        }
    }
}

impl StrategyRecord {
    /// Converts into a validated strategy.
    pub fn into_strategy(self) -> Result<Strategy, ValidationError> {
        Strategy::from_samples(self.name, self.cost.samples(), self.effect.samples())
    }
}

/// Parses a strategy document and validates every record.
pub fn parse_strategies(content: &str, format: DocumentFormat) -> Result<Vec<Strategy>, DomainError> {
    let document: StrategyDocument = match format {
        DocumentFormat::Json => serde_json::from_str(content)
            .map_err(|e| DomainError::new(ErrorCode::InvalidFormat, e.to_string()))?,
        DocumentFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| DomainError::new(ErrorCode::InvalidFormat, e.to_string()))?,
    };

    document
        .strategies
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let name = record.name.clone();
            record.into_strategy().map_err(|e| {
                DomainError::from(FrontierError::InvalidStrategy(e))
                    .with_detail("strategy", name)
                    .with_detail("index", index.to_string())
            })
        })
        .collect()
}

/// Strategy source backed by a JSON or YAML file.
#[derive(Debug, Clone)]
pub struct FileStrategySource {
    path: PathBuf,
}

impl FileStrategySource {
    /// Create a source reading from `path`
    ///
    /// The format is chosen from the extension when strategies are loaded.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StrategySource for FileStrategySource {
    fn load_strategies(&self) -> Result<Vec<Strategy>, DomainError> {
        let format = DocumentFormat::from_path(&self.path)?;

        let content = fs::read_to_string(&self.path).map_err(|e| {
            let err = match e.kind() {
                io::ErrorKind::NotFound => DomainError::new(
                    ErrorCode::SourceNotFound,
                    format!("Strategy file not found: {}", self.path.display()),
                ),
                _ => DomainError::new(ErrorCode::SourceUnreadable, e.to_string()),
            };
            err.with_detail("path", self.path.display().to_string())
        })?;

        let strategies = parse_strategies(&content, format)?;
        debug!(
            path = %self.path.display(),
            count = strategies.len(),
            "Loaded strategies"
        );
        Ok(strategies)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
