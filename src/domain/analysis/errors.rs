//! Errors raised by frontier analysis.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors from constructing an analyzer or deriving the ICER table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrontierError {
    #[error("Cannot analyze an empty set of strategies")]
    EmptyStrategySet,

    #[error("Strategy name '{0}' appears more than once")]
    DuplicateStrategy(String),

    #[error("Invalid strategy: {0}")]
    InvalidStrategy(#[from] ValidationError),

    #[error(
        "Incremental effect between '{from}' and '{to}' is zero; the ratio is not computable"
    )]
    NonComputableRatio { from: String, to: String },

    #[error("Incremental ratio between '{from}' and '{to}' overflows the range of f64")]
    RatioOverflow { from: String, to: String },
}

impl FrontierError {
    pub fn non_computable_ratio(from: impl Into<String>, to: impl Into<String>) -> Self {
        FrontierError::NonComputableRatio {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn ratio_overflow(from: impl Into<String>, to: impl Into<String>) -> Self {
        FrontierError::RatioOverflow {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            FrontierError::EmptyStrategySet
            | FrontierError::DuplicateStrategy(_)
            | FrontierError::InvalidStrategy(_) => ErrorCode::InvalidInput,
            FrontierError::NonComputableRatio { .. } => ErrorCode::NonComputableRatio,
            FrontierError::RatioOverflow { .. } => ErrorCode::NumericOverflow,
        }
    }
}

impl From<FrontierError> for DomainError {
    fn from(err: FrontierError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            FrontierError::DuplicateStrategy(name) => domain.with_detail("strategy", name),
            FrontierError::InvalidStrategy(inner) => {
                domain.with_detail("field", inner.field().to_string())
            }
            FrontierError::NonComputableRatio { from, to }
            | FrontierError::RatioOverflow { from, to } => {
                domain.with_detail("from", from).with_detail("to", to)
            }
            FrontierError::EmptyStrategySet => domain,
        }
    }
}
