//! In-memory strategy source.
//!
//! Serves a fixed list of strategies. Used by the library API when strategies
//! are computed in-process, and by tests in place of the file adapter.

use crate::domain::analysis::Strategy;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::StrategySource;

/// Strategy source holding its strategies in memory.
///
/// # Example
///
/// ```
/// use cea_frontier::adapters::InMemoryStrategySource;
/// use cea_frontier::domain::analysis::Strategy;
/// use cea_frontier::ports::StrategySource;
///
/// let source = InMemoryStrategySource::new(vec![
///     Strategy::new("usual care", 0.0, 0.0).unwrap(),
///     Strategy::new("screening", 10.0, 5.0).unwrap(),
/// ]);
/// assert_eq!(source.load_strategies().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStrategySource {
    strategies: Vec<Strategy>,
    failure: Option<String>,
}

impl InMemoryStrategySource {
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self {
            strategies,
            failure: None,
        }
    }

    /// A source whose loads always fail with `SOURCE_UNREADABLE`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            strategies: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl StrategySource for InMemoryStrategySource {
    fn load_strategies(&self) -> Result<Vec<Strategy>, DomainError> {
        match &self.failure {
            Some(message) => Err(DomainError::new(ErrorCode::SourceUnreadable, message.clone())),
            None => Ok(self.strategies.clone()),
        }
    }

    fn describe(&self) -> String {
        format!("in-memory ({} strategies)", self.strategies.len())
    }
}
