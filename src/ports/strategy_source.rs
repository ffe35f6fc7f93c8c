//! Strategy Source Port - Where strategies to analyze come from.
//!
//! The application layer depends on this trait; adapters such as
//! `FileStrategySource` and `InMemoryStrategySource` implement it.

use crate::domain::analysis::Strategy;
use crate::domain::foundation::DomainError;

/// Port for loading the strategies of one analysis.
///
/// # Contract
///
/// Implementations must:
/// - Return strategies in their original order
/// - Return validated `Strategy` values (finite cost and effect)
/// - Report a missing source as `SOURCE_NOT_FOUND` and unreadable or
///   malformed content as `SOURCE_UNREADABLE` / `INVALID_FORMAT`
///
/// Uniqueness of names and non-emptiness are checked by the analyzer,
/// not by sources.
pub trait StrategySource: Send + Sync {
    /// Loads all strategies.
    fn load_strategies(&self) -> Result<Vec<Strategy>, DomainError>;

    /// Short description of the source, used in log output.
    fn describe(&self) -> String;
}
