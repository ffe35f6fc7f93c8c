//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of cost-effectiveness analysis.

mod errors;
mod strategy_name;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use strategy_name::StrategyName;
