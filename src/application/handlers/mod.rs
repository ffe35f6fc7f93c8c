//! Application handlers.
//!
//! Handlers that orchestrate domain operations across ports.

mod analyze_strategies;

pub use analyze_strategies::{AnalyzeStrategiesHandler, AnalyzeStrategiesResult};
