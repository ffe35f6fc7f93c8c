//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `StrategySource` - Input: strategies with expected cost and effect
//! - `ReportWriter` - Output: the cost-effectiveness table

mod report_writer;
mod strategy_source;

pub use report_writer::ReportWriter;
pub use strategy_source::StrategySource;
