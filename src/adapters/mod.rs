//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `file` - Strategy documents on disk (JSON, YAML)
//! - `memory` - In-process strategy lists
//! - `report` - Text, JSON and YAML rendering of the CE table

pub mod file;
pub mod memory;
pub mod report;

pub use file::FileStrategySource;
pub use memory::InMemoryStrategySource;
pub use report::StreamReportWriter;
