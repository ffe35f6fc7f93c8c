//! Analysis Module - Cost-effectiveness frontier and ICER derivation.
//!
//! # Components
//!
//! - `Strategy` - A decision option with expected cost and effect
//! - `FrontierAnalyzer` - Simple and extended dominance, frontier extraction
//! - `Classification` - Per-strategy dominance status in ascending cost order
//! - `CeTable` - Incremental cost, incremental effect and ICER per strategy
//!
//! # Design Philosophy
//!
//! All functions are pure. They take domain objects as input and return
//! computed results; no ports or adapters are involved.

mod ce_table;
mod classification;
mod errors;
mod frontier_analyzer;
mod strategy;

pub use ce_table::{CeRow, CeTable, Icer};
pub use classification::{Classification, ClassifiedStrategy, Dominance};
pub use errors::FrontierError;
pub use frontier_analyzer::FrontierAnalyzer;
pub use strategy::Strategy;
