//! File system adapters.

mod strategy_file;

pub use strategy_file::{
    parse_strategies, DocumentFormat, FileStrategySource, Measure, StrategyDocument,
    StrategyRecord,
};
