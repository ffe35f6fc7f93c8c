//! CEA Frontier - Cost-effectiveness frontier analysis
//!
//! This crate classifies decision strategies as dominated or efficient
//! by their expected cost and effect, and derives incremental
//! cost-effectiveness ratios (ICERs) along the resulting frontier.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
