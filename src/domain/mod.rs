//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `analysis` - Pure domain services for cost-effectiveness analysis

pub mod analysis;
pub mod foundation;
