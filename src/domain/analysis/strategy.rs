//! Strategy - A decision option with an expected cost and expected effect.

use serde::Serialize;

use crate::domain::foundation::{StrategyName, ValidationError};

/// A decision strategy summarized by its average cost and average effect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Strategy {
    name: StrategyName,
    cost: f64,
    effect: f64,
}

impl Strategy {
    /// Creates a strategy from precomputed averages.
    ///
    /// Cost and effect must be finite.
    pub fn new(
        name: impl Into<String>,
        cost: f64,
        effect: f64,
    ) -> Result<Self, ValidationError> {
        let name = StrategyName::new(name)?;
        Ok(Self {
            name,
            cost: ensure_finite("cost", cost)?,
            effect: ensure_finite("effect", effect)?,
        })
    }

    /// Creates a strategy by averaging cost and effect samples.
    ///
    /// # Edge Cases
    /// - Empty sample sequence: `EmptySamples`
    /// - Any non-finite sample, or a mean that overflows: `NonFinite`
    pub fn from_samples(
        name: impl Into<String>,
        cost_samples: &[f64],
        effect_samples: &[f64],
    ) -> Result<Self, ValidationError> {
        let cost = mean("cost", cost_samples)?;
        let effect = mean("effect", effect_samples)?;
        Self::new(name, cost, effect)
    }

    pub fn name(&self) -> &StrategyName {
        &self.name
    }

    /// Expected (average) cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Expected (average) effect.
    pub fn effect(&self) -> f64 {
        self.effect
    }
}

fn ensure_finite(field: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::non_finite(field, value))
    }
}

fn mean(field: &str, samples: &[f64]) -> Result<f64, ValidationError> {
    if samples.is_empty() {
        return Err(ValidationError::empty_samples(field));
    }
    if let Some(bad) = samples.iter().find(|s| !s.is_finite()) {
        return Err(ValidationError::non_finite(field, *bad));
    }
    let sum: f64 = samples.iter().sum();
    ensure_finite(field, sum / samples.len() as f64)
}
