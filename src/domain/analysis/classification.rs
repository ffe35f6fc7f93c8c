//! Classification - Dominance status of every strategy, in ascending cost order.

use serde::Serialize;

use super::Strategy;
use crate::domain::foundation::StrategyName;

/// Why a strategy is (or is not) on the cost-effectiveness frontier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Dominance {
    /// On the frontier.
    NotDominated,
    /// A cheaper strategy offers equal or better effect.
    Simple { by: StrategyName },
    /// Lies strictly above the chord joining `lower` and `upper` in
    /// (effect, cost) space.
    Extended {
        lower: StrategyName,
        upper: StrategyName,
    },
}

impl Dominance {
    pub fn is_dominated(&self) -> bool {
        !matches!(self, Dominance::NotDominated)
    }

    /// Human-readable reason, empty for frontier strategies.
    pub fn explanation(&self) -> String {
        match self {
            Dominance::NotDominated => String::new(),
            Dominance::Simple { by } => {
                format!("{} costs less and is at least as effective", by)
            }
            Dominance::Extended { lower, upper } => {
                format!("lies above the line joining {} and {}", lower, upper)
            }
        }
    }
}

/// A strategy paired with its dominance status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedStrategy {
    pub strategy: Strategy,
    pub dominance: Dominance,
}

impl ClassifiedStrategy {
    pub fn is_dominated(&self) -> bool {
        self.dominance.is_dominated()
    }
}

/// Result of one dominance computation.
///
/// Entries are sorted by ascending cost; ties are ordered by ascending
/// effect, then by input position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    entries: Vec<ClassifiedStrategy>,
}

impl Classification {
    pub(crate) fn new(entries: Vec<ClassifiedStrategy>) -> Self {
        Self { entries }
    }

    /// All strategies in ascending cost order.
    pub fn entries(&self) -> &[ClassifiedStrategy] {
        &self.entries
    }

    /// Non-dominated strategies in ascending cost (and effect) order.
    pub fn frontier(&self) -> Vec<&Strategy> {
        self.entries
            .iter()
            .filter(|e| !e.is_dominated())
            .map(|e| &e.strategy)
            .collect()
    }

    /// Dominated strategies in ascending cost order.
    pub fn dominated(&self) -> Vec<&ClassifiedStrategy> {
        self.entries.iter().filter(|e| e.is_dominated()).collect()
    }

    /// Looks up a strategy's classification by name.
    pub fn get(&self, name: &str) -> Option<&ClassifiedStrategy> {
        self.entries
            .iter()
            .find(|e| e.strategy.name().as_str() == name)
    }

    /// Returns true if the named strategy exists and is dominated.
    pub fn is_dominated(&self, name: &str) -> bool {
        self.get(name).map(|e| e.is_dominated()).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
