//! CE Table - Incremental cost-effectiveness ratios along the frontier.

use serde::Serialize;
use std::fmt;

use super::Dominance;
use crate::domain::foundation::StrategyName;

/// ICER cell of a table row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icer {
    /// Lowest-cost frontier strategy; there is no predecessor to compare with.
    NotApplicable,
    /// The strategy is off the frontier.
    Dominated,
    /// Incremental cost per unit of incremental effect.
    Ratio(f64),
}

impl Icer {
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Icer::Ratio(value) => Some(*value),
            Icer::NotApplicable | Icer::Dominated => None,
        }
    }
}

impl fmt::Display for Icer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Icer::NotApplicable => write!(f, "-"),
            Icer::Dominated => write!(f, "Dominated"),
            Icer::Ratio(value) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, value),
                None => write!(f, "{}", value),
            },
        }
    }
}

/// One strategy's row in the cost-effectiveness table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CeRow {
    pub name: StrategyName,
    pub cost: f64,
    pub effect: f64,
    pub dominance: Dominance,
    /// Cost minus the previous frontier strategy's cost.
    pub incremental_cost: Option<f64>,
    /// Effect minus the previous frontier strategy's effect.
    pub incremental_effect: Option<f64>,
    pub icer: Icer,
}

impl CeRow {
    pub fn is_dominated(&self) -> bool {
        self.dominance.is_dominated()
    }
}

/// Full classification table: every strategy, ascending cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CeTable {
    pub rows: Vec<CeRow>,
}

impl CeTable {
    /// Looks up a row by strategy name.
    pub fn row(&self, name: &str) -> Option<&CeRow> {
        self.rows.iter().find(|r| r.name.as_str() == name)
    }

    /// Rows for non-dominated strategies, ascending cost.
    pub fn frontier_rows(&self) -> impl Iterator<Item = &CeRow> {
        self.rows.iter().filter(|r| !r.is_dominated())
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier_rows().count()
    }

    pub fn dominated_len(&self) -> usize {
        self.rows.len() - self.frontier_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, dominance: Dominance, icer: Icer) -> CeRow {
        CeRow {
            name: StrategyName::new(name).unwrap(),
            cost: 0.0,
            effect: 0.0,
            dominance,
            incremental_cost: None,
            incremental_effect: None,
            icer,
        }
    }

    #[test]
    fn icer_display_markers() {
        assert_eq!(Icer::NotApplicable.to_string(), "-");
        assert_eq!(Icer::Dominated.to_string(), "Dominated");
        assert_eq!(Icer::Ratio(2.0).to_string(), "2");
        assert_eq!(format!("{:.2}", Icer::Ratio(2.0)), "2.00");
    }

    #[test]
    fn markers_have_no_ratio() {
        assert_eq!(Icer::NotApplicable.ratio(), None);
        assert_eq!(Icer::Dominated.ratio(), None);
        assert_eq!(Icer::Ratio(1.5).ratio(), Some(1.5));
    }

    #[test]
    fn icer_serializes_markers_distinctly() {
        assert_eq!(
            serde_json::to_string(&Icer::NotApplicable).unwrap(),
            "\"not_applicable\""
        );
        assert_eq!(serde_json::to_string(&Icer::Dominated).unwrap(), "\"dominated\"");
        assert_eq!(
            serde_json::to_string(&Icer::Ratio(2.5)).unwrap(),
            r#"{"ratio":2.5}"#
        );
    }

    #[test]
    fn table_counts_frontier_and_dominated() {
        let table = CeTable {
            rows: vec![
                row("A", Dominance::NotDominated, Icer::NotApplicable),
                row("B", Dominance::NotDominated, Icer::Ratio(2.0)),
                row(
                    "C",
                    Dominance::Simple {
                        by: StrategyName::new("B").unwrap(),
                    },
                    Icer::Dominated,
                ),
            ],
        };

        assert_eq!(table.frontier_len(), 2);
        assert_eq!(table.dominated_len(), 1);
        assert_eq!(table.row("C").unwrap().icer, Icer::Dominated);
        assert!(table.row("D").is_none());
    }
}
