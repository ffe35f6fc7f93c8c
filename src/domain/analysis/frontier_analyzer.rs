//! Frontier Analyzer - Dominance classification and ICER derivation.

use std::collections::HashSet;

use super::{
    CeRow, CeTable, Classification, ClassifiedStrategy, Dominance, FrontierError, Icer, Strategy,
};

/// Cost-effectiveness frontier analysis over a fixed set of strategies.
///
/// The analyzer owns its input; every computation derives a fresh result
/// from it, so repeated calls are independent and yield identical output.
#[derive(Debug, Clone)]
pub struct FrontierAnalyzer {
    strategies: Vec<Strategy>,
}

impl FrontierAnalyzer {
    /// Creates an analyzer for the given strategies.
    ///
    /// # Errors
    /// - `EmptyStrategySet` if no strategies are given
    /// - `DuplicateStrategy` if two strategies share a name
    pub fn new(strategies: Vec<Strategy>) -> Result<Self, FrontierError> {
        if strategies.is_empty() {
            return Err(FrontierError::EmptyStrategySet);
        }

        let mut seen = HashSet::new();
        for strategy in &strategies {
            if !seen.insert(strategy.name().as_str()) {
                return Err(FrontierError::DuplicateStrategy(
                    strategy.name().to_string(),
                ));
            }
        }

        Ok(Self { strategies })
    }

    /// Strategies in input order.
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Classifies every strategy as dominated or on the frontier.
    ///
    /// # Algorithm
    /// 1. Simple dominance: with strategies sorted by cost, any strategy
    ///    that costs strictly more than another and is no more effective
    ///    is dominated.
    /// 2. Extended dominance: among the survivors of (1), any strategy
    ///    whose (effect, cost) point lies strictly above the chord joining
    ///    two other survivors is dominated. Collinear points are kept.
    ///
    /// A strategy keeps the first dominance reason recorded for it.
    pub fn compute_frontier(&self) -> Classification {
        let order = self.cost_order();
        let mut status: Vec<Option<Dominance>> = vec![None; self.strategies.len()];

        self.mark_simple_dominance(&order, &mut status);

        let survivors: Vec<usize> = order
            .iter()
            .copied()
            .filter(|&i| status[i].is_none())
            .collect();
        self.mark_extended_dominance(&survivors, &mut status);

        let entries = order
            .into_iter()
            .map(|i| ClassifiedStrategy {
                strategy: self.strategies[i].clone(),
                dominance: status[i].take().unwrap_or(Dominance::NotDominated),
            })
            .collect();

        Classification::new(entries)
    }

    /// Non-dominated strategies in ascending cost order.
    pub fn frontier(&self) -> Vec<Strategy> {
        self.compute_frontier()
            .frontier()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Computes the frontier and derives the full ICER table.
    ///
    /// # Errors
    /// - `NonComputableRatio` if two adjacent frontier strategies have the
    ///   same effect
    /// - `RatioOverflow` if an increment or ratio exceeds the f64 range
    pub fn build_icer_table(&self) -> Result<CeTable, FrontierError> {
        Self::tabulate(&self.compute_frontier())
    }

    /// Derives the ICER table from an existing classification.
    ///
    /// Frontier strategies are compared with the previous frontier
    /// strategy in ascending cost order. The cheapest frontier strategy
    /// gets `Icer::NotApplicable`; dominated strategies get
    /// `Icer::Dominated`.
    pub fn tabulate(classification: &Classification) -> Result<CeTable, FrontierError> {
        let mut rows = Vec::with_capacity(classification.len());
        let mut previous: Option<&Strategy> = None;

        for entry in classification.entries() {
            let strategy = &entry.strategy;

            let (incremental_cost, incremental_effect, icer) = if entry.is_dominated() {
                (None, None, Icer::Dominated)
            } else {
                let cells = match previous {
                    None => (None, None, Icer::NotApplicable),
                    Some(prev) => {
                        let delta_cost = strategy.cost() - prev.cost();
                        let delta_effect = strategy.effect() - prev.effect();
                        if delta_effect == 0.0 {
                            return Err(FrontierError::non_computable_ratio(
                                prev.name().as_str(),
                                strategy.name().as_str(),
                            ));
                        }
                        let ratio = delta_cost / delta_effect;
                        if !delta_cost.is_finite() || !ratio.is_finite() {
                            return Err(FrontierError::ratio_overflow(
                                prev.name().as_str(),
                                strategy.name().as_str(),
                            ));
                        }
                        (Some(delta_cost), Some(delta_effect), Icer::Ratio(ratio))
                    }
                };
                previous = Some(strategy);
                cells
            };

            rows.push(CeRow {
                name: strategy.name().clone(),
                cost: strategy.cost(),
                effect: strategy.effect(),
                dominance: entry.dominance.clone(),
                incremental_cost,
                incremental_effect,
                icer,
            });
        }

        Ok(CeTable { rows })
    }

    /// Indices sorted by cost, then effect, then input position.
    fn cost_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.strategies.len()).collect();
        order.sort_by(|&a, &b| {
            let (sa, sb) = (&self.strategies[a], &self.strategies[b]);
            sa.cost()
                .total_cmp(&sb.cost())
                .then_with(|| sa.effect().total_cmp(&sb.effect()))
        });
        order
    }

    fn mark_simple_dominance(&self, order: &[usize], status: &mut [Option<Dominance>]) {
        for &i in order {
            let dominator = &self.strategies[i];
            for &j in order {
                if status[j].is_some() {
                    continue;
                }
                let candidate = &self.strategies[j];
                if candidate.cost() > dominator.cost() && candidate.effect() <= dominator.effect() {
                    status[j] = Some(Dominance::Simple {
                        by: dominator.name().clone(),
                    });
                }
            }
        }
    }

    /// `survivors` must be in cost order; the set is fixed for the whole
    /// pass, so strategies marked here still serve as chord endpoints.
    fn mark_extended_dominance(&self, survivors: &[usize], status: &mut [Option<Dominance>]) {
        for (a, &i) in survivors.iter().enumerate() {
            for &j in &survivors[a + 1..] {
                let (lower, upper) = (&self.strategies[i], &self.strategies[j]);

                for &m in survivors {
                    if status[m].is_some() {
                        continue;
                    }
                    let inner = &self.strategies[m];
                    let between = inner.effect() > lower.effect() && inner.effect() < upper.effect();
                    if between && cross_product(lower, upper, inner) > 0.0 {
                        status[m] = Some(Dominance::Extended {
                            lower: lower.name().clone(),
                            upper: upper.name().clone(),
                        });
                    }
                }
            }
        }
    }
}

/// Cross product of (origin → end) and (origin → point) in (effect, cost)
/// space. Positive when `point` lies above the line for effect-ascending
/// `origin`, `end`.
///
/// Magnitudes near `f64::MAX` overflow the products; those are recomputed
/// on coordinates scaled into [-1, 1].
fn cross_product(origin: &Strategy, end: &Strategy, point: &Strategy) -> f64 {
    let coords = [origin, end, point].map(|s| (s.effect(), s.cost()));
    let raw = cross(coords);
    if raw.is_finite() {
        return raw;
    }

    let scale = coords
        .iter()
        .flat_map(|&(x, y)| [x.abs(), y.abs()])
        .fold(0.0_f64, f64::max);
    cross(coords.map(|(x, y)| (x / scale, y / scale)))
}

fn cross([(ox, oy), (ex, ey), (px, py)]: [(f64, f64); 3]) -> f64 {
    let (dx, dy) = (ex - ox, ey - oy);
    let (qx, qy) = (px - ox, py - oy);
    dx * qy - dy * qx
}
