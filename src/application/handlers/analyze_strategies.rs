//! AnalyzeStrategiesHandler - Loads strategies, classifies them and reports the CE table.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::analysis::{CeTable, Classification, FrontierAnalyzer, FrontierError};
use crate::domain::foundation::DomainError;
use crate::ports::{ReportWriter, StrategySource};

/// Result of a completed analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeStrategiesResult {
    pub classification: Classification,
    pub table: CeTable,
}

/// Handler running one cost-effectiveness analysis end to end.
///
/// 1. Loads strategies from the source
/// 2. Classifies them (simple, then extended dominance)
/// 3. Derives the ICER table along the frontier
/// 4. Hands the table to the report writer
///
/// Any failure aborts the pipeline; nothing is written on error.
pub struct AnalyzeStrategiesHandler {
    source: Arc<dyn StrategySource>,
    report_writer: Arc<dyn ReportWriter>,
}

impl AnalyzeStrategiesHandler {
    pub fn new(source: Arc<dyn StrategySource>, report_writer: Arc<dyn ReportWriter>) -> Self {
        Self {
            source,
            report_writer,
        }
    }

    pub fn handle(&self) -> Result<AnalyzeStrategiesResult, DomainError> {
        let strategies = self.source.load_strategies()?;
        debug!(
            source = %self.source.describe(),
            count = strategies.len(),
            "Strategies loaded"
        );

        let analyzer = FrontierAnalyzer::new(strategies)?;
        let classification = analyzer.compute_frontier();
        debug!(
            frontier = classification.frontier().len(),
            dominated = classification.dominated().len(),
            "Dominance computed"
        );

        let table = FrontierAnalyzer::tabulate(&classification).map_err(|err| {
            match &err {
                FrontierError::NonComputableRatio { from, to } => {
                    warn!(from = %from, to = %to, "Frontier strategies share the same effect")
                }
                FrontierError::RatioOverflow { from, to } => {
                    warn!(from = %from, to = %to, "Incremental ratio overflows")
                }
                _ => {}
            }
            DomainError::from(err)
        })?;

        self.report_writer.write_report(&table)?;

        info!(
            strategies = table.rows.len(),
            frontier = table.frontier_len(),
            "Cost-effectiveness analysis complete"
        );

        Ok(AnalyzeStrategiesResult {
            classification,
            table,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStrategySource;
    use crate::domain::analysis::{Icer, Strategy};
    use crate::domain::foundation::ErrorCode;
    use std::sync::Mutex;

    struct MockReportWriter {
        written: Mutex<Vec<CeTable>>,
        fail_write: bool,
    }

    impl MockReportWriter {
        fn new() -> Self {
            Self {
                written: Mutex::new(Vec::new()),
                fail_write: false,
            }
        }

        fn failing() -> Self {
            Self {
                written: Mutex::new(Vec::new()),
                fail_write: true,
            }
        }

        fn written(&self) -> Vec<CeTable> {
            self.written.lock().unwrap().clone()
        }
    }

    impl ReportWriter for MockReportWriter {
        fn write_report(&self, table: &CeTable) -> Result<(), DomainError> {
            if self.fail_write {
                return Err(DomainError::new(
                    ErrorCode::ReportFailed,
                    "Simulated write failure",
                ));
            }
            self.written.lock().unwrap().push(table.clone());
            Ok(())
        }
    }

    fn strategies(points: &[(&str, f64, f64)]) -> Vec<Strategy> {
        points
            .iter()
            .map(|(n, c, e)| Strategy::new(*n, *c, *e).unwrap())
            .collect()
    }

    fn handler(
        source: InMemoryStrategySource,
        writer: Arc<MockReportWriter>,
    ) -> AnalyzeStrategiesHandler {
        AnalyzeStrategiesHandler::new(Arc::new(source), writer)
    }

    #[test]
    fn analyzes_and_writes_report() {
        let writer = Arc::new(MockReportWriter::new());
        let source = InMemoryStrategySource::new(strategies(&[
            ("A", 0.0, 0.0),
            ("B", 10.0, 5.0),
            ("C", 20.0, 5.0),
        ]));

        let result = handler(source, writer.clone()).handle().unwrap();

        assert_eq!(result.table.frontier_len(), 2);
        assert_eq!(result.table.row("B").unwrap().icer, Icer::Ratio(2.0));
        assert!(result.classification.is_dominated("C"));

        let written = writer.written();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0], result.table);
    }

    #[test]
    fn empty_source_is_invalid_input() {
        let writer = Arc::new(MockReportWriter::new());
        let err = handler(InMemoryStrategySource::new(vec![]), writer.clone())
            .handle()
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(writer.written().is_empty());
    }

    #[test]
    fn degenerate_ratio_aborts_without_report() {
        let writer = Arc::new(MockReportWriter::new());
        let source = InMemoryStrategySource::new(strategies(&[
            ("A", 0.0, 0.0),
            ("B", 5.0, 5.0),
            ("B2", 5.0, 5.0),
        ]));

        let err = handler(source, writer.clone()).handle().unwrap_err();

        assert_eq!(err.code, ErrorCode::NonComputableRatio);
        assert_eq!(err.details.get("to"), Some(&"B2".to_string()));
        assert!(writer.written().is_empty());
    }

    #[test]
    fn overflowing_ratio_aborts_without_report() {
        let writer = Arc::new(MockReportWriter::new());
        let source = InMemoryStrategySource::new(strategies(&[
            ("lo", -1e308, 0.0),
            ("hi", 1e308, 1.0),
        ]));

        let err = handler(source, writer.clone()).handle().unwrap_err();

        assert_eq!(err.code, ErrorCode::NumericOverflow);
        assert!(writer.written().is_empty());
    }

    #[test]
    fn source_failure_propagates() {
        let writer = Arc::new(MockReportWriter::new());
        let err = handler(InMemoryStrategySource::failing("unreachable"), writer)
            .handle()
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::SourceUnreadable);
    }

    #[test]
    fn writer_failure_propagates() {
        let writer = Arc::new(MockReportWriter::failing());
        let source = InMemoryStrategySource::new(strategies(&[("A", 0.0, 0.0)]));

        let err = handler(source, writer).handle().unwrap_err();
        assert_eq!(err.code, ErrorCode::ReportFailed);
    }
}
