//! Report Writer Port - Destination for the cost-effectiveness table.

use crate::domain::analysis::CeTable;
use crate::domain::foundation::DomainError;

/// Port for emitting a finished cost-effectiveness table.
///
/// Failures are reported as `REPORT_FAILED`.
pub trait ReportWriter: Send + Sync {
    fn write_report(&self, table: &CeTable) -> Result<(), DomainError>;
}
