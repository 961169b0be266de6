//! Diff report output port trait.

use crate::domain::error::ReconError;
use crate::domain::ledger::PositionLedger;

/// Port for writing a reconciliation diff.
pub trait ReportPort {
    fn write(&self, diff: &PositionLedger) -> Result<(), ReconError>;
}
