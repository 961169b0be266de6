//! A full day's reconciliation statement.

use super::error::ReconError;
use super::ledger::PositionLedger;
use super::transaction::{TransactionRecord, apply_all};

/// The three inputs of one reconciliation run: the prior-day position
/// snapshot, the day's transactions, and the bank-reported current-day
/// snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconStatement {
    pub opening: PositionLedger,
    pub transactions: Vec<TransactionRecord>,
    pub reported: PositionLedger,
}

impl ReconStatement {
    /// Projects end-of-day positions by applying the day's transactions to a
    /// copy of the opening snapshot. The statement itself is left untouched.
    pub fn project(&self) -> Result<PositionLedger, ReconError> {
        let mut projected = self.opening.clone();
        apply_all(&mut projected, &self.transactions)?;
        Ok(projected)
    }
}
