//! Reconciliation diff between a projected ledger and the reported snapshot.

use super::ledger::PositionLedger;

/// Compares the projected (computed) ledger against the bank-reported one.
///
/// Walks the union of both symbol sets and records `reported - computed` for
/// every symbol where the two sides disagree, treating a symbol absent from
/// one side as zero there. Symbols whose values agree are left out entirely,
/// never written as zero, so reconciling a ledger against itself yields an
/// empty diff.
///
/// Output order is computed-side symbols first, then reported-only symbols;
/// consumers must not attach meaning to it.
pub fn reconcile(computed: &PositionLedger, reported: &PositionLedger) -> PositionLedger {
    let mut diff = PositionLedger::new();

    for symbol in computed.symbols().chain(reported.symbols()) {
        let delta = reported.quantity(symbol) - computed.quantity(symbol);
        if !delta.is_zero() {
            diff.set(symbol, delta);
        }
    }

    diff
}
