#![allow(dead_code)]

use posrecon::domain::ledger::PositionLedger;
use posrecon::domain::transaction::TransactionRecord;
use rust_decimal::Decimal;

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn ledger(entries: &[(&str, &str)]) -> PositionLedger {
    entries.iter().map(|&(symbol, q)| (symbol, dec(q))).collect()
}

pub fn txn(symbol: &str, kind: &str, shares: &str, amount: &str) -> TransactionRecord {
    TransactionRecord::new(symbol, kind, dec(shares), dec(amount))
}

/// The worked example: four opening positions, six transactions, and the
/// bank snapshot they get reconciled against.
pub const SAMPLE_STATEMENT: &str = "\
D0-POS
AAPL 100
GOOG 200
SP500 175.75
Cash 1000

D1-TRN
AAPL SELL 100 30000
GOOG BUY 10 10000
Cash DEPOSIT 0 1000
Cash FEE 0 50
GOOG DIVIDEND 0 50
TD BUY 100 10000

D1-POS
GOOG 220
SP500 175.75
Cash 20000
MSFT 10
";
