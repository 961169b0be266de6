//! Transaction records and their application to a position ledger.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::error::ReconError;
use super::ledger::{CASH_SYMBOL, PositionLedger};

/// The five recognized transaction types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Buy,
    Sell,
    Deposit,
    Fee,
    Dividend,
}

impl FromStr for TransactionType {
    type Err = ReconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(TransactionType::Buy),
            "SELL" => Ok(TransactionType::Sell),
            "DEPOSIT" => Ok(TransactionType::Deposit),
            "FEE" => Ok(TransactionType::Fee),
            "DIVIDEND" => Ok(TransactionType::Dividend),
            other => Err(ReconError::UnsupportedTransactionType {
                kind: other.to_string(),
            }),
        }
    }
}

/// One trade or cash event against the account.
///
/// `shares` and `amount` are parsed to decimals when the record is built, so
/// a malformed numeric field fails at load time. `kind` stays the raw token
/// and is resolved when the record is applied, so an unrecognized type fails
/// against the transaction that carries it, leaving the ledger untouched by
/// that call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub symbol: String,
    pub kind: String,
    pub shares: Decimal,
    pub amount: Decimal,
}

impl TransactionRecord {
    pub fn new(symbol: &str, kind: &str, shares: Decimal, amount: Decimal) -> Self {
        Self {
            symbol: symbol.to_string(),
            kind: kind.to_string(),
            shares,
            amount,
        }
    }
}

/// Applies one transaction to the ledger in place.
///
/// SELL, DEPOSIT and DIVIDEND negate `shares` (shares leave the position;
/// for the cash-only types the field is zero and the negation is a no-op).
/// BUY and FEE negate `amount` (cash leaves the account). Cash moves first,
/// then the symbol quantity is upserted, creating the entry if the symbol has
/// not been held before.
///
/// The starting ledger must already contain a [`CASH_SYMBOL`] entry; a
/// missing one surfaces as [`ReconError::MissingCashEntry`].
pub fn apply(ledger: &mut PositionLedger, record: &TransactionRecord) -> Result<(), ReconError> {
    let kind: TransactionType = record.kind.parse()?;

    let (shares, amount) = match kind {
        TransactionType::Sell | TransactionType::Deposit | TransactionType::Dividend => {
            (-record.shares, record.amount)
        }
        TransactionType::Buy | TransactionType::Fee => (record.shares, -record.amount),
    };

    if !ledger.contains(CASH_SYMBOL) {
        return Err(ReconError::MissingCashEntry {
            symbol: record.symbol.clone(),
        });
    }

    ledger.add(CASH_SYMBOL, amount);
    ledger.add(&record.symbol, shares);
    Ok(())
}

/// Applies an ordered transaction sequence left to right against one ledger.
///
/// Stops at the first failing record; updates from earlier records remain in
/// place. The final values are order-independent because every update is
/// additive and no transaction type reads the current ledger value.
pub fn apply_all(
    ledger: &mut PositionLedger,
    records: &[TransactionRecord],
) -> Result<(), ReconError> {
    for record in records {
        apply(ledger, record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn sample_ledger() -> PositionLedger {
        [("AAPL", dec("100")), ("Cash", dec("1000"))]
            .into_iter()
            .collect()
    }

    #[test]
    fn parse_all_recognized_types() {
        assert_eq!("BUY".parse::<TransactionType>().unwrap(), TransactionType::Buy);
        assert_eq!("SELL".parse::<TransactionType>().unwrap(), TransactionType::Sell);
        assert_eq!(
            "DEPOSIT".parse::<TransactionType>().unwrap(),
            TransactionType::Deposit
        );
        assert_eq!("FEE".parse::<TransactionType>().unwrap(), TransactionType::Fee);
        assert_eq!(
            "DIVIDEND".parse::<TransactionType>().unwrap(),
            TransactionType::Dividend
        );
    }

    #[test]
    fn parse_rejects_unknown_type() {
        let err = "SPLIT".parse::<TransactionType>().unwrap_err();
        assert!(matches!(
            err,
            ReconError::UnsupportedTransactionType { kind } if kind == "SPLIT"
        ));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("buy".parse::<TransactionType>().is_err());
    }

    #[test]
    fn sell_removes_shares_and_adds_cash() {
        let mut ledger = sample_ledger();
        let record = TransactionRecord::new("AAPL", "SELL", dec("100"), dec("30000"));
        apply(&mut ledger, &record).unwrap();

        assert_eq!(ledger.get("AAPL"), Some(dec("0")));
        assert_eq!(ledger.get("Cash"), Some(dec("31000")));
    }

    #[test]
    fn buy_adds_shares_and_removes_cash() {
        let mut ledger = sample_ledger();
        let record = TransactionRecord::new("AAPL", "BUY", dec("10"), dec("1500"));
        apply(&mut ledger, &record).unwrap();

        assert_eq!(ledger.get("AAPL"), Some(dec("110")));
        assert_eq!(ledger.get("Cash"), Some(dec("-500")));
    }

    #[test]
    fn deposit_adds_cash_only() {
        let mut ledger = sample_ledger();
        let record = TransactionRecord::new("Cash", "DEPOSIT", dec("0"), dec("1000"));
        apply(&mut ledger, &record).unwrap();

        assert_eq!(ledger.get("Cash"), Some(dec("3000")));
        assert_eq!(ledger.get("AAPL"), Some(dec("100")));
    }

    #[test]
    fn fee_removes_cash_only() {
        let mut ledger = sample_ledger();
        let record = TransactionRecord::new("Cash", "FEE", dec("0"), dec("50"));
        apply(&mut ledger, &record).unwrap();

        assert_eq!(ledger.get("Cash"), Some(dec("950")));
    }

    #[test]
    fn dividend_adds_cash_without_touching_shares() {
        let mut ledger = sample_ledger();
        let record = TransactionRecord::new("AAPL", "DIVIDEND", dec("0"), dec("50"));
        apply(&mut ledger, &record).unwrap();

        assert_eq!(ledger.get("AAPL"), Some(dec("100")));
        assert_eq!(ledger.get("Cash"), Some(dec("1050")));
    }

    #[test]
    fn buy_creates_entry_for_new_symbol() {
        let mut ledger: PositionLedger = [("Cash", dec("1000"))].into_iter().collect();
        let record = TransactionRecord::new("TD", "BUY", dec("100"), dec("10000"));
        apply(&mut ledger, &record).unwrap();

        assert_eq!(ledger.get("Cash"), Some(dec("-9000")));
        assert_eq!(ledger.get("TD"), Some(dec("100")));
    }

    #[test]
    fn unsupported_type_leaves_ledger_unchanged() {
        let mut ledger = sample_ledger();
        let record = TransactionRecord::new("AAPL", "SPLIT", dec("2"), dec("0"));
        let err = apply(&mut ledger, &record).unwrap_err();

        assert!(matches!(
            err,
            ReconError::UnsupportedTransactionType { kind } if kind == "SPLIT"
        ));
        assert_eq!(ledger, sample_ledger());
    }

    #[test]
    fn missing_cash_entry_fails_without_mutating() {
        let mut ledger: PositionLedger = [("AAPL", dec("100"))].into_iter().collect();
        let record = TransactionRecord::new("AAPL", "SELL", dec("10"), dec("3000"));
        let err = apply(&mut ledger, &record).unwrap_err();

        assert!(matches!(
            err,
            ReconError::MissingCashEntry { symbol } if symbol == "AAPL"
        ));
        assert_eq!(ledger.get("AAPL"), Some(dec("100")));
        assert!(!ledger.contains("Cash"));
    }

    #[test]
    fn apply_all_runs_in_order_and_nets_per_symbol() {
        let mut ledger: PositionLedger = [("GOOG", dec("200")), ("Cash", dec("1000"))]
            .into_iter()
            .collect();
        let records = vec![
            TransactionRecord::new("GOOG", "BUY", dec("10"), dec("10000")),
            TransactionRecord::new("GOOG", "SELL", dec("5"), dec("5500")),
        ];
        apply_all(&mut ledger, &records).unwrap();

        assert_eq!(ledger.get("GOOG"), Some(dec("205")));
        assert_eq!(ledger.get("Cash"), Some(dec("-3500")));
    }

    #[test]
    fn apply_all_stops_at_first_bad_record_keeping_prior_updates() {
        let mut ledger = sample_ledger();
        let records = vec![
            TransactionRecord::new("AAPL", "SELL", dec("100"), dec("30000")),
            TransactionRecord::new("AAPL", "SPLIT", dec("2"), dec("0")),
            TransactionRecord::new("AAPL", "BUY", dec("50"), dec("15000")),
        ];
        let err = apply_all(&mut ledger, &records).unwrap_err();

        assert!(matches!(err, ReconError::UnsupportedTransactionType { .. }));
        // First record already landed; third never ran.
        assert_eq!(ledger.get("AAPL"), Some(dec("0")));
        assert_eq!(ledger.get("Cash"), Some(dec("31000")));
    }

    #[test]
    fn apply_all_empty_sequence_is_a_no_op() {
        let mut ledger = sample_ledger();
        apply_all(&mut ledger, &[]).unwrap();
        assert_eq!(ledger, sample_ledger());
    }
}
