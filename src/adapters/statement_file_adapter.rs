//! Sectioned text statement adapter.
//!
//! Reads the three-part reconciliation statement file: a `D0-POS` block of
//! prior-day positions, a `D1-TRN` block of the day's transactions, and a
//! `D1-POS` block of bank-reported positions, in that order. Blank lines
//! between sections are ignored. Position lines are `<symbol> <decimal>`;
//! transaction lines are `<symbol> <TYPE> <shares> <amount>`.

use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;

use crate::domain::error::ReconError;
use crate::domain::ledger::PositionLedger;
use crate::domain::statement::ReconStatement;
use crate::domain::transaction::TransactionRecord;
use crate::ports::statement_port::StatementPort;

pub const OPENING_HEADER: &str = "D0-POS";
pub const TRANSACTIONS_HEADER: &str = "D1-TRN";
pub const REPORTED_HEADER: &str = "D1-POS";

pub struct StatementFileAdapter {
    path: PathBuf,
}

impl StatementFileAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Parses statement text. Line numbers in errors are 1-based over the
    /// whole input, headers and blank lines included.
    pub fn parse(content: &str) -> Result<ReconStatement, ReconError> {
        let lines: Vec<&str> = content.lines().collect();

        let opening_at = find_header(&lines, 0, OPENING_HEADER)?;
        let transactions_at = find_header(&lines, opening_at + 1, TRANSACTIONS_HEADER)?;
        let reported_at = find_header(&lines, transactions_at + 1, REPORTED_HEADER)?;

        let opening = parse_positions(&lines, opening_at + 1, transactions_at)?;
        let transactions = parse_transactions(&lines, transactions_at + 1, reported_at)?;
        let reported = parse_positions(&lines, reported_at + 1, lines.len())?;

        Ok(ReconStatement {
            opening,
            transactions,
            reported,
        })
    }
}

impl StatementPort for StatementFileAdapter {
    fn load(&self) -> Result<ReconStatement, ReconError> {
        let content = fs::read_to_string(&self.path)?;
        Self::parse(&content)
    }
}

/// Locates `header` at or after `start`. Searching forward only enforces the
/// fixed section order: an out-of-order header reads as missing.
fn find_header(lines: &[&str], start: usize, header: &str) -> Result<usize, ReconError> {
    lines[start.min(lines.len())..]
        .iter()
        .position(|line| line.trim() == header)
        .map(|offset| start + offset)
        .ok_or_else(|| ReconError::MissingSection {
            header: header.to_string(),
        })
}

fn parse_decimal(token: &str, line: usize) -> Result<Decimal, ReconError> {
    token.parse().map_err(|_| ReconError::MalformedRecord {
        line,
        reason: format!("{token} is not a decimal quantity"),
    })
}

fn parse_positions(
    lines: &[&str],
    start: usize,
    end: usize,
) -> Result<PositionLedger, ReconError> {
    let mut ledger = PositionLedger::new();

    for (index, line) in lines[start..end].iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = start + index + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [symbol, quantity] => {
                ledger.set(symbol, parse_decimal(quantity, line_no)?);
            }
            _ => {
                return Err(ReconError::MalformedRecord {
                    line: line_no,
                    reason: format!("expected 2 fields, found {}", tokens.len()),
                });
            }
        }
    }

    Ok(ledger)
}

fn parse_transactions(
    lines: &[&str],
    start: usize,
    end: usize,
) -> Result<Vec<TransactionRecord>, ReconError> {
    let mut records = Vec::new();

    for (index, line) in lines[start..end].iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = start + index + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [symbol, kind, shares, amount] => {
                records.push(TransactionRecord::new(
                    symbol,
                    kind,
                    parse_decimal(shares, line_no)?,
                    parse_decimal(amount, line_no)?,
                ));
            }
            _ => {
                return Err(ReconError::MalformedRecord {
                    line: line_no,
                    reason: format!("expected 4 fields, found {}", tokens.len()),
                });
            }
        }
    }

    Ok(records)
}
