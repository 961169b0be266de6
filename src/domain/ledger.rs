//! Position ledger: symbol-to-quantity holdings including cash-on-hand.

use rust_decimal::Decimal;
use std::collections::HashMap;

/// Reserved symbol for cash-on-hand. Case-sensitive, like every other symbol.
pub const CASH_SYMBOL: &str = "Cash";

/// Holdings for one account: each symbol maps to a signed decimal quantity,
/// with the [`CASH_SYMBOL`] entry holding cash-on-hand.
///
/// At most one entry exists per symbol. First-insertion order is remembered
/// so formatted output is deterministic; it carries no other meaning.
#[derive(Debug, Clone, Default)]
pub struct PositionLedger {
    quantities: HashMap<String, Decimal>,
    order: Vec<String>,
}

impl PositionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantity for a symbol, inserting it if unseen.
    pub fn set(&mut self, symbol: &str, quantity: Decimal) {
        if self
            .quantities
            .insert(symbol.to_string(), quantity)
            .is_none()
        {
            self.order.push(symbol.to_string());
        }
    }

    /// Adds `delta` to the symbol's quantity, creating the entry (from zero)
    /// if the symbol has never been held.
    pub fn add(&mut self, symbol: &str, delta: Decimal) {
        let updated = self.quantity(symbol) + delta;
        self.set(symbol, updated);
    }

    pub fn get(&self, symbol: &str) -> Option<Decimal> {
        self.quantities.get(symbol).copied()
    }

    /// Quantity for `symbol`, treating an absent entry as zero.
    pub fn quantity(&self, symbol: &str) -> Decimal {
        self.get(symbol).unwrap_or(Decimal::ZERO)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.quantities.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Symbols in first-insertion order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.order.iter().map(|s| (s.as_str(), self.quantities[s]))
    }
}

/// Equality ignores insertion order: two ledgers are equal when they hold the
/// same quantities for the same symbols.
impl PartialEq for PositionLedger {
    fn eq(&self, other: &Self) -> bool {
        self.quantities == other.quantities
    }
}

impl Eq for PositionLedger {}

impl<S: Into<String>> FromIterator<(S, Decimal)> for PositionLedger {
    fn from_iter<T: IntoIterator<Item = (S, Decimal)>>(iter: T) -> Self {
        let mut ledger = PositionLedger::new();
        for (symbol, quantity) in iter {
            let symbol: String = symbol.into();
            ledger.set(&symbol, quantity);
        }
        ledger
    }
}
