//! Core domain types and logic.

pub mod error;
pub mod ledger;
pub mod reconcile;
pub mod statement;
pub mod transaction;
