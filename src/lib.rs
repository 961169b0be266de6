//! posrecon — end-of-day brokerage position reconciliation.
//!
//! Applies a day's transactions to a prior-day position snapshot and diffs
//! the projected holdings against the custodian-reported snapshot.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
