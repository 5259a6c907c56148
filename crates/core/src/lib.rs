//! Core business logic for Tally.
//!
//! This crate contains the pure domain logic for the ledger:
//! - Transaction domain types and input validation
//! - Summary computation over ledger rows
//! - Monthly budget classification
//!
//! It has no web or database dependencies; persistence and transport live in
//! `tally-db` and `tally-api`.

pub mod budget;
pub mod ledger;
