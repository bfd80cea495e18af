//! Core business logic module
//!
//! This module contains the ledger that owns all account state:
//! - `ledger` - Account numbering, lookup, balance operations and persistence

pub mod ledger;

pub use ledger::{Ledger, LoadOutcome};
