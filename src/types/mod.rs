//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account record and balance rules
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;

pub use account::{round_to_cents, Account, AccountNumber};
pub use error::BankError;
