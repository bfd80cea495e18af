//! Console Bank Library
//! # Overview
//!
//! This library provides an in-memory bank account ledger persisted to a flat
//! text file, plus the interactive console that drives it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, BankError)
//! - [`cli`] - CLI arguments parsing and diagnostics setup
//! - [`core`] - Business logic:
//!   - [`core::ledger`] - Account numbering, lookup, balance operations, load/save
//! - [`io`] - Accounts file format, reader and writer
//! - [`console`] - Interactive menu session
//!
//! # Operations
//!
//! - **Create**: Open an account with a name and initial deposit
//! - **Deposit**: Credit a positive amount to an account
//! - **Withdraw**: Debit a positive amount no larger than the balance
//! - **Balance / List**: Report one account or all of them in creation order
//! - **Load / Save**: Read the accounts file at startup, write it on exit
//!
//! # Accounts File
//!
//! Each account is stored as three lines: number, name, balance. Loading stops
//! at the first malformed record and keeps everything read before it.

// Module declarations
pub mod cli;
pub mod console;
pub mod core;
pub mod io;
pub mod types;

pub use console::Session;
pub use core::{Ledger, LoadOutcome};
pub use io::{LoadedAccounts, Truncation};
pub use types::{Account, AccountNumber, BankError};
