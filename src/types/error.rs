//! Error types for the console bank
//!
//! This module defines every error that a ledger operation can report.
//! Errors are designed to be printed to the console as-is.
//!
//! # Error Categories
//!
//! - **Balance Errors**: Invalid amounts, insufficient funds, overflow
//! - **Lookup Errors**: Unknown account numbers
//! - **Persistence Errors**: Unwritable destination or unreadable file
//!
//! Malformed records are not errors: loading stops there and reports a
//! `Truncation` instead.

use super::account::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Every variant is recoverable: the front end prints it and returns to the
/// menu. The only exception is `PersistenceRead` at startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Deposit or withdrawal amount is zero or negative
    #[error("Invalid amount {amount}: amount must be positive")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal exceeds the current balance
    ///
    /// The account state remains unchanged.
    #[error("Insufficient balance in account {account}: available ${available:.2}, requested ${requested:.2}")]
    InsufficientFunds {
        /// Account number
        account: AccountNumber,
        /// Balance at the time of the request
        available: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// No account with the given number exists
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The number that was looked up
        account: AccountNumber,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to keep the balance intact.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountNumber,
    },

    /// The accounts file could not be opened or written
    ///
    /// In-memory state is kept, so the save can be retried.
    #[error("Could not save accounts to '{path}': {message}")]
    PersistenceWrite {
        /// Destination path
        path: String,
        /// Underlying I/O error
        message: String,
    },

    /// An existing accounts file could not be read
    #[error("Could not read accounts from '{path}': {message}")]
    PersistenceRead {
        /// Source path
        path: String,
        /// Underlying I/O error
        message: String,
    },
}

// Helper functions for creating common errors

impl BankError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(
        account: AccountNumber,
        available: Decimal,
        requested: Decimal,
    ) -> Self {
        BankError::InsufficientFunds {
            account,
            available,
            requested,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        BankError::AccountNotFound { account }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create a PersistenceWrite error from an I/O failure
    pub fn persistence_write(path: &std::path::Path, error: &std::io::Error) -> Self {
        BankError::PersistenceWrite {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a PersistenceRead error from an I/O failure
    pub fn persistence_read(path: &std::path::Path, error: &std::io::Error) -> Self {
        BankError::PersistenceRead {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}
