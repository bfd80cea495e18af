//! Account ledger
//!
//! This module provides the `Ledger` struct which owns every account and the
//! counter used to number new ones.
//!
//! The Ledger is responsible for:
//! - Assigning unique, increasing account numbers
//! - Keeping accounts in creation order (also the display and save order)
//! - Routing deposits and withdrawals to the right account
//! - Loading from and saving to the accounts file

use crate::io::store::{load_accounts_file, save_accounts_file, Truncation};
use crate::types::{Account, AccountNumber, BankError};
use rust_decimal::Decimal;
use std::path::Path;

/// Result of loading the accounts file
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// No accounts file existed; the ledger starts empty
    FreshStart,

    /// The file was read
    Loaded {
        /// Number of accounts kept
        accounts: usize,
        /// Set when a malformed record ended loading early
        truncated: Option<Truncation>,
    },
}

/// In-memory collection of accounts
///
/// Owns all account state. There is exactly one ledger per process, owned by
/// `main` and lent to the console session.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    /// Accounts in creation order; numbers are unique
    accounts: Vec<Account>,

    /// One past the highest number handed out or loaded
    ///
    /// Wider than `AccountNumber` so it can step past the last number
    /// without wrapping onto one already in use.
    next_number: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger
    ///
    /// The first account created will be number 1.
    pub fn new() -> Self {
        Ledger {
            accounts: Vec::new(),
            next_number: 1,
        }
    }

    /// Create a ledger and load it from the accounts file
    ///
    /// # Errors
    ///
    /// Returns `BankError::PersistenceRead` if the file exists but cannot be
    /// opened. A missing file gives an empty ledger.
    pub fn open(path: &Path) -> Result<(Self, LoadOutcome), BankError> {
        let mut ledger = Ledger::new();
        let outcome = ledger.load(path)?;
        Ok((ledger, outcome))
    }

    /// Number the next created account will receive
    ///
    /// Numbers count up from one past the highest in use. Once
    /// `AccountNumber::MAX` has been handed out, the lowest number no
    /// account holds is used instead.
    pub fn next_account_number(&self) -> AccountNumber {
        AccountNumber::try_from(self.next_number).unwrap_or_else(|_| self.lowest_unused_number())
    }

    /// Lowest positive number no account holds
    fn lowest_unused_number(&self) -> AccountNumber {
        let mut used: Vec<AccountNumber> = self
            .accounts
            .iter()
            .map(|account| account.account_number)
            .collect();
        used.sort_unstable();

        let mut candidate: AccountNumber = 1;
        for number in used {
            if number > candidate {
                break;
            }
            if number == candidate {
                // Saturates only when every number is held
                candidate = candidate.saturating_add(1);
            }
        }
        candidate
    }

    /// Open a new account
    ///
    /// Neither the name nor the initial deposit is validated: an empty name
    /// and a zero or negative opening balance are accepted as given.
    ///
    /// # Returns
    ///
    /// A reference to the new account, which carries its assigned number
    pub fn create_account(
        &mut self,
        name: impl Into<String>,
        initial_deposit: Decimal,
    ) -> &Account {
        let account_number = self.next_account_number();
        self.next_number = self.next_number.saturating_add(1);

        let account = Account::new(account_number, name, initial_deposit);
        tracing::debug!(
            account = account_number,
            balance = %account.balance,
            "account created"
        );

        let index = self.accounts.len();
        self.accounts.push(account);
        &self.accounts[index]
    }

    /// Find an account by number
    ///
    /// # Returns
    ///
    /// `Some(&Account)` if the account exists, `None` otherwise
    pub fn find_account(&self, account_number: AccountNumber) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.account_number == account_number)
    }

    /// Find an account by number for modification
    pub fn find_account_mut(&mut self, account_number: AccountNumber) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.account_number == account_number)
    }

    /// Look up an account, reporting a miss as an error
    ///
    /// # Errors
    ///
    /// Returns `BankError::AccountNotFound` if no account has this number
    pub fn account(&self, account_number: AccountNumber) -> Result<&Account, BankError> {
        self.find_account(account_number)
            .ok_or_else(|| BankError::account_not_found(account_number))
    }

    /// Current balance of an account
    pub fn balance(&self, account_number: AccountNumber) -> Result<Decimal, BankError> {
        self.account(account_number).map(|account| account.balance)
    }

    /// Deposit funds into an account
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - The new balance
    /// * `Err(BankError)` - If the account does not exist, the amount is not
    ///   positive, or the sum overflows
    pub fn deposit(
        &mut self,
        account_number: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, BankError> {
        let account = self
            .find_account_mut(account_number)
            .ok_or_else(|| BankError::account_not_found(account_number))?;

        let new_balance = account.deposit(amount)?;
        tracing::debug!(account = account_number, %amount, balance = %new_balance, "deposit");
        Ok(new_balance)
    }

    /// Withdraw funds from an account
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - The new balance
    /// * `Err(BankError)` - If the account does not exist, the amount is not
    ///   positive, or it exceeds the balance
    pub fn withdraw(
        &mut self,
        account_number: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, BankError> {
        let account = self
            .find_account_mut(account_number)
            .ok_or_else(|| BankError::account_not_found(account_number))?;

        let new_balance = account.withdraw(amount)?;
        tracing::debug!(account = account_number, %amount, balance = %new_balance, "withdrawal");
        Ok(new_balance)
    }

    /// All accounts in creation order
    pub fn list_accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the ledger holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Save every account to the accounts file, in creation order
    ///
    /// The in-memory state is untouched whether or not the save succeeds.
    ///
    /// # Errors
    ///
    /// Returns `BankError::PersistenceWrite` if the file cannot be written
    pub fn save(&self, path: &Path) -> Result<(), BankError> {
        match save_accounts_file(path, &self.accounts) {
            Ok(()) => {
                tracing::info!(
                    accounts = self.accounts.len(),
                    path = %path.display(),
                    "accounts saved"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                Err(e)
            }
        }
    }

    /// Replace the ledger contents with the accounts file
    ///
    /// A missing file leaves the ledger empty with next number 1. Otherwise
    /// every record up to the first malformed one is kept, and the next
    /// number becomes one past the highest loaded number.
    ///
    /// # Errors
    ///
    /// Returns `BankError::PersistenceRead` if the file exists but cannot be
    /// opened. The ledger is unchanged in that case.
    pub fn load(&mut self, path: &Path) -> Result<LoadOutcome, BankError> {
        let Some(loaded) = load_accounts_file(path)? else {
            *self = Ledger::new();
            tracing::info!(path = %path.display(), "no accounts file, starting fresh");
            return Ok(LoadOutcome::FreshStart);
        };

        if let Some(truncation) = &loaded.truncated {
            tracing::warn!(
                line = truncation.line,
                reason = %truncation.reason,
                kept = loaded.accounts.len(),
                "stopped loading at malformed record"
            );
        }

        *self = Ledger::from_accounts(loaded.accounts);
        tracing::info!(
            accounts = self.accounts.len(),
            next_account_number = self.next_account_number(),
            "accounts loaded"
        );

        Ok(LoadOutcome::Loaded {
            accounts: self.accounts.len(),
            truncated: loaded.truncated,
        })
    }

    /// Build a ledger from already-numbered accounts
    ///
    /// Numbers must be unique; the record reader enforces this.
    fn from_accounts(accounts: Vec<Account>) -> Self {
        let max_number = accounts
            .iter()
            .map(|account| account.account_number)
            .max()
            .unwrap_or(0);

        Ledger {
            accounts,
            next_number: u64::from(max_number) + 1,
        }
    }
}
