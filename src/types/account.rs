//! Account-related types for the console bank
//!
//! This module defines the Account structure and the balance mutation rules
//! that every deposit and withdrawal goes through.

use super::error::BankError;
use rust_decimal::{Decimal, RoundingStrategy};

/// Account number
///
/// Assigned by the ledger, starting at 1. Never reassigned.
pub type AccountNumber = u32;

/// Round an amount to whole cents, midpoints away from zero
///
/// Balances are held, shown and stored at this precision, so every amount
/// entering an account goes through here first.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// A single bank account
///
/// Holds the holder's display name and the current balance. Accounts are
/// only created by the ledger, which guarantees their numbers are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Ledger-assigned account number
    pub account_number: AccountNumber,

    /// Holder's display name (may contain spaces, never a newline)
    pub name: String,

    /// Current balance, in whole cents
    ///
    /// Deposits and withdrawals never move this below zero. The initial
    /// deposit at creation is taken as given.
    pub balance: Decimal,
}

impl Account {
    /// Create a new account
    ///
    /// # Arguments
    ///
    /// * `account_number` - The number assigned by the ledger
    /// * `name` - Holder's display name
    /// * `balance` - Opening balance, rounded to cents
    pub fn new(account_number: AccountNumber, name: impl Into<String>, balance: Decimal) -> Self {
        Account {
            account_number,
            name: name.into(),
            balance: round_to_cents(balance),
        }
    }

    /// Deposit funds into this account
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - The new balance
    /// * `Err(BankError)` - If the amount is not positive or the sum overflows
    ///
    /// The amount is rounded to cents first; one that rounds to zero is
    /// rejected. The balance is left untouched on error.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        let cents = round_to_cents(amount);
        if cents <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        let new_balance = self
            .balance
            .checked_add(cents)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", self.account_number))?;

        self.balance = new_balance;
        Ok(new_balance)
    }

    /// Withdraw funds from this account
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - The new balance
    /// * `Err(BankError)` - If the amount is not positive, exceeds the balance,
    ///   or the subtraction overflows
    ///
    /// The amount is rounded to cents first, as for deposits. The balance is
    /// left untouched on error.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        let cents = round_to_cents(amount);
        if cents <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        if cents > self.balance {
            return Err(BankError::insufficient_funds(
                self.account_number,
                self.balance,
                cents,
            ));
        }

        let new_balance = self
            .balance
            .checked_sub(cents)
            .ok_or_else(|| BankError::arithmetic_overflow("withdrawal", self.account_number))?;

        self.balance = new_balance;
        Ok(new_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[rstest]
    #[case::whole("100.00", "50.00", "150.00")]
    #[case::cents("0.10", "0.20", "0.30")]
    #[case::from_zero("0", "12.34", "12.34")]
    #[case::negative_opening("-5", "10", "5")]
    fn test_deposit_adds_amount(#[case] opening: &str, #[case] amount: &str, #[case] expected: &str) {
        let mut account = Account::new(1, "Alice", dec(opening));

        let result = account.deposit(dec(amount));

        assert_eq!(result, Ok(dec(expected)));
        assert_eq!(account.balance, dec(expected));
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-1.00")]
    #[case::below_one_cent("0.004")]
    fn test_deposit_rejects_non_positive(#[case] amount: &str) {
        let mut account = Account::new(1, "Alice", dec("10.00"));

        let result = account.deposit(dec(amount));

        assert_eq!(result, Err(BankError::invalid_amount(dec(amount))));
        assert_eq!(account.balance, dec("10.00"));
    }

    #[test]
    fn test_deposit_overflow_leaves_balance_unchanged() {
        let mut account = Account::new(7, "Max", Decimal::MAX);

        let result = account.deposit(Decimal::ONE);

        assert_eq!(result, Err(BankError::arithmetic_overflow("deposit", 7)));
        assert_eq!(account.balance, Decimal::MAX);
    }

    #[rstest]
    #[case::partial("150.00", "50.00", "100.00")]
    #[case::exact("150.00", "150.00", "0.00")]
    #[case::cents("1.00", "0.01", "0.99")]
    fn test_withdraw_subtracts_amount(
        #[case] opening: &str,
        #[case] amount: &str,
        #[case] expected: &str,
    ) {
        let mut account = Account::new(1, "Alice", dec(opening));

        let result = account.withdraw(dec(amount));

        assert_eq!(result, Ok(dec(expected)));
        assert_eq!(account.balance, dec(expected));
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-20")]
    fn test_withdraw_rejects_non_positive(#[case] amount: &str) {
        let mut account = Account::new(1, "Alice", dec("150.00"));

        let result = account.withdraw(dec(amount));

        assert_eq!(result, Err(BankError::invalid_amount(dec(amount))));
        assert_eq!(account.balance, dec("150.00"));
    }

    #[test]
    fn test_withdraw_more_than_balance_reports_available() {
        let mut account = Account::new(3, "Alice Smith", dec("150.00"));

        let result = account.withdraw(dec("200.00"));

        assert_eq!(
            result,
            Err(BankError::insufficient_funds(3, dec("150.00"), dec("200.00")))
        );
        assert_eq!(account.balance, dec("150.00"));
    }

    #[rstest]
    #[case::half_cent_up("0.005", "0.01")]
    #[case::below_half_cent("12.344", "12.34")]
    #[case::negative_half_cent("-0.125", "-0.13")]
    #[case::already_cents("7.10", "7.10")]
    fn test_round_to_cents(#[case] amount: &str, #[case] expected: &str) {
        assert_eq!(round_to_cents(dec(amount)), dec(expected));
    }

    #[test]
    fn test_opening_balance_is_held_in_cents() {
        let account = Account::new(1, "Frank", dec("12.345"));

        assert_eq!(account.balance, dec("12.35"));
    }

    #[test]
    fn test_sub_cent_deposit_can_be_withdrawn_as_displayed() {
        let mut account = Account::new(1, "Frank", Decimal::ZERO);

        assert_eq!(account.deposit(dec("12.345")), Ok(dec("12.35")));
        assert_eq!(account.withdraw(dec("12.35")), Ok(Decimal::ZERO));
        assert_eq!(account.balance, Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_below_one_cent_is_rejected() {
        let mut account = Account::new(1, "Alice", dec("1.00"));

        assert_eq!(
            account.withdraw(dec("0.001")),
            Err(BankError::invalid_amount(dec("0.001")))
        );
        assert_eq!(account.balance, dec("1.00"));
    }

    #[test]
    fn test_withdraw_from_negative_opening_balance_is_rejected() {
        let mut account = Account::new(1, "Overdrawn", dec("-10"));

        assert!(matches!(
            account.withdraw(dec("1")),
            Err(BankError::InsufficientFunds { .. })
        ));
        assert_eq!(account.balance, dec("-10"));
    }
}
