//! Record format handling for the accounts file
//!
//! This module centralizes all text format concerns for the 3-line account
//! record:
//!
//! ```text
//! <account number>
//! <name>
//! <balance>
//! ```
//!
//! All functions are pure (no file I/O) for easy testing. Balances are written
//! with two decimal places; reading also accepts the shortest stream notation
//! (`150`, `1e+06`) found in older accounts files.

use crate::types::{round_to_cents, Account, AccountNumber};
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;

/// Format an amount with two decimal places
///
/// Used both for the accounts file and for console display, so that what the
/// user sees is exactly what gets stored. Midpoints round away from zero.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", round_to_cents(amount))
}

/// Write one account as a 3-line record
///
/// The name is written verbatim. Names never contain a newline because the
/// console reads them a whole line at a time.
pub fn write_account_record(account: &Account, output: &mut dyn Write) -> std::io::Result<()> {
    writeln!(output, "{}", account.account_number)?;
    writeln!(output, "{}", account.name)?;
    writeln!(output, "{}", format_amount(account.balance))?;
    Ok(())
}

/// Write every account, in the given order, as consecutive records
pub fn write_accounts(accounts: &[Account], output: &mut dyn Write) -> std::io::Result<()> {
    for account in accounts {
        write_account_record(account, output)?;
    }
    Ok(())
}

/// Parse the account number line of a record
///
/// Takes the leading integer token and ignores the rest of the line. Any
/// positive `AccountNumber` is accepted, so every number the ledger can hand
/// out reads back.
///
/// # Returns
///
/// * `Ok(AccountNumber)` - The parsed account number
/// * `Err(String)` - Description of why the line is not a valid number
pub fn parse_account_number(line: &str) -> Result<AccountNumber, String> {
    let trimmed = line.trim_start();
    let digits_start = usize::from(trimmed.starts_with('+'));
    let digits_len = trimmed[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return Err(format!("expected an account number, found '{}'", line.trim()));
    }

    let token = &trimmed[digits_start..digits_start + digits_len];
    match token.parse::<AccountNumber>() {
        Ok(0) => Err("account number must be positive".to_string()),
        Ok(number) => Ok(number),
        Err(_) => Err(format!("account number '{}' is out of range", token)),
    }
}

/// Parse the balance line of a record
///
/// Takes the first whitespace-separated token. Plain decimals and scientific
/// notation are both accepted.
///
/// # Returns
///
/// * `Ok(Decimal)` - The parsed balance
/// * `Err(String)` - Description of why the line is not a valid balance
pub fn parse_balance(line: &str) -> Result<Decimal, String> {
    let token = line
        .split_whitespace()
        .next()
        .ok_or_else(|| "expected a balance, found an empty line".to_string())?;

    parse_amount(token).ok_or_else(|| format!("invalid balance '{}'", token))
}

/// Parse a single decimal token, in plain or scientific notation
pub fn parse_amount(token: &str) -> Option<Decimal> {
    Decimal::from_str(token)
        .or_else(|_| Decimal::from_scientific(token))
        .ok()
}

/// Strip a trailing `\n` or `\r\n` from a line
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
