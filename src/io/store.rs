//! Accounts file reader and writer
//!
//! Provides a streaming iterator over account records and the file-level
//! load/save functions used by the ledger. Format concerns are delegated to
//! the record_format module.
//!
//! # Error Handling
//!
//! - A missing file is the normal first-run case and is not an error
//! - A file that exists but cannot be opened is a `PersistenceRead` error
//! - The first malformed record ends reading; earlier records are kept and
//!   the stopping point is reported as a `Truncation`
//! - Failing to create or write the destination is a `PersistenceWrite` error
//!
//! Each call opens the file, reads or writes it completely and closes it.
//! No handle outlives the call.

use crate::io::record_format::{
    parse_account_number, parse_balance, strip_line_ending, write_accounts,
};
use crate::types::{Account, AccountNumber, BankError};
use std::collections::HashSet;
use thiserror::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

/// Where and why reading stopped before the end of the file
#[derive(Debug, Clone, PartialEq, Error)]
#[error("malformed record at line {line}: {reason}")]
pub struct Truncation {
    /// 1-based line where the malformed record was detected
    pub line: usize,
    /// Description of the problem
    pub reason: String,
}

impl Truncation {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Truncation {
            line,
            reason: reason.into(),
        }
    }
}

/// Accounts read from a file, plus the truncation point if any
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadedAccounts {
    /// Complete records in file order, up to the first malformed one
    pub accounts: Vec<Account>,
    /// Set when a malformed record ended reading before the end of the file
    pub truncated: Option<Truncation>,
}

/// Streaming reader over 3-line account records
///
/// Yields `Ok(Account)` for each complete record. The first malformed record
/// yields a single `Err(Truncation)` and the iterator is exhausted
/// afterwards. Duplicate account numbers count as malformed.
#[derive(Debug)]
pub struct RecordReader<R> {
    reader: R,
    line_num: usize,
    seen: HashSet<AccountNumber>,
    done: bool,
}

impl<R: BufRead> RecordReader<R> {
    /// Create a new RecordReader over any buffered source
    pub fn new(reader: R) -> Self {
        RecordReader {
            reader,
            line_num: 0,
            seen: HashSet::new(),
            done: false,
        }
    }

    /// Number of lines consumed so far
    pub fn line_num(&self) -> usize {
        self.line_num
    }

    /// Read the next raw line, without its terminator
    ///
    /// Returns `Ok(None)` at end of input.
    fn next_line(&mut self) -> Result<Option<String>, Truncation> {
        let mut buf = String::new();
        let read = self
            .reader
            .read_line(&mut buf)
            .map_err(|e| Truncation::new(self.line_num + 1, e.to_string()))?;

        if read == 0 {
            return Ok(None);
        }

        self.line_num += 1;
        Ok(Some(strip_line_ending(&buf).to_string()))
    }

    /// Read the next line that holds anything besides whitespace
    fn next_non_blank_line(&mut self) -> Result<Option<String>, Truncation> {
        while let Some(line) = self.next_line()? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    fn read_record(&mut self) -> Result<Option<Account>, Truncation> {
        // Clean end of input at a record boundary
        let Some(number_line) = self.next_non_blank_line()? else {
            return Ok(None);
        };

        let number_line_num = self.line_num;
        let account_number = parse_account_number(&number_line)
            .map_err(|message| Truncation::new(number_line_num, message))?;

        if !self.seen.insert(account_number) {
            return Err(Truncation::new(
                number_line_num,
                format!("duplicate account number {}", account_number),
            ));
        }

        let name = self.next_line()?.ok_or_else(|| {
            Truncation::new(
                self.line_num + 1,
                format!("missing name for account {}", account_number),
            )
        })?;

        let balance_line = self.next_non_blank_line()?.ok_or_else(|| {
            Truncation::new(
                self.line_num + 1,
                format!("missing balance for account {}", account_number),
            )
        })?;

        let balance = parse_balance(&balance_line)
            .map_err(|message| Truncation::new(self.line_num, message))?;

        Ok(Some(Account::new(account_number, name, balance)))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Account, Truncation>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_record() {
            Ok(Some(account)) => Some(Ok(account)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Read every valid record from a buffered source
///
/// Never fails: a malformed record ends reading and is reported in
/// `LoadedAccounts::truncated`.
pub fn read_accounts<R: BufRead>(reader: R) -> LoadedAccounts {
    let mut loaded = LoadedAccounts::default();

    for result in RecordReader::new(reader) {
        match result {
            Ok(account) => loaded.accounts.push(account),
            Err(truncation) => loaded.truncated = Some(truncation),
        }
    }

    loaded
}

/// Load accounts from a file
///
/// # Returns
///
/// * `Ok(None)` - The file does not exist (first run)
/// * `Ok(Some(LoadedAccounts))` - The valid records, in file order
/// * `Err(BankError::PersistenceRead)` - The file exists but cannot be opened
pub fn load_accounts_file(path: &Path) -> Result<Option<LoadedAccounts>, BankError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(BankError::persistence_read(path, &e)),
    };

    Ok(Some(read_accounts(BufReader::new(file))))
}

/// Save accounts to a file, replacing its contents
///
/// # Errors
///
/// Returns `BankError::PersistenceWrite` if the file cannot be created,
/// written or flushed.
pub fn save_accounts_file(path: &Path, accounts: &[Account]) -> Result<(), BankError> {
    let file = File::create(path).map_err(|e| BankError::persistence_write(path, &e))?;

    let mut writer = BufWriter::new(file);
    write_accounts(accounts, &mut writer).map_err(|e| BankError::persistence_write(path, &e))?;
    writer
        .flush()
        .map_err(|e| BankError::persistence_write(path, &e))?;

    Ok(())
}
