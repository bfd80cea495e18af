//! I/O module
//!
//! Handles the accounts file.
//!
//! # Components
//!
//! - `record_format` - 3-line record format (parsing, serialization, amount display)
//! - `store` - Record reader and file-level load/save

pub mod record_format;
pub mod store;

pub use record_format::{format_amount, parse_amount, write_accounts};
pub use store::{load_accounts_file, save_accounts_file, LoadedAccounts, RecordReader, Truncation};
