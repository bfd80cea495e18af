//! Console front end
//!
//! A thin line-oriented menu over the ledger.
//!
//! # Components
//!
//! - `input` - Prompting, numeric re-prompting and end-of-input detection
//! - `session` - Menu loop and per-command result messages

pub mod input;
pub mod session;

pub use input::Prompter;
pub use session::{display_line, MenuChoice, Session};
