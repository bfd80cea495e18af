//! Console Bank CLI
//!
//! Interactive menu for managing bank accounts stored in a text file.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --data-file /path/to/accounts.txt
//! cargo run -- --log-level debug
//! ```
//!
//! The accounts file is loaded at startup (a missing file starts an empty
//! ledger) and saved when the user chooses Exit or input ends.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (accounts file unreadable, console I/O failure)

use console_bank::cli;
use console_bank::{Ledger, Session};
use std::io;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args.log_level);

    // An unreadable accounts file must never be saved over
    let (mut ledger, outcome) = match Ledger::open(&args.data_file) {
        Ok(opened) => opened,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut session = Session::new(&mut ledger, &args.data_file, stdin.lock(), io::stdout());

    let result = session
        .report_load(&outcome)
        .and_then(|()| session.run());

    if let Err(e) = result {
        eprintln!("Console error: {}", e);
        process::exit(1);
    }
}
