//! Interactive menu session
//!
//! This module provides the `Session` that drives a borrowed `Ledger` from a
//! line-oriented console. The session owns no account state: every command
//! is a prompt sequence followed by one ledger call and a printed result.
//!
//! # Commands
//!
//! 1. Create New Account
//! 2. Deposit Money
//! 3. Withdraw Money
//! 4. Check Balance
//! 5. View All Accounts
//! 6. Exit (saves, then ends the session)
//!
//! End of input at any prompt behaves like Exit.

use crate::console::input::Prompter;
use crate::core::{Ledger, LoadOutcome};
use crate::io::format_amount;
use crate::types::{Account, AccountNumber, BankError};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    ViewAllAccounts,
    Exit,
}

impl MenuChoice {
    /// Map a menu number (1-6) to its entry
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::CreateAccount),
            2 => Some(MenuChoice::Deposit),
            3 => Some(MenuChoice::Withdraw),
            4 => Some(MenuChoice::CheckBalance),
            5 => Some(MenuChoice::ViewAllAccounts),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\n--- Main Menu ---\n\
                    1. Create New Account\n\
                    2. Deposit Money\n\
                    3. Withdraw Money\n\
                    4. Check Balance\n\
                    5. View All Accounts\n\
                    6. Exit";

/// Whether the session should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Console session over a borrowed ledger
pub struct Session<'a, R, W> {
    ledger: &'a mut Ledger,
    data_file: &'a Path,
    io: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session that saves to `data_file` on exit
    pub fn new(ledger: &'a mut Ledger, data_file: &'a Path, input: R, output: W) -> Self {
        Session {
            ledger,
            data_file,
            io: Prompter::new(input, output),
        }
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.io.into_output()
    }

    /// Tell the user what startup loading found
    pub fn report_load(&mut self, outcome: &LoadOutcome) -> io::Result<()> {
        let out = self.io.output();
        match outcome {
            LoadOutcome::FreshStart => {
                writeln!(
                    out,
                    "No existing accounts file found. Starting with a fresh slate."
                )
            }
            LoadOutcome::Loaded {
                accounts,
                truncated,
            } => {
                if let Some(truncation) = truncated {
                    writeln!(
                        out,
                        "Warning: stopped reading accounts at line {} ({}); {} account(s) kept.",
                        truncation.line, truncation.reason, accounts
                    )?;
                }
                writeln!(
                    out,
                    "Accounts loaded. Next account number will be: {}",
                    self.ledger.next_account_number()
                )
            }
        }
    }

    /// Run the menu loop until Exit or end of input
    ///
    /// The ledger is saved exactly once, when the loop ends, even if the loop
    /// ended on a console I/O error. A failed save is reported to the user;
    /// only errors reading or writing the console itself are returned.
    pub fn run(&mut self) -> io::Result<()> {
        let commands = self.run_commands();
        let saved = self.save_and_exit();
        commands.and(saved)
    }

    fn run_commands(&mut self) -> io::Result<()> {
        writeln!(self.io.output(), "\n=== Console Bank ===")?;

        loop {
            writeln!(self.io.output(), "{}", MENU)?;

            let Some(number) = self.io.read_integer("Enter your choice: ")? else {
                break;
            };

            let flow = match MenuChoice::from_number(number) {
                Some(MenuChoice::CreateAccount) => self.create_account()?,
                Some(MenuChoice::Deposit) => self.deposit()?,
                Some(MenuChoice::Withdraw) => self.withdraw()?,
                Some(MenuChoice::CheckBalance) => self.check_balance()?,
                Some(MenuChoice::ViewAllAccounts) => self.view_all_accounts()?,
                Some(MenuChoice::Exit) => Flow::Stop,
                None => {
                    writeln!(self.io.output(), "Invalid choice! Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Stop {
                return Ok(());
            }
        }

        Ok(())
    }

    fn create_account(&mut self) -> io::Result<Flow> {
        let Some(name) = self.io.read_line("Enter account holder's name: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(initial_deposit) = self.io.read_amount("Enter initial deposit: $")? else {
            return Ok(Flow::Stop);
        };

        let account_number = self
            .ledger
            .create_account(name, initial_deposit)
            .account_number;
        writeln!(
            self.io.output(),
            "Account created successfully! Account Number: {}",
            account_number
        )?;
        Ok(Flow::Continue)
    }

    /// Prompt for an account number and look it up
    ///
    /// Prints "Account not found!" on a miss. `Ok(None)` from the outer
    /// option means input ended.
    fn prompt_account(&mut self) -> io::Result<Option<Option<AccountNumber>>> {
        let Some(number) = self.io.read_integer("Enter account number: ")? else {
            return Ok(None);
        };

        let found = AccountNumber::try_from(number)
            .ok()
            .filter(|&number| self.ledger.find_account(number).is_some());

        if found.is_none() {
            writeln!(self.io.output(), "Account not found!")?;
        }
        Ok(Some(found))
    }

    fn deposit(&mut self) -> io::Result<Flow> {
        let account_number = match self.prompt_account()? {
            None => return Ok(Flow::Stop),
            Some(None) => return Ok(Flow::Continue),
            Some(Some(number)) => number,
        };
        let Some(amount) = self.io.read_amount("Enter amount to deposit: $")? else {
            return Ok(Flow::Stop);
        };

        let out = self.io.output();
        match self.ledger.deposit(account_number, amount) {
            Ok(new_balance) => {
                writeln!(out, "Deposited: ${}", format_amount(amount))?;
                writeln!(out, "New balance: ${}", format_amount(new_balance))?;
            }
            Err(BankError::InvalidAmount { .. }) => {
                writeln!(out, "Invalid deposit amount! Amount must be positive.")?;
            }
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn withdraw(&mut self) -> io::Result<Flow> {
        let account_number = match self.prompt_account()? {
            None => return Ok(Flow::Stop),
            Some(None) => return Ok(Flow::Continue),
            Some(Some(number)) => number,
        };
        let Some(amount) = self.io.read_amount("Enter amount to withdraw: $")? else {
            return Ok(Flow::Stop);
        };

        let out = self.io.output();
        match self.ledger.withdraw(account_number, amount) {
            Ok(new_balance) => {
                writeln!(out, "Withdrawn: ${}", format_amount(amount))?;
                writeln!(out, "New balance: ${}", format_amount(new_balance))?;
            }
            Err(BankError::InvalidAmount { .. }) => {
                writeln!(out, "Invalid withdrawal amount! Amount must be positive.")?;
            }
            Err(BankError::InsufficientFunds { available, .. }) => {
                writeln!(
                    out,
                    "Insufficient balance! Available: ${}",
                    format_amount(available)
                )?;
            }
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn check_balance(&mut self) -> io::Result<Flow> {
        let account_number = match self.prompt_account()? {
            None => return Ok(Flow::Stop),
            Some(None) => return Ok(Flow::Continue),
            Some(Some(number)) => number,
        };

        let out = self.io.output();
        match self.ledger.balance(account_number) {
            Ok(balance) => writeln!(out, "Current balance: ${}", format_amount(balance))?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn view_all_accounts(&mut self) -> io::Result<Flow> {
        let out = self.io.output();
        if self.ledger.is_empty() {
            writeln!(out, "No accounts exist!")?;
            return Ok(Flow::Continue);
        }

        writeln!(out, "\nAll Accounts:")?;
        for account in self.ledger.list_accounts() {
            writeln!(out, "{}", display_line(account))?;
        }
        Ok(Flow::Continue)
    }

    fn save_and_exit(&mut self) -> io::Result<()> {
        let saved = self.ledger.save(self.data_file);
        let out = self.io.output();
        match saved {
            Ok(()) => writeln!(out, "Accounts saved successfully!")?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
        writeln!(out, "Thank you for using Console Bank!")?;
        out.flush()
    }
}

/// One line of the account listing
pub fn display_line(account: &Account) -> String {
    format!(
        "Account Number: {}, Name: {}, Balance: ${}",
        account.account_number,
        account.name,
        format_amount(account.balance)
    )
}
