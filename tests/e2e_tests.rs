//! End-to-end integration tests
//!
//! These tests validate the complete console pipeline using predefined
//! fixtures. Each test:
//! 1. Seeds a temporary accounts file from accounts.txt (if the fixture has one)
//! 2. Opens the ledger from that file
//! 3. Replays input.txt through a console session
//! 4. Compares the saved accounts file with expected_accounts.txt
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - The create/deposit/withdraw/save scenario
//! - Numbering resumed after a load
//! - Loading that stops at a malformed record
//! - Balances written by older builds in stream notation
//! - Invalid console input and end of input

#[cfg(test)]
mod tests {
    use console_bank::{Ledger, LoadOutcome, Session};
    use rstest::rstest;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::tempdir;

    /// Run a fixture and compare the saved accounts file with the expected one
    ///
    /// Returns the console output so individual tests can check messages.
    ///
    /// # Panics
    ///
    /// Panics if fixture files cannot be read or the saved file differs from
    /// expected_accounts.txt
    fn run_test_fixture(fixture_name: &str) -> String {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let seed_path = format!("{}/accounts.txt", fixture_dir);
        let input_path = format!("{}/input.txt", fixture_dir);
        let expected_path = format!("{}/expected_accounts.txt", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let data_dir = tempdir().expect("Failed to create temp dir");
        let data_file = data_dir.path().join("accounts.txt");
        if Path::new(&seed_path).exists() {
            fs::copy(&seed_path, &data_file).expect("Failed to seed accounts file");
        }

        let (mut ledger, outcome) = Ledger::open(&data_file)
            .unwrap_or_else(|e| panic!("Failed to open ledger: {}", e));

        let input = fs::read(&input_path)
            .unwrap_or_else(|e| panic!("Failed to read input file {}: {}", input_path, e));

        let output = {
            let mut session = Session::new(&mut ledger, &data_file, Cursor::new(input), Vec::new());
            session
                .report_load(&outcome)
                .and_then(|()| session.run())
                .unwrap_or_else(|e| panic!("Session failed: {}", e));
            session.into_output()
        };
        let output = String::from_utf8(output).expect("Console output is not UTF-8");

        let actual_accounts = fs::read_to_string(&data_file)
            .unwrap_or_else(|e| panic!("Failed to read saved accounts file: {}", e));
        let expected_accounts = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_accounts, expected_accounts,
            "\n\nAccounts file mismatch for fixture: {}\n\nActual:\n{}\n\nExpected:\n{}\n\nConsole output:\n{}\n",
            fixture_name, actual_accounts, expected_accounts, output
        );

        output
    }

    /// End-to-end test for all fixtures
    #[rstest]
    #[case("alice_smith_scenario")]
    #[case("resume_numbering")]
    #[case("malformed_tail")]
    #[case("legacy_stream_notation")]
    #[case("bad_input_recovery")]
    #[case("end_of_input")]
    #[case("empty_exit")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    #[test]
    fn test_alice_smith_console_messages() {
        let output = run_test_fixture("alice_smith_scenario");

        assert!(output.contains("No existing accounts file found."));
        assert!(output.contains("Account created successfully! Account Number: 1"));
        assert!(output.contains("New balance: $150.00"));
        assert!(output.contains("Insufficient balance! Available: $150.00"));
        assert!(output.contains("New balance: $0.00"));
        assert!(output.contains("Accounts saved successfully!"));
    }

    #[test]
    fn test_resume_numbering_reports_next_number() {
        let output = run_test_fixture("resume_numbering");

        assert!(output.contains("Accounts loaded. Next account number will be: 5"));
        assert!(output.contains("Account created successfully! Account Number: 5"));
    }

    #[test]
    fn test_malformed_tail_reports_truncation() {
        let output = run_test_fixture("malformed_tail");

        assert!(output.contains("Warning: stopped reading accounts at line 6"));
        assert!(output.contains("Account created successfully! Account Number: 2"));
    }

    #[test]
    fn test_bad_input_recovery_messages() {
        let output = run_test_fixture("bad_input_recovery");

        assert!(output.contains("Invalid input! Please enter a number."));
        assert!(output.contains("Invalid choice! Please try again."));
        assert!(output.contains("Account not found!"));
        assert!(output.contains("Invalid withdrawal amount! Amount must be positive."));
        assert!(output.contains("Account Number: 1, Name: Eve, Balance: $20.00"));
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("accounts.txt");

        let mut ledger = Ledger::new();
        ledger.create_account("Alice Smith", "100.25".parse().unwrap());
        ledger.create_account("Bob  Two Spaces", "0".parse().unwrap());
        ledger.create_account("Carol", "7.5".parse().unwrap());
        ledger.save(&path).unwrap();

        let (reloaded, outcome) = Ledger::open(&path).unwrap();

        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                accounts: 3,
                truncated: None
            }
        );
        assert_eq!(reloaded.list_accounts(), ledger.list_accounts());
        assert_eq!(reloaded.next_account_number(), 4);
    }
}
