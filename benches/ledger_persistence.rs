//! Benchmark suite for accounts file persistence
//!
//! Measures saving and loading a generated ledger using the divan
//! benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use console_bank::Ledger;
use rust_decimal::Decimal;
use tempfile::{tempdir, TempDir};

fn main() {
    divan::main();
}

/// Build a ledger with `size` accounts and save it to a fresh temp dir
fn saved_ledger(size: usize) -> (TempDir, std::path::PathBuf, Ledger) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("accounts.txt");

    let mut ledger = Ledger::new();
    for i in 0..size {
        ledger.create_account(format!("Holder Number {}", i), Decimal::new(i as i64 * 125, 2));
    }
    ledger.save(&path).expect("Save failed");

    (dir, path, ledger)
}

/// Save ledgers of increasing size
#[divan::bench(args = [100, 1_000, 10_000])]
fn save(bencher: divan::Bencher, size: usize) {
    let (_dir, path, ledger) = saved_ledger(size);

    bencher.bench_local(|| ledger.save(&path).expect("Save failed"));
}

/// Load ledgers of increasing size
#[divan::bench(args = [100, 1_000, 10_000])]
fn load(bencher: divan::Bencher, size: usize) {
    let (_dir, path, _) = saved_ledger(size);

    bencher.bench_local(|| Ledger::open(&path).expect("Load failed"));
}
