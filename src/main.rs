//! Banking Ledger CLI
//!
//! Command-line interface for applying banking operations from a CSV file
//! to an in-memory ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv > accounts.csv
//! cargo run -- --receipts-dir receipts operations.csv > accounts.csv
//! ```
//!
//! The program streams operation records from the input CSV file, applies
//! them through the ledger service, and writes the final account states to
//! stdout. Rejected rows (parse failures or domain-rule violations) are
//! logged to stderr and skipped; processing continues with the next row.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, infrastructure failure, output error)

use rust_banking_ledger::cli;
use rust_banking_ledger::core::LedgerService;
use rust_banking_ledger::io::{write_accounts_csv, OperationReader, TextReceiptRenderer};
use std::process;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout carries the account CSV
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let ledger = match &args.receipts_dir {
        Some(dir) => match TextReceiptRenderer::new(dir) {
            Ok(renderer) => LedgerService::with_receipts(Box::new(renderer)),
            Err(e) => {
                eprintln!("Error: cannot use receipts directory: {}", e);
                process::exit(1);
            }
        },
        None => LedgerService::new(),
    };

    let reader = match OperationReader::new(&args.input_file) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    for result in reader {
        match result {
            Ok(record) => {
                let account = record.account.clone();
                let name = record.op.name();
                if let Err(error) = ledger.apply(record) {
                    if error.is_domain() {
                        warn!(account = %account, operation = name, %error, "operation rejected");
                    } else {
                        eprintln!("Error: {}", error);
                        process::exit(1);
                    }
                }
            }
            Err(e) => warn!("skipping row: {}", e),
        }
    }

    let mut output = std::io::stdout();
    if let Err(e) = write_accounts_csv(&ledger.snapshot_all(), &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
