use clap::Parser;
use std::path::PathBuf;

/// Apply banking operations from a CSV file to an in-memory ledger
#[derive(Parser, Debug)]
#[command(name = "banking-ledger")]
#[command(about = "Apply banking operations from a CSV file", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing operation records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Directory to write transfer and payment receipts into
    #[arg(
        long = "receipts-dir",
        value_name = "DIR",
        help = "Write plain-text receipts into this directory"
    )]
    pub receipts_dir: Option<PathBuf>,
}
