//! I/O module
//!
//! Handles CSV parsing, output, and receipt rendering.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output serialization)
//! - `sync_reader` - Streaming CSV reader with iterator interface
//! - `receipt` - Receipt rendering for transfers, payments, and statements

pub mod csv_format;
pub mod receipt;
pub mod sync_reader;

pub use csv_format::{convert_csv_record, write_accounts_csv, CsvRecord};
pub use receipt::{ReceiptRenderer, TextReceiptRenderer};
pub use sync_reader::OperationReader;
