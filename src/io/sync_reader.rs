//! Streaming CSV reader with iterator interface
//!
//! Provides a streaming iterator over operation records from a CSV file,
//! delegating format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found) are returned from `new()`
//! - Individual row errors are yielded as Err variants in the iterator,
//!   with line numbers for debugging
//!
//! The reader processes rows one at a time; memory usage does not grow
//! with the file.

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::OperationRecord;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming CSV reader over operation records
///
/// # Examples
///
/// ```no_run
/// use rust_banking_ledger::io::sync_reader::OperationReader;
/// use std::path::Path;
///
/// let reader = OperationReader::new(Path::new("operations.csv")).unwrap();
/// for result in reader {
///     match result {
///         Ok(record) => println!("parsed: {:?}", record),
///         Err(e) => eprintln!("skipped: {}", e),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct OperationReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl OperationReader {
    /// Create a new reader from a file path
    ///
    /// The CSV reader trims whitespace from all fields and allows rows to
    /// omit trailing optional columns.
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("failed to open file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for OperationReader {
    type Item = Result<OperationRecord, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        match deserializer.next()? {
            Ok(csv_record) => {
                self.line_num += 1;
                // Line numbers are 1-based and offset by the header row
                Some(
                    convert_csv_record(csv_record)
                        .map_err(|e| format!("line {}: {}", self.line_num + 1, e)),
                )
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(format!(
                    "line {}: CSV parse error: {}",
                    self.line_num + 1,
                    e
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Operation;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("failed to write to temp file");
        file.flush().expect("failed to flush temp file");
        file
    }

    const HEADER: &str = "op,account,counterparty,amount,owner,detail\n";

    #[test]
    fn test_reader_new_fails_on_missing_file() {
        let result = OperationReader::new(Path::new("nonexistent.csv"));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("failed to open file"));
    }

    #[test]
    fn test_reader_parses_mixed_operations() {
        let content = format!(
            "{HEADER}\
             open_checking,a,,100.00,Ada,pw\n\
             deposit,a,,50\n\
             transfer,a,b,25\n\
             close,a\n"
        );
        let file = create_temp_csv(&content);

        let records: Vec<_> = OperationReader::new(file.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert_eq!(records.len(), 4);
        assert!(matches!(records[0].op, Operation::Open { .. }));
        assert_eq!(records[1].op, Operation::Deposit { amount: dec!(50) });
        assert_eq!(
            records[2].op,
            Operation::Transfer {
                to: "b".to_string(),
                amount: dec!(25)
            }
        );
        assert_eq!(records[3].op, Operation::Close);
    }

    #[test]
    fn test_reader_trims_whitespace() {
        let content = format!("{HEADER}  deposit , a ,, 10.50 \n");
        let file = create_temp_csv(&content);

        let records: Vec<_> = OperationReader::new(file.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].account, "a");
        assert_eq!(records[0].op, Operation::Deposit { amount: dec!(10.50) });
    }

    #[test]
    fn test_reader_yields_errors_with_line_numbers() {
        let content = format!(
            "{HEADER}\
             deposit,a,,100\n\
             deposit,b,,not_a_number\n\
             deposit,c,,50\n"
        );
        let file = create_temp_csv(&content);

        let records: Vec<_> = OperationReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(records[2].is_ok());
        let error = records[1].as_ref().unwrap_err();
        assert!(error.contains("line 3"));
        assert!(error.contains("invalid amount"));
    }

    #[test]
    fn test_reader_continues_after_invalid_operation() {
        let content = format!(
            "{HEADER}\
             deposit,a,,100\n\
             teleport,a,,5\n\
             withdraw,a,,20\n"
        );
        let file = create_temp_csv(&content);

        let records: Vec<_> = OperationReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(records[1].is_err());
        assert!(records[2].is_ok());
    }

    #[test]
    fn test_reader_empty_after_header() {
        let file = create_temp_csv(HEADER);
        let records: Vec<_> = OperationReader::new(file.path()).unwrap().collect();
        assert!(records.is_empty());
    }
}
