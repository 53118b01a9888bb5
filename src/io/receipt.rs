//! Receipt rendering
//!
//! Receipts are rendered from account snapshots after the ledger releases
//! its locks, and every renderer failure is surfaced as an `Io` error so
//! the caller can decide whether the operation itself still stands. The
//! ledger treats receipts as best-effort.

use crate::types::{Account, LedgerError};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Renders receipts for completed operations
///
/// Implementations must not mutate ledger state; they receive snapshots.
pub trait ReceiptRenderer {
    /// Render a receipt for a completed transfer
    fn render_transfer(
        &self,
        from: &Account,
        to: &Account,
        amount: Decimal,
    ) -> Result<PathBuf, LedgerError>;

    /// Render a receipt for a completed bill payment
    fn render_payment(
        &self,
        account: &Account,
        code: &str,
        amount: Decimal,
        due: Option<NaiveDate>,
    ) -> Result<PathBuf, LedgerError>;

    /// Render an account statement from the movement log
    fn render_statement(&self, account: &Account) -> Result<PathBuf, LedgerError>;
}

/// Plain-text receipt renderer writing one file per receipt
#[derive(Debug, Clone)]
pub struct TextReceiptRenderer {
    dir: PathBuf,
}

impl TextReceiptRenderer {
    /// Create a renderer writing into `dir`, creating it if needed
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(TextReceiptRenderer { dir })
    }

    fn write(&self, stem: &str, body: String) -> Result<PathBuf, LedgerError> {
        let name = format!("{}-{}.txt", stem, Utc::now().format("%Y%m%dT%H%M%S%f"));
        let path = self.dir.join(name);
        fs::write(&path, body)?;
        Ok(path)
    }
}

impl ReceiptRenderer for TextReceiptRenderer {
    fn render_transfer(
        &self,
        from: &Account,
        to: &Account,
        amount: Decimal,
    ) -> Result<PathBuf, LedgerError> {
        let mut body = String::new();
        let _ = writeln!(body, "TRANSFER RECEIPT");
        let _ = writeln!(body, "date:   {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
        let _ = writeln!(body, "from:   {} (account {})", from.owner, from.number);
        let _ = writeln!(body, "to:     {} (account {})", to.owner, to.number);
        let _ = writeln!(body, "amount: {:.2}", amount);
        self.write(&format!("transfer-{}", from.number), body)
    }

    fn render_payment(
        &self,
        account: &Account,
        code: &str,
        amount: Decimal,
        due: Option<NaiveDate>,
    ) -> Result<PathBuf, LedgerError> {
        let mut body = String::new();
        let _ = writeln!(body, "PAYMENT RECEIPT");
        let _ = writeln!(body, "date:   {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
        let _ = writeln!(body, "payer:  {} (account {})", account.owner, account.number);
        let _ = writeln!(body, "code:   {}", code);
        if let Some(due) = due {
            let _ = writeln!(body, "due:    {}", due);
        }
        let _ = writeln!(body, "amount: {:.2}", amount);
        self.write(&format!("payment-{}", account.number), body)
    }

    fn render_statement(&self, account: &Account) -> Result<PathBuf, LedgerError> {
        let mut body = String::new();
        let _ = writeln!(
            body,
            "STATEMENT for {} (account {})",
            account.owner, account.number
        );
        for movement in &account.movements {
            let _ = writeln!(
                body,
                "{}  {:>12.2}  {}",
                movement.timestamp.format("%Y-%m-%d %H:%M:%S"),
                movement.amount,
                movement.kind
            );
        }
        let _ = writeln!(body, "balance: {:.2}", account.balance);
        self.write(&format!("statement-{}", account.number), body)
    }
}
