//! Card types: credit card with its invoice sub-ledger, and debit card
//!
//! A credit card owns exactly one current [`Invoice`] that accumulates
//! purchases for the running billing period. Paying the invoice debits the
//! owning account and rolls the invoice over to the next period. A debit
//! card carries identity only; its purchases debit the account directly.

use crate::types::error::LedgerError;
use crate::types::movement::Movement;
use chrono::{Datelike, Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Days between invoice closing date and due date
const INVOICE_DUE_OFFSET_DAYS: u64 = 10;

/// Card validity in months from issuance
const CARD_VALIDITY_MONTHS: u32 = 60;

/// Billing-period invoice owned by a credit card
///
/// Accumulates purchase movements for the current period. Invariant:
/// `total` always equals the sum of the purchase movements' amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Reference period as "month/year" (e.g. "3/2026")
    pub reference_month: String,

    /// Day the invoice closes (the 25th of the reference month)
    pub closing_date: NaiveDate,

    /// Payment due date (closing date + 10 days)
    pub due_date: NaiveDate,

    /// Sum of unpaid purchase amounts
    pub total: Decimal,

    /// Purchase movements for the current period
    pub purchases: Vec<Movement>,
}

impl Invoice {
    /// Create an invoice for the billing period containing `base`
    fn for_period(base: NaiveDate) -> Self {
        // Day 25 exists in every month
        let closing_date = base.with_day(25).unwrap_or(base);
        Invoice {
            reference_month: format!("{}/{}", base.month(), base.year()),
            closing_date,
            due_date: closing_date + chrono::Days::new(INVOICE_DUE_OFFSET_DAYS),
            total: Decimal::ZERO,
            purchases: Vec::new(),
        }
    }

    /// Create an invoice for the current billing period
    pub fn new() -> Self {
        Self::for_period(Utc::now().date_naive())
    }

    /// Record a purchase on the invoice
    ///
    /// Appends a purchase movement and raises the total. Limit checks are
    /// the owning card's responsibility.
    pub fn add_purchase(&mut self, description: &str, amount: Decimal) {
        self.purchases
            .push(Movement::of(format!("credit purchase: {description}"), amount));
        self.total += amount;
    }

    /// Settle the invoice after a successful payment debit
    ///
    /// Clears the purchase movements, zeroes the total, and advances the
    /// billing metadata to the next period.
    pub fn settle(&mut self) {
        let next = Utc::now().date_naive() + Months::new(1);
        *self = Invoice::for_period(next);
    }
}

impl Default for Invoice {
    fn default() -> Self {
        Self::new()
    }
}

/// Credit card attached to an account
///
/// Gates purchases against a fixed limit minus the current invoice total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    /// Card number, 16 digits grouped in fours
    pub number: String,

    /// Expiry as "MM/yy", five years from issuance
    pub expiry: String,

    /// Card verification value, 3 digits
    pub cvv: String,

    /// Fixed credit limit
    pub limit: Decimal,

    /// The current billing-period invoice
    pub invoice: Invoice,
}

impl CreditCard {
    /// Issue a new card with the given limit and generated identity
    pub fn new(limit: Decimal, number: String, cvv: String) -> Self {
        CreditCard {
            number,
            expiry: card_expiry(),
            cvv,
            limit,
            invoice: Invoice::new(),
        }
    }

    /// Credit still available on the current invoice
    pub fn available_limit(&self) -> Decimal {
        self.limit - self.invoice.total
    }

    /// Record a purchase against the current invoice
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `CreditLimitExceeded` if `amount` exceeds the available limit
    pub fn purchase(
        &mut self,
        account: &str,
        description: &str,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }
        let available = self.available_limit();
        if amount > available {
            return Err(LedgerError::credit_limit_exceeded(account, available, amount));
        }
        self.invoice.add_purchase(description, amount);
        Ok(())
    }
}

/// Debit card attached to an account
///
/// Identity only; purchases debit the owning account directly through
/// `Account::debit_internal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebitCard {
    /// Card number, 16 digits grouped in fours
    pub number: String,

    /// Expiry as "MM/yy", five years from issuance
    pub expiry: String,

    /// Card verification value, 3 digits
    pub cvv: String,
}

impl DebitCard {
    /// Issue a new card with generated identity
    pub fn new(number: String, cvv: String) -> Self {
        DebitCard {
            number,
            expiry: card_expiry(),
            cvv,
        }
    }
}

fn card_expiry() -> String {
    (Utc::now().date_naive() + Months::new(CARD_VALIDITY_MONTHS))
        .format("%m/%y")
        .to_string()
}
