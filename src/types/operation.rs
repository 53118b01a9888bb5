//! Parsed ledger operations
//!
//! The operation record is the parsed form of one input row: the account
//! it applies to plus the operation with its fields already validated and
//! typed. Parsing from the raw CSV row lives in the io layer.

use crate::types::account::AccountVariant;
use rust_decimal::Decimal;

/// One ledger operation with its typed fields
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Open an account with an initial deposit
    Open {
        /// Requested account variant
        variant: AccountVariant,
        /// Owner's name
        owner: String,
        /// Login credential
        credential: String,
        /// Initial deposit (>= 0)
        initial_deposit: Decimal,
    },
    /// Credit funds
    Deposit { amount: Decimal },
    /// Debit funds
    Withdraw { amount: Decimal },
    /// Move funds to another account
    Transfer { to: String, amount: Decimal },
    /// Pay a bill identified by its code
    PayBill { code: String, amount: Decimal },
    /// Issue a credit card with the given limit
    IssueCreditCard { limit: Decimal },
    /// Issue a debit card
    IssueDebitCard,
    /// Purchase on the credit card's invoice
    PurchaseCredit { description: String, amount: Decimal },
    /// Purchase debited directly through the debit card
    PurchaseDebit { description: String, amount: Decimal },
    /// Pay the current credit-card invoice in full
    PayInvoice,
    /// Move funds into the savings investment sub-ledger
    Invest { amount: Decimal },
    /// Move funds out of the savings investment sub-ledger
    Redeem { amount: Decimal },
    /// Close the account
    Close,
}

impl Operation {
    /// Lowercase operation name as it appears in the input
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Open {
                variant: AccountVariant::Checking,
                ..
            } => "open_checking",
            Operation::Open {
                variant: AccountVariant::Savings,
                ..
            } => "open_savings",
            Operation::Deposit { .. } => "deposit",
            Operation::Withdraw { .. } => "withdraw",
            Operation::Transfer { .. } => "transfer",
            Operation::PayBill { .. } => "pay_bill",
            Operation::IssueCreditCard { .. } => "issue_credit_card",
            Operation::IssueDebitCard => "issue_debit_card",
            Operation::PurchaseCredit { .. } => "purchase_credit",
            Operation::PurchaseDebit { .. } => "purchase_debit",
            Operation::PayInvoice => "pay_invoice",
            Operation::Invest { .. } => "invest",
            Operation::Redeem { .. } => "redeem",
            Operation::Close => "close",
        }
    }
}

/// A parsed input row: the target account and its operation
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// Account the operation applies to
    pub account: String,
    /// The operation itself
    pub op: Operation,
}
