//! Error types for the banking ledger
//!
//! This module defines all error types that can occur while executing
//! ledger operations. Every domain-rule violation carries the account it
//! applies to plus enough context for the caller to act on; the display
//! string together with the variant is the contract callers assert against.
//!
//! # Error Categories
//!
//! - **Domain errors**: invalid amounts, closed accounts, insufficient
//!   funds, card/invoice rule violations, lockout. Recoverable: the
//!   operation is rejected and no state changes.
//! - **Infrastructure errors**: I/O failures (receipt rendering, CSV) and
//!   unexpected internal failures. Surfaced distinctly from domain errors.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the banking ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount is zero, negative, or otherwise unusable for the operation
    #[error("invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Account identifier is empty or malformed
    #[error("invalid account id '{account}'")]
    InvalidAccountId {
        /// The rejected identifier
        account: String,
    },

    /// Account is closed; no balance-changing operation may proceed
    #[error("account {account} is closed")]
    AccountClosed {
        /// The closed account
        account: String,
    },

    /// No account exists for the given identifier
    #[error("account {account} not found")]
    AccountNotFound {
        /// The missing identifier
        account: String,
    },

    /// Withdrawal/debit exceeds what the account variant allows
    ///
    /// For checking accounts `available` already includes the overdraft
    /// headroom and the message names the overdraft limit.
    #[error("insufficient funds for account {account}: available {available}, requested {requested}{}",
        if *overdraft { " (overdraft limit exceeded)" } else { "" })]
    InsufficientFunds {
        /// Account that lacked funds
        account: String,
        /// Funds the variant allows to be withdrawn
        available: Decimal,
        /// Requested amount
        requested: Decimal,
        /// Whether an overdraft limit was in play
        overdraft: bool,
    },

    /// Credit-card purchase exceeds the remaining limit
    #[error("credit limit exceeded for account {account}: available {available}, requested {requested}")]
    CreditLimitExceeded {
        /// Account owning the card
        account: String,
        /// Remaining limit on the current invoice
        available: Decimal,
        /// Requested purchase amount
        requested: Decimal,
    },

    /// Invoice payment requested but the current invoice total is zero
    #[error("no outstanding invoice for account {account}")]
    NoOutstandingInvoice {
        /// Account owning the card
        account: String,
    },

    /// Redemption exceeds the invested balance
    #[error("redemption exceeds investment for account {account}: invested {invested}, requested {requested}")]
    InvestmentExceeded {
        /// The savings account
        account: String,
        /// Current investment balance
        invested: Decimal,
        /// Requested redemption amount
        requested: Decimal,
    },

    /// Account opening with an identifier that is already in use
    #[error("account {account} already exists")]
    DuplicateAccount {
        /// The duplicated identifier
        account: String,
    },

    /// Login rejected because the account is temporarily locked
    #[error("account {account} is locked until {until}")]
    AccountLocked {
        /// The locked account
        account: String,
        /// When the lock expires
        until: DateTime<Utc>,
    },

    /// Login rejected because the credential did not match
    #[error("invalid credentials for account {account}")]
    InvalidCredential {
        /// The account the attempt was made against
        account: String,
    },

    /// Operation is not defined for the account's variant
    #[error("operation '{operation}' is not supported for account {account}")]
    UnsupportedAccountVariant {
        /// The account
        account: String,
        /// Operation that was attempted
        operation: String,
    },

    /// A card of this kind has already been issued for the account
    #[error("account {account} already has a {card} card")]
    CardAlreadyIssued {
        /// The account
        account: String,
        /// "credit" or "debit"
        card: String,
    },

    /// Credit-card operation on an account with no credit card
    #[error("account {account} has no credit card")]
    CreditCardNotIssued {
        /// The account
        account: String,
    },

    /// Debit-card operation on an account with no debit card
    #[error("account {account} has no debit card")]
    DebitCardNotIssued {
        /// The account
        account: String,
    },

    /// Closure blocked by a non-zero balance
    #[error("account {account} cannot be closed with {}", if balance.is_sign_negative() { "overdraft in use" } else { "funds available" })]
    CannotCloseWithBalance {
        /// The account
        account: String,
        /// The offending balance
        balance: Decimal,
    },

    /// Closure blocked by an unpaid credit-card invoice
    #[error("account {account} has an outstanding credit card invoice of {total}")]
    CannotCloseWithInvoice {
        /// The account
        account: String,
        /// Outstanding invoice total
        total: Decimal,
    },

    /// Closure blocked by a non-zero savings investment balance
    #[error("account {account} still has {invested} invested in savings")]
    CannotCloseWithInvestment {
        /// The account
        account: String,
        /// Remaining investment balance
        invested: Decimal,
    },

    /// I/O failure (receipt rendering, file access)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the failure
        message: String,
    },

    /// Unexpected internal failure; full detail preserved in the message
    #[error("internal error: {message}")]
    Internal {
        /// Description of the failure
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an AccountClosed error
    pub fn account_closed(account: &str) -> Self {
        LedgerError::AccountClosed {
            account: account.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: &str) -> Self {
        LedgerError::AccountNotFound {
            account: account.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(
        account: &str,
        available: Decimal,
        requested: Decimal,
        overdraft: bool,
    ) -> Self {
        LedgerError::InsufficientFunds {
            account: account.to_string(),
            available,
            requested,
            overdraft,
        }
    }

    /// Create a CreditLimitExceeded error
    pub fn credit_limit_exceeded(account: &str, available: Decimal, requested: Decimal) -> Self {
        LedgerError::CreditLimitExceeded {
            account: account.to_string(),
            available,
            requested,
        }
    }

    /// Create an InvestmentExceeded error
    pub fn investment_exceeded(account: &str, invested: Decimal, requested: Decimal) -> Self {
        LedgerError::InvestmentExceeded {
            account: account.to_string(),
            invested,
            requested,
        }
    }

    /// Create an UnsupportedAccountVariant error
    pub fn unsupported_variant(account: &str, operation: &str) -> Self {
        LedgerError::UnsupportedAccountVariant {
            account: account.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        LedgerError::Internal {
            message: message.into(),
        }
    }

    /// Whether this error is a business-rule rejection
    ///
    /// Domain errors are final: the operation was rejected and retrying
    /// without changing state will fail the same way. Infrastructure
    /// errors (`Io`, `Internal`) may be transient and are the only kinds
    /// the transfer relay propagates for transport-level retry.
    pub fn is_domain(&self) -> bool {
        !matches!(self, LedgerError::Io { .. } | LedgerError::Internal { .. })
    }
}
