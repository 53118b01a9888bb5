//! Ledger movement types
//!
//! A movement is a single immutable entry in an account's (or invoice's)
//! ledger: a free-text kind, a signed amount, and the moment it happened.
//! Movements are only ever appended; append order is chronological order.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Immutable ledger entry
///
/// Deposits carry positive amounts, withdrawals and debits negative ones.
/// Replaying the log reproduces the balance, with two exceptions that do
/// not contribute: the zero-amount closure marker and the directional
/// transfer entries that duplicate the generic withdraw/deposit movements
/// for audit purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    /// Free-text category/description of the entry (e.g. "deposit",
    /// "bill payment 123", "transfer sent to <id>")
    pub kind: String,

    /// Signed amount of the entry
    pub amount: Decimal,

    /// Moment the entry was recorded
    pub timestamp: DateTime<Utc>,
}

impl Movement {
    /// Create a movement stamped with the current time
    pub fn of(kind: impl Into<String>, amount: Decimal) -> Self {
        Movement {
            kind: kind.into(),
            amount,
            timestamp: Utc::now(),
        }
    }
}
