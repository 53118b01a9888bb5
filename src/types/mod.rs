//! Core domain types for the banking ledger
//!
//! This module contains the account aggregate and its variants, the
//! movement log entry, card/invoice types, and the error taxonomy.

pub mod account;
pub mod card;
pub mod error;
pub mod movement;
pub mod operation;

pub use account::{Account, AccountId, AccountKind, AccountVariant};
pub use card::{CreditCard, DebitCard, Invoice};
pub use error::LedgerError;
pub use movement::Movement;
pub use operation::{Operation, OperationRecord};
