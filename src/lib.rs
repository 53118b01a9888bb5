//! Banking Ledger Library
//! # Overview
//!
//! This library provides an in-memory retail banking ledger with checking
//! and savings accounts, cards, and a streaming CSV operation interface.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Movement, cards, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Operation orchestration over the stores
//!   - [`core::account_store`] - Thread-safe account storage with per-aggregate locking
//!   - [`core::session_store`] - Ephemeral login lockout state
//!   - [`core::relay`] - Asynchronous transfer relay
//! - [`io`] - CSV parsing/output and receipt rendering
//!
//! # Account Variants
//!
//! - **Checking**: may overdraw down to a fixed overdraft limit; can carry
//!   a credit card with a monthly invoice
//! - **Savings**: no overdraft; carries an investment sub-ledger earning a
//!   fixed yield on deposit
//!
//! # Consistency
//!
//! Each account owns an append-only movement log; replaying the generic
//! movements reproduces the current balance. Transfers take both account
//! locks in a fixed order and apply both legs or neither, recording a
//! directional audit entry on each side alongside the generic movements.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{run_relay, LedgerService, TransferRequest};
pub use io::write_accounts_csv;
pub use types::{
    Account, AccountId, AccountKind, AccountVariant, CreditCard, DebitCard, Invoice, LedgerError,
    Movement, Operation, OperationRecord,
};
