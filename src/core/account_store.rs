//! Thread-safe account storage
//!
//! This module provides the `AccountStore`, the durable-state boundary for
//! account aggregates. Accounts are held in a `DashMap` keyed by account
//! identifier, each behind its own mutex: the mutex is the aggregate's
//! serialization boundary, held for the duration of any read-modify-write
//! and released on every exit path.
//!
//! # Locking discipline
//!
//! - Single-account operations go through [`AccountStore::with_account`].
//! - Two-account operations (transfers) go through
//!   [`AccountStore::with_pair`], which always acquires the two mutexes in
//!   ascending identifier order regardless of source/destination role, so
//!   concurrent opposite-direction transfers cannot deadlock.

use crate::types::{Account, LedgerError};
use dashmap::DashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Keyed store of account aggregates, one mutex per aggregate
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: DashMap<String, Arc<Mutex<Account>>>,
}

impl AccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        AccountStore {
            accounts: DashMap::new(),
        }
    }

    /// Insert a newly opened account
    ///
    /// # Errors
    ///
    /// `DuplicateAccount` if the identifier is already in use.
    pub fn insert(&self, account: Account) -> Result<(), LedgerError> {
        let id = account.id.clone();
        let mut inserted = false;
        self.accounts.entry(id.clone()).or_insert_with(|| {
            inserted = true;
            Arc::new(Mutex::new(account))
        });
        if inserted {
            Ok(())
        } else {
            Err(LedgerError::DuplicateAccount { account: id })
        }
    }

    /// Whether an account exists for the identifier
    pub fn exists(&self, id: &str) -> bool {
        self.accounts.contains_key(id)
    }

    /// Run a closure with exclusive access to one account
    ///
    /// The aggregate mutex is held for the closure's duration and released
    /// afterwards, on success and on failure alike.
    pub fn with_account<T, F>(&self, id: &str, f: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut Account) -> Result<T, LedgerError>,
    {
        let handle = self.resolve(id)?;
        let mut account = lock(&handle)?;
        f(&mut account)
    }

    /// Run a closure with exclusive access to two distinct accounts
    ///
    /// The closure receives the accounts in caller order (`first`,
    /// `second`), but the mutexes are always acquired in ascending
    /// identifier order.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` for either missing identifier
    /// - `Internal` if the identifiers are equal (callers handle the
    ///   single-aggregate case themselves)
    pub fn with_pair<T, F>(&self, first: &str, second: &str, f: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut Account, &mut Account) -> Result<T, LedgerError>,
    {
        if first == second {
            return Err(LedgerError::internal(
                "with_pair requires two distinct accounts",
            ));
        }
        let first_handle = self.resolve(first)?;
        let second_handle = self.resolve(second)?;

        // Fixed total order: lower identifier locks first
        let (mut first_guard, mut second_guard) = if first < second {
            let a = lock(&first_handle)?;
            let b = lock(&second_handle)?;
            (a, b)
        } else {
            let b = lock(&second_handle)?;
            let a = lock(&first_handle)?;
            (a, b)
        };
        f(&mut first_guard, &mut second_guard)
    }

    /// Clone the current state of one account
    pub fn snapshot(&self, id: &str) -> Result<Account, LedgerError> {
        self.with_account(id, |account| Ok(account.clone()))
    }

    /// Clone all accounts, sorted by account number for deterministic
    /// output
    pub fn snapshot_all(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .filter_map(|entry| entry.value().lock().ok().map(|a| a.clone()))
            .collect();
        accounts.sort_by_key(|account| account.number);
        accounts
    }

    fn resolve(&self, id: &str) -> Result<Arc<Mutex<Account>>, LedgerError> {
        self.accounts
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| LedgerError::account_not_found(id))
    }
}

fn lock(handle: &Mutex<Account>) -> Result<MutexGuard<'_, Account>, LedgerError> {
    handle
        .lock()
        .map_err(|_| LedgerError::internal("account mutex poisoned"))
}
