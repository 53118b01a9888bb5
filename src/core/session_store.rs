//! Ephemeral login lockout state
//!
//! Lockout state lives apart from the durable account aggregate: it is
//! per-account, in-memory, and intentionally not persisted. Three
//! consecutive failed credential checks lock the account for five minutes.
//! Attempts made while locked fail but do not extend the lock; an attempt
//! after expiry is treated as a fresh unlocked state with zero failures.
//!
//! The store is keyed by account identifier and joined with the durable
//! aggregate at login time.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

/// Failures that trigger a lock
pub const MAX_LOGIN_FAILURES: u32 = 3;

/// How long a lock lasts
pub fn lockout_duration() -> Duration {
    Duration::minutes(5)
}

/// Per-account login attempt state
#[derive(Debug, Clone, Default, PartialEq)]
struct LoginState {
    failures: u32,
    locked_until: Option<DateTime<Utc>>,
}

/// Keyed store of ephemeral login lockout state
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, LoginState>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        SessionStore {
            sessions: DashMap::new(),
        }
    }

    /// If the account is currently locked, the lock expiry
    ///
    /// An expired lock is cleared on the way through: the state becomes
    /// unlocked with zero failures.
    pub fn locked_until(&self, id: &str) -> Option<DateTime<Utc>> {
        self.locked_until_at(id, Utc::now())
    }

    /// Record the outcome of a credential check
    ///
    /// A success resets the failure count. A failure increments it; the
    /// failure that reaches the threshold locks the account and returns
    /// the lock expiry.
    pub fn record_attempt(&self, id: &str, success: bool) -> Option<DateTime<Utc>> {
        self.record_attempt_at(id, success, Utc::now())
    }

    /// Administrative unlock: back to unlocked with zero failures
    pub fn unlock(&self, id: &str) {
        self.sessions.remove(id);
    }

    /// Current consecutive failure count (zero while locked)
    pub fn failures(&self, id: &str) -> u32 {
        self.sessions
            .get(id)
            .map(|state| state.failures)
            .unwrap_or(0)
    }

    fn locked_until_at(&self, id: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let mut state = self.sessions.get_mut(id)?;
        match state.locked_until {
            Some(until) if now < until => Some(until),
            Some(_) => {
                // Lock expired: implicit reset to unlocked, zero failures
                *state = LoginState::default();
                None
            }
            None => None,
        }
    }

    fn record_attempt_at(
        &self,
        id: &str,
        success: bool,
        now: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        let mut state = self
            .sessions
            .entry(id.to_string())
            .or_insert_with(LoginState::default);
        if success {
            *state = LoginState::default();
            return None;
        }
        state.failures += 1;
        if state.failures >= MAX_LOGIN_FAILURES {
            // Failure count is not observed while locked
            state.failures = 0;
            let until = now + lockout_duration();
            state.locked_until = Some(until);
            return Some(until);
        }
        None
    }
}
