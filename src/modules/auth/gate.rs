use std::collections::HashMap;
use thiserror::Error;

use super::password::{validate_password, PasswordError};
use super::store::{AccountRecord, AccountStore, StoreError};
use crate::modules::encryption::Credential;
use crate::modules::utils::logging::log_auth_event;
use crate::{MAX_LOGIN_ATTEMPTS, PASSWORD_HASH_ITERATIONS};

/// Errors surfaced by sign-up and login
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username cannot be empty")]
    EmptyUsername,
    #[error("Username already exists.")]
    UsernameTaken(String),
    #[error(transparent)]
    WeakPassword(#[from] PasswordError),
    #[error("Your account is temporarily locked due to multiple failed attempts!")]
    Locked(String),
    #[error("Invalid credentials!")]
    InvalidCredentials,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Credential checks plus the per-username failed-attempt counters.
///
/// Counters live in memory only. A username is locked once its counter
/// reaches `max_attempts` and stays locked until the counter is reset.
#[derive(Debug)]
pub struct AuthGate {
    failed_attempts: HashMap<String, u32>,
    max_attempts: u32,
    hash_iterations: u32,
}

impl Default for AuthGate {
    fn default() -> Self {
        Self::new(MAX_LOGIN_ATTEMPTS, PASSWORD_HASH_ITERATIONS)
    }
}

impl AuthGate {
    pub fn new(max_attempts: u32, hash_iterations: u32) -> Self {
        Self {
            failed_attempts: HashMap::new(),
            max_attempts,
            hash_iterations,
        }
    }

    pub fn is_valid_password(password: &str) -> bool {
        validate_password(password).is_ok()
    }

    /// True iff an account with exactly this username accepts this password
    pub fn is_valid_login(
        &self,
        store: &AccountStore,
        username: &str,
        password: &str,
    ) -> Result<bool, StoreError> {
        Ok(store
            .find_by_username(username)?
            .map_or(false, |record| record.credential.verify(password)))
    }

    pub fn is_locked(&self, username: &str) -> bool {
        self.failed_attempts(username) >= self.max_attempts
    }

    pub fn failed_attempts(&self, username: &str) -> u32 {
        self.failed_attempts.get(username).copied().unwrap_or(0)
    }

    pub fn record_failure(&mut self, username: &str) {
        let count = self
            .failed_attempts
            .entry(username.to_string())
            .or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Drop the username's counter entirely
    pub fn reset_attempts(&mut self, username: &str) {
        self.failed_attempts.remove(username);
    }

    /// Register a new account after checking the username and password format
    pub fn sign_up(
        &self,
        store: &AccountStore,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<AccountRecord, AuthError> {
        if username.trim().is_empty() {
            return Err(AuthError::EmptyUsername);
        }
        if store.exists(username)? {
            log_auth_event("signup", username, false, Some("username taken"));
            return Err(AuthError::UsernameTaken(username.to_string()));
        }
        validate_password(password)?;

        let record = AccountRecord::new(
            username.to_string(),
            Credential::derive(password, self.hash_iterations),
            email.to_string(),
        );
        store.insert(record.clone()).map_err(|e| match e {
            StoreError::DuplicateUsername(name) => AuthError::UsernameTaken(name),
            other => AuthError::Store(other),
        })?;

        log_auth_event("signup", username, true, None);
        Ok(record)
    }

    /// Full login attempt.
    ///
    /// A locked username is refused before the password is looked at. A wrong
    /// password or unknown username counts as a failure; success clears the
    /// counter. Store errors propagate without touching the counter.
    pub fn login(
        &mut self,
        store: &AccountStore,
        username: &str,
        password: &str,
    ) -> Result<AccountRecord, AuthError> {
        if self.is_locked(username) {
            log_auth_event("login", username, false, Some("account locked"));
            return Err(AuthError::Locked(username.to_string()));
        }

        match store.find_by_username(username)? {
            Some(record) if record.credential.verify(password) => {
                self.reset_attempts(username);
                log_auth_event("login", username, true, None);
                Ok(record)
            }
            _ => {
                self.record_failure(username);
                let details = format!("failed attempt {}", self.failed_attempts(username));
                log_auth_event("login", username, false, Some(&details));
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
