use super::store::{AccountRecord, AccountStore, StoreError};
use crate::modules::utils::logging::log_auth_event;

/// Result of ending a session
#[derive(Debug)]
pub enum LogoutOutcome {
    NoActiveSession,
    Saved(String),
    SaveFailed { username: String, error: StoreError },
}

/// Holder for the one currently authenticated account
#[derive(Debug, Default)]
pub struct Session {
    current: Option<AccountRecord>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active account. The previous one, if any, is dropped
    /// without being persisted.
    pub fn set_current_user(&mut self, record: AccountRecord) {
        self.current = Some(record);
    }

    pub fn current_user(&self) -> Option<&AccountRecord> {
        self.current.as_ref()
    }

    pub fn current_user_mut(&mut self) -> Option<&mut AccountRecord> {
        self.current.as_mut()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Persist the in-memory account and clear the session.
    ///
    /// The session is cleared even when the write fails; there is no retry.
    pub fn logout(&mut self, store: &AccountStore) -> LogoutOutcome {
        let record = match self.current.take() {
            Some(record) => record,
            None => return LogoutOutcome::NoActiveSession,
        };

        match store.update(&record) {
            Ok(()) => {
                log::info!("User data saved successfully.");
                log_auth_event("logout", &record.username, true, None);
                LogoutOutcome::Saved(record.username)
            }
            Err(error) => {
                log::error!("Error saving user data: {}", error);
                log_auth_event("logout", &record.username, false, Some(&error.to_string()));
                LogoutOutcome::SaveFailed {
                    username: record.username,
                    error,
                }
            }
        }
    }
}
