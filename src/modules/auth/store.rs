use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::modules::encryption::Credential;
use crate::modules::portfolio::model::{Asset, PortfolioError};
use crate::modules::utils::logging::log_data_operation;

/// Errors raised by the account store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read account store {}: {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },
    #[error("Account store {} is corrupt: {}", .path.display(), .source)]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to write account store {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },
    #[error("User not found in storage: {0}")]
    NotFound(String),
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),
}

/// A registered account: identity, credential, contact and holdings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccountRecord {
    pub username: String,
    pub credential: Credential,
    pub email: String,
    #[serde(default)]
    holdings: Vec<Asset>,
}

impl AccountRecord {
    pub fn new(username: String, credential: Credential, email: String) -> Self {
        Self {
            username,
            credential,
            email,
            holdings: Vec::new(),
        }
    }

    /// Append a holding; duplicate names are allowed
    pub fn add_asset(&mut self, asset: Asset) {
        self.holdings.push(asset);
    }

    /// Holdings in insertion order
    pub fn assets(&self) -> &[Asset] {
        &self.holdings
    }

    pub fn remove_asset(&mut self, index: usize) -> Result<Asset, PortfolioError> {
        self.check_index(index)?;
        Ok(self.holdings.remove(index))
    }

    /// Replace the holding at `index` with `asset`
    pub fn update_asset(&mut self, index: usize, asset: Asset) -> Result<(), PortfolioError> {
        self.check_index(index)?;
        self.holdings[index] = asset;
        Ok(())
    }

    /// Replace the holding at `index` with one of the same name and a new value
    pub fn replace_asset_value(&mut self, index: usize, value: f64) -> Result<(), PortfolioError> {
        self.check_index(index)?;
        let replacement = self.holdings[index].with_value(value)?;
        self.holdings[index] = replacement;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), PortfolioError> {
        if index >= self.holdings.len() {
            return Err(PortfolioError::SelectionOutOfRange {
                selected: index + 1,
                available: self.holdings.len(),
            });
        }
        Ok(())
    }
}

/// Flat-file store holding every account as one JSON snapshot.
///
/// Every operation reads the whole file and every mutation rewrites it.
/// There is no locking: two processes writing at once lose one update.
#[derive(Debug, Clone)]
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every account; an absent file is an empty store
    pub fn load_all(&self) -> Result<Vec<AccountRecord>, StoreError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        serde_json::from_slice(&data).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Overwrite the file with the full account list.
    ///
    /// The snapshot goes to a temporary file in the same directory and is
    /// renamed over the target, so a crash mid-write leaves the old file intact.
    pub fn save_all(&self, records: &[AccountRecord]) -> Result<(), StoreError> {
        self.write_snapshot(records).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }

    fn write_snapshot(&self, records: &[AccountRecord]) -> io::Result<()> {
        let data = serde_json::to_vec_pretty(records)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut staged = NamedTempFile::new_in(&dir)?;
        staged.write_all(&data)?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    pub fn exists(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self
            .load_all()?
            .iter()
            .any(|record| record.username == username))
    }

    /// First account whose username matches exactly
    pub fn find_by_username(&self, username: &str) -> Result<Option<AccountRecord>, StoreError> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|record| record.username == username))
    }

    /// Append a new account. Usernames are unique: inserting a taken one fails.
    pub fn insert(&self, record: AccountRecord) -> Result<(), StoreError> {
        let mut records = self.load_all()?;
        if records.iter().any(|r| r.username == record.username) {
            return Err(StoreError::DuplicateUsername(record.username));
        }

        let username = record.username.clone();
        records.push(record);
        self.save_all(&records)?;

        log_data_operation("insert", &username, "account", true, None);
        Ok(())
    }

    /// Replace the stored account with the same username
    pub fn update(&self, record: &AccountRecord) -> Result<(), StoreError> {
        let mut records = self.load_all()?;
        let slot = records
            .iter_mut()
            .find(|r| r.username == record.username)
            .ok_or_else(|| StoreError::NotFound(record.username.clone()))?;
        *slot = record.clone();
        self.save_all(&records)?;

        log_data_operation("update", &record.username, "account", true, None);
        Ok(())
    }

    /// Like `update`, but failures are logged rather than returned.
    /// Returns whether the record reached the disk.
    pub fn update_safe(&self, record: &AccountRecord) -> bool {
        match self.update(record) {
            Ok(()) => true,
            Err(e) => {
                log_data_operation(
                    "update",
                    &record.username,
                    "account",
                    false,
                    Some(&e.to_string()),
                );
                log::warn!("Changes may not be saved permanently: {}", e);
                false
            }
        }
    }
}
