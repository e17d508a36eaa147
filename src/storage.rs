//! Local persistence of the signed-in user record
//!
//! Only one record is ever stored: the identity of the signed-in user, written
//! as JSON to `<data_dir>/<namespace>.json`. It is loaded at startup, written on
//! sign-in and removed on sign-out.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::StorageSettings;
use crate::error::AppResult;
use crate::models::UserAccount;

/// File-backed store for the single user record
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(data_dir: impl AsRef<Path>, namespace: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{namespace}.json")),
        }
    }

    pub fn from_settings(settings: &StorageSettings) -> Self {
        Self::new(&settings.data_dir, &settings.namespace)
    }

    /// Location of the record on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved user, if any
    pub fn load(&self) -> AppResult<Option<UserAccount>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved user record");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let account = serde_json::from_str(&raw)?;
        debug!(path = %self.path.display(), "Loaded saved user record");
        Ok(Some(account))
    }

    /// Persist the user, replacing any previous record
    pub fn save(&self, account: &UserAccount) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(account)?;
        fs::write(&self.path, json)?;

        info!(path = %self.path.display(), "User record saved");
        Ok(())
    }

    /// Remove the saved user; a missing record is not an error
    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "User record removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
