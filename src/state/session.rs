//! The persisted "logged in" user record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the login and signup flows, read by the home page greeting and
//! access gate, removed on logout. At most one record exists at a time: the
//! store owns a single named slot.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::util::storage::{KeyValueStore, StorageError};

/// Identity of the current demo user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub name: String,
    pub email: String,
}

impl UserSession {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into() }
    }
}

/// Display name derived from an email address: the text before `@`, or
/// `"User"` when that is empty.
#[must_use]
pub fn fallback_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    if local.is_empty() { "User".to_owned() } else { local.to_owned() }
}

/// Typed access to the session slot of a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn KeyValueStore>,
    key: String,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    /// Serialize and persist `session`, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if serialization or the write fails.
    pub fn save(&self, session: &UserSession) -> Result<(), StorageError> {
        let raw = serde_json::to_string(session).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.backend.set(&self.key, &raw)
    }

    /// Load the stored session. Missing and unparsable records both read as
    /// `None`; an unparsable record is logged and left in place.
    #[must_use]
    pub fn load(&self) -> Option<UserSession> {
        let raw = self.backend.get(&self.key)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("ignoring unparsable session under {:?}: {e}", self.key);
                None
            }
        }
    }

    /// Remove the stored session. Safe to call when none exists.
    pub fn clear(&self) {
        self.backend.delete(&self.key);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("key", &self.key).finish_non_exhaustive()
    }
}
