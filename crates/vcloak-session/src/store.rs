//! Session store
//!
//! Owns the three persisted session entries. Clones share the same backing
//! store, so one `SessionStore` per origin is enough for the whole client.
//!
//! There is no locking across keys: two concurrent logins race and the last
//! write of each key wins.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use vcloak_storage::KeyValueStore;

use crate::error::SessionError;
use crate::user::User;
use crate::Result;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_KEY: &str = "user";

/// Point-in-time view of all session fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn access_token(&self) -> Result<Option<String>> {
        Ok(self.storage.get(ACCESS_TOKEN_KEY)?)
    }

    pub fn set_access_token(&self, token: &str) -> Result<()> {
        self.storage.set(ACCESS_TOKEN_KEY, token)?;
        Ok(())
    }

    pub fn refresh_token(&self) -> Result<Option<String>> {
        Ok(self.storage.get(REFRESH_TOKEN_KEY)?)
    }

    /// Overwrite the refresh token. `None` removes the stored entry.
    pub fn set_refresh_token(&self, token: Option<&str>) -> Result<()> {
        match token {
            Some(token) => self.storage.set(REFRESH_TOKEN_KEY, token)?,
            None => self.storage.remove(REFRESH_TOKEN_KEY)?,
        }
        Ok(())
    }

    /// Cached user record. Fails with `DataCorruption` if the stored JSON
    /// does not describe a complete user.
    pub fn user(&self) -> Result<Option<User>> {
        let Some(raw) = self.storage.get(USER_KEY)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| SessionError::DataCorruption {
                key: USER_KEY,
                source,
            })
    }

    pub fn set_user(&self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.storage.set(USER_KEY, &json)?;
        Ok(())
    }

    pub fn remove_user(&self) -> Result<()> {
        self.storage.remove(USER_KEY)?;
        Ok(())
    }

    /// Remove every session entry.
    ///
    /// All three removals are attempted. The access token goes first so
    /// that a failure further down still leaves the store unauthenticated.
    /// The first error encountered is returned.
    pub fn clear(&self) -> Result<()> {
        let mut first_error = None;

        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::error!(key = %key, error = %e, "Failed to remove session entry");
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e.into()),
            None => {
                tracing::info!("Session cleared");
                Ok(())
            }
        }
    }

    /// True iff a non-empty access token is stored. Read failures count as
    /// unauthenticated.
    pub fn is_authenticated(&self) -> bool {
        match self.access_token() {
            Ok(token) => token.is_some_and(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read access token");
                false
            }
        }
    }

    pub fn snapshot(&self) -> Result<Session> {
        Ok(Session {
            access_token: self.access_token()?,
            refresh_token: self.refresh_token()?,
            user: self.user()?,
        })
    }
}
