//! Session state shared by the API client and the permission guard
//!
//! A [`Session`] caches the token, role and username in memory and writes
//! every change through to a [`SessionStorage`]. Clones share the same state,
//! so a 401 seen by one request is visible to every holder.

mod storage;

pub use storage::{FileStorage, MemoryStorage, SessionStorage};

use crate::sdk::errors::Result;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "adminToken";
/// Storage key of the operator role
pub const ROLE_KEY: &str = "adminRole";
/// Storage key of the operator username
pub const USERNAME_KEY: &str = "adminUsername";

/// Snapshot of the session fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub role: Option<String>,
    pub username: Option<String>,
}

struct SessionInner {
    storage: Arc<dyn SessionStorage>,
    state: RwLock<SessionState>,
}

/// Shared handle to the current session
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("Session")
            .field("authenticated", &state.token.is_some())
            .field("role", &state.role)
            .field("username", &state.username)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Session {
    /// Load the session persisted in `storage`
    pub fn open(storage: Arc<dyn SessionStorage>) -> Self {
        let state = SessionState {
            token: non_empty(storage.get(TOKEN_KEY)),
            role: non_empty(storage.get(ROLE_KEY)),
            username: non_empty(storage.get(USERNAME_KEY)),
        };
        debug!(
            authenticated = state.token.is_some(),
            "Session loaded from storage"
        );

        Self {
            inner: Arc::new(SessionInner {
                storage,
                state: RwLock::new(state),
            }),
        }
    }

    /// Fresh session over [`MemoryStorage`]
    pub fn in_memory() -> Self {
        Self::open(Arc::new(MemoryStorage::new()))
    }

    /// Bearer token
    pub fn token(&self) -> Option<String> {
        self.inner.state.read().token.clone()
    }

    /// Operator role as stored, e.g. `MANAGER`
    pub fn role(&self) -> Option<String> {
        self.inner.state.read().role.clone()
    }

    pub fn username(&self) -> Option<String> {
        self.inner.state.read().username.clone()
    }

    /// All three fields at once
    pub fn snapshot(&self) -> SessionState {
        self.inner.state.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.read().token.is_some()
    }

    /// Store the token, or remove it when `None` or empty.
    ///
    /// Memory changes only after the store accepted the write.
    pub fn set_token(&self, token: Option<&str>) -> Result<()> {
        let token = token.filter(|t| !t.is_empty());
        match token {
            Some(token) => self.inner.storage.set(TOKEN_KEY, token)?,
            None => self.inner.storage.remove(TOKEN_KEY)?,
        }
        self.inner.state.write().token = token.map(str::to_string);
        Ok(())
    }

    /// Record who is logged in. Role and username are stored together or not
    /// at all.
    pub fn set_identity(&self, role: &str, username: &str) -> Result<()> {
        self.inner.storage.set(ROLE_KEY, role)?;
        if let Err(e) = self.inner.storage.set(USERNAME_KEY, username) {
            if let Err(undo) = self.inner.storage.remove(ROLE_KEY) {
                warn!("Failed to roll back stored role: {}", undo);
            }
            return Err(e);
        }

        let mut state = self.inner.state.write();
        state.role = Some(role.to_string());
        state.username = Some(username.to_string());
        Ok(())
    }

    /// Drop token, role and username.
    ///
    /// Memory is cleared even if the store fails; the first storage error is
    /// returned after every key has been attempted.
    pub fn clear(&self) -> Result<()> {
        *self.inner.state.write() = SessionState::default();

        let results = [TOKEN_KEY, ROLE_KEY, USERNAME_KEY].map(|key| self.inner.storage.remove(key));
        debug!("Session cleared");
        results.into_iter().collect::<Result<Vec<()>>>().map(|_| ())
    }
}
