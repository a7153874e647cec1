//! Session state with write-through persistence.

use std::sync::Mutex;

use photocomp_storage::{SessionVault, StorageError};
use photocomp_types::User;
use tracing::{debug, info, warn};

use crate::SessionResult;

/// Snapshot of the session handed to readers and observers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub token: Option<String>,
    pub initialized: bool,
}

impl SessionSnapshot {
    /// Whether the in-memory session carries a token.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Callback type for session change notifications.
pub type SessionCallback = Box<dyn Fn(&SessionSnapshot) + Send + Sync>;

struct SessionState {
    user: Option<User>,
    token: Option<String>,
    initialized: bool,
}

/// Authoritative session state for the client.
///
/// Login and registration populate the store via [`set_token`] and
/// [`set_user`]; the store itself performs no HTTP. Every committed change
/// reaches durable storage before the mutating call returns, and observers
/// are notified with the new snapshot.
///
/// [`set_token`]: SessionStore::set_token
/// [`set_user`]: SessionStore::set_user
pub struct SessionStore {
    vault: SessionVault,
    state: Mutex<SessionState>,
    /// Callbacks for session change notifications.
    listeners: Mutex<Vec<SessionCallback>>,
}

impl SessionStore {
    /// Create a new store over the given vault. The session stays empty
    /// until [`initialize`](SessionStore::initialize) runs.
    pub fn new(vault: SessionVault) -> Self {
        Self {
            vault,
            state: Mutex::new(SessionState {
                user: None,
                token: None,
                initialized: false,
            }),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Rehydrate the session from durable storage.
    ///
    /// Runs once per process; repeated calls return immediately without
    /// touching storage, so completion is signalled to observers exactly
    /// once. A malformed persisted user record means the session is
    /// corrupt: both durable keys are cleared, the session starts empty,
    /// and no parse error escapes.
    pub fn initialize(&self) -> SessionResult<()> {
        {
            let state = self.state.lock().unwrap();
            if state.initialized {
                debug!("Session already initialized");
                return Ok(());
            }
        }

        let mut token = self.vault.token()?;
        let user = match self.vault.user() {
            Ok(user) => user,
            Err(StorageError::Encoding(e)) => {
                warn!("Discarding corrupt persisted session: {}", e);
                self.vault.clear_session()?;
                token = None;
                None
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot = {
            let mut state = self.state.lock().unwrap();
            state.user = user;
            state.token = token;
            state.initialized = true;
            Self::snapshot_of(&state)
        };

        debug!(
            authenticated = snapshot.is_authenticated(),
            "Session initialized"
        );
        self.notify(&snapshot);
        Ok(())
    }

    /// Replace the signed-in user, writing through to storage before
    /// returning. `None` deletes the persisted record.
    pub fn set_user(&self, user: Option<User>) -> SessionResult<()> {
        match &user {
            Some(user) => self.vault.store_user(user)?,
            None => self.vault.clear_user()?,
        }

        let snapshot = {
            let mut state = self.state.lock().unwrap();
            state.user = user;
            Self::snapshot_of(&state)
        };
        self.notify(&snapshot);
        Ok(())
    }

    /// Replace the bearer token, writing through to storage before
    /// returning. `None` deletes the persisted token.
    pub fn set_token(&self, token: Option<String>) -> SessionResult<()> {
        match &token {
            Some(token) => self.vault.store_token(token)?,
            None => self.vault.clear_token()?,
        }

        let snapshot = {
            let mut state = self.state.lock().unwrap();
            state.token = token;
            Self::snapshot_of(&state)
        };
        self.notify(&snapshot);
        Ok(())
    }

    /// Clear the session everywhere.
    ///
    /// Both durable keys are deleted before the call returns and observers
    /// see the cleared state.
    pub fn logout(&self) -> SessionResult<()> {
        self.vault.clear_session()?;

        let snapshot = {
            let mut state = self.state.lock().unwrap();
            state.user = None;
            state.token = None;
            Self::snapshot_of(&state)
        };

        info!("Logged out");
        self.notify(&snapshot);
        Ok(())
    }

    /// Current session snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        Self::snapshot_of(&self.state.lock().unwrap())
    }

    /// Signed-in user, if any.
    pub fn user(&self) -> Option<User> {
        self.state.lock().unwrap().user.clone()
    }

    /// Bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.state.lock().unwrap().token.clone()
    }

    /// Whether rehydration has run.
    pub fn is_initialized(&self) -> bool {
        self.state.lock().unwrap().initialized
    }

    /// Uncached probe of the durable `token` key.
    ///
    /// The access gate trusts a persisted token even when the in-memory
    /// session has none, so this reads storage directly.
    pub fn has_persisted_token(&self) -> bool {
        match self.vault.has_token() {
            Ok(present) => present,
            Err(e) => {
                debug!("Persisted token probe failed: {}", e);
                false
            }
        }
    }

    /// Register a callback for session change notifications.
    pub fn subscribe(&self, callback: SessionCallback) {
        self.listeners.lock().unwrap().push(callback);
    }

    fn snapshot_of(state: &SessionState) -> SessionSnapshot {
        SessionSnapshot {
            user: state.user.clone(),
            token: state.token.clone(),
            initialized: state.initialized,
        }
    }

    fn notify(&self, snapshot: &SessionSnapshot) {
        let listeners = self.listeners.lock().unwrap();
        for callback in listeners.iter() {
            callback(snapshot);
        }
    }
}
