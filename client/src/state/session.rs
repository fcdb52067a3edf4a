//! Auth-session state for the signed-in administrator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root as a `RwSignal<AppSession>` context. The auth
//! gate, the route guard, and the login/logout flows read and write it; every
//! page reads the base URL from it.
//!
//! DESIGN
//! ======
//! Token and details live together in [`AuthCredentials`], so they can only be
//! set or cleared as a unit. Persistence goes through a [`SessionStorage`]
//! adapter; the base URL is configuration and is never written to storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{BrowserStorage, SessionStorage};

/// Session store used by the running app.
pub type AppSession = SessionStore<BrowserStorage>;

/// Token plus the account details the backend returned with it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthCredentials {
    pub token: String,
    #[serde(default)]
    pub details: serde_json::Value,
}

/// Shape of the persisted `auth-store` record.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedAuth {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    details: Option<serde_json::Value>,
}

impl PersistedAuth {
    fn into_credentials(self) -> Option<AuthCredentials> {
        let token = self.token.filter(|t| !t.trim().is_empty())?;
        Some(AuthCredentials { token, details: self.details.unwrap_or(serde_json::Value::Null) })
    }
}

/// Current session snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    credentials: Option<AuthCredentials>,
    base_url: String,
}

impl Session {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { credentials: None, base_url: base_url.into() }
    }

    /// The auth token, if signed in.
    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    /// The account details, if signed in.
    pub fn details(&self) -> Option<&serde_json::Value> {
        self.credentials.as_ref().map(|c| &c.details)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// Session plus the adapter it persists through.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    session: Session,
    storage: S,
    key: String,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Restore the session persisted under `key`, or start signed out.
    pub fn open(storage: S, key: &str, base_url: impl Into<String>) -> Self {
        let mut session = Session::new(base_url);
        session.credentials = storage.read(key).and_then(|raw| match serde_json::from_str::<PersistedAuth>(&raw) {
            Ok(persisted) => persisted.into_credentials(),
            Err(e) => {
                log::warn!("ignoring unreadable {key} record: {e}");
                None
            }
        });
        Self { session, storage, key: key.to_owned() }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn details(&self) -> Option<&serde_json::Value> {
        self.session.details()
    }

    pub fn base_url(&self) -> &str {
        self.session.base_url()
    }

    /// Record new credentials and persist them.
    pub fn set_auth(&mut self, credentials: AuthCredentials) {
        self.session.credentials = Some(credentials);
        self.persist();
    }

    /// Forget the credentials and persist the signed-out record.
    pub fn clear_auth(&mut self) {
        self.session.credentials = None;
        self.persist();
    }

    fn persist(&self) {
        let record = PersistedAuth {
            token: self.session.credentials.as_ref().map(|c| c.token.clone()),
            details: self.session.credentials.as_ref().map(|c| c.details.clone()),
        };
        match serde_json::to_string(&record) {
            Ok(raw) => self.storage.write(&self.key, &raw),
            Err(e) => log::error!("failed to encode {} record: {e}", self.key),
        }
    }
}
