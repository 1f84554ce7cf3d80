//! Session guard
//!
//! Decides whether the current visitor may see protected pages. The
//! persisted token and user id are authoritative; the guard keeps a single
//! in-memory mirror of them ([`AuthPhase`]) that is refreshed by
//! [`SessionGuard::check_auth`] and updated by login/logout.
//!
//! A stored token is trusted until logout unless a [`SessionPolicy`] with a
//! maximum age is configured.

use chrono::{DateTime, Duration, Utc};
use leptos::logging::warn;
use serde::{Deserialize, Serialize};

use super::storage::{KeyValueStore, StorageError};

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "access_token";
/// Storage key of the user id
pub const USER_ID_KEY: &str = "user_id";
/// Storage key of the login time, used only when sessions expire
pub const ISSUED_AT_KEY: &str = "session_issued_at";

/// Where unauthenticated visitors are sent
pub const LOGIN_PATH: &str = "/login";

/// Credentials of a logged-in visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
}

/// Authentication state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthPhase {
    /// Initial state, storage has not been checked yet
    #[default]
    Loading,
    /// A session was found in storage or created by login
    Authenticated(Session),
    /// No usable session
    Unauthenticated,
}

impl AuthPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, AuthPhase::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthPhase::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthPhase::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

/// Session lifetime policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionPolicy {
    /// `None` keeps sessions until explicit logout
    pub max_age: Option<Duration>,
}

impl SessionPolicy {
    pub fn never_expires() -> Self {
        Self { max_age: None }
    }

    pub fn expires_after(max_age: Duration) -> Self {
        Self {
            max_age: Some(max_age),
        }
    }

    /// Whether a session issued at `issued_at` is stale at `now`.
    ///
    /// With a maximum age configured, a session without a recorded login
    /// time counts as expired.
    pub fn is_expired(&self, issued_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        match (self.max_age, issued_at) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(max_age), Some(issued_at)) => now - issued_at >= max_age,
        }
    }
}

/// Navigation side effect used by logout and the auth gate
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// Auth gate backed by persistent storage
#[derive(Debug, Clone)]
pub struct SessionGuard<S> {
    storage: S,
    policy: SessionPolicy,
    phase: AuthPhase,
}

impl<S: KeyValueStore> SessionGuard<S> {
    /// Create a guard in the [`AuthPhase::Loading`] phase
    pub fn new(storage: S, policy: SessionPolicy) -> Self {
        Self {
            storage,
            policy,
            phase: AuthPhase::Loading,
        }
    }

    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase.is_authenticated()
    }

    pub fn session(&self) -> Option<&Session> {
        self.phase.session()
    }

    /// Re-derive the in-memory state from storage.
    ///
    /// Never fails: an unreadable or empty store means "unauthenticated".
    pub fn check_auth(&mut self) -> &AuthPhase {
        self.check_auth_at(Utc::now())
    }

    pub fn check_auth_at(&mut self, now: DateTime<Utc>) -> &AuthPhase {
        self.phase = match self.stored_session() {
            Some(session) if self.policy.is_expired(self.stored_issued_at(), now) => {
                warn!("Stored session for {} has expired", session.user_id);
                self.clear_storage();
                AuthPhase::Unauthenticated
            }
            Some(session) => AuthPhase::Authenticated(session),
            None => AuthPhase::Unauthenticated,
        };
        &self.phase
    }

    /// Persist the credentials returned by the backend and mark the visitor
    /// as authenticated.
    ///
    /// The in-memory state is updated even if storage rejects the write; the
    /// error tells the caller the session will not survive a reload.
    pub fn login(&mut self, token: &str, user_id: &str) -> Result<(), StorageError> {
        self.login_at(token, user_id, Utc::now())
    }

    pub fn login_at(
        &mut self,
        token: &str,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let persisted = self
            .storage
            .set(TOKEN_KEY, token)
            .and_then(|_| self.storage.set(USER_ID_KEY, user_id))
            .and_then(|_| self.storage.set(ISSUED_AT_KEY, &now.to_rfc3339()));

        self.phase = AuthPhase::Authenticated(Session {
            token: token.to_string(),
            user_id: user_id.to_string(),
        });

        persisted
    }

    /// Drop the session and send the visitor to the login page
    pub fn logout<N: Navigator + ?Sized>(&mut self, navigator: &N) {
        self.clear_storage();
        self.phase = AuthPhase::Unauthenticated;
        navigator.navigate(LOGIN_PATH);
    }

    /// Gate for protected pages.
    ///
    /// While loading this neither redirects nor denies. Once loading is
    /// done an unauthenticated visitor is redirected and `false` returned.
    pub fn require_auth<N: Navigator + ?Sized>(&self, navigator: &N) -> bool {
        match self.phase {
            AuthPhase::Loading | AuthPhase::Authenticated(_) => true,
            AuthPhase::Unauthenticated => {
                navigator.navigate(LOGIN_PATH);
                false
            }
        }
    }

    /// Persisted token, for authorizing backend calls
    pub fn get_token(&self) -> Option<String> {
        self.read_non_empty(TOKEN_KEY)
    }

    fn stored_session(&self) -> Option<Session> {
        let token = self.read_non_empty(TOKEN_KEY)?;
        let user_id = self.read_non_empty(USER_ID_KEY)?;
        Some(Session { token, user_id })
    }

    fn stored_issued_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.read_non_empty(ISSUED_AT_KEY)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }

    fn read_non_empty(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                warn!("Session storage read failed: {}", e);
                None
            }
        }
    }

    fn clear_storage(&self) {
        for key in [TOKEN_KEY, USER_ID_KEY, ISSUED_AT_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!("Session storage cleanup failed: {}", e);
            }
        }
    }
}
