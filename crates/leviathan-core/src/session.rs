//! Mock session store.
//!
//! Emulates an authentication backend entirely on the client. Credentials
//! are never verified: every sign-in and sign-up succeeds, and the only
//! state is the JSON session marker under [`SESSION_KEY`].
//!
//! ## Session marker states
//!
//! ```text
//!            sign_in / sign_up
//!   Absent ─────────────────────► Present(user)
//!     ▲                               │  │
//!     │   sign_out / malformed data   │  │ sign_in / sign_up
//!     └───────────────────────────────┘  └──► Present(other user)
//! ```
//!
//! ## Change notification
//!
//! Observers registered with [`SessionStore::subscribe`] are told about every
//! state change. Mutations made through this store notify synchronously.
//! Mutations made in other windows reach this store as storage events and
//! are fed to [`SessionStore::apply_storage_event`], usually by
//! [`SessionStore::listen`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ulid::Ulid;

use crate::error::LeviathanResult;
use crate::storage::{StorageArea, StorageEvent, StorageEvents, SESSION_KEY};
use crate::types::{Role, User};

/// Id given to every password sign-in
pub const DEMO_USER_ID: &str = "demo-user-1";

const DEMO_FULL_NAME: &str = "Demo User";
const DEMO_ORGANIZATION: &str = "Demo Organization";
const NEW_USER_NAME: &str = "New User";

/// Email/password pair submitted at sign-in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Optional profile fields supplied at sign-up
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpData {
    pub full_name: Option<String>,
    pub organization: Option<String>,
    pub role: Option<Role>,
}

/// Sign-up request: credentials plus profile data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub data: SignUpData,
}

/// Token pair handed back by the mock backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthSession {
    fn demo() -> Self {
        Self {
            access_token: "demo-token".to_string(),
            refresh_token: "demo-refresh".to_string(),
        }
    }
}

/// Result of a successful sign-in or sign-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: User,
    pub session: AuthSession,
}

/// Observed session state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Absent,
    Present(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Absent => None,
            SessionState::Present(user) => Some(user),
        }
    }

    pub fn into_user(self) -> Option<User> {
        match self {
            SessionState::Absent => None,
            SessionState::Present(user) => Some(user),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, SessionState::Present(_))
    }
}

impl From<Option<User>> for SessionState {
    fn from(user: Option<User>) -> Self {
        user.map_or(SessionState::Absent, SessionState::Present)
    }
}

type Observer = Arc<dyn Fn(&SessionState) + Send + Sync>;

#[derive(Default)]
struct Observers {
    next_id: AtomicU64,
    entries: Mutex<Vec<(u64, Observer)>>,
}

/// Handle returned by [`SessionStore::subscribe`]; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the observer"]
pub struct Subscription {
    id: u64,
    observers: Arc<Observers>,
}

impl Subscription {
    /// Keep the observer registered for the lifetime of the store.
    pub fn detach(self) {
        std::mem::forget(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.observers.entries.lock().retain(|(id, _)| *id != self.id);
    }
}

/// Client-side stand-in for an authentication backend.
#[derive(Clone)]
pub struct SessionStore {
    area: StorageArea,
    observers: Arc<Observers>,
}

impl SessionStore {
    /// Create a session store over one window's storage area.
    pub fn new(area: StorageArea) -> Self {
        Self {
            area,
            observers: Arc::new(Observers::default()),
        }
    }

    /// Sign in with any email/password. Always succeeds.
    ///
    /// The password is ignored; the returned user carries fixed demo
    /// profile metadata.
    pub fn sign_in_with_password(&self, credentials: Credentials) -> LeviathanResult<AuthResponse> {
        let user = User {
            id: DEMO_USER_ID.to_string(),
            email: credentials.email,
            role: Role::Researcher,
            full_name: Some(DEMO_FULL_NAME.to_string()),
            organization: Some(DEMO_ORGANIZATION.to_string()),
        };
        info!(email = %user.email, "Signed in (demo mode)");
        self.establish(user)
    }

    /// Create an account and sign it in. Always succeeds.
    ///
    /// No duplicate-email detection and no password policy.
    pub fn sign_up(&self, request: SignUpRequest) -> LeviathanResult<AuthResponse> {
        let SignUpData {
            full_name,
            organization,
            role,
        } = request.data;

        let user = User {
            id: Ulid::new().to_string(),
            email: request.email,
            role: role.unwrap_or_default(),
            full_name: Some(full_name.unwrap_or_else(|| NEW_USER_NAME.to_string())),
            organization: Some(organization.unwrap_or_else(|| DEMO_ORGANIZATION.to_string())),
        };
        info!(email = %user.email, role = %user.role, "Signed up (demo mode)");
        self.establish(user)
    }

    /// Remove the session marker. Idempotent.
    pub fn sign_out(&self) -> LeviathanResult<()> {
        self.area.remove_item(SESSION_KEY)?;
        info!("Signed out");
        self.notify(&SessionState::Absent);
        Ok(())
    }

    /// Read the current session.
    ///
    /// A stored value that does not decode as a [`User`] counts as no
    /// session. It is removed and this window's observers see `Absent`.
    pub fn get_session(&self) -> LeviathanResult<Option<User>> {
        let Some(raw) = self.area.get_item(SESSION_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(error = %e, "Discarding malformed session marker");
                self.area.remove_item(SESSION_KEY)?;
                self.notify(&SessionState::Absent);
                Ok(None)
            }
        }
    }

    /// Register an observer for session changes.
    pub fn subscribe(&self, observer: impl Fn(&SessionState) + Send + Sync + 'static) -> Subscription {
        let id = self.observers.next_id.fetch_add(1, Ordering::Relaxed);
        self.observers.entries.lock().push((id, Arc::new(observer)));
        Subscription {
            id,
            observers: self.observers.clone(),
        }
    }

    /// Deliver a state to every registered observer.
    pub fn notify(&self, state: &SessionState) {
        // Snapshot so observers may (un)subscribe while being called
        let observers: Vec<Observer> = self
            .observers
            .entries
            .lock()
            .iter()
            .map(|(_, o)| o.clone())
            .collect();
        debug!(observers = observers.len(), present = state.is_present(), "Notifying session observers");
        for observer in observers {
            observer(state);
        }
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.entries.lock().len()
    }

    /// Apply a storage change made in another window.
    ///
    /// Returns the resulting state when the event concerned the session
    /// marker, `None` when it was about some other key.
    pub fn apply_storage_event(&self, event: &StorageEvent) -> Option<SessionState> {
        match event.key.as_deref() {
            Some(SESSION_KEY) | None => {}
            Some(_) => return None,
        }

        let state = match event.new_value.as_deref() {
            Some(raw) => match serde_json::from_str::<User>(raw) {
                Ok(user) => SessionState::Present(user),
                Err(e) => {
                    warn!(error = %e, origin = %event.origin, "Foreign session marker is malformed");
                    SessionState::Absent
                }
            },
            None => SessionState::Absent,
        };

        debug!(origin = %event.origin, present = state.is_present(), "Session changed in another window");
        self.notify(&state);
        Some(state)
    }

    /// Feed storage events from other windows into [`Self::apply_storage_event`].
    ///
    /// The area keeps the broadcast sender alive, so the loop only ends
    /// when the task running it is aborted.
    pub async fn listen(&self, mut events: StorageEvents) {
        while let Some(event) = events.recv().await {
            self.apply_storage_event(&event);
        }
        debug!("Session listener finished");
    }

    /// Subscribe to foreign storage changes for this store's window
    pub fn storage_events(&self) -> StorageEvents {
        self.area.subscribe()
    }

    fn establish(&self, user: User) -> LeviathanResult<AuthResponse> {
        let blob = serde_json::to_string(&user)?;
        self.area.set_item(SESSION_KEY, &blob)?;
        self.notify(&SessionState::Present(user.clone()));
        Ok(AuthResponse {
            user,
            session: AuthSession::demo(),
        })
    }
}
