//! Per-window application state.
//!
//! One [`AppState`] exists per window. It is created from that window's
//! [`StorageArea`] and handed to the UI tree as context, so components reach
//! the session store and language preference without any global.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::LeviathanResult;
use crate::i18n::{Language, LanguagePreference};
use crate::session::{SessionState, SessionStore};
use crate::storage::StorageArea;

/// Scoped state container for one window.
///
/// Cheap to clone; clones share the session store, its observers and the
/// cross-window listener.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    session: SessionStore,
    language: LanguagePreference,
    initial: SessionState,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl AppState {
    /// Build the state for one window and load its initial session.
    ///
    /// A malformed session marker is discarded here, so the window starts
    /// signed out.
    pub fn new(area: StorageArea) -> LeviathanResult<Self> {
        let context = area.context();
        let session = SessionStore::new(area.clone());
        let initial = SessionState::from(session.get_session()?);
        info!(%context, signed_in = initial.is_present(), "Window state initialized");

        Ok(Self {
            inner: Arc::new(Inner {
                session,
                language: LanguagePreference::new(area),
                initial,
                listener: Mutex::new(None),
            }),
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    pub fn language(&self) -> &LanguagePreference {
        &self.inner.language
    }

    /// Session as loaded when the window opened
    pub fn initial_session(&self) -> &SessionState {
        &self.inner.initial
    }

    /// Stored language, or `fallback` when none is stored yet.
    pub fn initial_language(&self, fallback: Language) -> LeviathanResult<Language> {
        Ok(self.inner.language.stored()?.unwrap_or(fallback))
    }

    /// Start relaying session changes made in other windows to this
    /// window's observers. Calling it again while running is a no-op.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_listening(&self) {
        let mut listener = self.inner.listener.lock();
        if listener.as_ref().is_some_and(|h| !h.is_finished()) {
            return;
        }

        // Subscribe before spawning so no event between now and the first
        // poll is missed
        let events = self.inner.session.storage_events();
        let session = self.inner.session.clone();
        *listener = Some(tokio::spawn(async move {
            session.listen(events).await;
        }));
        debug!("Cross-window session listener started");
    }

    /// Re-read the stored session and deliver it to this window's observers.
    ///
    /// Call after [`Self::start_listening`] so a change made by another
    /// window between [`Self::new`] and the listener starting is not lost.
    pub fn resync_session(&self) -> LeviathanResult<SessionState> {
        let current = SessionState::from(self.inner.session.get_session()?);
        if current != self.inner.initial {
            debug!(present = current.is_present(), "Session changed before the listener started");
        }
        self.inner.session.notify(&current);
        Ok(current)
    }

    pub fn is_listening(&self) -> bool {
        self.inner
            .listener
            .lock()
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    /// Stop the cross-window listener. Idempotent.
    pub fn shutdown(&self) {
        if let Some(handle) = self.inner.listener.lock().take() {
            handle.abort();
            debug!("Cross-window session listener stopped");
        }
    }
}

/// Two handles are equal when they share the same window state
impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(handle) = self.listener.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Credentials;
    use crate::storage::{LocalStorage, SESSION_KEY};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tempfile::tempdir;

    fn credentials() -> Credentials {
        Credentials {
            email: "a@b.com".into(),
            password: "pw".into(),
        }
    }

    #[test]
    fn test_initial_session_discards_malformed_marker() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("s.redb")).unwrap();
        storage.area().set_item(SESSION_KEY, "{not json").unwrap();

        let state = AppState::new(storage.area()).unwrap();
        assert_eq!(state.initial_session(), &SessionState::Absent);
        assert_eq!(storage.area().get_item(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_initial_session_picks_up_existing_marker() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("s.redb")).unwrap();
        let first = AppState::new(storage.area()).unwrap();
        first.session().sign_in_with_password(credentials()).unwrap();

        let second = AppState::new(storage.area()).unwrap();
        assert_eq!(
            second.initial_session().user().map(|u| u.email.as_str()),
            Some("a@b.com")
        );
    }

    #[test]
    fn test_clones_compare_equal() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("s.redb")).unwrap();
        let state = AppState::new(storage.area()).unwrap();
        let other = AppState::new(storage.area()).unwrap();
        assert!(state == state.clone());
        assert!(state != other);
    }

    #[test]
    fn test_initial_language_fallback() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("s.redb")).unwrap();
        let state = AppState::new(storage.area()).unwrap();
        assert_eq!(state.initial_language(Language::Hi).unwrap(), Language::Hi);

        state.language().set(Language::Ml).unwrap();
        assert_eq!(state.initial_language(Language::Hi).unwrap(), Language::Ml);
    }

    #[tokio::test]
    async fn test_resync_catches_change_made_before_listening() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("s.redb")).unwrap();
        let late = AppState::new(storage.area()).unwrap();
        assert_eq!(late.initial_session(), &SessionState::Absent);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = late.session().subscribe(move |state| sink.lock().push(state.clone()));

        // Another window signs in before this one starts listening
        let early = AppState::new(storage.area()).unwrap();
        early.session().sign_in_with_password(credentials()).unwrap();

        late.start_listening();
        let current = late.resync_session().unwrap();
        assert_eq!(current.user().map(|u| u.email.as_str()), Some("a@b.com"));
        assert_eq!(seen.lock().last(), Some(&current));

        late.shutdown();
    }

    #[tokio::test]
    async fn test_listener_relays_other_window() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("s.redb")).unwrap();
        let left = AppState::new(storage.area()).unwrap();
        let right = AppState::new(storage.area()).unwrap();

        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let _sub = right.session().subscribe(move |state| {
            if state.is_present() {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        right.start_listening();
        assert!(right.is_listening());
        left.session().sign_in_with_password(credentials()).unwrap();

        for _ in 0..50 {
            if seen.load(Ordering::SeqCst) > 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        right.shutdown();
        assert!(!right.is_listening());
        right.shutdown();
    }
}
