//! End-to-end tests for the mock session store
//!
//! Two windows share one storage file; each gets its own `AppState`, just
//! like the desktop binary does.

use std::sync::Arc;
use std::time::Duration;

use leviathan_core::storage::SESSION_KEY;
use leviathan_core::{
    AppState, Credentials, LocalStorage, Role, SessionState, SignUpData, SignUpForm, SignUpRequest,
};
use parking_lot::Mutex;
use tempfile::TempDir;

fn open_storage() -> (TempDir, LocalStorage) {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::open(dir.path().join("storage.redb")).unwrap();
    (dir, storage)
}

fn sign_up_request(email: &str, role: Option<Role>, full_name: Option<&str>) -> SignUpRequest {
    SignUpRequest {
        email: email.to_string(),
        password: "secret".to_string(),
        data: SignUpData {
            full_name: full_name.map(str::to_string),
            organization: None,
            role,
        },
    }
}

/// Record every state a window's observers see
fn record(state: &AppState) -> (Arc<Mutex<Vec<SessionState>>>, leviathan_core::Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let sub = state.session().subscribe(move |s| sink.lock().push(s.clone()));
    (seen, sub)
}

async fn wait_for(seen: &Mutex<Vec<SessionState>>, count: usize) {
    for _ in 0..100 {
        if seen.lock().len() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("expected {count} session notifications, got {}", seen.lock().len());
}

#[test]
fn test_sign_up_then_get_session() {
    let (_dir, storage) = open_storage();
    let state = AppState::new(storage.area()).unwrap();

    let response = state
        .session()
        .sign_up(sign_up_request("s@uni.edu", Some(Role::Student), None))
        .unwrap();
    assert_eq!(response.user.role, Role::Student);

    let user = state.session().get_session().unwrap().unwrap();
    assert_eq!(user.role, Role::Student);
    assert_eq!(user.email, "s@uni.edu");
    assert_eq!(user.full_name.as_deref(), Some("New User"));
}

#[test]
fn test_sign_out_clears_session() {
    let (_dir, storage) = open_storage();
    let state = AppState::new(storage.area()).unwrap();

    state
        .session()
        .sign_in_with_password(Credentials {
            email: "a@b.com".into(),
            password: "x".into(),
        })
        .unwrap();
    state.session().sign_out().unwrap();

    assert_eq!(state.session().get_session().unwrap(), None);
    assert_eq!(storage.area().get_item(SESSION_KEY).unwrap(), None);
}

#[test]
fn test_sign_out_twice_is_idempotent() {
    let (_dir, storage) = open_storage();
    let state = AppState::new(storage.area()).unwrap();
    let (seen, _sub) = record(&state);

    state.session().sign_out().unwrap();
    state.session().sign_out().unwrap();

    assert_eq!(state.session().get_session().unwrap(), None);
    assert_eq!(*seen.lock(), vec![SessionState::Absent, SessionState::Absent]);
}

#[test]
fn test_malformed_marker_is_cleared() {
    let (_dir, storage) = open_storage();
    storage.area().set_item(SESSION_KEY, r#"{"id":"1","email":"x"}"#).unwrap();

    let state = AppState::new(storage.area()).unwrap();
    assert_eq!(state.session().get_session().unwrap(), None);
    assert_eq!(storage.area().get_item(SESSION_KEY).unwrap(), None);
}

#[test]
fn test_malformed_marker_notifies_current_window() {
    let (_dir, storage) = open_storage();
    let state = AppState::new(storage.area()).unwrap();
    let (seen, _sub) = record(&state);

    state
        .session()
        .sign_in_with_password(Credentials {
            email: "a@b.com".into(),
            password: "x".into(),
        })
        .unwrap();
    assert!(seen.lock().last().is_some_and(SessionState::is_present));

    // Corrupted by some other context sharing the file
    storage.area().set_item(SESSION_KEY, "{not json").unwrap();

    assert_eq!(state.session().get_session().unwrap(), None);
    assert_eq!(seen.lock().last(), Some(&SessionState::Absent));
    assert_eq!(storage.area().get_item(SESSION_KEY).unwrap(), None);
}

#[test]
fn test_sign_up_form_establishes_session() {
    let (_dir, storage) = open_storage();
    let state = AppState::new(storage.area()).unwrap();

    let form = SignUpForm {
        email: "a@b.com".to_string(),
        password: "secret".to_string(),
        confirm_password: "secret".to_string(),
        full_name: "A B".to_string(),
        organization: String::new(),
        role: Some(Role::Researcher),
    };
    let request = form.validate().unwrap();
    state.session().sign_up(request).unwrap();

    let user = state.session().get_session().unwrap().unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.role, Role::Researcher);
    assert_eq!(user.full_name.as_deref(), Some("A B"));
    assert_eq!(user.organization.as_deref(), Some("Demo Organization"));
}

#[test]
fn test_session_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.redb");

    {
        let storage = LocalStorage::open(&path).unwrap();
        let state = AppState::new(storage.area()).unwrap();
        state
            .session()
            .sign_up(sign_up_request("keep@me.org", Some(Role::Policymaker), Some("Keeper")))
            .unwrap();
    }

    let storage = LocalStorage::open(&path).unwrap();
    let state = AppState::new(storage.area()).unwrap();
    let user = state.initial_session().user().cloned().unwrap();
    assert_eq!(user.email, "keep@me.org");
    assert_eq!(user.role, Role::Policymaker);
}

#[tokio::test]
async fn test_end_to_end_two_windows() {
    let (_dir, storage) = open_storage();
    let first = AppState::new(storage.area()).unwrap();
    let second = AppState::new(storage.area()).unwrap();

    let (first_seen, _first_sub) = record(&first);
    let (second_seen, _second_sub) = record(&second);
    second.start_listening();

    let response = first
        .session()
        .sign_up(sign_up_request("a@b.com", Some(Role::Researcher), Some("A B")))
        .unwrap();
    assert_eq!(response.user.full_name.as_deref(), Some("A B"));

    // Same window hears about it synchronously
    assert_eq!(first_seen.lock().len(), 1);

    wait_for(&second_seen, 1).await;
    let observed = second_seen.lock()[0].clone();
    assert_eq!(observed.user().map(|u| u.email.as_str()), Some("a@b.com"));
    assert_eq!(observed.user().map(|u| u.role), Some(Role::Researcher));

    first.session().sign_out().unwrap();
    wait_for(&second_seen, 2).await;
    assert_eq!(second_seen.lock()[1], SessionState::Absent);
    assert_eq!(second.session().get_session().unwrap(), None);

    second.shutdown();
}

#[tokio::test]
async fn test_window_does_not_hear_its_own_writes_twice() {
    let (_dir, storage) = open_storage();
    let state = AppState::new(storage.area()).unwrap();
    let (seen, _sub) = record(&state);
    state.start_listening();

    state
        .session()
        .sign_in_with_password(Credentials {
            email: "me@here.org".into(),
            password: String::new(),
        })
        .unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(seen.lock().len(), 1);
}

#[tokio::test]
async fn test_foreign_malformed_marker_means_signed_out() {
    let (_dir, storage) = open_storage();
    let state = AppState::new(storage.area()).unwrap();
    let (seen, _sub) = record(&state);
    state.start_listening();

    // A third context with no session store writes garbage
    storage.area().set_item(SESSION_KEY, "garbage").unwrap();

    wait_for(&seen, 1).await;
    assert_eq!(seen.lock()[0], SessionState::Absent);
}

#[tokio::test]
async fn test_clear_from_other_window_signs_out() {
    let (_dir, storage) = open_storage();
    let state = AppState::new(storage.area()).unwrap();
    state
        .session()
        .sign_in_with_password(Credentials {
            email: "a@b.com".into(),
            password: "x".into(),
        })
        .unwrap();

    let (seen, _sub) = record(&state);
    state.start_listening();
    storage.area().clear().unwrap();

    wait_for(&seen, 1).await;
    assert_eq!(seen.lock()[0], SessionState::Absent);
}
