//! Per-window context for Leviathan.
//!
//! Each window owns one [`AppState`] and a handful of signals derived from
//! it. Everything is provided through Dioxus context, so two windows never
//! share UI state even though they share the storage file.
//!
//! ## Usage
//!
//! ```ignore
//! // In the window root
//! use_window_context_provider(state, Language::En);
//!
//! // In child components
//! let user = use_user();
//! let t = use_translate();
//! ```

use dioxus::prelude::*;
use leviathan_core::{translate, AppState, Language, SessionState, UploadedFile, User};
use tokio::sync::mpsc;

/// Install the window's state and derived signals as context.
///
/// Session changes made in this window or any other one are funnelled
/// through a channel into the user signal on the UI thread.
pub fn use_window_context_provider(state: AppState, fallback: Language) {
    use_context_provider(|| state.clone());

    let user = use_context_provider(|| Signal::new(state.initial_session().user().cloned()));
    use_context_provider(|| {
        let language = state.initial_language(fallback).unwrap_or_else(|e| {
            tracing::warn!("Could not read language preference: {}", e);
            fallback
        });
        Signal::new(language)
    });
    use_context_provider(|| Signal::new(Vec::<UploadedFile>::new()));

    let listener_state = state.clone();
    use_future(move || {
        let state = listener_state.clone();
        let mut user = user;
        async move {
            let (tx, mut rx) = mpsc::unbounded_channel::<Option<User>>();
            let _subscription = state.session().subscribe(move |session: &SessionState| {
                let _ = tx.send(session.user().cloned());
            });
            state.start_listening();
            if let Err(e) = state.resync_session() {
                tracing::warn!("Could not re-read session after listener start: {}", e);
            }

            while let Some(next) = rx.recv().await {
                user.set(next);
            }
        }
    });

    use_drop(move || state.shutdown());
}

/// The window's application state
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}

/// Signed-in user, `None` when signed out
pub fn use_user() -> Signal<Option<User>> {
    use_context::<Signal<Option<User>>>()
}

pub fn use_language() -> Signal<Language> {
    use_context::<Signal<Language>>()
}

/// Files uploaded in this window
pub fn use_uploads() -> Signal<Vec<UploadedFile>> {
    use_context::<Signal<Vec<UploadedFile>>>()
}

/// Translation function bound to the current language.
///
/// Reading through it subscribes the component to language changes.
pub fn use_translate() -> impl Fn(&'static str) -> &'static str + Copy {
    let language = use_language();
    move |key| translate(language(), key)
}

/// Persist a language choice and apply it to this window
pub fn set_language(state: &AppState, mut language: Signal<Language>, next: Language) {
    if let Err(e) = state.language().set(next) {
        tracing::error!("Failed to save language preference: {}", e);
    }
    language.set(next);
}
