//! Leviathan Core Library
//!
//! Demo-mode logic behind the Leviathan eDNA biodiversity showcase.
//!
//! ## Overview
//!
//! There is no real backend. Everything the desktop front-end shows is
//! either hardcoded sample data or produced by one of two small engines:
//!
//! - **Session store**: a mock authentication backend whose only state is a
//!   JSON "session marker" in a local key/value store. Changes made in one
//!   window are broadcast to every other open window.
//! - **Wave renderer**: translucent sine-wave bands recomputed every frame
//!   for the animated ocean background.
//!
//! ## Quick Start
//!
//! ```ignore
//! use leviathan_core::{AppState, Credentials, LocalStorage};
//!
//! let storage = LocalStorage::open("~/.leviathan/storage.redb")?;
//! let state = AppState::new(storage.area())?;
//!
//! let response = state.session().sign_in_with_password(Credentials {
//!     email: "a@b.com".into(),
//!     password: "anything".into(),
//! })?;
//! assert_eq!(state.session().get_session()?, Some(response.user));
//! ```

pub mod app;
pub mod catalog;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod session;
pub mod storage;
pub mod types;
pub mod upload;
pub mod wave;

// Re-exports
pub use app::AppState;
pub use error::{LeviathanError, LeviathanResult};
pub use forms::{ContactCategory, ContactForm, FormError, SignInForm, SignUpForm};
pub use i18n::{translate, Language, LanguagePreference};
pub use session::{
    AuthResponse, AuthSession, Credentials, SessionState, SessionStore, SignUpData,
    SignUpRequest, Subscription,
};
pub use storage::{LocalStorage, StorageArea, StorageEvent, StorageEvents};
pub use types::*;
pub use upload::{DatasetFormat, UploadRejection, UploadSimulator, UploadStatus, UploadedFile};
pub use wave::{Rgba, Surface, SurfaceSize, SvgSurface, WaveAnimation, WaveBand, WaveLayer, WaveRenderer};
