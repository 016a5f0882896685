//! Leviathan UI Components
//!
//! Dioxus components shared by the Leviathan desktop pages.
//!
//! ## Palette
//!
//! - **Navy (#06038D)**: primary actions, headings, links
//! - **Saffron (#FF671F)**: highlights and secondary actions
//! - **Green (#046A38)**: success and healthy indicators
//! - **Crisp white (#FAFAFA)**: page background
//!
//! The matching CSS classes live in the desktop crate's global stylesheet.

pub mod components;

pub use components::*;
