use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_translate;

/// Placeholder shown instead of a page that needs a signed-in user
#[component]
pub fn SignInRequired(
    /// What the user is trying to do, e.g. "view the dashboard"
    action: String,
) -> Element {
    let t = use_translate();

    rsx! {
        div { class: "card gate",
            div { class: "gate-icon", "\u{1F512}" }
            h2 { class: "section-title", "Please sign in to {action}" }
            p { class: "muted", "Demo mode accepts any email and password." }
            div { class: "hero-actions", style: "margin-top: 1.5rem;",
                Link { to: Route::SignIn {}, class: "btn btn-primary", {t("signIn")} }
                Link { to: Route::SignUp {}, class: "btn btn-outline", {t("signUp")} }
            }
        }
    }
}
