//! Navigation Header Component
//!
//! Fixed header with brand, page links, language picker, a "new window"
//! action and the sign-in state.

use dioxus::prelude::*;
use leviathan_core::{Language, LocalStorage};
use leviathan_ui::{use_toaster, Button, ButtonVariant, IconButton, Select, SelectOption};

use crate::app::Route;
use crate::context::{set_language, use_app_state, use_language, use_translate, use_user};
use crate::LaunchOptions;

/// Navigation entry in the header
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavItem {
    Home,
    Dashboard,
    Upload,
    Policy,
    Learning,
    Conservation,
    About,
    Contact,
    Admin,
}

impl NavItem {
    /// Entries shown to everyone, in header order
    pub const PUBLIC: [NavItem; 8] = [
        NavItem::Home,
        NavItem::Dashboard,
        NavItem::Upload,
        NavItem::Policy,
        NavItem::Learning,
        NavItem::Conservation,
        NavItem::About,
        NavItem::Contact,
    ];

    /// Translation key for the link label
    pub fn label_key(&self) -> &'static str {
        match self {
            NavItem::Home => "home",
            NavItem::Dashboard => "dashboard",
            NavItem::Upload => "upload",
            NavItem::Policy => "policy",
            NavItem::Learning => "learning",
            NavItem::Conservation => "conservation",
            NavItem::About => "about",
            NavItem::Contact => "contact",
            NavItem::Admin => "admin",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavItem::Home => Route::Home {},
            NavItem::Dashboard => Route::Dashboard {},
            NavItem::Upload => Route::Upload {},
            NavItem::Policy => Route::Policy {},
            NavItem::Learning => Route::Learning {},
            NavItem::Conservation => Route::Conservation {},
            NavItem::About => Route::About {},
            NavItem::Contact => Route::Contact {},
            NavItem::Admin => Route::Admin {},
        }
    }

    /// Entries visible for the given sign-in state
    pub fn visible(is_admin: bool) -> Vec<NavItem> {
        let mut items = NavItem::PUBLIC.to_vec();
        if is_admin {
            items.push(NavItem::Admin);
        }
        items
    }
}

/// Open another window over the same storage file.
///
/// The new window builds its own [`leviathan_core::AppState`], so it signs
/// in and out independently and hears this window's changes.
fn open_new_window(storage: LocalStorage, options: LaunchOptions) {
    let title = options.window_title();
    let dom = VirtualDom::new(crate::app::App)
        .with_root_context(storage)
        .with_root_context(options);
    dioxus::desktop::window().new_window(dom, crate::window_config(&title));
    tracing::info!(%title, "Opened new window");
}

/// Navigation Header component
#[component]
pub fn NavHeader() -> Element {
    let state = use_app_state();
    let user = use_user();
    let language = use_language();
    let t = use_translate();
    let toaster = use_toaster();
    let navigator = use_navigator();
    let current = use_route::<Route>();

    let storage = use_context::<LocalStorage>();
    let options = use_context::<LaunchOptions>();

    let signed_in = user.read().clone();
    let is_admin = signed_in.as_ref().is_some_and(|u| u.is_admin());
    let links: Vec<(NavItem, &str)> = NavItem::visible(is_admin)
        .into_iter()
        .map(|item| {
            let class = if item.route() == current { "nav-link active" } else { "nav-link" };
            (item, class)
        })
        .collect();

    let language_options: Vec<SelectOption> = Language::ALL
        .iter()
        .map(|lang| SelectOption::new(lang.code(), lang.native_name()))
        .collect();

    let language_state = state.clone();
    let on_language = move |code: String| match Language::from_code(&code) {
        Some(next) => set_language(&language_state, language, next),
        None => tracing::warn!(%code, "Ignoring unknown language code"),
    };

    let sign_out_state = state.clone();
    let on_sign_out = move |_| match sign_out_state.session().sign_out() {
        Ok(()) => {
            toaster.info("Signed out");
            navigator.push(Route::Home {});
        }
        Err(e) => {
            tracing::error!("Sign out failed: {}", e);
            toaster.error(format!("Sign out failed: {}", e));
        }
    };

    let on_new_window = move |_| open_new_window(storage.clone(), options.clone());

    rsx! {
        header { class: "nav-header",
            Link { to: Route::Home {}, class: "nav-brand",
                span { class: "nav-brand-mark", "L" }
                "Leviathan"
            }

            nav { class: "nav-links",
                for (item, link_class) in links {
                    Link {
                        key: "{item.label_key()}",
                        to: item.route(),
                        class: "{link_class}",
                        {t(item.label_key())}
                    }
                }
            }

            div { class: "nav-actions",
                Select {
                    value: language().code().to_string(),
                    options: language_options,
                    onchange: on_language,
                    class: "language-select".to_string(),
                }

                IconButton {
                    onclick: on_new_window,
                    aria_label: "Open a new window".to_string(),
                    "\u{29C9}"
                }

                match signed_in {
                    Some(user) => rsx! {
                        span { class: "nav-user", "{user.display_name()}" }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: on_sign_out,
                            {t("signOut")}
                        }
                    },
                    None => rsx! {
                        Link { to: Route::SignIn {}, class: "btn btn-ghost", {t("signIn")} }
                        Link { to: Route::SignUp {}, class: "btn btn-primary", {t("signUp")} }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_link_only_for_admins() {
        assert!(!NavItem::visible(false).contains(&NavItem::Admin));
        assert!(NavItem::visible(true).contains(&NavItem::Admin));
        assert_eq!(NavItem::visible(true).len(), NavItem::PUBLIC.len() + 1);
    }

    #[test]
    fn test_label_keys_are_translated() {
        for item in NavItem::visible(true) {
            let key = item.label_key();
            assert_ne!(leviathan_core::translate(Language::Hi, key), key);
        }
    }
}
