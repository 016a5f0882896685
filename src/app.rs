use dioxus::prelude::*;
use leviathan_core::{AppState, LocalStorage};
use leviathan_ui::{use_toaster_provider, ToastStack};

use crate::components::NavHeader;
use crate::context::use_window_context_provider;
use crate::pages::{
    About, Admin, Conservation, Contact, Dashboard, Home, Learning, Policy, SignIn, SignUp,
    Upload,
};
use crate::theme::GLOBAL_STYLES;
use crate::LaunchOptions;

/// Application routes.
///
/// Every page shares the [`Shell`] layout: navigation header on top, toast
/// stack in the corner.
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/upload")]
        Upload {},
        #[route("/policy")]
        Policy {},
        #[route("/learning")]
        Learning {},
        #[route("/conservation")]
        Conservation {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/admin")]
        Admin {},
        #[route("/auth/signin")]
        SignIn {},
        #[route("/auth/signup")]
        SignUp {},
}

/// Root component of every window.
///
/// Expects a [`LocalStorage`] and [`LaunchOptions`] in root context; the
/// window gets its own storage area over the shared file.
#[component]
pub fn App() -> Element {
    let storage = use_context::<LocalStorage>();
    let options = use_context::<LaunchOptions>();

    let state = use_hook(|| {
        AppState::new(storage.area()).map_err(|e| {
            tracing::error!("Failed to initialize window state: {}", e);
            e.to_string()
        })
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        match state {
            Ok(state) => rsx! {
                Window { state, options }
            },
            Err(message) => rsx! {
                div { class: "fatal",
                    h1 { "Leviathan could not start" }
                    p { "{message}" }
                }
            },
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct WindowProps {
    state: AppState,
    options: LaunchOptions,
}

#[component]
fn Window(props: WindowProps) -> Element {
    use_window_context_provider(props.state.clone(), props.options.default_language);

    rsx! {
        Router::<Route> {}
    }
}

/// Layout shared by every route
#[component]
fn Shell() -> Element {
    use_toaster_provider();

    rsx! {
        NavHeader {}
        Outlet::<Route> {}
        ToastStack {}
    }
}
