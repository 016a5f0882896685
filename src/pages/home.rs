//! Home page: animated ocean hero, feature overview and call to action.

use dioxus::prelude::*;
use leviathan_ui::OceanWave;

use crate::app::Route;
use crate::context::{use_translate, use_user};

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "\u{1F9EC}",
        title: "eDNA Analysis",
        body: "Identify species from trace DNA in water samples without disturbing the ecosystem.",
    },
    Feature {
        icon: "\u{1F916}",
        title: "AI Classification",
        body: "Deep learning models assign taxonomy to millions of reads in minutes.",
    },
    Feature {
        icon: "\u{1F4CA}",
        title: "Real-time Insights",
        body: "Dashboards track diversity, abundance trends and sampling hotspots.",
    },
    Feature {
        icon: "\u{1F30A}",
        title: "Conservation Impact",
        body: "Alerts and policy reports turn findings into protection for marine life.",
    },
];

#[component]
pub fn Home() -> Element {
    let t = use_translate();
    let user = use_user();
    let signed_in = user.read().is_some();

    rsx! {
        main { class: "page",
            section { class: "hero wave-host",
                OceanWave { id: "home-wave".to_string() }
                div {
                    h1 { class: "hero-title", {t("welcomeTitle")} }
                    p { class: "hero-subtitle", {t("welcomeSubtitle")} }
                    div { class: "hero-actions",
                        Link { to: Route::Upload {}, class: "btn btn-primary", {t("uploadDataset")} }
                        if signed_in {
                            Link { to: Route::Dashboard {}, class: "btn btn-outline", {t("dashboard")} }
                        } else {
                            Link { to: Route::SignUp {}, class: "btn btn-outline", {t("getStarted")} }
                        }
                    }
                }
            }

            section { class: "container",
                div { class: "grid grid-4",
                    for feature in FEATURES {
                        div { key: "{feature.title}", class: "card",
                            div { class: "feature-icon", "{feature.icon}" }
                            h3 { "{feature.title}" }
                            p { class: "muted", "{feature.body}" }
                        }
                    }
                }

                div { class: "card card-dark", style: "margin-top: 2rem; text-align: center;",
                    h3 { "Ready to explore marine biodiversity?" }
                    p { "Upload your first eDNA dataset and see what lives beneath the surface." }
                    div { class: "hero-actions", style: "margin-top: 1rem;",
                        Link { to: Route::Learning {}, class: "btn btn-secondary", {t("learning")} }
                        Link { to: Route::Conservation {}, class: "btn btn-ghost", {t("conservation")} }
                    }
                }
            }
        }
    }
}
