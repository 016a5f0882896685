use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_translate;

const PILLARS: &[(&str, &str, &str)] = &[
    (
        "\u{1F3AF}",
        "Mission",
        "Make marine biodiversity monitoring fast, affordable and accessible to every coastal community.",
    ),
    (
        "\u{1F52D}",
        "Vision",
        "Healthy oceans where every conservation decision is backed by timely genetic evidence.",
    ),
    (
        "\u{1F91D}",
        "Values",
        "Open science, community partnership and respect for the ecosystems we study.",
    ),
];

const STEPS: &[(&str, &str)] = &[
    ("Collect", "Field teams filter seawater and preserve the trace DNA it carries."),
    ("Sequence", "Samples are amplified and sequenced into CSV, FASTA or FASTQ datasets."),
    ("Classify", "AI models match reads against reference libraries to identify taxa."),
    ("Act", "Dashboards, alerts and policy reports turn results into protection."),
];

/// Static overview of the project and how eDNA monitoring works
#[component]
pub fn About() -> Element {
    let t = use_translate();

    rsx! {
        main { class: "page",
            div { class: "container",
                header { class: "page-header",
                    h1 { class: "page-title", {t("about")} " Leviathan" }
                    p { class: "page-subtitle",
                        "Leviathan pairs environmental DNA sequencing with machine learning to reveal what lives in our seas."
                    }
                }

                div { class: "grid grid-3",
                    for (icon, title, body) in PILLARS {
                        div { key: "{title}", class: "card",
                            div { class: "feature-icon", "{icon}" }
                            h3 { "{title}" }
                            p { class: "muted", "{body}" }
                        }
                    }
                }

                h2 { class: "section-title", style: "margin-top: 2.5rem;", "How it works" }
                div { class: "grid grid-4",
                    for (i, (title, body)) in STEPS.iter().enumerate() {
                        div { key: "{title}", class: "card",
                            span { class: "badge", "Step {i + 1}" }
                            h3 { style: "margin-top: 0.5rem;", "{title}" }
                            p { class: "muted", "{body}" }
                        }
                    }
                }

                div { class: "card card-dark", style: "margin-top: 2.5rem; text-align: center;",
                    h3 { "Want to collaborate?" }
                    p { "Research institutions, agencies and citizen scientists are welcome." }
                    div { class: "hero-actions", style: "margin-top: 1rem;",
                        Link { to: Route::Contact {}, class: "btn btn-secondary", {t("contact")} }
                    }
                }
            }
        }
    }
}
