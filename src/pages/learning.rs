//! Learning hub: filterable modules with progress, plus case studies.

use dioxus::prelude::*;
use leviathan_core::catalog::learning::{filter_modules, CASE_STUDIES};
use leviathan_core::catalog::{CaseStudy, LearningCategory, LearningModule};
use leviathan_ui::{Badge, FilterPills, Pill, ProgressBar};

use crate::context::use_translate;
use crate::theme::colors;

const ALL: &str = "all";

fn category_pills() -> Vec<Pill> {
    std::iter::once(Pill::new(ALL, "All Modules"))
        .chain(LearningCategory::ALL.iter().map(|c| Pill::new(c.as_str(), c.label())))
        .collect()
}

#[component]
pub fn Learning() -> Element {
    let t = use_translate();
    let mut category = use_signal(|| ALL.to_string());

    let modules = filter_modules(LearningCategory::from_filter(&category()));
    let completed = modules.iter().filter(|m| m.is_completed()).count();

    rsx! {
        main { class: "page",
            div { class: "container",
                header { class: "page-header",
                    h1 { class: "page-title", {t("learning")} }
                    p { class: "page-subtitle", "Learn how environmental DNA is transforming marine science" }
                }

                FilterPills {
                    pills: category_pills(),
                    selected: category(),
                    on_select: move |value| category.set(value),
                    aria_label: "Module category".to_string(),
                }
                p { class: "muted", style: "margin: 0.75rem 0 1rem;",
                    "{completed} of {modules.len()} modules completed"
                }

                div { class: "grid grid-3",
                    for module in modules {
                        ModuleCard { key: "{module.id}", module: *module }
                    }
                }

                h2 { class: "section-title", style: "margin-top: 2.5rem;", "Case Studies" }
                div { class: "grid grid-2",
                    for study in CASE_STUDIES {
                        CaseStudyCard { key: "{study.id}", study: *study }
                    }
                }
            }
        }
    }
}

#[component]
fn ModuleCard(module: LearningModule) -> Element {
    let level_color = module.level.color();
    let action = if module.is_completed() {
        "Review"
    } else if module.progress > 0 {
        "Continue"
    } else {
        "Start"
    };
    let bar_color = if module.is_completed() { colors::SUCCESS } else { colors::NAVY };

    rsx! {
        div { class: "card",
            div { class: "row-between",
                Badge { text: module.level.as_str().to_string(), color: level_color.to_string() }
                span { class: "muted", "{module.duration_minutes} min \u{00B7} {module.lessons} lessons" }
            }
            h3 { style: "margin-top: 0.75rem;", "{module.title}" }
            p { class: "muted", "{module.description}" }
            div { style: "margin: 1rem 0;",
                ProgressBar { value: module.progress as f64, color: bar_color.to_string(), show_label: true }
            }
            button { r#type: "button", class: "btn btn-outline btn-block", "{action}" }
        }
    }
}

#[component]
fn CaseStudyCard(study: CaseStudy) -> Element {
    rsx! {
        div { class: "card",
            h3 { "{study.title}" }
            p { class: "muted", "\u{1F4CD} {study.location} \u{00B7} {study.species}" }
            p { "{study.description}" }
            div { class: "grid grid-2", style: "margin-top: 0.75rem;",
                div {
                    strong { "Results" }
                    ul { class: "bullet-list",
                        for result in study.results {
                            li { key: "{result}", "{result}" }
                        }
                    }
                }
                div {
                    strong { "Key Learnings" }
                    ul { class: "bullet-list",
                        for learning in study.learnings {
                            li { key: "{learning}", "{learning}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pills_lead_with_all() {
        let pills = category_pills();
        assert_eq!(pills.len(), LearningCategory::ALL.len() + 1);
        assert_eq!(pills[0].value, ALL);
    }
}
