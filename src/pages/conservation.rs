//! Conservation & discovery page: searchable species discoveries, success
//! stories and the ecological roles of key species.

use dioxus::prelude::*;
use leviathan_core::catalog::conservation::{filter_discoveries, ECOLOGICAL_ROLES, SUCCESS_STORIES};
use leviathan_core::catalog::{format_timestamp, Discovery, DiscoveryCategory, EcologicalRole, SuccessStory};
use leviathan_ui::{Badge, FilterPills, Pill, SearchInput};

use crate::context::use_translate;
use crate::theme::colors;

const ALL: &str = "all";

fn category_pills() -> Vec<Pill> {
    std::iter::once(Pill::new(ALL, "All Species"))
        .chain(DiscoveryCategory::ALL.iter().map(|c| Pill::new(c.as_str(), c.label())))
        .collect()
}

#[component]
pub fn Conservation() -> Element {
    let t = use_translate();
    let mut search = use_signal(String::new);
    let mut category = use_signal(|| ALL.to_string());

    let discoveries = filter_discoveries(DiscoveryCategory::from_filter(&category()), &search());

    rsx! {
        main { class: "page",
            div { class: "container",
                header { class: "page-header",
                    h1 { class: "page-title", {t("conservation")} }
                    p { class: "page-subtitle", "New species, restored habitats and the roles that hold ecosystems together" }
                }

                div { class: "stack",
                    SearchInput {
                        value: search(),
                        oninput: move |value| search.set(value),
                        placeholder: "Search species, scientific names or locations...".to_string(),
                    }
                    FilterPills {
                        pills: category_pills(),
                        selected: category(),
                        on_select: move |value| category.set(value),
                        aria_label: "Species category".to_string(),
                    }
                }

                h2 { class: "section-title", style: "margin-top: 2rem;", "Recent Discoveries" }
                if discoveries.is_empty() {
                    p { class: "muted", "No discoveries match your search." }
                }
                div { class: "grid grid-3",
                    for discovery in discoveries {
                        DiscoveryCard { key: "{discovery.id}", discovery: *discovery }
                    }
                }

                h2 { class: "section-title", style: "margin-top: 2.5rem;", "Success Stories" }
                div { class: "grid grid-2",
                    for story in SUCCESS_STORIES {
                        StoryCard { key: "{story.id}", story: *story }
                    }
                }

                h2 { class: "section-title", style: "margin-top: 2.5rem;", "Ecological Roles" }
                div { class: "grid grid-2",
                    for role in ECOLOGICAL_ROLES {
                        RoleCard { key: "{role.id}", role: *role }
                    }
                }
            }
        }
    }
}

#[component]
fn DiscoveryCard(discovery: Discovery) -> Element {
    let status_color = discovery.status.color();
    let discovered = format_timestamp(discovery.discovery_date);

    rsx! {
        div { class: "card",
            div { class: "row-between",
                Badge { text: discovery.category.label().to_string(), color: colors::SKY.to_string() }
                Badge { text: discovery.status.to_string(), color: status_color.to_string() }
            }
            h3 { style: "margin-top: 0.75rem;", "{discovery.name}" }
            p { class: "muted", em { "{discovery.scientific_name}" } }
            p { "{discovery.description}" }
            p { class: "muted", "\u{1F4CD} {discovery.location}" }
            p { class: "muted", "{discovered} \u{00B7} {discovery.discoverer}" }
            div { class: "row", style: "flex-wrap: wrap; margin-top: 0.5rem;",
                for role in discovery.ecological_roles {
                    Badge { key: "{role}", text: role.to_string(), color: colors::GREEN.to_string() }
                }
            }
            p { style: "margin-top: 0.5rem;", strong { "Significance: " } "{discovery.significance}" }
        }
    }
}

#[component]
fn StoryCard(story: SuccessStory) -> Element {
    rsx! {
        div { class: "card",
            div { class: "row-between",
                h3 { "{story.title}" }
                Badge { text: story.year.to_string(), color: colors::NAVY.to_string() }
            }
            p { class: "muted", "\u{1F4CD} {story.location}" }
            p { "{story.description}" }
            div { class: "grid grid-3", style: "margin: 0.75rem 0;",
                div { class: "stat-card",
                    div { class: "stat-value", "{story.species_recovered}" }
                    div { class: "stat-label", "Species recovered" }
                }
                div { class: "stat-card",
                    div { class: "stat-value", "{story.habitat_restored} ha" }
                    div { class: "stat-label", "Habitat restored" }
                }
                div { class: "stat-card",
                    div { class: "stat-value", "{story.community_involved}" }
                    div { class: "stat-label", "People involved" }
                }
            }
            p { strong { "Impact: " } "{story.impact}" }
            div { class: "grid grid-2", style: "margin-top: 0.75rem;",
                div {
                    strong { "Challenges" }
                    ul { class: "bullet-list",
                        for item in story.challenges {
                            li { key: "{item}", "{item}" }
                        }
                    }
                }
                div {
                    strong { "Solutions" }
                    ul { class: "bullet-list",
                        for item in story.solutions {
                            li { key: "{item}", "{item}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RoleCard(role: EcologicalRole) -> Element {
    let t = use_translate();
    let importance_color = colors::severity_color(role.importance);
    let importance = t(role.importance.as_str());

    rsx! {
        div { class: "card",
            div { class: "row-between",
                h3 { "{role.species}" }
                Badge { text: importance.to_string(), color: importance_color.to_string() }
            }
            p { "{role.role}" }
            p { class: "muted", style: "margin-top: 0.5rem;", "Interactions" }
            div { class: "row", style: "flex-wrap: wrap;",
                for interaction in role.interactions {
                    Badge { key: "{interaction}", text: interaction.to_string(), color: colors::SKY.to_string() }
                }
            }
            div { class: "grid grid-2", style: "margin-top: 0.75rem;",
                div {
                    strong { "Threats" }
                    ul { class: "bullet-list",
                        for threat in role.threats {
                            li { key: "{threat}", "{threat}" }
                        }
                    }
                }
                div {
                    strong { "Conservation actions" }
                    ul { class: "bullet-list",
                        for action in role.actions {
                            li { key: "{action}", "{action}" }
                        }
                    }
                }
            }
        }
    }
}
