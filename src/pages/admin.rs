//! Admin panel: platform stats and the user table.
//!
//! Only admins see the content; everyone else gets a gate.

use dioxus::prelude::*;
use leviathan_core::catalog::admin::{filter_users, STATS, USERS};
use leviathan_core::catalog::{format_timestamp, AdminUser, RoleFilter, UserStatus};
use leviathan_core::i18n::role_key;
use leviathan_core::Role;
use leviathan_ui::{Badge, ProgressBar, SearchInput, Select, SelectOption, StatCard};

use crate::app::Route;
use crate::components::SignInRequired;
use crate::context::{use_translate, use_user};
use crate::theme::colors;

fn status_color(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => colors::SUCCESS,
        UserStatus::Inactive => colors::GRAY,
        UserStatus::Suspended => colors::DANGER,
    }
}

#[component]
pub fn Admin() -> Element {
    let t = use_translate();
    let user = use_user();
    let mut search = use_signal(String::new);
    let mut role = use_signal(RoleFilter::default);

    let is_admin = match user.read().as_ref() {
        None => {
            return rsx! {
                main { class: "page",
                    div { class: "container",
                        SignInRequired { action: "access the admin panel".to_string() }
                    }
                }
            };
        }
        Some(user) => user.is_admin(),
    };

    if !is_admin {
        return rsx! {
            main { class: "page",
                div { class: "container",
                    div { class: "card gate",
                        div { class: "gate-icon", "\u{26D4}" }
                        h2 { class: "section-title", "Access denied" }
                        p { class: "muted", "The admin panel is only available to administrators." }
                        div { class: "hero-actions", style: "margin-top: 1.5rem;",
                            Link { to: Route::Dashboard {}, class: "btn btn-primary", {t("dashboard")} }
                        }
                    }
                }
            }
        };
    }

    let role_options: Vec<SelectOption> = std::iter::once(SelectOption::new("all", "All Roles"))
        .chain(Role::ALL.iter().map(|r| SelectOption::new(r.as_str(), t(role_key(*r)))))
        .collect();
    let users = filter_users(&search(), role());
    let processed_pct = STATS.processed_datasets as f64 / STATS.total_datasets as f64 * 100.0;

    rsx! {
        main { class: "page",
            div { class: "container",
                header { class: "page-header",
                    h1 { class: "page-title", "Admin Panel" }
                    p { class: "page-subtitle", "Manage users, datasets and platform health" }
                }

                div { class: "grid grid-4",
                    StatCard {
                        label: "Total Users".to_string(),
                        value: STATS.total_users.to_string(),
                        icon: "\u{1F465}".to_string(),
                        detail: format!("{} active", STATS.active_users),
                    }
                    StatCard {
                        label: "Datasets".to_string(),
                        value: STATS.total_datasets.to_string(),
                        icon: "\u{1F4C1}".to_string(),
                        color: colors::SKY.to_string(),
                        detail: format!("{} processed", STATS.processed_datasets),
                    }
                    StatCard {
                        label: "Storage Used".to_string(),
                        value: format!("{} TB", STATS.storage_used),
                        icon: "\u{1F4BE}".to_string(),
                        color: colors::SAFFRON.to_string(),
                    }
                    StatCard {
                        label: "API Calls".to_string(),
                        value: STATS.api_calls.to_string(),
                        icon: "\u{26A1}".to_string(),
                        color: colors::GREEN.to_string(),
                        detail: format!("System health: {}", STATS.system_health),
                    }
                }

                div { class: "card", style: "margin-top: 1.5rem;",
                    h3 { "Dataset processing" }
                    ProgressBar { value: processed_pct, color: colors::GREEN.to_string(), show_label: true }
                }

                div { class: "card", style: "margin-top: 1.5rem;",
                    div { class: "row-between",
                        h3 { "Users" }
                        span { class: "muted", "{users.len()} of {USERS.len()}" }
                    }
                    div { class: "grid grid-2", style: "margin: 1rem 0;",
                        SearchInput {
                            value: search(),
                            oninput: move |value| search.set(value),
                            placeholder: "Search by email, name or organization...".to_string(),
                        }
                        Select {
                            value: role().as_str().to_string(),
                            options: role_options,
                            onchange: move |value: String| role.set(RoleFilter::parse(&value)),
                        }
                    }
                    table { class: "table",
                        thead {
                            tr {
                                th { "User" }
                                th { "Role" }
                                th { "Organization" }
                                th { "Datasets" }
                                th { "Last login" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for entry in users {
                                UserRow { key: "{entry.id}", user: *entry }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: AdminUser) -> Element {
    let t = use_translate();
    let name = user.full_name.unwrap_or("\u{2014}");
    let organization = user.organization.unwrap_or("\u{2014}");
    let last_login = user.last_login.map(format_timestamp).unwrap_or_else(|| "Never".to_string());
    let joined = format_timestamp(user.created_at);

    rsx! {
        tr {
            td {
                strong { "{name}" }
                p { class: "muted", "{user.email}" }
                p { class: "muted", "Joined {joined}" }
            }
            td { Badge { text: t(role_key(user.role)).to_string(), color: colors::role_color(user.role).to_string() } }
            td { "{organization}" }
            td { "{user.datasets_count}" }
            td { "{last_login}" }
            td { Badge { text: user.status.as_str().to_string(), color: status_color(user.status).to_string() } }
        }
    }
}
