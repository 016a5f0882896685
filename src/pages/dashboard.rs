//! Dashboard page: headline stats, charts, sampling map and alerts.

use dioxus::prelude::*;
use leviathan_core::catalog::dashboard::{
    refresh_dashboard, ABUNDANCE_TRENDS, ALERTS, DASHBOARD_REFRESH_DELAY, SPECIES_DISTRIBUTION, TOP_TAXA,
};
use leviathan_core::catalog::{format_timestamp, ConservationAlert, DashboardStats};
use leviathan_ui::{use_toaster, Badge, Button, ButtonVariant, StatCard};

use crate::components::{BarChart, BiodiversityMap, Datum, DonutChart, LineChart, SignInRequired};
use crate::context::{use_translate, use_uploads, use_user};
use crate::theme::colors;

#[component]
pub fn Dashboard() -> Element {
    let t = use_translate();
    let user = use_user();
    let uploads = use_uploads();
    let toaster = use_toaster();
    let mut loaded = use_signal(|| DashboardStats::demo(uploads.peek().len()));
    let mut refreshing = use_signal(|| false);

    if user.read().is_none() {
        return rsx! {
            main { class: "page",
                div { class: "container",
                    SignInRequired { action: "view the dashboard".to_string() }
                }
            }
        };
    }

    let on_refresh = move |_| {
        if refreshing() {
            return;
        }
        refreshing.set(true);
        spawn(async move {
            let datasets = uploads.peek().len();
            loaded.set(refresh_dashboard(datasets, DASHBOARD_REFRESH_DELAY).await);
            refreshing.set(false);
            toaster.success("Dashboard refreshed");
        });
    };

    let stats = loaded();
    let distribution: Vec<Datum> = SPECIES_DISTRIBUTION
        .iter()
        .map(|s| Datum::new(s.name, s.value as f64, s.color))
        .collect();
    let taxa: Vec<Datum> = TOP_TAXA
        .iter()
        .map(|s| Datum::new(s.name, s.abundance as f64, s.color))
        .collect();
    let months: Vec<String> = ABUNDANCE_TRENDS.iter().map(|p| p.month.to_string()).collect();
    let abundance: Vec<f64> = ABUNDANCE_TRENDS.iter().map(|p| p.abundance as f64).collect();
    let diversity: Vec<f64> = ABUNDANCE_TRENDS.iter().map(|p| p.diversity as f64).collect();

    rsx! {
        main { class: "page",
            div { class: "container",
                header { class: "page-header row-between",
                    div {
                        h1 { class: "page-title", {t("dashboard")} }
                        p { class: "page-subtitle", "Biodiversity overview across all processed eDNA samples" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        loading: refreshing(),
                        onclick: on_refresh,
                        "Refresh"
                    }
                }

                div { class: "grid grid-4",
                    StatCard {
                        label: t("totalSpecies").to_string(),
                        value: stats.total_species.to_string(),
                        icon: "\u{1F41F}".to_string(),
                        color: colors::NAVY.to_string(),
                        detail: "+12% from last month".to_string(),
                    }
                    StatCard {
                        label: t("diversityIndex").to_string(),
                        value: stats.diversity_index.to_string(),
                        icon: "\u{1F33F}".to_string(),
                        color: colors::GREEN.to_string(),
                        detail: "Shannon index x 100".to_string(),
                    }
                    StatCard {
                        label: "Datasets Processed".to_string(),
                        value: stats.datasets_processed.to_string(),
                        icon: "\u{1F4C1}".to_string(),
                        color: colors::SKY.to_string(),
                    }
                    StatCard {
                        label: t("alerts").to_string(),
                        value: stats.alerts_count.to_string(),
                        icon: "\u{26A0}".to_string(),
                        color: colors::SAFFRON.to_string(),
                    }
                }

                div { class: "grid grid-2", style: "margin-top: 1.5rem;",
                    div { class: "card",
                        h3 { {t("speciesDistribution")} }
                        DonutChart { data: distribution }
                    }
                    div { class: "card",
                        h3 { {t("topTaxa")} }
                        BarChart { data: taxa }
                    }
                    div { class: "card",
                        h3 { {t("abundanceTrends")} }
                        LineChart {
                            labels: months,
                            primary: abundance,
                            primary_label: "Abundance".to_string(),
                            secondary: diversity,
                            secondary_label: "Diversity".to_string(),
                        }
                    }
                    div { class: "card",
                        h3 { {t("samplingLocations")} }
                        BiodiversityMap {}
                    }
                }

                section { class: "card", style: "margin-top: 1.5rem;",
                    h3 { {t("alerts")} }
                    div { class: "stack",
                        for alert in ALERTS {
                            AlertRow { key: "{alert.id}", alert: *alert }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AlertRow(alert: ConservationAlert) -> Element {
    let t = use_translate();
    let color = colors::severity_color(alert.severity);
    let when = format_timestamp(alert.timestamp);

    rsx! {
        div { class: "alert-item", style: "border-left-color: {color};",
            div { class: "row-between",
                strong { "{alert.title}" }
                Badge { text: t(alert.severity.as_str()).to_string(), color: color.to_string() }
            }
            p { "{alert.description}" }
            p { class: "muted", "\u{1F4CD} {alert.location} \u{00B7} {when}" }
        }
    }
}
