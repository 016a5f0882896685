//! Policy & governance page: region summary, reports and CSV export
//! (all reports, or one report at a time).

use std::path::PathBuf;

use dioxus::prelude::*;
use leviathan_core::catalog::policy::{
    critical_count, export_csv, export_report_csv, published_count, report_file_name, species_analyzed,
    CSV_FILE_NAME, RECENT_ACTIVITY, REPORTS, SUMMARY,
};
use leviathan_core::LeviathanResult;
use leviathan_core::catalog::{format_timestamp, PolicyReport, ReportStatus};
use leviathan_ui::{use_toaster, Badge, Button, ButtonVariant, StatCard};
use rfd::FileDialog;

use crate::context::use_translate;
use crate::theme::colors;

fn status_color(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Published => colors::SUCCESS,
        ReportStatus::Review => colors::CAUTION,
        ReportStatus::Draft => colors::GRAY,
    }
}

/// Ask where to save a CSV file, then write `contents` there.
///
/// Returns `Ok(None)` when the dialog was cancelled.
async fn save_csv(file_name: String, contents: LeviathanResult<String>) -> Result<Option<PathBuf>, String> {
    let contents = contents.map_err(|e| e.to_string())?;
    let target = tokio::task::spawn_blocking(move || {
        FileDialog::new()
            .set_file_name(&file_name)
            .add_filter("CSV", &["csv"])
            .save_file()
    })
    .await
    .map_err(|e| e.to_string())?;

    let Some(path) = target else {
        return Ok(None);
    };
    tokio::fs::write(&path, contents)
        .await
        .map_err(|e| e.to_string())?;
    Ok(Some(path))
}

#[component]
pub fn Policy() -> Element {
    let t = use_translate();
    let toaster = use_toaster();
    let mut exporting = use_signal(|| false);

    let on_export = move |_| {
        exporting.set(true);
        spawn(async move {
            match save_csv(CSV_FILE_NAME.to_string(), export_csv(REPORTS)).await {
                Ok(Some(path)) => {
                    tracing::info!(path = ?path, reports = REPORTS.len(), "Exported policy reports");
                    toaster.success("Report exported as CSV");
                }
                Ok(None) => tracing::debug!("CSV export cancelled"),
                Err(e) => {
                    tracing::error!("CSV export failed: {}", e);
                    toaster.error(format!("Export failed: {}", e));
                }
            }
            exporting.set(false);
        });
    };

    let published = published_count(REPORTS);
    let critical = critical_count(REPORTS);
    let species = species_analyzed(REPORTS);

    rsx! {
        main { class: "page",
            div { class: "container",
                header { class: "page-header row-between",
                    div {
                        h1 { class: "page-title", {t("policy")} }
                        p { class: "page-subtitle", "Evidence-based reports for marine conservation decisions" }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        loading: exporting(),
                        onclick: on_export,
                        "Export CSV"
                    }
                }

                div { class: "grid grid-4",
                    StatCard {
                        label: "Total Reports".to_string(),
                        value: REPORTS.len().to_string(),
                        icon: "\u{1F4C4}".to_string(),
                    }
                    StatCard {
                        label: "Published".to_string(),
                        value: published.to_string(),
                        icon: "\u{2705}".to_string(),
                        color: colors::SUCCESS.to_string(),
                    }
                    StatCard {
                        label: "Critical Priority".to_string(),
                        value: critical.to_string(),
                        icon: "\u{26A0}".to_string(),
                        color: colors::DANGER.to_string(),
                    }
                    StatCard {
                        label: "Species Analyzed".to_string(),
                        value: species.to_string(),
                        icon: "\u{1F41F}".to_string(),
                        color: colors::GREEN.to_string(),
                    }
                }

                div { class: "with-sidebar", style: "margin-top: 1.5rem;",
                    div { class: "stack",
                        h2 { class: "section-title", "Reports" }
                        for report in REPORTS {
                            ReportCard { key: "{report.id}", report: *report }
                        }
                    }

                    aside { class: "stack",
                        div { class: "card",
                            h3 { "Biodiversity Summary" }
                            div { class: "row-between", span { class: "muted", {t("totalSpecies")} } strong { "{SUMMARY.total_species}" } }
                            div { class: "row-between", span { class: "muted", "Endangered" } strong { "{SUMMARY.endangered_species}" } }
                            div { class: "row-between", span { class: "muted", "New discoveries" } strong { "{SUMMARY.new_discoveries}" } }
                            div { style: "margin-top: 0.75rem;",
                                Badge { text: SUMMARY.conservation_status.to_string(), color: colors::WARNING.to_string() }
                            }
                        }
                        div { class: "card",
                            h3 { "Key Threats" }
                            ul { class: "bullet-list",
                                for threat in SUMMARY.threats {
                                    li { key: "{threat}", "{threat}" }
                                }
                            }
                        }
                        div { class: "card",
                            h3 { "Recommendations" }
                            ul { class: "bullet-list",
                                for item in SUMMARY.recommendations {
                                    li { key: "{item}", "{item}" }
                                }
                            }
                        }
                        div { class: "card",
                            h3 { "Recent Activity" }
                            div { class: "stack",
                                for (action, item, when) in RECENT_ACTIVITY {
                                    div { key: "{item}",
                                        strong { "{action}" }
                                        p { "{item}" }
                                        p { class: "muted", "{when}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReportCard(report: PolicyReport) -> Element {
    let t = use_translate();
    let toaster = use_toaster();
    let mut exporting = use_signal(|| false);
    let priority_color = colors::severity_color(report.priority);
    let state_color = status_color(report.status);
    let updated = format_timestamp(report.updated_at);
    let data = report.data;

    let on_export = move |_| {
        exporting.set(true);
        spawn(async move {
            match save_csv(report_file_name(&report), export_report_csv(&report)).await {
                Ok(Some(path)) => {
                    tracing::info!(path = ?path, report = report.id, "Exported policy report");
                    toaster.success(format!("Exported \"{}\"", report.title));
                }
                Ok(None) => tracing::debug!(report = report.id, "Report export cancelled"),
                Err(e) => {
                    tracing::error!("Report export failed: {}", e);
                    toaster.error(format!("Export failed: {}", e));
                }
            }
            exporting.set(false);
        });
    };

    rsx! {
        div { class: "card",
            div { class: "row-between",
                div { class: "row",
                    span { class: "feature-icon", "{report.category.icon()}" }
                    h3 { "{report.title}" }
                }
                div { class: "row",
                    Badge { text: t(report.priority.as_str()).to_string(), color: priority_color.to_string() }
                    Badge { text: report.status.as_str().to_string(), color: state_color.to_string() }
                }
            }
            p { "{report.description}" }
            div { class: "grid grid-4", style: "margin-top: 0.75rem;",
                div { span { class: "muted", "Species" } p { strong { "{data.species_count}" } } }
                div { span { class: "muted", {t("diversityIndex")} } p { strong { "{data.diversity_index}" } } }
                div { span { class: "muted", "Threats" } p { strong { "{data.threats}" } } }
                div { span { class: "muted", "Recommendations" } p { strong { "{data.recommendations}" } } }
            }
            div { class: "row-between", style: "margin-top: 0.5rem;",
                p { class: "muted", "Updated {updated}" }
                Button {
                    variant: ButtonVariant::Outline,
                    loading: exporting(),
                    onclick: on_export,
                    "Export"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_a_color() {
        for status in [ReportStatus::Draft, ReportStatus::Review, ReportStatus::Published] {
            assert!(status_color(status).starts_with('#'));
        }
    }
}
