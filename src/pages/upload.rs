//! Upload page: pick or drop dataset files and watch the simulated upload.

use dioxus::prelude::*;
use leviathan_core::upload::{format_file_size, UploadStats};
use leviathan_core::{DatasetFormat, UploadSimulator, UploadStatus, UploadedFile};
use leviathan_ui::{use_toaster, Badge, IconButton, ProgressBar};

use crate::components::{FileDropZone, PickedFile, SignInRequired};
use crate::context::{use_translate, use_uploads, use_user};
use crate::theme::colors;

/// Replace the entry with the same id, or append it
fn upsert(files: &mut Vec<UploadedFile>, file: &UploadedFile) {
    match files.iter_mut().find(|f| f.id == file.id) {
        Some(existing) => *existing = file.clone(),
        None => files.push(file.clone()),
    }
}

/// Drop a finished entry from the list. Entries still uploading are kept,
/// since the next progress update would put them back.
fn remove_file(files: &mut Vec<UploadedFile>, id: &str) -> bool {
    let before = files.len();
    files.retain(|f| f.id != id || f.status == UploadStatus::Uploading);
    files.len() != before
}

#[component]
pub fn Upload() -> Element {
    let t = use_translate();
    let user = use_user();
    let mut uploads = use_uploads();
    let toaster = use_toaster();

    if user.read().is_none() {
        return rsx! {
            main { class: "page",
                div { class: "container",
                    SignInRequired { action: "upload datasets".to_string() }
                }
            }
        };
    }

    let busy = uploads.read().iter().any(|f| f.status == UploadStatus::Uploading);
    let stats = UploadStats::from_files(&uploads.read());

    let on_files = move |picked: Vec<PickedFile>| {
        let mut accepted = Vec::new();
        for (name, size) in picked {
            match UploadedFile::new(name, size) {
                Ok(file) => accepted.push(file),
                Err(rejection) => {
                    tracing::warn!("Rejected upload: {}", rejection);
                    toaster.error(rejection.to_string());
                }
            }
        }
        if accepted.is_empty() {
            return;
        }

        let count = accepted.len();
        spawn(async move {
            let current = user.read().clone();
            let result = UploadSimulator::default()
                .run_all(current.as_ref(), accepted, |file| upsert(&mut uploads.write(), file))
                .await;
            match result {
                Ok(_) => toaster.success(format!("{} file(s) uploaded successfully", count)),
                Err(e) => toaster.error(e.to_string()),
            }
        });
    };

    let on_remove = move |id: String| {
        if remove_file(&mut uploads.write(), &id) {
            tracing::debug!(%id, "Removed file from upload list");
        }
    };

    let files = uploads.read().clone();

    rsx! {
        main { class: "page",
            div { class: "container",
                header { class: "page-header",
                    h1 { class: "page-title", {t("uploadDataset")} }
                    p { class: "page-subtitle", "Upload eDNA sequencing data for AI-powered species identification" }
                }

                div { class: "with-sidebar",
                    div { class: "stack",
                        FileDropZone {
                            on_files: on_files,
                            title: t("dragDropFiles").to_string(),
                            subtitle: t("supportedFormats").to_string(),
                            disabled: busy,
                        }

                        if !files.is_empty() {
                            div { class: "card",
                                h3 { {t("uploadProgress")} }
                                div { class: "stack",
                                    for file in files {
                                        FileRow { key: "{file.id}", file: file.clone(), on_remove }
                                    }
                                }
                            }
                        }
                    }

                    aside { class: "stack",
                        div { class: "card",
                            h3 { "Upload Statistics" }
                            div { class: "row-between", span { class: "muted", "Total files" } strong { "{stats.total}" } }
                            div { class: "row-between", span { class: "muted", "Processed" } strong { "{stats.processed}" } }
                            div { class: "row-between", span { class: "muted", {t("processing")} } strong { "{stats.processing}" } }
                        }
                        div { class: "card",
                            h3 { "Supported Formats" }
                            div { class: "stack",
                                for format in DatasetFormat::ALL {
                                    FormatInfo { key: "{format}", format }
                                }
                            }
                            p { class: "muted", style: "margin-top: 1rem;", "Maximum file size: 100 MB" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FileRow(file: UploadedFile, on_remove: EventHandler<String>) -> Element {
    let t = use_translate();
    let removable = file.status != UploadStatus::Uploading;
    let id = file.id.clone();
    let size = format_file_size(file.size);
    let (status, color) = match &file.status {
        UploadStatus::Uploading => (t("processing").to_string(), colors::SKY),
        UploadStatus::Completed => (t("completed").to_string(), colors::SUCCESS),
        UploadStatus::Error(message) => (message.clone(), colors::DANGER),
    };

    rsx! {
        div { class: "file-row",
            span { class: "file-icon", "{file.format.icon()}" }
            div { style: "flex: 1;",
                div { class: "row-between",
                    span { class: "file-name", "{file.name}" }
                    div { class: "row",
                        Badge { text: status, color: color.to_string() }
                        if removable {
                            IconButton {
                                onclick: move |_| on_remove.call(id.clone()),
                                aria_label: format!("Remove {}", file.name),
                                class: "close-btn".to_string(),
                                "\u{00D7}"
                            }
                        }
                    }
                }
                span { class: "file-meta", "{size} \u{00B7} {file.format}" }
                ProgressBar { value: file.progress as f64, color: color.to_string(), show_label: true }
            }
        }
    }
}

#[component]
fn FormatInfo(format: DatasetFormat) -> Element {
    let extensions = format.extensions().join(", ");

    rsx! {
        div { class: "row",
            span { class: "file-icon", "{format.icon()}" }
            div {
                strong { "{format.label()}" }
                p { class: "muted", "{extensions}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_replaces_by_id() {
        let mut files = Vec::new();
        let mut file = UploadedFile::new("a.csv", 10).unwrap();
        upsert(&mut files, &file);
        file.progress = 70;
        upsert(&mut files, &file);

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].progress, 70);

        let other = UploadedFile::new("b.fasta", 10).unwrap();
        upsert(&mut files, &other);
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_remove_file_by_id() {
        let mut done = UploadedFile::new("a.csv", 10).unwrap();
        done.status = UploadStatus::Completed;
        let mut failed = UploadedFile::new("b.fasta", 10).unwrap();
        failed.status = UploadStatus::Error("Upload failed".to_string());
        let mut files = vec![done.clone(), failed.clone()];

        assert!(remove_file(&mut files, &done.id));
        assert_eq!(files, vec![failed.clone()]);
        assert!(!remove_file(&mut files, &done.id));
        assert!(remove_file(&mut files, &failed.id));
        assert!(files.is_empty());
    }

    #[test]
    fn test_remove_file_keeps_uploading_entry() {
        let mut file = UploadedFile::new("reads.fq", 10).unwrap();
        file.status = UploadStatus::Uploading;
        let mut files = vec![file.clone()];

        assert!(!remove_file(&mut files, &file.id));
        assert_eq!(files.len(), 1);
    }
}
