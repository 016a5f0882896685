//! Dataset drop zone
//!
//! Files arrive either from the native picker or by drag and drop; the
//! component only reports `(name, size)` pairs. Format and size checks
//! happen in the page.

use std::path::PathBuf;

use dioxus::prelude::*;
use leviathan_core::DatasetFormat;
use rfd::FileDialog;

/// A file chosen by the user: display name plus size in bytes
pub type PickedFile = (String, u64);

fn describe(path: PathBuf) -> Option<PickedFile> {
    let name = path.file_name()?.to_str()?.to_string();
    match std::fs::metadata(&path) {
        Ok(meta) => Some((name, meta.len())),
        Err(e) => {
            tracing::warn!(?path, "Could not read file metadata: {}", e);
            None
        }
    }
}

/// Turn a dropped path and its size into a [`PickedFile`].
///
/// A file whose size cannot be read is skipped, so it never slips past the
/// size cap as an empty file.
fn dropped(path: String, size: Option<u64>) -> Option<PickedFile> {
    let Some(size) = size else {
        tracing::warn!(%path, "Skipping dropped file with unreadable size");
        return None;
    };
    let display = PathBuf::from(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or(path);
    Some((display, size))
}

#[component]
pub fn FileDropZone(
    on_files: EventHandler<Vec<PickedFile>>,
    title: String,
    subtitle: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    let mut picking = use_signal(|| false);
    let mut dragging = use_signal(|| false);

    let browse = move |_| {
        if picking() {
            return;
        }
        picking.set(true);

        spawn(async move {
            // Picker blocks, keep it off the UI thread
            let picked = tokio::task::spawn_blocking(move || {
                let extensions = DatasetFormat::all_extensions();
                FileDialog::new()
                    .add_filter("datasets", extensions.as_slice())
                    .set_title("Select dataset files")
                    .pick_files()
                    .map(|paths| paths.into_iter().filter_map(describe).collect::<Vec<_>>())
            })
            .await;

            match picked {
                Ok(Some(files)) if !files.is_empty() => on_files.call(files),
                Ok(_) => {}
                Err(e) => tracing::error!("File picker failed: {:?}", e),
            }
            picking.set(false);
        });
    };

    let ondrop = move |evt: DragEvent| {
        evt.prevent_default();
        dragging.set(false);
        let Some(engine) = evt.files() else {
            return;
        };

        spawn(async move {
            let mut files = Vec::new();
            for name in engine.files() {
                let size = engine.file_size(&name).await;
                files.extend(dropped(name, size));
            }
            if !files.is_empty() {
                on_files.call(files);
            }
        });
    };

    rsx! {
        div {
            class: if dragging() { "dropzone dragging" } else { "dropzone" },
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| dragging.set(false),
            ondrop: ondrop,
            div { class: "dropzone-icon", "\u{1F4C2}" }
            h3 { "{title}" }
            p { class: "muted", "{subtitle}" }
            p { class: "muted", "Max 100 MB per file" }
            div { style: "margin-top: 1rem;",
                button {
                    class: "btn btn-primary",
                    disabled: disabled || picking(),
                    onclick: browse,
                    if picking() { "Opening..." } else { "Browse files" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropped_uses_file_name() {
        assert_eq!(
            dropped("/data/run1/reads.fastq".to_string(), Some(42)),
            Some(("reads.fastq".to_string(), 42))
        );
    }

    #[test]
    fn test_dropped_without_size_is_skipped() {
        assert_eq!(dropped("/data/huge.fasta".to_string(), None), None);
    }
}
