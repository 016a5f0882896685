//! Toast notifications
//!
//! Transient success/error messages stacked in the corner of the window.
//! Each toast dismisses itself after [`TOAST_DURATION`].

use std::time::Duration;

use dioxus::prelude::*;

use super::CloseButton;

pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "\u{2714}",
            ToastKind::Error => "\u{26A0}",
            ToastKind::Info => "\u{2139}",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered set of visible toasts, oldest first
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a toast; unknown ids are ignored
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Handle for raising toasts from any component
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
}

impl Toaster {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let mut queue = self.queue;
        let message = message.into();
        tracing::debug!(?kind, %message, "Showing toast");
        queue.write().push(kind, message);
    }
}

/// Create the window's toast queue and provide it as context.
///
/// Call once near the root, next to a [`ToastStack`].
pub fn use_toaster_provider() -> Toaster {
    use_context_provider(|| Toaster {
        queue: Signal::new(ToastQueue::default()),
    })
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

/// Renders every queued toast
#[component]
pub fn ToastStack() -> Element {
    let toaster = use_toaster();
    let toasts = toaster.queue.read().toasts().to_vec();

    rsx! {
        div { class: "toast-stack", role: "status", "aria-live": "polite",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let toaster = use_toaster();
    let id = toast.id;
    let icon = toast.kind.icon();

    // Lives as long as the item; dismissing early drops the timer
    use_future(move || async move {
        tokio::time::sleep(TOAST_DURATION).await;
        toaster.dismiss(id);
    });

    rsx! {
        div { class: toast.kind.class(),
            span { class: "toast-icon", "{icon}" }
            span { class: "toast-message", "{toast.message}" }
            CloseButton { onclick: move |_| toaster.dismiss(id) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "saved");
        let b = queue.push(ToastKind::Error, "failed");
        assert!(b > a);
        assert_eq!(queue.toasts().len(), 2);
        assert_eq!(queue.toasts()[0].message, "saved");
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Info, "one");
        let b = queue.push(ToastKind::Info, "two");
        queue.dismiss(a);
        queue.dismiss(a);
        queue.dismiss(999);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);
        queue.dismiss(b);
        assert!(queue.is_empty());
    }

    #[test]
    fn kind_classes() {
        assert_eq!(ToastKind::Success.class(), "toast toast-success");
        assert_eq!(ToastKind::Error.class(), "toast toast-error");
    }
}
