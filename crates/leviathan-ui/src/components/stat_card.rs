//! Small display widgets: stat cards, progress bars and badges.

use dioxus::prelude::*;

/// Headline number with a label and icon
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] icon: Option<String>,
    /// CSS color for the icon tile
    #[props(default = "#06038D".to_string())]
    color: String,
    /// Secondary line, e.g. "+12% this month"
    #[props(default)]
    detail: Option<String>,
) -> Element {
    rsx! {
        div { class: "stat-card",
            if let Some(icon) = icon {
                div { class: "stat-icon", style: "background: {color};", "{icon}" }
            }
            div { class: "stat-body",
                div { class: "stat-value", "{value}" }
                div { class: "stat-label", "{label}" }
                if let Some(detail) = detail {
                    div { class: "stat-detail", "{detail}" }
                }
            }
        }
    }
}

/// Clamp a percentage into 0..=100
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[component]
pub fn ProgressBar(
    /// Percent complete
    value: f64,
    #[props(default = "#06038D".to_string())] color: String,
    #[props(default = false)] show_label: bool,
) -> Element {
    let pct = clamp_percent(value);

    rsx! {
        div { class: "progress",
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {pct}%; background: {color};" }
            }
            if show_label {
                span { class: "progress-label", "{pct:.0}%" }
            }
        }
    }
}

/// Rounded label tinted with `color`
#[component]
pub fn Badge(text: String, #[props(default = "#6B7280".to_string())] color: String) -> Element {
    rsx! {
        span {
            class: "badge",
            style: "color: {color}; border-color: {color};",
            "{text}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_clamped() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(65.0), 65.0);
        assert_eq!(clamp_percent(140.0), 100.0);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
    }
}
