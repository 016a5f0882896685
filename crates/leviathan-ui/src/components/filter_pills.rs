//! Filter Pills Component
//!
//! Horizontal row of mutually exclusive filter buttons, used for the
//! category filters on the learning and conservation pages.

use dioxus::prelude::*;

/// A pill: filter value plus visible label
#[derive(Clone, PartialEq, Debug)]
pub struct Pill {
    pub value: String,
    pub label: String,
}

impl Pill {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    pub pills: Vec<Pill>,
    /// Value of the selected pill
    pub selected: String,
    pub on_select: EventHandler<String>,
    #[props(default = "Filter".to_string())]
    pub aria_label: String,
}

/// # Example
///
/// ```rust,ignore
/// let mut category = use_signal(|| "all".to_string());
///
/// rsx! {
///     FilterPills {
///         pills: vec![Pill::new("all", "All Modules"), Pill::new("basics", "Basics")],
///         selected: category(),
///         on_select: move |value| category.set(value),
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "filter-pills",
            role: "radiogroup",
            "aria-label": "{props.aria_label}",
            for pill in props.pills.iter() {
                {
                    let value = pill.value.clone();
                    let is_selected = props.selected == pill.value;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{pill.value}",
                            class: if is_selected { "pill selected" } else { "pill" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(value.clone()),
                            "{pill.label}"
                        }
                    }
                }
            }
        }
    }
}
