//! Sampling-site map: hotspots projected onto a zoomable pseudo-map.

use dioxus::prelude::*;
use leviathan_core::catalog::dashboard::project_hotspots;

const DEFAULT_ZOOM: f64 = 8.0;
const MIN_ZOOM: f64 = 4.0;
const MAX_ZOOM: f64 = 16.0;
const ZOOM_STEP: f64 = 2.0;

/// Next zoom level, clamped to the supported range
pub fn step_zoom(current: f64, zoom_in: bool) -> f64 {
    let next = if zoom_in { current + ZOOM_STEP } else { current - ZOOM_STEP };
    next.clamp(MIN_ZOOM, MAX_ZOOM)
}

fn visible(left: f64, top: f64) -> bool {
    (0.0..=100.0).contains(&left) && (0.0..=100.0).contains(&top)
}

#[component]
pub fn BiodiversityMap() -> Element {
    let mut zoom = use_signal(|| DEFAULT_ZOOM);
    let mut hovered: Signal<Option<usize>> = use_signal(|| None);

    let markers: Vec<_> = project_hotspots(zoom())
        .into_iter()
        .enumerate()
        .filter(|(_, (_, left, top))| visible(*left, *top))
        .collect();

    rsx! {
        div { class: "map",
            div { class: "map-controls",
                button { title: "Zoom in", onclick: move |_| zoom.set(step_zoom(zoom(), true)), "+" }
                button { title: "Zoom out", onclick: move |_| zoom.set(step_zoom(zoom(), false)), "\u{2212}" }
            }
            for (i, (spot, left, top)) in markers {
                {
                    let size = spot.marker_size();
                    let color = spot.marker_color();
                    let coords = format!("{:.4}, {:.4}", spot.lat, spot.lng);
                    rsx! {
                        div {
                            key: "{spot.name}",
                            class: "map-marker",
                            style: "left: {left:.2}%; top: {top:.2}%; width: {size}px; height: {size}px; background: {color};",
                            onmouseenter: move |_| hovered.set(Some(i)),
                            onmouseleave: move |_| hovered.set(None),
                        }
                        if hovered() == Some(i) {
                            div {
                                class: "map-tooltip",
                                style: "left: {left:.2}%; top: {top:.2}%;",
                                strong { "{spot.name}" }
                                div { "{spot.species} species \u{00B7} diversity {spot.diversity}" }
                                div { class: "muted", "{coords}" }
                            }
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
    fn zoom_is_clamped() {
        assert_eq!(step_zoom(DEFAULT_ZOOM, true), 10.0);
        assert_eq!(step_zoom(MAX_ZOOM, true), MAX_ZOOM);
        assert_eq!(step_zoom(MIN_ZOOM, false), MIN_ZOOM);
    }

    #[test]
    fn default_zoom_shows_every_hotspot() {
        let shown = project_hotspots(DEFAULT_ZOOM)
            .into_iter()
            .filter(|(_, l, t)| visible(*l, *t))
            .count();
        assert_eq!(shown, leviathan_core::catalog::dashboard::HOTSPOTS.len());
    }
}
