//! Inline SVG charts for the dashboard: donut, horizontal bars and a
//! two-series line chart.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;

use dioxus::prelude::*;

use crate::theme::colors;

/// One labelled value with its color
#[derive(Clone, PartialEq, Debug)]
pub struct Datum {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl Datum {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

// ============================================================================
// Geometry
// ============================================================================

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Ring segment path data for each value, starting at 12 o'clock and going
/// clockwise. Non-positive totals produce no segments.
pub fn donut_paths(values: &[f64], cx: f64, cy: f64, outer: f64, inner: f64) -> Vec<String> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|v| {
            // A full circle collapses to a point, so stop just short of it
            let sweep = (v.max(0.0) / total * TAU).min(TAU - 1e-4);
            let end = start + sweep;
            let large = if sweep > std::f64::consts::PI { 1 } else { 0 };

            let (x0, y0) = polar(cx, cy, outer, start);
            let (x1, y1) = polar(cx, cy, outer, end);
            let (x2, y2) = polar(cx, cy, inner, end);
            let (x3, y3) = polar(cx, cy, inner, start);

            let mut d = String::new();
            let _ = write!(
                d,
                "M{x0:.2} {y0:.2} A{outer} {outer} 0 {large} 1 {x1:.2} {y1:.2} \
                 L{x2:.2} {y2:.2} A{inner} {inner} 0 {large} 0 {x3:.2} {y3:.2} Z"
            );
            start = end;
            d
        })
        .collect()
}

/// Evenly spaced points scaled into `width × height` minus `pad` on every
/// side; larger values sit higher.
pub fn line_points(values: &[f64], width: f64, height: f64, pad: f64) -> Vec<(f64, f64)> {
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    let span = if hi > lo { hi - lo } else { 1.0 };
    let step = if values.len() > 1 {
        (width - 2.0 * pad) / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = pad + i as f64 * step;
            let y = height - pad - (v - lo) / span * (height - 2.0 * pad);
            (x, y)
        })
        .collect()
}

fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Components
// ============================================================================

#[component]
pub fn DonutChart(data: Vec<Datum>, #[props(default = "%".to_string())] unit: String) -> Element {
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let paths = donut_paths(&values, 100.0, 100.0, 90.0, 55.0);

    rsx! {
        svg { class: "chart", view_box: "0 0 200 200", role: "img",
            for (i, (d, datum)) in paths.iter().zip(data.iter()).enumerate() {
                path { key: "{i}", d: "{d}", fill: "{datum.color}",
                    title { "{datum.label}: {datum.value}{unit}" }
                }
            }
        }
        div { class: "chart-legend",
            for datum in data.iter() {
                span { key: "{datum.label}",
                    span { class: "legend-swatch", style: "background: {datum.color};" }
                    "{datum.label} ({datum.value}{unit})"
                }
            }
        }
    }
}

/// Horizontal bars, longest = largest value
#[component]
pub fn BarChart(data: Vec<Datum>) -> Element {
    const ROW: f64 = 26.0;
    const LABEL: f64 = 90.0;
    const WIDTH: f64 = 400.0;

    let max = data.iter().map(|d| d.value).fold(0.0, f64::max).max(1.0);
    let height = ROW * data.len() as f64;

    rsx! {
        svg { class: "chart", view_box: "0 0 {WIDTH} {height}", role: "img",
            for (i, datum) in data.iter().enumerate() {
                {
                    let y = i as f64 * ROW;
                    let bar = (WIDTH - LABEL - 40.0) * datum.value / max;
                    let text_y = y + ROW / 2.0 + 4.0;
                    let value_x = LABEL + bar + 6.0;
                    let bar_y = y + 4.0;
                    let bar_h = ROW - 8.0;
                    rsx! {
                        g { key: "{i}",
                            text { class: "chart-axis", x: "0", y: "{text_y}", "{datum.label}" }
                            rect {
                                x: "{LABEL}",
                                y: "{bar_y}",
                                width: "{bar:.1}",
                                height: "{bar_h}",
                                rx: "4",
                                fill: "{datum.color}",
                            }
                            text { class: "chart-axis", x: "{value_x:.1}", y: "{text_y}", "{datum.value}" }
                        }
                    }
                }
            }
        }
    }
}

/// Two series over shared x labels, each scaled to its own range
#[component]
pub fn LineChart(
    labels: Vec<String>,
    primary: Vec<f64>,
    primary_label: String,
    secondary: Vec<f64>,
    secondary_label: String,
) -> Element {
    const WIDTH: f64 = 480.0;
    const HEIGHT: f64 = 220.0;
    const PAD: f64 = 24.0;

    let first = line_points(&primary, WIDTH, HEIGHT, PAD);
    let second = line_points(&secondary, WIDTH, HEIGHT, PAD);
    let first_line = polyline(&first);
    let second_line = polyline(&second);
    let baseline = HEIGHT - PAD + 14.0;
    let axis_y = HEIGHT - PAD;
    let axis_end = WIDTH - PAD;
    let (navy, saffron) = (colors::NAVY, colors::SAFFRON);

    rsx! {
        svg { class: "chart", view_box: "0 0 {WIDTH} {HEIGHT}", role: "img",
            line {
                x1: "{PAD}", y1: "{axis_y}", x2: "{axis_end}", y2: "{axis_y}",
                stroke: colors::GRID,
            }
            polyline { points: "{first_line}", fill: "none", stroke: colors::NAVY, stroke_width: "2.5" }
            polyline { points: "{second_line}", fill: "none", stroke: colors::SAFFRON, stroke_width: "2.5" }
            for (i, (x, y)) in first.iter().enumerate() {
                circle { key: "a{i}", cx: "{x:.1}", cy: "{y:.1}", r: "3", fill: colors::NAVY }
            }
            for (i, (x, y)) in second.iter().enumerate() {
                circle { key: "b{i}", cx: "{x:.1}", cy: "{y:.1}", r: "3", fill: colors::SAFFRON }
            }
            for (i, (label, (x, _))) in labels.iter().zip(first.iter()).enumerate() {
                text { key: "l{i}", class: "chart-axis", x: "{x:.1}", y: "{baseline}", text_anchor: "middle", "{label}" }
            }
        }
        div { class: "chart-legend",
            span {
                span { class: "legend-swatch", style: "background: {navy};" }
                "{primary_label}"
            }
            span {
                span { class: "legend-swatch", style: "background: {saffron};" }
                "{secondary_label}"
            }
        }
    }
}
