//! Ocean Wave Background
//!
//! Animated translucent sine bands behind the hero and auth pages. Frames
//! come from a [`WaveAnimation`] running on the tokio runtime; the component
//! only mirrors the latest frame into SVG.

use std::rc::Rc;

use dioxus::prelude::*;
use leviathan_core::wave::SvgFrame;
use leviathan_core::{SurfaceSize, WaveAnimation, WaveRenderer};

/// Current window scale factor, 1.0 when it cannot be read
fn scale_factor() -> f64 {
    let factor = dioxus::desktop::window().scale_factor();
    if factor.is_finite() && factor > 0.0 {
        factor
    } else {
        1.0
    }
}

/// Full-bleed animated wave layer.
///
/// Place it as the first child of a `position: relative` container. The
/// animation starts on mount and stops when the component is dropped.
#[component]
pub fn OceanWave(
    /// Prefix for gradient ids; must be unique per page
    #[props(default = "ocean-wave".to_string())]
    id: String,
    #[props(default)] class: Option<String>,
) -> Element {
    let animation = use_hook(|| Rc::new(WaveAnimation::start(WaveRenderer::default(), SurfaceSize::default())));
    let mut frame = use_signal(SvgFrame::default);

    let frames_source = animation.clone();
    use_future(move || {
        let mut frames = frames_source.frames();
        async move {
            while frames.changed().await.is_ok() {
                let next = frames.borrow_and_update().clone();
                frame.set(next);
            }
        }
    });

    let resize_target = animation.clone();
    let onresize = move |e: Event<ResizeData>| match e.get_border_box_size() {
        Ok(size) => {
            let surface = SurfaceSize::new(size.width, size.height, scale_factor());
            tracing::trace!(?surface, "Wave surface resized");
            resize_target.resize(surface);
        }
        Err(err) => tracing::debug!("Wave surface size unavailable: {:?}", err),
    };

    let container_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("ocean-wave {}", extra),
        _ => "ocean-wave".to_string(),
    };
    let current = frame.read();

    rsx! {
        div {
            class: "{container_class}",
            "aria-hidden": "true",
            onresize: onresize,
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                class: "ocean-wave-svg",
                view_box: "{current.view_box}",
                preserve_aspect_ratio: "none",
                defs {
                    for (i, band) in current.bands.iter().enumerate() {
                        linearGradient {
                            key: "{i}",
                            id: "{id}-grad-{i}",
                            "gradientUnits": "userSpaceOnUse",
                            x1: "0",
                            y1: "0",
                            x2: "0",
                            y2: "{current.height}",
                            stop { offset: "0%", stop_color: "{band.top_color}" }
                            stop { offset: "100%", stop_color: "{band.bottom_color}" }
                        }
                    }
                }
                for (i, band) in current.bands.iter().enumerate() {
                    path {
                        key: "{i}",
                        d: "{band.path}",
                        fill: "url(#{id}-grad-{i})",
                    }
                }
            }
        }
    }
}
