//! Property-based tests for the wave renderer and the pure helpers
//!
//! Uses proptest to check invariants that must hold for any size, time
//! and layer parameters.

use leviathan_core::upload::format_file_size;
use leviathan_core::wave::{wave_y, LAYER_OFFSET, OCEAN_LAYERS, SAMPLE_STEP};
use leviathan_core::{translate, Language, Rgba, SurfaceSize, WaveLayer, WaveRenderer};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn layer_strategy() -> impl Strategy<Value = WaveLayer> {
    (0.0f64..50.0, 0.001f64..0.1, 0.001f64..0.1).prop_map(|(amplitude, frequency, speed)| WaveLayer {
        amplitude,
        frequency,
        speed,
        color: Rgba::new(6, 3, 141, 0.3),
    })
}

fn dimension_strategy() -> impl Strategy<Value = f64> {
    1.0f64..2000.0
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Same inputs, same output
    #[test]
    fn wave_y_is_deterministic(
        layer in layer_strategy(),
        index in 0usize..5,
        x in 0.0f64..2000.0,
        time in 0.0f64..1e6,
        baseline in 0.0f64..1000.0,
    ) {
        let a = wave_y(&layer, index, x, time, baseline);
        let b = wave_y(&layer, index, x, time, baseline);
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    /// A band never strays further than its amplitude from its own baseline
    #[test]
    fn wave_y_is_bounded_by_amplitude(
        layer in layer_strategy(),
        index in 0usize..5,
        x in 0.0f64..2000.0,
        time in 0.0f64..1e6,
        baseline in 0.0f64..1000.0,
    ) {
        let y = wave_y(&layer, index, x, time, baseline);
        let center = baseline + index as f64 * LAYER_OFFSET;
        prop_assert!((y - center).abs() <= layer.amplitude + 1e-9);
    }

    /// Each band samples floor(w / 2) + 1 points starting at x = 0
    #[test]
    fn frame_sample_count(width in dimension_strategy(), height in dimension_strategy()) {
        let bands = WaveRenderer::default().frame(width, height);
        prop_assert_eq!(bands.len(), OCEAN_LAYERS.len());

        let expected = (width / SAMPLE_STEP).floor() as usize + 1;
        for band in &bands {
            prop_assert_eq!(band.points.len(), expected);
            prop_assert_eq!(band.points[0].0, 0.0);
            prop_assert!(band.points.last().map_or(false, |p| p.0 <= width));
        }
    }

    /// Outlines close on the bottom edge so the fill covers the lower half
    #[test]
    fn frame_outline_closes_at_bottom(width in dimension_strategy(), height in dimension_strategy()) {
        for band in WaveRenderer::default().frame(width, height) {
            let outline: Vec<(f64, f64)> = band.outline().collect();
            let n = outline.len();
            prop_assert!(n >= 3);
            prop_assert_eq!(outline[n - 2], (width, height));
            prop_assert_eq!(outline[n - 1], (0.0, height));
            prop_assert_eq!(band.bottom_color, Rgba::TRANSPARENT_WHITE);
        }
    }

    /// Backing store is the CSS size scaled by the pixel ratio
    #[test]
    fn backing_size_tracks_pixel_ratio(
        w in 1.0f64..4000.0,
        h in 1.0f64..4000.0,
        dpr in 0.5f64..4.0,
    ) {
        let (bw, bh) = SurfaceSize::new(w, h, dpr).backing();
        prop_assert!((bw as f64 - w * dpr).abs() <= 0.5 + 1e-9);
        prop_assert!((bh as f64 - h * dpr).abs() <= 0.5 + 1e-9);
    }

    /// Sizes are always rendered with a known unit and no trailing zeros
    #[test]
    fn file_size_has_unit(bytes in 1u64..(1u64 << 40)) {
        let text = format_file_size(bytes);
        let (number, unit) = text.split_once(' ').unwrap();
        prop_assert!(["Bytes", "KB", "MB", "GB"].contains(&unit));
        prop_assert!(!number.ends_with('.'));
        prop_assert!(!(number.contains('.') && number.ends_with('0')));
    }

    /// Unknown keys come back unchanged
    #[test]
    fn translate_falls_back_to_key(key in "[a-z]{12,20}\\.missing") {
        for lang in Language::ALL {
            prop_assert_eq!(translate(lang, &key), key.as_str());
        }
    }
}
