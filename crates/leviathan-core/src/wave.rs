//! Animated ocean wave renderer.
//!
//! Draws a few translucent sine-wave bands, each filled with a vertical
//! gradient fading to transparent, and advances a frame counter on every
//! tick. The layer at index `i` sits at
//!
//! ```text
//! y(x) = baseline + amplitude * sin(x * frequency + time * speed) + i * LAYER_OFFSET
//! ```
//!
//! Drawing goes through the [`Surface`] trait. [`SvgSurface`] is the one the
//! desktop UI uses; [`WaveAnimation`] owns the frame loop.

use std::fmt;
use std::fmt::Write as _;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Vertical shift applied per layer index
pub const LAYER_OFFSET: f64 = 5.0;

/// Horizontal distance between sampled points
pub const SAMPLE_STEP: f64 = 2.0;

/// Interval between frames (~60 Hz)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// An sRGB color with alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent white, the bottom stop of every band gradient
    pub const TRANSPARENT_WHITE: Rgba = Rgba::new(255, 255, 255, 0.0);
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One sine-based band of the background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveLayer {
    pub amplitude: f64,
    /// Spatial frequency (radians per pixel)
    pub frequency: f64,
    /// Phase advance per frame
    pub speed: f64,
    pub color: Rgba,
}

/// Navy, sky and saffron layers of the hero background
pub const OCEAN_LAYERS: [WaveLayer; 3] = [
    WaveLayer {
        amplitude: 20.0,
        frequency: 0.02,
        speed: 0.02,
        color: Rgba::new(6, 3, 141, 0.3),
    },
    WaveLayer {
        amplitude: 15.0,
        frequency: 0.03,
        speed: 0.015,
        color: Rgba::new(74, 144, 226, 0.4),
    },
    WaveLayer {
        amplitude: 25.0,
        frequency: 0.015,
        speed: 0.025,
        color: Rgba::new(255, 103, 31, 0.2),
    },
];

/// Vertical position of `layer` (drawn at `index`) at horizontal position `x`.
pub fn wave_y(layer: &WaveLayer, index: usize, x: f64, time: f64, baseline: f64) -> f64 {
    baseline + layer.amplitude * (x * layer.frequency + time * layer.speed).sin() + index as f64 * LAYER_OFFSET
}

/// A closed, gradient-filled polygon produced for one layer.
///
/// The outline starts at `(0, height / 2)`, runs through `points`, then
/// closes along the bottom edge.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveBand {
    pub points: Vec<(f64, f64)>,
    pub width: f64,
    pub height: f64,
    pub top_color: Rgba,
    pub bottom_color: Rgba,
}

impl WaveBand {
    /// Full outline including the bottom corners
    pub fn outline(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        std::iter::once((0.0, self.height / 2.0))
            .chain(self.points.iter().copied())
            .chain([(self.width, self.height), (0.0, self.height)])
    }
}

/// Something the renderer can draw on.
pub trait Surface {
    /// Drawable size in CSS pixels, or `None` when no drawing context exists
    fn size(&self) -> Option<(f64, f64)>;
    fn clear(&mut self);
    fn fill_band(&mut self, band: &WaveBand);
}

/// CSS size of a surface plus the display's device pixel ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            css_width: 0.0,
            css_height: 0.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl SurfaceSize {
    pub fn new(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            css_width,
            css_height,
            device_pixel_ratio,
        }
    }

    /// Backing resolution `(width, height)` in device pixels
    pub fn backing(&self) -> (u32, u32) {
        let dpr = if self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        };
        let px = |v: f64| (v.max(0.0) * dpr).round() as u32;
        (px(self.css_width), px(self.css_height))
    }

    pub fn is_drawable(&self) -> bool {
        self.css_width > 0.0 && self.css_height > 0.0
    }
}

/// Frame generator holding the layer set and the frame counter.
#[derive(Debug, Clone)]
pub struct WaveRenderer {
    layers: Vec<WaveLayer>,
    time: u64,
}

impl Default for WaveRenderer {
    fn default() -> Self {
        Self::new(OCEAN_LAYERS.to_vec())
    }
}

impl WaveRenderer {
    pub fn new(layers: Vec<WaveLayer>) -> Self {
        Self { layers, time: 0 }
    }

    pub fn layers(&self) -> &[WaveLayer] {
        &self.layers
    }

    /// Frames drawn so far
    pub fn time(&self) -> u64 {
        self.time
    }

    /// Compute the bands for the current time without advancing it.
    pub fn frame(&self, width: f64, height: f64) -> Vec<WaveBand> {
        let baseline = height / 2.0;
        let time = self.time as f64;
        let samples = (width / SAMPLE_STEP).floor() as usize + 1;

        self.layers
            .iter()
            .enumerate()
            .map(|(index, layer)| WaveBand {
                points: (0..samples)
                    .map(|i| {
                        let x = i as f64 * SAMPLE_STEP;
                        (x, wave_y(layer, index, x, time, baseline))
                    })
                    .collect(),
                width,
                height,
                top_color: layer.color,
                bottom_color: Rgba::TRANSPARENT_WHITE,
            })
            .collect()
    }

    /// Clear the surface, draw every band, and advance the frame counter.
    ///
    /// Returns `false` without touching anything when the surface has no
    /// drawable area.
    pub fn tick(&mut self, surface: &mut impl Surface) -> bool {
        let Some((width, height)) = surface.size().filter(|(w, h)| *w > 0.0 && *h > 0.0) else {
            return false;
        };

        surface.clear();
        for band in self.frame(width, height) {
            surface.fill_band(&band);
        }
        self.time += 1;
        true
    }
}

/// One band rendered as SVG path data plus gradient stops
#[derive(Debug, Clone, PartialEq)]
pub struct SvgBand {
    pub path: String,
    pub top_color: String,
    pub bottom_color: String,
}

/// A complete SVG frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SvgFrame {
    /// `viewBox` in backing (device) pixels
    pub view_box: String,
    /// Backing height; every band's gradient fades from 0 to here
    pub height: u32,
    pub bands: Vec<SvgBand>,
}

/// Surface that records bands as SVG path data in device pixels.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    size: SurfaceSize,
    bands: Vec<SvgBand>,
}

impl SvgSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            bands: Vec::new(),
        }
    }

    /// Apply a new CSS size / pixel ratio; takes effect on the next draw
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    pub fn surface_size(&self) -> SurfaceSize {
        self.size
    }

    /// Snapshot of what has been drawn since the last clear
    pub fn frame(&self) -> SvgFrame {
        let (w, h) = self.size.backing();
        SvgFrame {
            view_box: format!("0 0 {} {}", w, h),
            height: h,
            bands: self.bands.clone(),
        }
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> Option<(f64, f64)> {
        self.size
            .is_drawable()
            .then_some((self.size.css_width, self.size.css_height))
    }

    fn clear(&mut self) {
        self.bands.clear();
    }

    fn fill_band(&mut self, band: &WaveBand) {
        let scale = self.size.device_pixel_ratio.max(f64::EPSILON);
        let mut path = String::with_capacity(band.points.len() * 16);
        for (i, (x, y)) in band.outline().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(path, "{}{:.1} {:.1} ", cmd, x * scale, y * scale);
        }
        path.push('Z');

        self.bands.push(SvgBand {
            path,
            top_color: band.top_color.to_string(),
            bottom_color: band.bottom_color.to_string(),
        });
    }
}

/// Running frame loop.
///
/// Ticks a [`WaveRenderer`] on an [`SvgSurface`] every [`FRAME_INTERVAL`]
/// and publishes each frame on a watch channel. Resizes are picked up
/// before the next frame is drawn. Dropping the animation cancels the loop.
pub struct WaveAnimation {
    size: Arc<Mutex<SurfaceSize>>,
    frames: watch::Receiver<SvgFrame>,
    task: JoinHandle<()>,
}

impl WaveAnimation {
    /// Start animating. Must be called from within a tokio runtime.
    pub fn start(renderer: WaveRenderer, size: SurfaceSize) -> Self {
        let shared_size = Arc::new(Mutex::new(size));
        let (tx, frames) = watch::channel(SvgFrame::default());

        let loop_size = shared_size.clone();
        let task = tokio::spawn(async move {
            let mut renderer = renderer;
            let mut surface = SvgSurface::new(size);
            let mut ticker = tokio::time::interval(FRAME_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                let current = *loop_size.lock();
                if current != surface.surface_size() {
                    surface.resize(current);
                }
                if renderer.tick(&mut surface) && tx.send(surface.frame()).is_err() {
                    break;
                }
            }
            debug!(frames = renderer.time(), "Wave animation stopped");
        });

        debug!(?size, "Wave animation started");

        Self {
            size: shared_size,
            frames,
            task,
        }
    }

    /// Record a new surface size for the next frame
    pub fn resize(&self, size: SurfaceSize) {
        *self.size.lock() = size;
    }

    /// Receiver of rendered frames
    pub fn frames(&self) -> watch::Receiver<SvgFrame> {
        self.frames.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop the frame loop
    pub fn stop(self) {}
}

impl Drop for WaveAnimation {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface that records calls for inspection
    #[derive(Default)]
    struct RecordingSurface {
        size: Option<(f64, f64)>,
        clears: usize,
        bands: Vec<WaveBand>,
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> Option<(f64, f64)> {
            self.size
        }
        fn clear(&mut self) {
            self.clears += 1;
            self.bands.clear();
        }
        fn fill_band(&mut self, band: &WaveBand) {
            self.bands.push(band.clone());
        }
    }

    #[test]
    fn test_wave_y_formula() {
        let layer = OCEAN_LAYERS[1];
        let expected = 100.0 + 15.0 * (40.0_f64 * 0.03 + 7.0 * 0.015).sin() + 5.0;
        assert_eq!(wave_y(&layer, 1, 40.0, 7.0, 100.0), expected);
    }

    #[test]
    fn test_frame_sample_count_includes_right_edge() {
        let renderer = WaveRenderer::default();
        let bands = renderer.frame(100.0, 50.0);
        assert_eq!(bands.len(), 3);
        for band in &bands {
            assert_eq!(band.points.len(), 51);
            assert_eq!(band.points.last().unwrap().0, 100.0);
        }
    }

    #[test]
    fn test_layers_offset_by_index_at_time_zero() {
        // A flat layer makes the per-index offset visible on its own
        let flat = WaveLayer {
            amplitude: 0.0,
            frequency: 0.1,
            speed: 0.1,
            color: Rgba::new(0, 0, 0, 1.0),
        };
        let renderer = WaveRenderer::new(vec![flat; 3]);
        let bands = renderer.frame(10.0, 40.0);
        assert_eq!(bands[0].points[0].1, 20.0);
        assert_eq!(bands[1].points[0].1, 25.0);
        assert_eq!(bands[2].points[0].1, 30.0);
    }

    #[test]
    fn test_tick_clears_draws_and_advances() {
        let mut renderer = WaveRenderer::default();
        let mut surface = RecordingSurface {
            size: Some((200.0, 100.0)),
            ..Default::default()
        };

        assert!(renderer.tick(&mut surface));
        assert!(renderer.tick(&mut surface));
        assert_eq!(surface.clears, 2);
        assert_eq!(surface.bands.len(), 3);
        assert_eq!(renderer.time(), 2);
    }

    #[test]
    fn test_tick_without_context_does_nothing() {
        let mut renderer = WaveRenderer::default();
        let mut surface = RecordingSurface::default();
        assert!(!renderer.tick(&mut surface));

        let mut empty = RecordingSurface {
            size: Some((0.0, 100.0)),
            ..Default::default()
        };
        assert!(!renderer.tick(&mut empty));
        assert_eq!(empty.clears, 0);
        assert_eq!(renderer.time(), 0);
    }

    #[test]
    fn test_band_outline_closes_to_bottom() {
        let renderer = WaveRenderer::default();
        let band = &renderer.frame(4.0, 10.0)[0];
        let outline: Vec<_> = band.outline().collect();
        assert_eq!(outline.first(), Some(&(0.0, 5.0)));
        assert_eq!(&outline[outline.len() - 2..], &[(4.0, 10.0), (0.0, 10.0)]);
    }

    #[test]
    fn test_backing_size_uses_pixel_ratio() {
        assert_eq!(SurfaceSize::new(300.0, 150.0, 2.0).backing(), (600, 300));
        assert_eq!(SurfaceSize::new(101.0, 51.0, 1.5).backing(), (152, 77));
        assert_eq!(SurfaceSize::new(10.0, 10.0, 0.0).backing(), (10, 10));
    }

    #[test]
    fn test_svg_surface_scales_to_device_pixels() {
        let mut renderer = WaveRenderer::new(vec![WaveLayer {
            amplitude: 0.0,
            ..OCEAN_LAYERS[0]
        }]);
        let mut surface = SvgSurface::new(SurfaceSize::new(4.0, 10.0, 2.0));
        renderer.tick(&mut surface);

        let frame = surface.frame();
        assert_eq!(frame.view_box, "0 0 8 20");
        assert_eq!(frame.height, 20);
        assert_eq!(frame.bands.len(), 1);
        assert!(frame.bands[0].path.starts_with("M0.0 10.0 L0.0 10.0"));
        assert!(frame.bands[0].path.ends_with("L8.0 20.0 L0.0 20.0 Z"));
        assert_eq!(frame.bands[0].top_color, "rgba(6, 3, 141, 0.3)");
        assert_eq!(frame.bands[0].bottom_color, "rgba(255, 255, 255, 0)");
    }

    #[tokio::test(start_paused = true)]
    async fn test_animation_publishes_frames_and_resizes() {
        let animation = WaveAnimation::start(WaveRenderer::default(), SurfaceSize::new(100.0, 50.0, 1.0));
        let mut frames = animation.frames();

        frames.changed().await.unwrap();
        assert_eq!(frames.borrow_and_update().view_box, "0 0 100 50");

        animation.resize(SurfaceSize::new(100.0, 50.0, 2.0));
        frames.changed().await.unwrap();
        assert_eq!(frames.borrow_and_update().view_box, "0 0 200 100");
        assert!(animation.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_animation_stops_loop() {
        let animation = WaveAnimation::start(WaveRenderer::default(), SurfaceSize::new(10.0, 10.0, 1.0));
        let mut frames = animation.frames();
        frames.changed().await.unwrap();

        drop(animation);
        // Sender lives in the aborted task, so the channel closes
        assert!(frames.changed().await.is_err());
    }
}
