#![forbid(unsafe_code)]

//! Progress bar widget.

use crate::{Widget, text_width};
use hudkit_core::geometry::{Point, Rect};
use hudkit_render::{GLYPH_HEIGHT, Rgba, Surface};

/// Default width-to-height ratio.
const DEFAULT_ASPECT: i32 = 8;

/// Default bar height in pixels.
const DEFAULT_HEIGHT: i32 = 16;

/// Bar height at which the label renders at scale 1.
///
/// The label scale is `height / LABEL_REFERENCE_HEIGHT` (integer division),
/// so bars shorter than this never carry a label.
const LABEL_REFERENCE_HEIGHT: i32 = 16;

/// A widget to display a progress bar: a bordered rectangle with a fill that
/// tracks a ratio in `0.0..=1.0`, and an optional label above it.
///
/// The bar keeps a fixed width-to-height aspect ratio, so resizing means
/// setting the height and letting the width follow. All setters chain and
/// every invalid input is clamped or ignored, never signaled.
///
/// # Examples
///
/// ```ignore
/// use hudkit_widgets::ProgressBar;
/// use hudkit_core::geometry::Point;
///
/// let mut health = ProgressBar::new();
/// health
///     .set_position(Point::new(12, 12))
///     .set_label("HP")
///     .show_label(true);
///
/// // Per frame:
/// health.set_ratio(0.62);
/// // health.draw(&mut surface);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    height: i32,
    width: i32,
    aspect: i32,
    position: Point,
    fill_color: Rgba,
    border_color: Rgba,
    ratio: f32,
    label: String,
    label_visible: bool,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::with_aspect(DEFAULT_ASPECT)
    }
}

impl ProgressBar {
    /// Create a bar with the default 8:1 aspect ratio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bar whose width stays `aspect` times its height.
    ///
    /// The ratio is fixed for the bar's lifetime; values below 1 fall back
    /// to the default of 8.
    pub fn with_aspect(aspect: i32) -> Self {
        let aspect = if aspect < 1 { DEFAULT_ASPECT } else { aspect };
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_HEIGHT * aspect,
            aspect,
            position: Point::ORIGIN,
            fill_color: Rgba::GREEN,
            border_color: Rgba::WHITE,
            ratio: 0.1,
            label: String::from("PLACEHOLDER"),
            label_visible: false,
        }
    }

    /// Set the bar height; the width follows at the fixed aspect ratio.
    ///
    /// Heights of 1 px or less leave no room for the fill inset and are
    /// ignored.
    pub fn set_height(&mut self, height: i32) -> &mut Self {
        if height > 1 {
            self.height = height;
            self.width = height.saturating_mul(self.aspect);
        }
        self
    }

    /// Move the top-left anchor; all drawing extends down and right of it.
    pub fn set_position(&mut self, position: Point) -> &mut Self {
        self.position = position;
        self
    }

    /// Set the fill color.
    pub fn set_fill_color(&mut self, color: Rgba) -> &mut Self {
        self.fill_color = color;
        self
    }

    /// Set the border color.
    pub fn set_border_color(&mut self, color: Rgba) -> &mut Self {
        self.border_color = color;
        self
    }

    /// Set the fill ratio, clamped to `0.0..=1.0`. NaN is ignored.
    pub fn set_ratio(&mut self, ratio: f32) -> &mut Self {
        if !ratio.is_nan() {
            self.ratio = ratio.clamp(0.0, 1.0);
        }
        self
    }

    /// Advance the fill ratio, saturating at 1.0.
    ///
    /// Deltas that don't compare `>= 0` (negative, NaN) are ignored; this
    /// method only moves the bar forward.
    pub fn increase(&mut self, delta: f32) -> &mut Self {
        if delta >= 0.0 {
            self.ratio = (self.ratio + delta).min(1.0);
        }
        self
    }

    /// Pull the fill ratio back, saturating at 0.0.
    ///
    /// Deltas that don't compare `>= 0` (negative, NaN) are ignored; this
    /// method only moves the bar backward.
    pub fn decrease(&mut self, delta: f32) -> &mut Self {
        if delta >= 0.0 {
            self.ratio = (self.ratio - delta).max(0.0);
        }
        self
    }

    /// Show or hide the label.
    pub fn show_label(&mut self, show: bool) -> &mut Self {
        self.label_visible = show;
        self
    }

    /// Set the label text.
    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    /// Current height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Current width in pixels (always `height * aspect`).
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The fixed width-to-height ratio.
    pub fn aspect(&self) -> i32 {
        self.aspect
    }

    /// Top-left anchor.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current fill ratio in `0.0..=1.0`.
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Fill ratio as a whole percentage.
    pub fn percent(&self) -> u8 {
        (self.ratio * 100.0).round() as u8
    }

    /// Label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the label is set to render.
    ///
    /// Even a visible label is suppressed on bars shorter than 16 px; see
    /// [`label_bounds`](Self::label_bounds).
    pub fn label_visible(&self) -> bool {
        self.label_visible
    }

    /// The outline rectangle, for host-side hit testing.
    pub fn bounds(&self) -> Rect {
        Rect::at(self.position, self.width, self.height)
    }

    /// Where the label lands when it renders.
    ///
    /// `None` when the label is hidden or the bar is too short to carry one.
    pub fn label_bounds(&self) -> Option<Rect> {
        let scale = self.label_scale();
        if !self.label_visible || scale == 0 {
            return None;
        }
        Some(Rect::at(
            self.label_origin(scale),
            text_width(&self.label, scale),
            GLYPH_HEIGHT * scale,
        ))
    }

    /// Label scale factor derived from the bar height. Zero suppresses the
    /// label.
    fn label_scale(&self) -> i32 {
        self.height / LABEL_REFERENCE_HEIGHT
    }

    /// Top-left corner of the label: one glyph row above the bar, nudged
    /// right so it stays flush with the border across scales.
    fn label_origin(&self, scale: i32) -> Point {
        self.position.offset(2 - scale, -(scale * GLYPH_HEIGHT))
    }
}

impl Widget for ProgressBar {
    fn draw(&self, surface: &mut dyn Surface) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_draw",
            widget = "ProgressBar",
            x = self.position.x,
            y = self.position.y,
            w = self.width,
            h = self.height
        )
        .entered();

        surface.draw_rect_outline(self.bounds(), self.border_color);

        // Fill sits one pixel inside the border; its width is a linear
        // function of the ratio, truncated to whole pixels.
        let fill_width = ((self.width - 1) as f32 * self.ratio) as i32;
        surface.fill_rect(
            Rect::at(self.position.offset(1, 1), fill_width, self.height - 1),
            self.fill_color,
        );

        let scale = self.label_scale();
        if self.label_visible && scale != 0 {
            surface.draw_text(self.label_origin(scale), &self.label, Rgba::WHITE, scale);
        }
    }
}
