#![forbid(unsafe_code)]

//! HUD widgets for pixel-surface hosts.

pub mod progress;

pub use progress::ProgressBar;

use hudkit_render::{GLYPH_WIDTH, Surface};
use unicode_segmentation::UnicodeSegmentation;

/// A `Widget` is a renderable HUD component.
///
/// Widgets own their on-screen placement and render themselves through the
/// host's [`Surface`] once per frame. Drawing never mutates the widget.
pub trait Widget {
    /// Draw the widget onto the surface.
    fn draw(&self, surface: &mut dyn Surface);
}

/// Pixel width of `text` drawn at the given scale.
///
/// Counts grapheme clusters: the host's bitmap font puts each cluster in one
/// glyph cell.
pub(crate) fn text_width(text: &str, scale: i32) -> i32 {
    let clusters = text.graphemes(true).count() as i32;
    clusters.saturating_mul(GLYPH_WIDTH).saturating_mul(scale)
}
