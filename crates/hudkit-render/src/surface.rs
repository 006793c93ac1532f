#![forbid(unsafe_code)]

//! The host surface capability.

use crate::color::Rgba;
use hudkit_core::geometry::{Point, Rect};

/// Pixel width of one glyph cell at text scale 1.
///
/// The pixel engines this library targets ship a fixed 8x8 bitmap font;
/// [`Surface::draw_text`]'s scale multiplies this cell.
pub const GLYPH_WIDTH: i32 = 8;

/// Pixel height of one glyph cell at text scale 1.
pub const GLYPH_HEIGHT: i32 = 8;

/// Drawing primitives a host rendering engine supplies to widgets.
///
/// The host owns the render loop and the actual framebuffer; widgets only
/// ever borrow a surface for the duration of a draw call. Implementations
/// clip to their own bounds, so callers are free to draw partly or fully
/// off-surface.
pub trait Surface {
    /// Draw an unfilled rectangle outline.
    fn draw_rect_outline(&mut self, rect: Rect, color: Rgba);

    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Draw `text` with its top-left corner at `origin`.
    ///
    /// Each grapheme cluster occupies [`GLYPH_WIDTH`] x [`GLYPH_HEIGHT`]
    /// pixels times `scale`.
    fn draw_text(&mut self, origin: Point, text: &str, color: Rgba, scale: i32);
}
