#![forbid(unsafe_code)]

//! A surface that records draw calls instead of rasterizing them.
//!
//! Tests and benches assert against the recorded op sequence; nothing here
//! touches pixels.

use crate::color::Rgba;
use crate::surface::Surface;
use hudkit_core::geometry::{Point, Rect};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    RectOutline {
        rect: Rect,
        color: Rgba,
    },
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    Text {
        origin: Point,
        text: String,
        color: Rgba,
        scale: i32,
    },
}

/// A [`Surface`] that appends every call to an op log.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded ops, in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drop all recorded ops.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn draw_rect_outline(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(DrawOp::RectOutline { rect, color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn draw_text(&mut self, origin: Point, text: &str, color: Rgba, scale: i32) {
        self.ops.push(DrawOp::Text {
            origin,
            text: text.to_owned(),
            color,
            scale,
        });
    }
}
