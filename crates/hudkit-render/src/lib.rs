#![forbid(unsafe_code)]

//! The render boundary for hudkit.
//!
//! Widgets draw through the [`Surface`] capability, a small set of pixel
//! primitives the host rendering engine supplies once per frame. This crate
//! defines that capability plus the color type its operations take; it never
//! rasterizes anything itself.

pub mod color;
#[cfg(any(test, feature = "test-helpers"))]
pub mod recording;
pub mod surface;

pub use color::Rgba;
#[cfg(any(test, feature = "test-helpers"))]
pub use recording::{DrawOp, RecordingSurface};
pub use surface::{GLYPH_HEIGHT, GLYPH_WIDTH, Surface};
