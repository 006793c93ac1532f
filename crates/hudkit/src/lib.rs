#![forbid(unsafe_code)]

//! hudkit public facade crate.
//!
//! Re-exports the common types from the internal crates and offers a
//! lightweight prelude. Hosts implement [`Surface`] over their own rendering
//! engine, then hand it to widgets once per frame.
//!
//! # Example
//!
//! ```ignore
//! use hudkit::prelude::*;
//!
//! let mut health = ProgressBar::new();
//! health
//!     .set_position(Point::new(12, 12))
//!     .set_label("HP")
//!     .show_label(true);
//!
//! // In the frame update:
//! health.set_ratio(0.62);
//! // health.draw(&mut surface);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use hudkit_core::geometry::{Point, Rect};

// --- Render re-exports -----------------------------------------------------

pub use hudkit_render::color::Rgba;
pub use hudkit_render::surface::{GLYPH_HEIGHT, GLYPH_WIDTH, Surface};

// --- Widget re-exports -----------------------------------------------------

pub use hudkit_widgets::Widget;
pub use hudkit_widgets::progress::ProgressBar;

/// Convenience prelude for day-to-day usage.
pub mod prelude {
    pub use crate::{Point, ProgressBar, Rect, Rgba, Surface, Widget};
}
