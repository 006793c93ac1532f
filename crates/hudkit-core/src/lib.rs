#![forbid(unsafe_code)]

//! Core pixel-space primitives for hudkit.

pub mod geometry;

pub use geometry::{Point, Rect};
