#![forbid(unsafe_code)]

//! Integration tests for Widget + Surface.
//!
//! A minimal host-side raster implements [`Surface`] the way a pixel engine
//! would (exclusive edges, clipping at the grid bounds), and the assertions
//! check what actually lands on the grid.

use hudkit_core::geometry::{Point, Rect};
use hudkit_render::{GLYPH_HEIGHT, GLYPH_WIDTH, Rgba, Surface};
use hudkit_widgets::Widget;
use hudkit_widgets::progress::ProgressBar;

/// A toy framebuffer: row-major pixels over a black background.
struct PixelGrid {
    width: i32,
    height: i32,
    pixels: Vec<Rgba>,
}

impl PixelGrid {
    fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::BLACK; (width * height) as usize],
        }
    }

    fn get(&self, x: i32, y: i32) -> Rgba {
        self.pixels[(y * self.width + x) as usize]
    }

    fn set(&mut self, x: i32, y: i32, color: Rgba) {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }
}

impl Surface for PixelGrid {
    fn draw_rect_outline(&mut self, rect: Rect, color: Rgba) {
        if rect.is_empty() {
            return;
        }
        for x in rect.left()..rect.right() {
            self.set(x, rect.top(), color);
            self.set(x, rect.bottom() - 1, color);
        }
        for y in rect.top()..rect.bottom() {
            self.set(rect.left(), y, color);
            self.set(rect.right() - 1, y, color);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                self.set(x, y, color);
            }
        }
    }

    fn draw_text(&mut self, origin: Point, text: &str, color: Rgba, scale: i32) {
        // Block glyphs are enough here: one filled cell per character.
        let cell_w = GLYPH_WIDTH * scale;
        let cell_h = GLYPH_HEIGHT * scale;
        for (i, _) in text.chars().enumerate() {
            let x = origin.x + i as i32 * cell_w;
            self.fill_rect(Rect::new(x, origin.y, cell_w, cell_h), color);
        }
    }
}

#[test]
fn half_full_bar_rasterizes_border_and_fill() {
    let mut grid = PixelGrid::new(140, 20);
    let mut bar = ProgressBar::new();
    bar.set_ratio(0.5);
    bar.draw(&mut grid);

    // Border corners
    assert_eq!(grid.get(0, 0), Rgba::WHITE);
    assert_eq!(grid.get(127, 0), Rgba::WHITE);
    assert_eq!(grid.get(0, 15), Rgba::WHITE);
    assert_eq!(grid.get(127, 15), Rgba::WHITE);

    // Fill spans columns 1..=63 at ratio 0.5
    assert_eq!(grid.get(1, 1), Rgba::GREEN);
    assert_eq!(grid.get(63, 1), Rgba::GREEN);
    assert_eq!(grid.get(64, 1), Rgba::BLACK);

    // Interior right of the fill stays unpainted up to the border
    assert_eq!(grid.get(126, 1), Rgba::BLACK);
    assert_eq!(grid.get(127, 1), Rgba::WHITE);

    // Nothing outside the outline
    assert_eq!(grid.get(128, 0), Rgba::BLACK);
    assert_eq!(grid.get(0, 16), Rgba::BLACK);
}

#[test]
fn label_lands_one_glyph_row_above_the_bar() {
    let mut grid = PixelGrid::new(160, 40);
    let mut bar = ProgressBar::new();
    bar.set_position(Point::new(10, 10))
        .set_label("HP")
        .show_label(true);
    bar.draw(&mut grid);

    // Label origin for a 16 px bar at (10, 10) is (11, 2).
    assert_eq!(grid.get(11, 2), Rgba::WHITE);
    assert_eq!(grid.get(11 + 2 * 8 - 1, 9), Rgba::WHITE);
    // One pixel past the two glyph cells: untouched.
    assert_eq!(grid.get(11 + 2 * 8, 2), Rgba::BLACK);
    // Above the label: untouched.
    assert_eq!(grid.get(11, 1), Rgba::BLACK);
}

#[test]
fn short_bar_never_draws_its_label() {
    let mut grid = PixelGrid::new(120, 30);
    let mut bar = ProgressBar::new();
    bar.set_height(10)
        .set_position(Point::new(5, 15))
        .set_label("HP")
        .show_label(true);
    bar.draw(&mut grid);

    // Rows above the bar stay black: 10 / 16 == 0 suppresses the label.
    for y in 0..15 {
        for x in 0..120 {
            assert_eq!(grid.get(x, y), Rgba::BLACK, "pixel ({x}, {y}) painted");
        }
    }
}

#[test]
fn off_screen_anchor_clips_instead_of_panicking() {
    let mut grid = PixelGrid::new(140, 32);
    let mut bar = ProgressBar::new();
    bar.set_position(Point::new(-5, -5));
    bar.draw(&mut grid);

    // The visible part of the fill reaches the grid's origin: at the default
    // ratio the fill spans columns -4..=7.
    assert_eq!(grid.get(0, 0), Rgba::GREEN);
    assert_eq!(grid.get(8, 0), Rgba::BLACK);
    // The right border column sits at x = -5 + 128 - 1 = 122, the bottom
    // border row at y = -5 + 16 - 1 = 10.
    assert_eq!(grid.get(122, 5), Rgba::WHITE);
    assert_eq!(grid.get(123, 5), Rgba::BLACK);
    assert_eq!(grid.get(50, 10), Rgba::WHITE);
}
