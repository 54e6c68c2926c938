//! Canvas geometry configuration.
//!
//! # Responsibility
//! - Describe the fixed rows-by-columns grid every slide is packed into.
//! - Derive the pixel constants (cell size, centering offset) renderers need.
//!
//! # Invariants
//! - Dimensions are fixed for the engine's lifetime.
//! - `cell_size` is always derived from `canvas_width`, never stored
//!   independently, so the grid exactly fills the available width.

use crate::model::block::BlockLimits;
use serde::{Deserialize, Serialize};

/// Fixed grid the packing engine fills one slide at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Grid rows available per slide.
    pub rows: u32,
    /// Grid columns available per slide.
    pub columns: u32,
    /// Full pixel width available to one slide.
    pub canvas_width: f32,
    /// Pixel gap between cells and around the grid edge.
    pub margin: f32,
    /// Extra pixel inset applied on the left before centering.
    pub left_padding: f32,
}

impl Canvas {
    pub fn new(rows: u32, columns: u32, canvas_width: f32, margin: f32, left_padding: f32) -> Self {
        Self {
            rows,
            columns,
            canvas_width,
            margin,
            left_padding,
        }
    }

    /// Total cell capacity of one slide.
    pub fn capacity(&self) -> u32 {
        self.rows * self.columns
    }

    /// Pixel size of one square cell, derived so `columns` cells plus all
    /// margins exactly span `canvas_width`.
    pub fn cell_size(&self) -> f32 {
        let columns = self.columns as f32;
        (self.canvas_width - (columns + 1.0) * self.margin - self.left_padding) / columns
    }

    /// Pixel width of the full grid including outer margins.
    pub fn grid_width(&self) -> f32 {
        let columns = self.columns as f32;
        columns * self.cell_size() + (columns + 1.0) * self.margin
    }

    /// Horizontal pixel offset that centers the grid within the canvas.
    pub fn centering_offset(&self) -> f32 {
        (self.canvas_width - self.grid_width()) / 2.0 + self.left_padding
    }

    /// Dimension limits the store enforces before blocks reach the engine.
    pub fn limits(&self) -> BlockLimits {
        BlockLimits {
            max_width: self.columns,
            max_height: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Canvas;

    fn sample() -> Canvas {
        Canvas::new(4, 2, 400.0, 4.0, 4.0)
    }

    #[test]
    fn capacity_is_rows_times_columns() {
        assert_eq!(sample().capacity(), 8);
    }

    #[test]
    fn cell_size_fills_available_width() {
        let canvas = sample();
        // 400 - 3 margins (12) - left padding (4) = 384 across 2 columns.
        assert_eq!(canvas.cell_size(), 192.0);
        assert_eq!(canvas.grid_width(), 396.0);
    }

    #[test]
    fn centering_offset_includes_left_padding() {
        let canvas = sample();
        assert_eq!(canvas.centering_offset(), (400.0 - 396.0) / 2.0 + 4.0);
    }

    #[test]
    fn limits_mirror_grid_dimensions() {
        let limits = sample().limits();
        assert_eq!(limits.max_width, 2);
        assert_eq!(limits.max_height, 4);
    }
}
