//! Row-major grid placement and slide measurement.
//!
//! # Responsibility
//! - Assign non-overlapping grid coordinates to one slide's blocks.
//! - Derive the pixel geometry a paging renderer consumes.
//!
//! # Invariants
//! - Placed rectangles never overlap and never leave the canvas bounds.
//! - Blocks with no valid position are reported, never silently dropped.
//! - Scanning order is top-to-bottom, left-to-right within a row, so output
//!   is deterministic for a given block order.

use crate::model::block::{Block, BlockId};
use crate::model::canvas::Canvas;
use crate::model::slide::PlacedBlock;
use log::warn;

/// Working matrix marking which cells are taken by which block, live only
/// while one slide is being placed.
pub(crate) struct OccupancyGrid {
    rows: u32,
    columns: u32,
    cells: Vec<Option<BlockId>>,
}

impl OccupancyGrid {
    pub(crate) fn new(canvas: &Canvas) -> Self {
        Self {
            rows: canvas.rows,
            columns: canvas.columns,
            cells: vec![None; (canvas.rows * canvas.columns) as usize],
        }
    }

    /// Finds the first free row-major rectangle for `block` and marks it.
    ///
    /// Returns the chosen `(row, col)`, or `None` when no in-bounds rectangle
    /// of free cells exists.
    pub(crate) fn place(&mut self, block: &Block) -> Option<(u32, u32)> {
        if block.width > self.columns || block.height > self.rows {
            return None;
        }
        for row in 0..=(self.rows - block.height) {
            for col in 0..=(self.columns - block.width) {
                if self.is_free(row, col, block.width, block.height) {
                    self.mark(row, col, block);
                    return Some((row, col));
                }
            }
        }
        None
    }

    fn is_free(&self, row: u32, col: u32, width: u32, height: u32) -> bool {
        (row..row + height)
            .all(|r| (col..col + width).all(|c| self.cells[self.index(r, c)].is_none()))
    }

    fn mark(&mut self, row: u32, col: u32, block: &Block) {
        for r in row..row + block.height {
            for c in col..col + block.width {
                let index = self.index(r, c);
                self.cells[index] = Some(block.id);
            }
        }
    }

    fn index(&self, row: u32, col: u32) -> usize {
        (row * self.columns + col) as usize
    }
}

/// Result of placing one slide's blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct SlidePlacement {
    /// Blocks with resolved coordinates, in input order.
    pub placed: Vec<PlacedBlock>,
    /// Blocks no free rectangle was found for, in input order.
    pub unplaced: Vec<Block>,
}

/// Places one slide's blocks by row-major first-fit scanning.
///
/// The partitioner bounds total cell area only, so a subset can pass the
/// area check yet fail 2-D packing here; such blocks land in `unplaced`.
pub fn place_slide(blocks: &[Block], canvas: &Canvas) -> SlidePlacement {
    let mut grid = OccupancyGrid::new(canvas);
    let cell_size = canvas.cell_size();
    let offset = canvas.centering_offset();

    let mut placed = Vec::with_capacity(blocks.len());
    let mut unplaced = Vec::new();

    for block in blocks {
        match grid.place(block) {
            Some((row, col)) => placed.push(PlacedBlock {
                block: *block,
                row,
                col,
                left: offset + col as f32 * (cell_size + canvas.margin),
                top: row as f32 * (cell_size + canvas.margin),
                pixel_width: block.width as f32 * cell_size
                    + block.width.saturating_sub(1) as f32 * canvas.margin,
                pixel_height: block.height as f32 * cell_size
                    + block.height.saturating_sub(1) as f32 * canvas.margin,
            }),
            None => {
                warn!(
                    "event=block_unplaced module=layout status=degraded block_id={} width={} height={}",
                    block.id, block.width, block.height
                );
                unplaced.push(*block);
            }
        }
    }

    SlidePlacement { placed, unplaced }
}

/// Rendering extent of one slide: tallest placed block plus a margin band
/// above and below. An empty placement measures zero instead of faulting.
pub fn slide_height(placed: &[PlacedBlock], canvas: &Canvas) -> f32 {
    if placed.is_empty() {
        return 0.0;
    }
    let tallest = placed
        .iter()
        .map(|block| block.pixel_height)
        .fold(0.0_f32, f32::max);
    tallest + 2.0 * canvas.margin
}
