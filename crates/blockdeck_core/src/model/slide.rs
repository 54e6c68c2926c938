//! Slide output projections.
//!
//! # Responsibility
//! - Define the placed-block and slide shapes handed to paging renderers.
//!
//! # Invariants
//! - Slides are derived from a store snapshot and never persisted.
//! - `blocks` and `unplaced` are disjoint; together they cover exactly the
//!   block subset the partitioner assigned to this slide.

use crate::model::block::Block;
use serde::{Deserialize, Serialize};

/// A block with its resolved grid coordinates and pixel geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedBlock {
    /// The source block, unchanged.
    pub block: Block,
    /// Top grid row of the occupied rectangle.
    pub row: u32,
    /// Left grid column of the occupied rectangle.
    pub col: u32,
    /// Pixel offset from the slide's left edge.
    pub left: f32,
    /// Pixel offset from the slide's top edge.
    pub top: f32,
    /// Rendered pixel width, spanning cells and interior margins.
    pub pixel_width: f32,
    /// Rendered pixel height, spanning cells and interior margins.
    pub pixel_height: f32,
}

/// One page of output: every block the partitioner assigned to one canvas,
/// split into placed geometry and placement failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Blocks with concrete non-overlapping grid positions.
    pub blocks: Vec<PlacedBlock>,
    /// Blocks the placer found no valid rectangle for. Surfaced explicitly
    /// instead of being dropped.
    pub unplaced: Vec<Block>,
    /// Rendering extent: tallest placed block plus a margin band above and
    /// below, or zero when nothing was placed.
    pub height: f32,
}
