//! Grid packing engine.
//!
//! # Responsibility
//! - Partition a block snapshot into ordered slides bounded by canvas
//!   capacity.
//! - Assign non-overlapping grid positions and pixel geometry per slide.
//!
//! # Invariants
//! - The engine is pure over its input snapshot: no state survives a call.
//! - Every input block reaches the output exactly once, either placed or
//!   reported as unplaced.

pub mod partition;
pub mod placement;

use crate::model::block::Block;
use crate::model::canvas::Canvas;
use crate::model::slide::Slide;
use partition::SlidePartitioner;
use placement::{place_slide, slide_height};

/// Runs the full partition-then-place pipeline over one snapshot.
///
/// Callers re-invoke this after every store mutation; nothing is cached
/// between calls.
pub fn compose_deck(blocks: &[Block], canvas: &Canvas, partitioner: &dyn SlidePartitioner) -> Vec<Slide> {
    partitioner
        .partition(blocks, canvas)
        .into_iter()
        .map(|group| {
            let placement = place_slide(&group, canvas);
            let height = slide_height(&placement.placed, canvas);
            Slide {
                blocks: placement.placed,
                unplaced: placement.unplaced,
                height,
            }
        })
        .collect()
}
