//! Slide partitioning strategies.
//!
//! # Responsibility
//! - Split a block snapshot into ordered slides that each fit one canvas.
//! - Keep strategy selection behind one trait so callers can trade packing
//!   quality against search cost.
//!
//! # Invariants
//! - Every input block lands in exactly one output slide.
//! - No slide's occupied-cell sum exceeds canvas capacity, except degenerate
//!   single-block slides emitted for blocks that can never fit.
//! - Output is deterministic for identical input order.

use crate::layout::placement::OccupancyGrid;
use crate::model::block::Block;
use crate::model::canvas::Canvas;
use log::warn;

/// Default cap on subset-search node visits before the search settles for
/// the best subset found so far. Pools around twenty blocks stay fully
/// exhaustive under this cap.
pub const DEFAULT_SEARCH_BUDGET: u64 = 4_000_000;

/// Strategy seam between the snapshot and the per-slide placer.
pub trait SlidePartitioner {
    /// Partitions `pool` into ordered slides; exhaustive and disjoint.
    fn partition(&self, pool: &[Block], canvas: &Canvas) -> Vec<Vec<Block>>;
}

/// Exhaustive cell-area maximizer: per slide, searches every subset of the
/// remaining pool and keeps the first one encountered with the highest
/// occupied-cell total that still fits the canvas capacity.
///
/// This stage bounds total area only; 2-D feasibility is checked later by
/// the placer, which reports any subset member it cannot fit.
#[derive(Debug, Clone, Copy)]
pub struct BestAreaPartitioner {
    search_budget: u64,
}

impl BestAreaPartitioner {
    pub fn new() -> Self {
        Self {
            search_budget: DEFAULT_SEARCH_BUDGET,
        }
    }

    /// Overrides the node-visit budget shared by all slides of one call.
    ///
    /// When the budget runs out the best subset found so far is kept, and
    /// any still-unassigned blocks degrade to single-block slides.
    pub fn with_budget(search_budget: u64) -> Self {
        Self { search_budget }
    }
}

impl Default for BestAreaPartitioner {
    fn default() -> Self {
        Self::new()
    }
}

impl SlidePartitioner for BestAreaPartitioner {
    fn partition(&self, pool: &[Block], canvas: &Canvas) -> Vec<Vec<Block>> {
        let capacity = canvas.capacity();
        let mut remaining: Vec<Block> = pool.to_vec();
        let mut slides = Vec::new();
        let mut budget = self.search_budget;

        while !remaining.is_empty() {
            let best = best_subset(&remaining, capacity, &mut budget);
            if best.is_empty() {
                // Every remaining block overflows the canvas on its own, or
                // the search budget ran dry. Emit a degenerate slide so the
                // loop always makes progress.
                let block = remaining.remove(0);
                warn!(
                    "event=degenerate_slide module=layout status=degraded block_id={} area={} capacity={}",
                    block.id,
                    block.area(),
                    capacity
                );
                slides.push(vec![block]);
                continue;
            }
            remaining.retain(|block| !best.iter().any(|chosen| chosen.id == block.id));
            slides.push(best);
        }

        slides
    }
}

/// Depth-first include/exclude subset search over `pool`.
///
/// Tracks the first subset encountered whose filled-cell total is strictly
/// greater than the best so far while staying within `capacity`. Subsets
/// over capacity are never recorded but the search still walks beneath
/// them, so cost is exponential in pool size; `budget` caps node visits.
fn best_subset(pool: &[Block], capacity: u32, budget: &mut u64) -> Vec<Block> {
    struct Frame {
        next: usize,
        chosen: Vec<usize>,
        filled: u32,
    }

    let mut best: Vec<usize> = Vec::new();
    let mut best_filled: u32 = 0;
    let mut stack = vec![Frame {
        next: 0,
        chosen: Vec::new(),
        filled: 0,
    }];

    while let Some(frame) = stack.pop() {
        if *budget == 0 {
            break;
        }
        *budget -= 1;

        if frame.filled <= capacity && frame.filled > best_filled {
            best_filled = frame.filled;
            best = frame.chosen.clone();
        }

        // Push extensions in reverse so the lowest pool index is explored
        // first, keeping the tie-break deterministic.
        for index in (frame.next..pool.len()).rev() {
            let mut chosen = frame.chosen.clone();
            chosen.push(index);
            stack.push(Frame {
                next: index + 1,
                filled: frame.filled + pool[index].area(),
                chosen,
            });
        }
    }

    best.into_iter().map(|index| pool[index]).collect()
}

/// Linear alternative: first-fit each block in pool order into the current
/// slide's occupancy grid, opening a fresh slide on the first block that
/// does not fit. Trades packing density for linear cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFitPartitioner;

impl SlidePartitioner for FirstFitPartitioner {
    fn partition(&self, pool: &[Block], canvas: &Canvas) -> Vec<Vec<Block>> {
        let mut slides = Vec::new();
        let mut current: Vec<Block> = Vec::new();
        let mut grid = OccupancyGrid::new(canvas);

        for block in pool {
            if grid.place(block).is_some() {
                current.push(*block);
                continue;
            }
            if !current.is_empty() {
                slides.push(std::mem::take(&mut current));
                grid = OccupancyGrid::new(canvas);
                if grid.place(block).is_some() {
                    current.push(*block);
                    continue;
                }
            }
            // Does not fit even an empty canvas; isolate it so later blocks
            // still pack normally.
            warn!(
                "event=degenerate_slide module=layout status=degraded block_id={} width={} height={}",
                block.id, block.width, block.height
            );
            slides.push(vec![*block]);
        }

        if !current.is_empty() {
            slides.push(current);
        }

        slides
    }
}
