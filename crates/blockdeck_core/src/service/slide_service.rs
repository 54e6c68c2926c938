//! Slide deck use-case service.
//!
//! # Responsibility
//! - Couple a block store to the packing engine behind one facade.
//! - Recompute the full deck from a fresh snapshot on demand.
//!
//! # Invariants
//! - No deck state is cached between calls; every deck reflects the store
//!   snapshot at call time.
//! - Service APIs never bypass store validation contracts.

use crate::layout::compose_deck;
use crate::layout::partition::SlidePartitioner;
use crate::model::block::{Block, BlockId};
use crate::model::canvas::Canvas;
use crate::model::slide::Slide;
use crate::repo::block_repo::{BlockRepository, StoreResult};
use log::info;

/// Use-case facade over a block store and a partitioning strategy.
pub struct SlideService<R: BlockRepository, P: SlidePartitioner> {
    repo: R,
    partitioner: P,
    canvas: Canvas,
}

impl<R: BlockRepository, P: SlidePartitioner> SlideService<R, P> {
    /// Creates a service from a store, a strategy and the fixed canvas.
    pub fn new(repo: R, partitioner: P, canvas: Canvas) -> Self {
        Self {
            repo,
            partitioner,
            canvas,
        }
    }

    /// Adds a block; callers re-run `compose_deck` afterwards.
    pub fn add_block(&mut self, width: u32, height: u32) -> StoreResult<Block> {
        self.repo.add_block(width, height)
    }

    /// Updates a block's dimensions by stable id.
    pub fn update_block(&mut self, block: &Block) -> StoreResult<()> {
        self.repo.update_block(block)
    }

    /// Deletes a block by id.
    pub fn delete_block(&mut self, id: BlockId) -> StoreResult<()> {
        self.repo.delete_block(id)
    }

    /// Snapshot of all blocks in insertion order.
    pub fn list_blocks(&self) -> Vec<Block> {
        self.repo.list_blocks()
    }

    /// Recomputes the full slide deck from the current snapshot.
    pub fn compose_deck(&self) -> Vec<Slide> {
        let snapshot = self.repo.list_blocks();
        let deck = compose_deck(&snapshot, &self.canvas, &self.partitioner);
        info!(
            "event=deck_recompute module=service status=ok blocks={} slides={}",
            snapshot.len(),
            deck.len()
        );
        deck
    }
}
