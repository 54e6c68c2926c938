//! Core domain logic for blockdeck.
//! This crate is the single source of truth for packing invariants.

pub mod layout;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use layout::compose_deck;
pub use layout::partition::{
    BestAreaPartitioner, FirstFitPartitioner, SlidePartitioner, DEFAULT_SEARCH_BUDGET,
};
pub use layout::placement::{place_slide, slide_height, SlidePlacement};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::block::{Block, BlockId, BlockLimits, BlockValidationError};
pub use model::canvas::Canvas;
pub use model::slide::{PlacedBlock, Slide};
pub use repo::block_repo::{BlockRepository, MemoryBlockRepository, StoreError, StoreResult};
pub use service::slide_service::SlideService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
