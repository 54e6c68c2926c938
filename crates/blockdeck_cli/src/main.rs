//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise the full store -> partition -> placement pipeline once.
//! - Keep output deterministic for quick local sanity checks.

use blockdeck_core::{BestAreaPartitioner, Canvas, MemoryBlockRepository, SlideService};

fn main() {
    let canvas = Canvas::new(4, 2, 400.0, 4.0, 4.0);
    let repo = MemoryBlockRepository::seed_demo(canvas.limits());
    let service = SlideService::new(repo, BestAreaPartitioner::new(), canvas);

    println!("blockdeck_core version={}", blockdeck_core::core_version());

    let deck = service.compose_deck();
    for (index, slide) in deck.iter().enumerate() {
        println!(
            "slide {index}: placed={} unplaced={} height={:.1}",
            slide.blocks.len(),
            slide.unplaced.len(),
            slide.height
        );
        for placed in &slide.blocks {
            println!(
                "  block {} {}x{} at row={} col={}",
                placed.block.id, placed.block.width, placed.block.height, placed.row, placed.col
            );
        }
    }
}
