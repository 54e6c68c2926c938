use blockdeck_core::{
    compose_deck, BestAreaPartitioner, Block, BlockId, Canvas, FirstFitPartitioner,
    MemoryBlockRepository, PlacedBlock, Slide, SlideService,
};
use std::collections::HashSet;

fn canvas() -> Canvas {
    Canvas::new(4, 2, 400.0, 4.0, 4.0)
}

fn mixed_pool() -> Vec<Block> {
    vec![
        Block::new(1, 1, 1),
        Block::new(2, 2, 1),
        Block::new(3, 1, 2),
        Block::new(4, 1, 1),
        Block::new(5, 1, 1),
        Block::new(6, 1, 1),
        Block::new(7, 1, 2),
        Block::new(8, 1, 1),
        Block::new(9, 2, 3),
        Block::new(10, 2, 2),
    ]
}

fn occupied_cells(placed: &PlacedBlock) -> Vec<(u32, u32)> {
    let mut cells = Vec::new();
    for row in placed.row..placed.row + placed.block.height {
        for col in placed.col..placed.col + placed.block.width {
            cells.push((row, col));
        }
    }
    cells
}

/// Checks the engine contract on one deck: partition totality, per-slide
/// capacity bound, non-overlap and in-bounds placement.
fn assert_deck_invariants(deck: &[Slide], input: &[Block], canvas: &Canvas) {
    let mut seen: Vec<BlockId> = Vec::new();
    for slide in deck {
        let mut cells: HashSet<(u32, u32)> = HashSet::new();
        let mut filled = 0;
        for placed in &slide.blocks {
            seen.push(placed.block.id);
            filled += placed.block.area();
            assert!(placed.row + placed.block.height <= canvas.rows);
            assert!(placed.col + placed.block.width <= canvas.columns);
            for cell in occupied_cells(placed) {
                assert!(cells.insert(cell), "cell {cell:?} occupied twice");
            }
        }
        assert!(filled <= canvas.capacity());
        for block in &slide.unplaced {
            seen.push(block.id);
        }
    }

    let mut expected: Vec<BlockId> = input.iter().map(|block| block.id).collect();
    expected.sort_unstable();
    seen.sort_unstable();
    assert_eq!(seen, expected, "every block must appear exactly once");
}

#[test]
fn empty_snapshot_yields_zero_slides() {
    assert!(compose_deck(&[], &canvas(), &BestAreaPartitioner::new()).is_empty());
    assert!(compose_deck(&[], &canvas(), &FirstFitPartitioner).is_empty());
}

#[test]
fn best_area_deck_upholds_engine_invariants() {
    let pool = mixed_pool();
    let deck = compose_deck(&pool, &canvas(), &BestAreaPartitioner::new());

    assert!(!deck.is_empty());
    assert_deck_invariants(&deck, &pool, &canvas());
}

#[test]
fn first_fit_deck_upholds_engine_invariants() {
    let pool = mixed_pool();
    let deck = compose_deck(&pool, &canvas(), &FirstFitPartitioner);

    assert!(!deck.is_empty());
    assert_deck_invariants(&deck, &pool, &canvas());
}

#[test]
fn identical_snapshots_produce_identical_decks() {
    let pool = mixed_pool();
    let canvas = canvas();

    let first = compose_deck(&pool, &canvas, &BestAreaPartitioner::new());
    let second = compose_deck(&pool, &canvas, &BestAreaPartitioner::new());
    assert_eq!(first, second);

    let first = compose_deck(&pool, &canvas, &FirstFitPartitioner);
    let second = compose_deck(&pool, &canvas, &FirstFitPartitioner);
    assert_eq!(first, second);
}

#[test]
fn five_small_blocks_share_one_slide_on_two_by_four() {
    // Areas 1, 2, 2, 1, 1 total 7 of 8 cells: the maximizer keeps all five
    // together and the placer must fit them without overlap.
    let pool = vec![
        Block::new(1, 1, 1),
        Block::new(2, 2, 1),
        Block::new(3, 1, 2),
        Block::new(4, 1, 1),
        Block::new(5, 1, 1),
    ];
    let canvas = canvas();
    let deck = compose_deck(&pool, &canvas, &BestAreaPartitioner::new());

    assert_eq!(deck.len(), 1);
    assert_eq!(deck[0].blocks.len(), 5);
    assert!(deck[0].unplaced.is_empty());
    assert_deck_invariants(&deck, &pool, &canvas);
}

#[test]
fn oversized_block_terminates_as_degenerate_slide() {
    // Area 12 exceeds the capacity of 8; no subset can ever contain it, so
    // the partitioner must emit it alone instead of looping forever.
    let pool = vec![Block::new(1, 2, 6)];
    let deck = compose_deck(&pool, &canvas(), &BestAreaPartitioner::new());

    assert_eq!(deck.len(), 1);
    assert!(deck[0].blocks.is_empty());
    assert_eq!(deck[0].unplaced, pool);
    assert_eq!(deck[0].height, 0.0);
}

#[test]
fn oversized_block_among_normal_blocks_still_partitions_fully() {
    let pool = vec![Block::new(1, 1, 1), Block::new(2, 2, 6), Block::new(3, 2, 2)];
    let canvas = canvas();
    let deck = compose_deck(&pool, &canvas, &BestAreaPartitioner::new());

    assert_deck_invariants(&deck, &pool, &canvas);
    assert!(deck
        .iter()
        .any(|slide| slide.unplaced.contains(&Block::new(2, 2, 6))));
}

#[test]
fn slide_heights_track_tallest_placed_block() {
    let canvas = canvas();
    let deck = compose_deck(&[Block::new(1, 1, 2)], &canvas, &BestAreaPartitioner::new());

    let expected = 2.0 * canvas.cell_size() + canvas.margin + 2.0 * canvas.margin;
    assert_eq!(deck[0].height, expected);
}

#[test]
fn service_recomputes_deck_after_each_mutation() {
    let canvas = canvas();
    let repo = MemoryBlockRepository::new(canvas.limits());
    let mut service = SlideService::new(repo, BestAreaPartitioner::new(), canvas);

    assert!(service.compose_deck().is_empty());

    let block = service.add_block(2, 1).unwrap();
    let deck = service.compose_deck();
    assert_eq!(deck.len(), 1);
    assert_eq!(deck[0].blocks[0].block, block);

    service.update_block(&Block::new(block.id, 1, 2)).unwrap();
    let deck = service.compose_deck();
    assert_eq!(deck[0].blocks[0].block, Block::new(block.id, 1, 2));

    service.delete_block(block.id).unwrap();
    assert!(service.compose_deck().is_empty());
}

#[test]
fn service_deck_covers_demo_collection() {
    let canvas = canvas();
    let repo = MemoryBlockRepository::seed_demo(canvas.limits());
    let service = SlideService::new(repo, BestAreaPartitioner::new(), canvas);

    let snapshot = service.list_blocks();
    let deck = service.compose_deck();
    assert_deck_invariants(&deck, &snapshot, &canvas);
}
