//! Block store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the ordered block collection.
//! - Generate sequential ids and enforce dimension limits on every write.
//!
//! # Invariants
//! - Ids are never reused, even after deletion.
//! - Insertion order is preserved; the engine receives snapshots in the
//!   order blocks were added.
//! - The engine performs no validation, so nothing invalid may leave this
//!   layer.

use crate::model::block::{Block, BlockId, BlockLimits, BlockValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for block CRUD operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(BlockValidationError),
    NotFound(BlockId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "block not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<BlockValidationError> for StoreError {
    fn from(value: BlockValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Store interface for block CRUD operations.
pub trait BlockRepository {
    /// Creates a block with a freshly generated id.
    fn add_block(&mut self, width: u32, height: u32) -> StoreResult<Block>;
    /// Replaces the stored block carrying the same id.
    fn update_block(&mut self, block: &Block) -> StoreResult<()>;
    /// Removes a block by id.
    fn delete_block(&mut self, id: BlockId) -> StoreResult<()>;
    /// Snapshot of all blocks in insertion order.
    fn list_blocks(&self) -> Vec<Block>;
}

/// In-memory block store with sequential id generation.
pub struct MemoryBlockRepository {
    limits: BlockLimits,
    blocks: Vec<Block>,
    next_id: BlockId,
}

impl MemoryBlockRepository {
    /// Creates an empty store enforcing the given dimension limits.
    pub fn new(limits: BlockLimits) -> Self {
        Self {
            limits,
            blocks: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store pre-filled with the stock demo collection: ten
    /// blocks mixing 1x1, 2x1 and 1x2 shapes.
    pub fn seed_demo(limits: BlockLimits) -> Self {
        let shapes: [(u32, u32); 10] = [
            (1, 1),
            (2, 1),
            (1, 2),
            (1, 1),
            (1, 1),
            (1, 1),
            (1, 2),
            (1, 1),
            (1, 1),
            (1, 1),
        ];
        let blocks = shapes
            .iter()
            .enumerate()
            .map(|(index, &(width, height))| Block::new(index as BlockId + 1, width, height))
            .collect::<Vec<_>>();
        Self {
            limits,
            next_id: blocks.len() as BlockId + 1,
            blocks,
        }
    }

    fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id)
    }
}

impl BlockRepository for MemoryBlockRepository {
    fn add_block(&mut self, width: u32, height: u32) -> StoreResult<Block> {
        let block = Block::new(self.next_id, width, height);
        block.validate(&self.limits)?;
        self.next_id += 1;
        self.blocks.push(block);
        Ok(block)
    }

    fn update_block(&mut self, block: &Block) -> StoreResult<()> {
        block.validate(&self.limits)?;
        let position = self
            .position(block.id)
            .ok_or(StoreError::NotFound(block.id))?;
        self.blocks[position] = *block;
        Ok(())
    }

    fn delete_block(&mut self, id: BlockId) -> StoreResult<()> {
        let position = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.blocks.remove(position);
        Ok(())
    }

    fn list_blocks(&self) -> Vec<Block> {
        self.blocks.clone()
    }
}
