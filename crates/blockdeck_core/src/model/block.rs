//! Block domain model.
//!
//! # Responsibility
//! - Define the rectangular unit every slide is packed from.
//! - Provide dimension validation against canvas-derived limits.
//!
//! # Invariants
//! - `id` is stable and never reused for another block.
//! - `width` and `height` are whole grid cells, never pixels.
//! - Validation runs at the store boundary; the packing engine trusts its
//!   input snapshot.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for every block in a store snapshot.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BlockId = u64;

/// Atomic rectangular unit, sized in whole grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Stable ID assigned by the store on creation, immutable afterwards.
    pub id: BlockId,
    /// Horizontal extent in grid cells.
    pub width: u32,
    /// Vertical extent in grid cells.
    pub height: u32,
}

impl Block {
    /// Creates a block with a caller-provided stable ID.
    ///
    /// Identity management lives in the store; this constructor does not
    /// validate dimensions.
    pub fn new(id: BlockId, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    /// Number of grid cells this block occupies.
    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    /// Checks dimensions against store-enforced limits.
    ///
    /// # Errors
    /// - `ZeroWidth` / `ZeroHeight` for degenerate dimensions.
    /// - `WidthOverLimit` / `HeightOverLimit` when a dimension exceeds what
    ///   the canvas can ever hold.
    pub fn validate(&self, limits: &BlockLimits) -> Result<(), BlockValidationError> {
        if self.width == 0 {
            return Err(BlockValidationError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(BlockValidationError::ZeroHeight);
        }
        if self.width > limits.max_width {
            return Err(BlockValidationError::WidthOverLimit {
                width: self.width,
                max: limits.max_width,
            });
        }
        if self.height > limits.max_height {
            return Err(BlockValidationError::HeightOverLimit {
                height: self.height,
                max: limits.max_height,
            });
        }
        Ok(())
    }
}

/// Upper dimension bounds enforced by the store before a block reaches the
/// packing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLimits {
    /// Maximum block width in cells, normally the canvas column count.
    pub max_width: u32,
    /// Maximum block height in cells, normally the canvas row count.
    pub max_height: u32,
}

/// Validation error for block dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockValidationError {
    ZeroWidth,
    ZeroHeight,
    WidthOverLimit { width: u32, max: u32 },
    HeightOverLimit { height: u32, max: u32 },
}

impl Display for BlockValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "block width must be at least 1 cell"),
            Self::ZeroHeight => write!(f, "block height must be at least 1 cell"),
            Self::WidthOverLimit { width, max } => {
                write!(f, "block width {width} exceeds canvas limit {max}")
            }
            Self::HeightOverLimit { height, max } => {
                write!(f, "block height {height} exceeds canvas limit {max}")
            }
        }
    }
}

impl Error for BlockValidationError {}
