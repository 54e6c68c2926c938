//! Store layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the block CRUD contract the engine's callers snapshot from.
//! - Keep id generation and dimension validation out of the packing engine.
//!
//! # Invariants
//! - Store writes validate dimensions before mutating state.
//! - Store APIs return semantic errors (`NotFound`) instead of masking
//!   missing ids.

pub mod block_repo;
