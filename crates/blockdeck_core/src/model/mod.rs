//! Unified domain model for blocks and slide projections.
//!
//! # Responsibility
//! - Define canonical data structures used by core packing logic.
//! - Keep one block-centric shape shared by store, engine and renderer.
//!
//! # Invariants
//! - Every domain object is identified by a stable `BlockId`.
//! - Slides are derived projections, never persisted state.

pub mod block;
pub mod canvas;
pub mod slide;
