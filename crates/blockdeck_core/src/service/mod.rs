//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and engine calls into use-case level APIs.
//! - Keep rendering layers decoupled from store and search details.

pub mod slide_service;
