//! Game rules for English draughts
//!
//! This module implements the rule set for the move generator:
//! - Diagonal adjacency tables (single steps and jump landings)
//! - Capture chains with deferred promotion
//! - Simple one-step moves with immediate promotion

pub mod adjacency;
pub mod capture;
pub mod simple;

// Re-exports for convenient access
pub use adjacency::{jump, step, Direction, JUMP_TABLE, MOVE_TABLE};
pub use capture::{
    captured_count, collect_captures, find_captures, has_capture, MAX_CHAIN_DEPTH,
};
pub use simple::{collect_simple_moves, simple_moves};
