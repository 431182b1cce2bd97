//! Legal move generator for English draughts (checkers)
//!
//! Given a position on the 32 playable squares and the side to move, the
//! generator lists every position reachable in one legal turn:
//! - Men step diagonally forward, kings in all four directions
//! - Captures are mandatory and chain through multi-jump sequences
//! - A man reaching the far back rank is crowned, at the end of a capture chain
//!
//! It does not pick a move, score positions or detect the end of a game. An
//! empty move list means the side to move has no legal move.
//!
//! # Architecture
//!
//! - [`board`]: Pieces, squares and the 32-symbol board encoding
//! - [`rules`]: Adjacency tables, capture chains and simple moves
//! - [`movegen`]: Move generation for a whole side
//! - [`error`]: Input validation errors
//!
//! # Quick Start
//!
//! ```
//! use checkers::{generate_moves, Board, Color};
//!
//! let board = Board::starting_position();
//! let replies = generate_moves(&board, Color::Black);
//! assert_eq!(replies.len(), 7);
//!
//! for next in &replies {
//!     println!("{next}");
//! }
//! ```
//!
//! # Board encoding
//!
//! A board is a 32-character string, one symbol per square in index order:
//! `_` empty, `r`/`R` red man/king, `b`/`B` black man/king. Squares 0-3 form
//! black's promotion rank and squares 28-31 form red's.
//!
//! ```
//! use checkers::generate_from_text;
//!
//! let moves = generate_from_text("rrrrrrrrrrrr________bbbbbbbbbbbb", "red").unwrap();
//! assert_eq!(moves.len(), 7);
//! assert!(generate_from_text("rrr", "red").is_err());
//! ```

pub mod board;
pub mod error;
pub mod movegen;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{is_valid, Board, Color, Piece, Square, NUM_SQUARES};
pub use error::{MoveGenError, Result};
pub use movegen::{
    generate_from_text, generate_moves, generate_moves_batch, generate_moves_with_stats,
    MoveGenResult,
};
pub use rules::{find_captures, Direction};
