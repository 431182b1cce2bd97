//! Legal move generation
//!
//! Given a board and the side to move, produce every board reachable in one
//! legal turn. Generation runs in two phases:
//!
//! 1. **Captures**: every piece of the mover is searched for capture chains.
//! 2. **Simple moves**: only when no capture exists anywhere, one-step moves
//!    are generated for every piece.
//!
//! Captures are mandatory: a single available jump anywhere on the board
//! suppresses all simple moves, including those of pieces that cannot jump.
//!
//! Results are ordered by square, then by direction.
//!
//! # Example
//!
//! ```
//! use checkers::{generate_moves, Board, Color};
//!
//! let board: Board = "_____r___b______________________".parse().unwrap();
//! let moves = generate_moves(&board, Color::Black);
//!
//! // The jump is forced and crowns the black man on square 0
//! assert_eq!(moves.len(), 1);
//! assert_eq!(moves[0].to_string(), "B_______________________________");
//! ```

use rayon::prelude::*;
use tracing::debug;

use crate::board::{Board, Color};
use crate::error::Result;
use crate::rules::{collect_captures, collect_simple_moves};

/// Generated boards together with how they were produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveGenResult {
    /// Resulting boards in generation order
    pub boards: Vec<Board>,
    /// True when at least one capture was available, so every board is a capture
    pub forced_capture: bool,
}

impl MoveGenResult {
    /// No legal move for the side to move
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boards.len()
    }
}

/// Generate all boards reachable by `player` in one turn.
///
/// An empty result means the side to move has no legal move.
pub fn generate_moves(board: &Board, player: Color) -> Vec<Board> {
    generate_moves_with_stats(board, player).boards
}

/// Like [`generate_moves`], also reporting whether capture was forced.
pub fn generate_moves_with_stats(board: &Board, player: Color) -> MoveGenResult {
    let own = board.squares_of(player);
    let mut boards = Vec::new();
    let mut forced_capture = false;

    for sq in own.iter_ones() {
        forced_capture |= collect_captures(board, sq, &mut boards);
    }

    if !forced_capture {
        for sq in own.iter_ones() {
            collect_simple_moves(board, sq, &mut boards);
        }
    }

    debug!(
        player = %player,
        pieces = own.len(),
        moves = boards.len(),
        forced_capture,
        "generated moves"
    );

    MoveGenResult {
        boards,
        forced_capture,
    }
}

/// Text-level entry point over the 32-symbol board encoding.
///
/// The board is checked before the player. Either failure aborts the call
/// with no partial output.
pub fn generate_from_text(board: &str, player: &str) -> Result<Vec<String>> {
    let board: Board = board.parse()?;
    let player: Color = player.parse()?;
    Ok(generate_moves(&board, player)
        .iter()
        .map(|b| b.to_string())
        .collect())
}

/// Generate moves for many boards in parallel.
///
/// Output `i` holds the moves for `boards[i]`.
pub fn generate_moves_batch(boards: &[Board], player: Color) -> Vec<Vec<Board>> {
    boards
        .par_iter()
        .map(|board| generate_moves(board, player))
        .collect()
}
