//! Non-capturing one-step moves

use crate::board::{Board, Square};

use super::adjacency::{step, Direction};

/// Append every one-step move of the piece on `from` to `out`.
///
/// Directions are tried in ascending order, restricted to the ones the
/// piece may use. A man reaching its promotion rank is crowned at once.
/// Returns the number of boards appended.
pub fn collect_simple_moves(board: &Board, from: Square, out: &mut Vec<Board>) -> usize {
    let piece = board.get(from);
    let Some(color) = piece.color() else {
        return 0;
    };

    let before = out.len();
    for dir in Direction::ALL {
        if !piece.may_move(dir) {
            continue;
        }
        let Some(to) = step(from, dir) else {
            continue;
        };
        if !board.is_empty(to) {
            continue;
        }

        let mut next = *board;
        next.clear(from);
        let moved = if color.promotes_on(to) {
            piece.crowned()
        } else {
            piece
        };
        next.set(to, moved);
        out.push(next);
    }
    out.len() - before
}

/// All one-step moves of the piece on `from`
pub fn simple_moves(board: &Board, from: Square) -> Vec<Board> {
    let mut out = Vec::with_capacity(4);
    collect_simple_moves(board, from, &mut out);
    out
}
