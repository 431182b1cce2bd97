//! Capture-chain search
//!
//! From one origin square, enumerate every maximal sequence of jumps the
//! piece standing there can make. The search is a depth-first walk over an
//! explicit frame stack: each frame holds the square the piece stands on,
//! the board after the captures so far, and the next direction to try.
//!
//! Promotion is deferred to the end of a chain. A man that passes over its
//! promotion rank mid-chain keeps moving as a man, and only the final board
//! of the chain is crowned.

use tracing::trace;

use crate::board::{Board, Color, Square};

use super::adjacency::{jump, step, Direction};

/// Hard ceiling on stack frames for one chain. A 32-square board allows at
/// most 12 captures, so reaching this is a bug.
pub const MAX_CHAIN_DEPTH: usize = 20;

#[derive(Debug, Clone, Copy)]
struct Frame {
    square: Square,
    board: Board,
    /// Next direction index to try (0..=4, 4 means exhausted)
    cursor: usize,
    /// Whether a deeper capture was pushed from this frame
    extended: bool,
}

impl Frame {
    fn new(square: Square, board: Board) -> Self {
        Self {
            square,
            board,
            cursor: 0,
            extended: false,
        }
    }
}

/// Board after the piece on `from` jumps in `dir`, if that jump is legal.
///
/// The jump needs an enemy piece on the adjacent square, an empty landing
/// square, and a direction the moving piece may use as it stands now.
#[inline]
fn try_jump(board: &Board, from: Square, dir: Direction) -> Option<(Square, Board)> {
    let mover = board.get(from);
    let over = step(from, dir)?;
    let land = jump(from, dir)?;

    if !board.get(over).is_enemy_of(mover) || !board.is_empty(land) || !mover.may_move(dir) {
        return None;
    }

    let mut next = *board;
    next.relocate(from, land);
    next.clear(over);
    Some((land, next))
}

/// Append every completed capture chain starting at `origin` to `out`.
///
/// Returns true if at least one capture was found. Chains are produced in
/// depth-first order with directions tried 0..=3 at each square.
pub fn collect_captures(board: &Board, origin: Square, out: &mut Vec<Board>) -> bool {
    let mut found = false;
    let mut stack: Vec<Frame> = Vec::with_capacity(MAX_CHAIN_DEPTH);
    stack.push(Frame::new(origin, *board));

    while let Some(top) = stack.last_mut() {
        if top.cursor < Direction::ALL.len() {
            let dir = Direction::ALL[top.cursor];
            top.cursor += 1;

            if let Some((land, next)) = try_jump(&top.board, top.square, dir) {
                top.extended = true;
                assert!(
                    stack.len() < MAX_CHAIN_DEPTH,
                    "capture chain from square {origin} exceeded {MAX_CHAIN_DEPTH} frames"
                );
                stack.push(Frame::new(land, next));
            }
            continue;
        }

        // All directions tried at this frame
        let done = stack.pop();
        if let Some(frame) = done {
            if stack.is_empty() || frame.extended {
                continue;
            }
            let mut result = frame.board;
            result.crown_back_ranks();
            trace!(origin = %origin, end = %frame.square, captures = stack.len(), "capture chain");
            out.push(result);
            found = true;
        }
    }

    found
}

/// All boards reachable by a capture chain starting at `origin`.
///
/// An empty square, or a piece with no jump available, yields nothing.
pub fn find_captures(board: &Board, origin: Square) -> Vec<Board> {
    let mut out = Vec::new();
    collect_captures(board, origin, &mut out);
    out
}

/// Check whether `color` has any capture anywhere on the board
pub fn has_capture(board: &Board, color: Color) -> bool {
    board.squares_of(color).iter_ones().any(|sq| {
        Direction::ALL
            .iter()
            .any(|&dir| try_jump(board, sq, dir).is_some())
    })
}

/// Number of pieces removed along one chain: difference in opponent count
#[inline]
pub fn captured_count(before: &Board, after: &Board, mover: Color) -> u32 {
    let opp = mover.opponent();
    before.count(opp).saturating_sub(after.count(opp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn board_with(pieces: &[(u8, Piece)]) -> Board {
        let mut board = Board::new();
        for &(idx, piece) in pieces {
            board.set(Square::new(idx), piece);
        }
        board
    }

    const BM: Piece = Piece::Man(Color::Black);
    const BK: Piece = Piece::King(Color::Black);
    const RM: Piece = Piece::Man(Color::Red);
    const RK: Piece = Piece::King(Color::Red);

    #[test]
    fn test_single_jump_black() {
        // Black man on 9 jumps red on 5 and lands on 0, its promotion rank
        let board = board_with(&[(9, BM), (5, RM)]);
        let result = find_captures(&board, Square::new(9));
        assert_eq!(result.len(), 1);
        let after = result[0];
        assert!(after.is_empty(Square::new(9)));
        assert!(after.is_empty(Square::new(5)));
        assert_eq!(after.get(Square::new(0)), BK);
    }

    #[test]
    fn test_single_jump_red() {
        // Red man on 5 jumps black on 9 down to 14
        let board = board_with(&[(5, RM), (9, BM)]);
        let result = find_captures(&board, Square::new(5));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].get(Square::new(14)), RM);
        assert!(result[0].is_empty(Square::new(9)));
        assert!(result[0].is_empty(Square::new(5)));
    }

    #[test]
    fn test_man_cannot_capture_backward() {
        // Black man on 5 with red on 9 behind it: jump would go toward row 7
        let board = board_with(&[(5, BM), (9, RM)]);
        assert!(find_captures(&board, Square::new(5)).is_empty());

        // Red man on 14 with black on 9 behind it
        let board = board_with(&[(14, RM), (9, BM)]);
        assert!(find_captures(&board, Square::new(14)).is_empty());
    }

    #[test]
    fn test_king_captures_backward() {
        let board = board_with(&[(5, BK), (9, RM)]);
        let result = find_captures(&board, Square::new(5));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].get(Square::new(14)), BK);

        let board = board_with(&[(14, RK), (9, BM)]);
        let result = find_captures(&board, Square::new(14));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].get(Square::new(5)), RK);
    }

    #[test]
    fn test_blocked_landing() {
        let board = board_with(&[(9, BM), (5, RM), (0, RM)]);
        assert!(find_captures(&board, Square::new(9)).is_empty());
    }

    #[test]
    fn test_no_capture_of_own_piece() {
        let board = board_with(&[(9, BM), (5, BM)]);
        assert!(find_captures(&board, Square::new(9)).is_empty());
    }

    #[test]
    fn test_empty_origin() {
        let board = board_with(&[(5, RM)]);
        assert!(find_captures(&board, Square::new(9)).is_empty());
        let mut out = Vec::new();
        assert!(!collect_captures(&board, Square::new(9), &mut out));
        assert!(out.is_empty());
    }

    #[test]
    fn test_double_jump_yields_only_final_board() {
        // Black man 26 -> over 22 -> 17 -> over 13 -> 8
        let board = board_with(&[(26, BM), (22, RM), (13, RM)]);
        let result = find_captures(&board, Square::new(26));
        assert_eq!(result.len(), 1);
        let after = result[0];
        assert_eq!(after.get(Square::new(8)), BM);
        assert_eq!(after.count(Color::Red), 0);
        assert!(after.is_empty(Square::new(17)));
        assert_eq!(captured_count(&board, &after, Color::Black), 2);
    }

    #[test]
    fn test_branching_chain() {
        // From 17 (after first jump 26 -> 17) the man can go over 13 or 14
        let board = board_with(&[(26, BM), (22, RM), (13, RM), (14, RM)]);
        let result = find_captures(&board, Square::new(26));
        assert_eq!(result.len(), 2);
        // Direction order: UpLeft (over 13 to 8) first, then UpRight (over 14 to 10)
        assert_eq!(result[0].get(Square::new(8)), BM);
        assert_eq!(result[0].get(Square::new(14)), RM);
        assert_eq!(result[1].get(Square::new(10)), BM);
        assert_eq!(result[1].get(Square::new(13)), RM);
    }

    #[test]
    fn test_promotion_deferred_mid_chain() {
        // Black man 10 jumps 6 and lands on 1. A king on 1 could go on over
        // 5 to 8, but the piece is still a man until the chain ends.
        let board = board_with(&[(10, BM), (6, RM), (5, RM)]);
        let result = find_captures(&board, Square::new(10));
        assert_eq!(result.len(), 1);
        let after = result[0];
        assert_eq!(after.get(Square::new(1)), BK);
        assert_eq!(after.get(Square::new(5)), RM);
        assert!(after.is_empty(Square::new(8)));
    }

    #[test]
    fn test_red_crowned_only_at_chain_end() {
        // Red man 21 jumps 25 to 30. Continuing over 26 back to 21 would
        // need a king.
        let board = board_with(&[(21, RM), (25, BM), (26, BM)]);
        let result = find_captures(&board, Square::new(21));
        assert_eq!(result.len(), 1);
        let after = result[0];
        assert_eq!(after.get(Square::new(30)), RK);
        assert_eq!(after.get(Square::new(26)), BM);
    }

    #[test]
    fn test_king_passes_through_vacated_origin() {
        // Diamond 9 -> 18 -> 25 -> 16 -> 9 over 14, 22, 21, 13
        let board = board_with(&[(9, BK), (14, RM), (22, RM), (21, RM), (13, RM)]);
        let result = find_captures(&board, Square::new(9));
        assert!(result
            .iter()
            .any(|b| b.get(Square::new(9)) == BK && b.count(Color::Red) == 0));
    }

    #[test]
    fn test_has_capture() {
        let board = board_with(&[(9, BM), (5, RM)]);
        assert!(has_capture(&board, Color::Black));
        // Red man on 5 would jump 9 to 14
        assert!(has_capture(&board, Color::Red));

        let board = board_with(&[(9, BM), (14, RM)]);
        // Black man on 9 cannot jump backward to 18; red man on 14 cannot go up
        assert!(!has_capture(&board, Color::Black));
        assert!(!has_capture(&board, Color::Red));
    }
}
