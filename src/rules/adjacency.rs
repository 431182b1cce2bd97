//! Diagonal adjacency for the 32 playable squares
//!
//! Two fixed tables give, for each square and direction, the neighbor one
//! step away (`MOVE_TABLE`) and the landing square two steps away
//! (`JUMP_TABLE`). Both are computed at compile time from the grid geometry.

use crate::board::{Square, NUM_SQUARES};

/// Diagonal directions. 0-1 head toward row 0, 2-3 toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    UpLeft = 0,
    UpRight = 1,
    DownRight = 2,
    DownLeft = 3,
}

impl Direction {
    /// All directions in search order
    pub const ALL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Option<Direction> {
        Self::ALL.get(idx).copied()
    }

    /// (row, col) offset of one step
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }

    #[inline]
    pub const fn is_toward_row_zero(self) -> bool {
        matches!(self, Direction::UpLeft | Direction::UpRight)
    }
}

pub type AdjacencyTable = [[Option<Square>; 4]; NUM_SQUARES];

const fn build_table(distance: i32) -> AdjacencyTable {
    let mut table: AdjacencyTable = [[None; 4]; NUM_SQUARES];
    let mut idx = 0;
    while idx < NUM_SQUARES {
        let sq = Square::new(idx as u8);
        let mut d = 0;
        while d < 4 {
            let (dr, dc) = Direction::ALL[d].delta();
            table[idx][d] = Square::from_coords(
                sq.row() as i32 + dr * distance,
                sq.col() as i32 + dc * distance,
            );
            d += 1;
        }
        idx += 1;
    }
    table
}

/// One-step diagonal neighbors
pub static MOVE_TABLE: AdjacencyTable = build_table(1);

/// Jump landing squares, two steps along the diagonal
pub static JUMP_TABLE: AdjacencyTable = build_table(2);

/// Neighbor of `sq` one step in `dir`
#[inline]
pub fn step(sq: Square, dir: Direction) -> Option<Square> {
    MOVE_TABLE[sq.to_index()][dir.index()]
}

/// Landing square of a jump from `sq` in `dir`
#[inline]
pub fn jump(sq: Square, dir: Direction) -> Option<Square> {
    JUMP_TABLE[sq.to_index()][dir.index()]
}
