//! Board structure and its 32-symbol text encoding

use std::fmt;
use std::str::FromStr;

use super::bitboard::SquareSet;
use super::{Color, Piece, Square, GRID_SIZE, NUM_SQUARES};
use crate::error::MoveGenError;

/// Check that `text` is a well-formed board encoding.
///
/// Only structure is checked: exactly 32 symbols, each one of
/// `_`, `r`, `R`, `b`, `B`. Piece counts and reachability are not.
pub fn is_valid(text: &str) -> bool {
    text.len() == NUM_SQUARES && text.chars().all(|c| Piece::from_symbol(c).is_some())
}

/// Draughts position: the contents of the 32 playable squares.
///
/// Boards are plain values; every generated move is a fresh copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Piece; NUM_SQUARES],
}

impl Board {
    /// A board with every square empty
    pub const EMPTY: Board = Board {
        cells: [Piece::Empty; NUM_SQUARES],
    };

    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Standard opening position: black on 20..32, red on 0..12
    pub fn starting_position() -> Self {
        let mut board = Self::EMPTY;
        for sq in Square::all() {
            match sq.index() {
                0..=11 => board.set(sq, Piece::Man(Color::Red)),
                20..=31 => board.set(sq, Piece::Man(Color::Black)),
                _ => {}
            }
        }
        board
    }

    /// Get piece at square
    #[inline]
    pub fn get(&self, sq: Square) -> Piece {
        self.cells[sq.to_index()]
    }

    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.to_index()] = piece;
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.set(sq, Piece::Empty);
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_empty()
    }

    /// Squares occupied by `color`, men and kings alike
    pub fn squares_of(&self, color: Color) -> SquareSet {
        let mut set = SquareSet::new();
        for sq in Square::all() {
            if self.get(sq).belongs_to(color) {
                set.insert(sq);
            }
        }
        set
    }

    /// Number of pieces `color` has on the board
    #[inline]
    pub fn count(&self, color: Color) -> u32 {
        self.squares_of(color).len()
    }

    /// Move the piece on `from` to `to`, leaving `from` empty
    #[inline]
    pub fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.get(from);
        self.clear(from);
        self.set(to, piece);
    }

    /// Crown every man standing on its opposing back rank
    pub fn crown_back_ranks(&mut self) {
        for color in [Color::Black, Color::Red] {
            for idx in color.promotion_rank() {
                let sq = Square::new(idx);
                let piece = self.get(sq);
                if piece.belongs_to(color) {
                    self.set(sq, piece.crowned());
                }
            }
        }
    }

    /// Iterate (square, piece) pairs in square order
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().map(move |sq| (sq, self.get(sq)))
    }

    /// 8x8 diagram, row 0 on top, light squares shown as spaces
    pub fn pretty(&self) -> String {
        let mut out = String::with_capacity((GRID_SIZE * 2 + 1) * GRID_SIZE);
        for row in 0..GRID_SIZE as i32 {
            for col in 0..GRID_SIZE as i32 {
                let c = match Square::from_coords(row, col) {
                    Some(sq) => self.get(sq).symbol(),
                    None => ' ',
                };
                out.push(c);
                if col + 1 < GRID_SIZE as i32 {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = MoveGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != NUM_SQUARES {
            return Err(MoveGenError::InvalidBoard(s.to_string()));
        }
        let mut board = Board::EMPTY;
        for (idx, c) in s.chars().enumerate() {
            let piece =
                Piece::from_symbol(c).ok_or_else(|| MoveGenError::InvalidBoard(s.to_string()))?;
            board.cells[idx] = piece;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.cells {
            write!(f, "{}", piece.symbol())?;
        }
        Ok(())
    }
}
