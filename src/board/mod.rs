//! Board representation for English draughts

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::SquareSet;
pub use board::{is_valid, Board};

use std::fmt;
use std::str::FromStr;

use crate::error::MoveGenError;
use crate::rules::Direction;

/// Number of playable (dark) squares
pub const NUM_SQUARES: usize = 32;
/// Width of the full 8x8 grid
pub const GRID_SIZE: usize = 8;
/// Playable squares per row
pub const SQUARES_PER_ROW: usize = GRID_SIZE / 2;

/// Side colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Squares on which a piece of this color is crowned.
    ///
    /// Black moves toward row 0, red toward row 7.
    #[inline]
    pub fn promotion_rank(self) -> std::ops::RangeInclusive<u8> {
        match self {
            Color::Black => 0..=3,
            Color::Red => 28..=31,
        }
    }

    /// Whether `sq` lies on this color's promotion rank
    #[inline]
    pub fn promotes_on(self, sq: Square) -> bool {
        self.promotion_rank().contains(&sq.index())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = MoveGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Color::Red),
            "black" => Ok(Color::Black),
            other => Err(MoveGenError::InvalidPlayer(other.to_string())),
        }
    }
}

/// Contents of a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    Man(Color),
    King(Color),
}

impl Piece {
    pub const EMPTY_SYMBOL: char = '_';

    /// Decode one board symbol (`_`, `r`, `R`, `b`, `B`)
    #[inline]
    pub fn from_symbol(c: char) -> Option<Piece> {
        match c {
            '_' => Some(Piece::Empty),
            'r' => Some(Piece::Man(Color::Red)),
            'R' => Some(Piece::King(Color::Red)),
            'b' => Some(Piece::Man(Color::Black)),
            'B' => Some(Piece::King(Color::Black)),
            _ => None,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Piece::Empty => Self::EMPTY_SYMBOL,
            Piece::Man(Color::Red) => 'r',
            Piece::King(Color::Red) => 'R',
            Piece::Man(Color::Black) => 'b',
            Piece::King(Color::Black) => 'B',
        }
    }

    /// Color of the piece, `None` for an empty square
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::Man(c) | Piece::King(c) => Some(c),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    #[inline]
    pub fn is_king(self) -> bool {
        matches!(self, Piece::King(_))
    }

    #[inline]
    pub fn belongs_to(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// True when both squares hold pieces of different colors
    #[inline]
    pub fn is_enemy_of(self, other: Piece) -> bool {
        match (self.color(), other.color()) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    /// King variant of this piece (kings and empty squares are unchanged)
    #[inline]
    pub fn crowned(self) -> Piece {
        match self {
            Piece::Man(c) => Piece::King(c),
            other => other,
        }
    }

    /// Whether this piece may travel in `dir`.
    ///
    /// Black men go toward row 0 (directions 0-1), red men toward row 7
    /// (directions 2-3), kings go anywhere.
    #[inline]
    pub fn may_move(self, dir: Direction) -> bool {
        match self {
            Piece::Empty => false,
            Piece::King(_) => true,
            Piece::Man(Color::Black) => dir.is_toward_row_zero(),
            Piece::Man(Color::Red) => !dir.is_toward_row_zero(),
        }
    }
}

/// A playable square, indexed 0..32 row-major over the dark squares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub const fn new(index: u8) -> Self {
        debug_assert!((index as usize) < NUM_SQUARES);
        Self(index)
    }

    /// Checked constructor
    #[inline]
    pub fn try_new(index: usize) -> Option<Self> {
        (index < NUM_SQUARES).then(|| Self(index as u8))
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn to_index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / SQUARES_PER_ROW as u8
    }

    /// Column on the 8x8 grid. Even rows start on column 1.
    #[inline]
    pub const fn col(self) -> u8 {
        let offset = if self.row() % 2 == 0 { 1 } else { 0 };
        2 * (self.0 % SQUARES_PER_ROW as u8) + offset
    }

    /// Square at grid coordinates, `None` for light or off-board cells
    #[inline]
    pub const fn from_coords(row: i32, col: i32) -> Option<Self> {
        if row < 0 || row >= GRID_SIZE as i32 || col < 0 || col >= GRID_SIZE as i32 {
            return None;
        }
        if (row + col) % 2 == 0 {
            return None;
        }
        Some(Self((row * SQUARES_PER_ROW as i32 + col / 2) as u8))
    }

    /// Iterate all 32 squares in ascending order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
