//! Errors surfaced by the text-level entry points

/// Invalid input handed to the move generator
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveGenError {
    /// Wrong length or a symbol outside `_ r R b B`
    #[error("Invalid board \"{0}\".")]
    InvalidBoard(String),
    /// Player other than `red` or `black`
    #[error("Invalid player \"{0}\" (expected \"red\" or \"black\").")]
    InvalidPlayer(String),
}

pub type Result<T> = std::result::Result<T, MoveGenError>;
