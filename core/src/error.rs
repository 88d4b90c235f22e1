use thiserror::Error;

use crate::{Coord2, UnknownDifficulty};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one row and one column")]
    InvalidDimensions,
    #[error("Board must contain at least one mine")]
    NoMines,
    #[error("Too many mines, a 3x3 safe zone must fit around the first click")]
    TooManyMines,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Cell does not match its position or its neighbors")]
    InconsistentCell,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Failures while writing a saved game. Reading never fails, a bad record is treated as absent.
#[derive(Error, Debug)]
pub enum SaveError<E> {
    #[error("Could not encode saved game: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not write saved game: {0}")]
    Store(#[source] E),
}

/// Why a decoded record does not describe a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error(transparent)]
    Difficulty(#[from] UnknownDifficulty),
    #[error("Custom difficulty without customConfig")]
    MissingCustomConfig,
    #[error("Board is {found:?} but the difficulty needs {expected:?}")]
    BoardSize { found: Coord2, expected: Coord2 },
}
