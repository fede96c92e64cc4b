use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Odds must be between 0 and 1, got {0}")]
    InvalidProbability(f64),
    #[error("Board must have at least one tile")]
    EmptyBoard,
    #[error("Board length must be an odd number between {min} and {max}, got {length}")]
    InvalidLength { length: Coord, min: Coord, max: Coord },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match its tiles")]
    InvalidBoardShape,
    #[error("Visitation log does not match the tiles")]
    InvalidMoveLog,
}

pub type Result<T> = core::result::Result<T, ConfigError>;
