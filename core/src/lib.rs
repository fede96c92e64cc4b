use serde::{Deserialize, Serialize};

pub use board::*;
pub use distance::*;
pub use engine::*;
pub use error::*;
pub use odds::*;
pub use tile::*;
pub use trials::*;
pub use types::*;

mod board;
mod distance;
mod engine;
mod error;
mod odds;
mod tile;
mod trials;
mod types;

/// Settings for one round as chosen by the player.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub length: Coord,
    pub odds: OddsFunction,
}

impl RoundConfig {
    pub const MIN_LENGTH: Coord = 3;
    pub const MAX_LENGTH: Coord = 33;

    pub const fn new_unchecked(length: Coord, odds: OddsFunction) -> Self {
        Self { length, odds }
    }

    /// Accepts odd lengths between [`Self::MIN_LENGTH`] and [`Self::MAX_LENGTH`].
    pub fn new(length: Coord, odds: OddsFunction) -> Result<Self> {
        Self::validate_length(length)?;
        Ok(Self::new_unchecked(length, odds))
    }

    pub fn validate_length(length: Coord) -> Result<Coord> {
        if length % 2 == 1 && (Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            Ok(length)
        } else {
            Err(ConfigError::InvalidLength {
                length,
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
            })
        }
    }

    pub fn probability(&self) -> f64 {
        self.odds.odds(self.length)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.length, self.length)
    }

    pub fn build_board(&self) -> Result<Board> {
        Board::new(self.probability(), self.length)
    }
}
