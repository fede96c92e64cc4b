use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One entry of the visitation log.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub position: Coord2,
    pub activated: bool,
}

/// Grid of tiles for a single round, with the spread probability and the
/// ordered log of every tile the flood fill has examined.
///
/// Deserialized boards go through the same checks as [`Board::new`], and the
/// activated count is recomputed from the tiles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SavedBoard")]
pub struct Board {
    pub(crate) tiles: Array2<Tile>,
    pub(crate) probability: f64,
    pub(crate) moves: Vec<Move>,
    pub(crate) activated_count: CellCount,
}

#[derive(Deserialize)]
struct SavedBoard {
    tiles: Array2<Tile>,
    probability: f64,
    moves: Vec<Move>,
}

impl TryFrom<SavedBoard> for Board {
    type Error = ConfigError;

    fn try_from(saved: SavedBoard) -> Result<Self> {
        let SavedBoard {
            tiles,
            probability,
            moves,
        } = saved;
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::InvalidProbability(probability));
        }

        let (rows, cols) = tiles.dim();
        if rows == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        let length = Coord::try_from(rows).map_err(|_| ConfigError::InvalidBoardShape)?;
        if rows != cols {
            return Err(ConfigError::InvalidBoardShape);
        }

        let center = board_center(length);
        let mut activated_count: CellCount = 0;
        let mut visited = 0;
        for ((x, y), tile) in tiles.indexed_iter() {
            let position = (x as Coord, y as Coord);
            if tile.position() != position
                || tile.distance() != manhattan_distance(position, center)
            {
                return Err(ConfigError::InvalidBoardShape);
            }
            if tile.state().is_visited() {
                visited += 1;
            }
            if tile.is_activated() {
                activated_count += 1;
            }
        }

        let mut logged: Array2<bool> = Array2::default(tiles.dim());
        for mv in &moves {
            let (x, y) = mv.position;
            if x >= length || y >= length {
                return Err(ConfigError::InvalidCoords);
            }
            let seen = &mut logged[mv.position.to_nd_index()];
            let tile = &tiles[mv.position.to_nd_index()];
            if *seen || !tile.state().is_visited() || tile.is_activated() != mv.activated {
                return Err(ConfigError::InvalidMoveLog);
            }
            *seen = true;
        }
        if visited != moves.len() {
            return Err(ConfigError::InvalidMoveLog);
        }

        Ok(Self {
            tiles,
            probability,
            moves,
            activated_count,
        })
    }
}

impl Board {
    /// Creates a `length × length` board whose distance field is centred on
    /// `(length / 2, length / 2)`.
    ///
    /// Fails when `probability` is outside `[0, 1]` (NaN included) or the
    /// board would be empty.
    pub fn new(probability: f64, length: Coord) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::InvalidProbability(probability));
        }
        if length == 0 {
            return Err(ConfigError::EmptyBoard);
        }

        let center = board_center(length);
        let size = usize::from(length);
        let tiles = Array2::from_shape_fn((size, size), |(x, y)| {
            // both axes are below `length`, which is a `Coord`
            Tile::new((x as Coord, y as Coord), center)
        });
        log::debug!(
            "new board: length {}, probability {:.4}, center {:?}",
            length,
            probability,
            center
        );

        Ok(Self {
            tiles,
            probability,
            moves: Vec::new(),
            activated_count: 0,
        })
    }

    pub fn length(&self) -> Coord {
        // the grid is square and was built from a `Coord`
        self.tiles.nrows() as Coord
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn total_cells(&self) -> CellCount {
        let length = self.length();
        mult(length, length)
    }

    pub fn activated_count(&self) -> CellCount {
        self.activated_count
    }

    /// Number of distinct tiles in the visitation log.
    pub fn visited_count(&self) -> usize {
        self.moves.len()
    }

    /// Visitation log in the order the flood fill examined the tiles.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Position of the first tile that caught fire this round.
    pub fn origin(&self) -> Option<Coord2> {
        self.moves.first().map(|mv| mv.position)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let length = self.length();
        if coords.0 < length && coords.1 < length {
            Ok(coords)
        } else {
            Err(ConfigError::InvalidCoords)
        }
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<&Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.tiles[coords.to_nd_index()])
    }

    pub fn distance_value(&self, coords: Coord2) -> Result<u32> {
        Ok(self.tile_at(coords)?.distance())
    }

    pub fn is_activated(&self, coords: Coord2) -> Result<bool> {
        Ok(self.tile_at(coords)?.is_activated())
    }

    /// Tiles row by row.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &Tile>> {
        self.tiles.rows().into_iter().map(|row| row.into_iter())
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}
