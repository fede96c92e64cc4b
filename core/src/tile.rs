use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of a single tile during a round.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    #[default]
    Unvisited,
    /// Caught fire, either as the origin or through a successful trial.
    Activated,
    /// Visited but failed its trial; never catches fire afterwards.
    Fizzled,
}

impl TileState {
    pub const fn is_activated(self) -> bool {
        matches!(self, Self::Activated)
    }

    pub const fn is_visited(self) -> bool {
        !matches!(self, Self::Unvisited)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    position: Coord2,
    state: TileState,
    distance: u32,
    payout: f32,
}

impl Tile {
    pub(crate) fn new(position: Coord2, center: Coord2) -> Self {
        Self {
            position,
            state: TileState::Unvisited,
            distance: manhattan_distance(position, center),
            payout: 0.0,
        }
    }

    pub fn position(&self) -> Coord2 {
        self.position
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    pub fn is_activated(&self) -> bool {
        self.state.is_activated()
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Always zero, no rule assigns payouts yet.
    pub fn payout(&self) -> f32 {
        self.payout
    }

    /// Moves an unvisited tile into its terminal state. Returns `false` when
    /// the tile had already been visited.
    pub(crate) fn settle(&mut self, activated: bool) -> bool {
        if self.state.is_visited() {
            return false;
        }
        self.state = if activated {
            TileState::Activated
        } else {
            TileState::Fizzled
        };
        true
    }
}
