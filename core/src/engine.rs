use serde::Serialize;

use crate::*;

/// Outcome of triggering a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TriggerOutcome {
    /// Coordinates were off the board or the tile had already been visited.
    NoChange,
    /// The tile caught fire. Counts cover only this trigger.
    Ignited {
        activated: CellCount,
        visited: CellCount,
    },
}

impl TriggerOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Ignited { .. } => true,
        }
    }
}

/// Pending visit on the work stack.
#[derive(Copy, Clone, Debug)]
struct Visit {
    coords: Coord2,
    origin: bool,
}

impl Board {
    /// Sets fire to the tile at `(x, y)` and lets it spread.
    ///
    /// The chosen tile always ignites. Every other tile reached by the fire
    /// draws one sample from `trials` and catches fire when the sample is
    /// below the board probability; a tile that fails is logged but does not
    /// pass the fire on. Coordinates off the board and tiles that were
    /// already visited are ignored.
    pub fn trigger<T: TrialSource + ?Sized>(
        &mut self,
        x: i32,
        y: i32,
        trials: &mut T,
    ) -> TriggerOutcome {
        let Some(coords) = checked_coords((x, y), self.length()) else {
            log::debug!("trigger at ({x}, {y}) is off the board");
            return TriggerOutcome::NoChange;
        };
        if self.tiles[coords.to_nd_index()].state().is_visited() {
            log::debug!("trigger at {coords:?} hit a visited tile");
            return TriggerOutcome::NoChange;
        }

        let activated_before = self.activated_count;
        let visited_before = self.moves.len();
        self.spread(coords, trials);

        let outcome = TriggerOutcome::Ignited {
            activated: self.activated_count - activated_before,
            visited: (self.moves.len() - visited_before)
                .try_into()
                .unwrap_or(CellCount::MAX),
        };
        log::debug!(
            "trigger at {:?}: {:?}, {}/{} tiles on fire",
            coords,
            outcome,
            self.activated_count,
            self.total_cells()
        );
        outcome
    }

    /// Depth-first flood fill over an explicit stack.
    ///
    /// Neighbours are pushed in reverse so they pop in `SPREAD_ORDER`, and
    /// guards are checked on pop. A sibling is therefore only examined after
    /// the previous sibling's whole spread has finished, which keeps the
    /// order of visits and of drawn samples identical to a recursive walk.
    fn spread<T: TrialSource + ?Sized>(&mut self, origin: Coord2, trials: &mut T) {
        let length = self.length();
        let mut stack = vec![Visit {
            coords: origin,
            origin: true,
        }];

        while let Some(Visit { coords, origin }) = stack.pop() {
            let tile = &mut self.tiles[coords.to_nd_index()];
            if tile.state().is_visited() {
                continue;
            }

            let ignites = origin || {
                let sample = trials.draw();
                log::trace!("trial at {coords:?}: {sample:.4} vs {:.4}", self.probability);
                sample < self.probability
            };

            tile.settle(ignites);
            self.moves.push(Move {
                position: coords,
                activated: ignites,
            });
            if !ignites {
                continue;
            }
            self.activated_count += 1;

            stack.extend(orthogonal_neighbors(coords, length).rev().map(|coords| Visit {
                coords,
                origin: false,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(board: &Board) -> Vec<(Coord2, bool)> {
        board
            .moves()
            .iter()
            .map(|mv| (mv.position, mv.activated))
            .collect()
    }

    #[test]
    fn full_probability_burns_whole_board() {
        let mut board = Board::new(1.0, 3).unwrap();
        let mut trials = ConstantTrials(0.999);

        let outcome = board.trigger(1, 1, &mut trials);

        assert_eq!(
            outcome,
            TriggerOutcome::Ignited {
                activated: 9,
                visited: 9
            }
        );
        assert_eq!(board.activated_count(), 9);
        assert_eq!(board.moves().len(), 9);
        assert_eq!(board.origin(), Some((1, 1)));
        assert!(board.moves().iter().all(|mv| mv.activated));
    }

    #[test]
    fn zero_probability_only_burns_origin() {
        let mut board = Board::new(0.0, 5).unwrap();
        let mut trials = ConstantTrials(0.0);

        board.trigger(0, 0, &mut trials);

        assert_eq!(board.activated_count(), 1);
        assert_eq!(
            positions(&board),
            vec![((0, 0), true), ((1, 0), false), ((0, 1), false)]
        );
    }

    #[test]
    fn zero_probability_interior_logs_four_neighbors() {
        let mut board = Board::new(0.0, 3).unwrap();
        let mut trials = ScriptedTrials::default();

        board.trigger(1, 1, &mut trials);

        assert_eq!(board.activated_count(), 1);
        assert_eq!(trials.drawn(), 4);
        assert_eq!(
            positions(&board),
            vec![
                ((1, 1), true),
                ((2, 1), false),
                ((0, 1), false),
                ((1, 2), false),
                ((1, 0), false),
            ]
        );
    }

    #[test]
    fn origin_ignites_without_drawing() {
        let mut board = Board::new(0.0, 1).unwrap();
        let mut trials = ScriptedTrials::default();

        board.trigger(0, 0, &mut trials);

        assert_eq!(board.activated_count(), 1);
        assert_eq!(trials.drawn(), 0);
    }

    #[test]
    fn spread_follows_depth_first_order() {
        let mut board = Board::new(0.5, 3).unwrap();
        let mut trials = ScriptedTrials::new([0.1, 0.9, 0.9, 0.1, 0.9]);

        board.trigger(0, 0, &mut trials);

        // (1, 0) spreads into (2, 0) and (1, 1) before the origin's +y
        // neighbour (0, 1) is examined; (1, 1) is then skipped without a draw
        assert_eq!(
            positions(&board),
            vec![
                ((0, 0), true),
                ((1, 0), true),
                ((2, 0), false),
                ((1, 1), false),
                ((0, 1), true),
                ((0, 2), false),
            ]
        );
        assert_eq!(trials.drawn(), 5);
        assert_eq!(board.activated_count(), 3);
    }

    #[test]
    fn retrigger_is_noop() {
        let mut board = Board::new(0.5, 5).unwrap();
        let mut trials = seeded_trials(3);
        board.trigger(2, 2, &mut trials);
        let before = board.clone();

        assert_eq!(board.trigger(2, 2, &mut trials), TriggerOutcome::NoChange);
        assert_eq!(board, before);
    }

    #[test]
    fn off_board_trigger_is_noop() {
        let mut board = Board::new(1.0, 3).unwrap();
        let mut trials = ScriptedTrials::default();
        let before = board.clone();

        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MAX, i32::MIN)] {
            assert_eq!(board.trigger(x, y, &mut trials), TriggerOutcome::NoChange);
        }
        assert_eq!(board, before);
        assert_eq!(trials.drawn(), 0);
    }

    #[test]
    fn fizzled_tile_cannot_become_origin() {
        let mut board = Board::new(0.0, 3).unwrap();
        let mut trials = ConstantTrials(0.5);
        board.trigger(1, 1, &mut trials);

        assert_eq!(board.trigger(0, 1, &mut trials), TriggerOutcome::NoChange);
        assert!(!board.is_activated((0, 1)).unwrap());
    }

    #[test]
    fn second_origin_on_untouched_tile_extends_log() {
        let mut board = Board::new(0.0, 5).unwrap();
        let mut trials = ConstantTrials(0.5);
        board.trigger(0, 0, &mut trials);

        let outcome = board.trigger(4, 4, &mut trials);

        assert_eq!(
            outcome,
            TriggerOutcome::Ignited {
                activated: 1,
                visited: 3
            }
        );
        assert_eq!(board.activated_count(), 2);
        assert_eq!(board.origin(), Some((0, 0)));
        assert_eq!(board.moves()[3].position, (4, 4));
    }

    #[test]
    fn activated_count_matches_tiles() {
        let mut board = Board::new(0.6, 15).unwrap();
        board.trigger(7, 7, &mut seeded_trials(11));

        let counted = board.tiles().filter(|tile| tile.is_activated()).count();
        assert_eq!(board.activated_count() as usize, counted);
    }

    #[test]
    fn deep_board_spreads_without_recursion() {
        let length: Coord = 2000;
        let mut board = Board::new(1.0, length).unwrap();

        board.trigger(0, 0, &mut seeded_trials(1));

        assert_eq!(board.activated_count(), 4_000_000);
        assert_eq!(board.moves().len(), 4_000_000);
        assert_eq!(board.origin(), Some((0, 0)));
    }
}
