use std::collections::VecDeque;

use rand::prelude::*;
use rand::rngs::StdRng;

/// Ordered stream of uniform samples in `[0, 1)` consumed by the flood fill.
///
/// Each non-origin visit draws exactly one sample, so a source that replays
/// the same sequence replays the same round.
pub trait TrialSource {
    fn draw(&mut self) -> f64;
}

impl TrialSource for StdRng {
    fn draw(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl<T: TrialSource + ?Sized> TrialSource for &mut T {
    fn draw(&mut self) -> f64 {
        (**self).draw()
    }
}

/// Seeded source for reproducible rounds.
pub fn seeded_trials(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Source that returns the same sample forever.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstantTrials(pub f64);

impl TrialSource for ConstantTrials {
    fn draw(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed list of samples. Once the list runs out every sample is
/// `1.0`, which fails any trial.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptedTrials {
    samples: VecDeque<f64>,
    drawn: usize,
}

impl ScriptedTrials {
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            drawn: 0,
        }
    }

    /// Number of samples handed out so far, including exhausted ones.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl TrialSource for ScriptedTrials {
    fn draw(&mut self) -> f64 {
        self.drawn += 1;
        self.samples.pop_front().unwrap_or(1.0)
    }
}
