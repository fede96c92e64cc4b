use serde::{Deserialize, Serialize};

use crate::*;

/// Curve mapping a board length to the spread probability.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum OddsFunction {
    /// `k^n / (a + n^k)`: shrinks as boards grow once `n^k` outpaces `k^n`.
    Polynomial { k: f64, a: f64 },
    /// `1 - e^(-k n)`: saturates towards 1 on large boards.
    Exponential { k: f64 },
}

impl OddsFunction {
    pub const DEFAULT_POLYNOMIAL: Self = Self::Polynomial { k: 1.08, a: 10.0 };
    pub const DEFAULT_EXPONENTIAL: Self = Self::Exponential { k: 0.02 };

    /// Evaluates the curve. The result is not clamped; values outside
    /// `[0, 1]` are rejected when the board is built.
    pub fn odds(self, length: Coord) -> f64 {
        let n = f64::from(length);
        let odds = match self {
            Self::Polynomial { k, a } => k.powf(n) / (a + n.powf(k)),
            Self::Exponential { k } => 1.0 - (-k * n).exp(),
        };
        if !(0.0..=1.0).contains(&odds) {
            log::warn!("{self:?} gives odds {odds} for length {length}, outside [0, 1]");
        }
        odds
    }
}

impl Default for OddsFunction {
    fn default() -> Self {
        Self::DEFAULT_EXPONENTIAL
    }
}
