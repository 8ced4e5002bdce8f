use crate::demand::DemandLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The raw model output could not be turned into a count.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CountError {
    /// The regression produced NaN or an infinity.
    NonFinite(f64),
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountError::NonFinite(raw) => {
                write!(f, "model produced a non-finite prediction ({})", raw)
            }
        }
    }
}

impl std::error::Error for CountError {}

/// A non-negative predicted rental count.
///
/// Raw regression output is rounded to the nearest integer; finite
/// negative values clamp to zero so the classifier's domain stays the
/// non-negative integers. Non-finite values are rejected outright.
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize,
)]
pub struct PredictedCount(u32);

impl PredictedCount {
    pub const fn new(count: u32) -> Self {
        PredictedCount(count)
    }

    /// Apply the round/clamp policy to a raw regression value.
    pub fn from_raw(raw: f64) -> Result<Self, CountError> {
        if !raw.is_finite() {
            return Err(CountError::NonFinite(raw));
        }
        if raw <= 0.0 {
            return Ok(PredictedCount(0));
        }
        Ok(PredictedCount(raw.round() as u32))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The demand bucket this count falls into.
    pub fn level(self) -> DemandLevel {
        DemandLevel::classify(self.0)
    }
}

impl fmt::Display for PredictedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
