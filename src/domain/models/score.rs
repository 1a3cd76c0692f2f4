//! Simulated interview score.
//!
//! No real evaluation signal exists, so a completed session receives a
//! pseudo-random percentage from a fixed range. This is a placeholder, not a
//! scoring algorithm.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// Inclusive percentage range that completion scores are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedScore {
    min: u8,
    max: u8,
}

impl Default for SimulatedScore {
    fn default() -> Self {
        Self { min: 80, max: 100 }
    }
}

impl SimulatedScore {
    /// # Errors
    /// Returns `ValidationFailed` unless `min <= max <= 100`.
    pub fn new(min: u8, max: u8) -> DomainResult<Self> {
        if min > max || max > 100 {
            return Err(DomainError::ValidationFailed(format!(
                "score range {min}..={max} must satisfy min <= max <= 100"
            )));
        }
        Ok(Self { min, max })
    }

    /// Always returns the same value
    pub fn fixed(value: u8) -> DomainResult<Self> {
        Self::new(value, value)
    }

    /// Lowest possible score
    pub const fn min(&self) -> u8 {
        self.min
    }

    /// Highest possible score
    pub const fn max(&self) -> u8 {
        self.max
    }

    /// Draws a score uniformly from the range.
    pub fn draw(&self) -> u8 {
        rand::thread_rng().gen_range(self.min..=self.max)
    }
}
