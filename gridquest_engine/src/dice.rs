//! Damage rolls.
//!
//! Combat never touches a random number generator directly; it asks a
//! [`DamageRoll`] for a value, so tests can substitute a fixed roll.

use rand::Rng;
use rand::rngs::ThreadRng;

/// Source of uniform integer rolls.
pub trait DamageRoll {
    /// A value in the closed range `low..=high`.
    fn roll(&mut self, low: u64, high: u64) -> u64;
}

/// Rolls backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngRoll<R: Rng> {
    rng: R,
}
impl<R: Rng> RngRoll<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}
impl RngRoll<ThreadRng> {
    /// Rolls from the thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}
impl Default for RngRoll<ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}
impl<R: Rng> DamageRoll for RngRoll<R> {
    fn roll(&mut self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }
}

/// Always rolls the same value, whatever range is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRoll(pub u64);

impl DamageRoll for FixedRoll {
    fn roll(&mut self, _low: u64, _high: u64) -> u64 {
        self.0
    }
}

/// Plays back a list of rolls in order, then repeats the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedRoll {
    rolls: Vec<u64>,
    next: usize,
}
impl ScriptedRoll {
    pub fn new(rolls: impl Into<Vec<u64>>) -> Self {
        Self {
            rolls: rolls.into(),
            next: 0,
        }
    }
}
impl DamageRoll for ScriptedRoll {
    fn roll(&mut self, low: u64, _high: u64) -> u64 {
        let value = self
            .rolls
            .get(self.next)
            .or_else(|| self.rolls.last())
            .copied()
            .unwrap_or(low);
        self.next += 1;
        value
    }
}
