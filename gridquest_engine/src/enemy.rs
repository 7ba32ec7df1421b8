//! Enemy Module
//!
//! Hostile creatures living in a location. Health only ever goes down during
//! play and saturates at zero.

use std::fmt::Display;

use crate::error::{GameError, non_negative};

/// A creature the player can fight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    name: String,
    health: u64,
    power: u64,
}
impl Enemy {
    /// Create an enemy.
    /// # Errors
    /// - `EmptyName` if `name` is empty
    /// - `NegativeHealth` / `NegativePower` on negative stats
    pub fn new(name: impl Into<String>, health: i64, power: i64) -> Result<Enemy, GameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        let health = non_negative(health, GameError::NegativeHealth)?;
        let power = non_negative(power, GameError::NegativePower)?;
        Ok(Enemy { name, health, power })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u64 {
        self.health
    }

    pub fn power(&self) -> u64 {
        self.power
    }

    /// Set health directly. Negative values clamp to zero.
    pub fn set_health(&mut self, health: i64) {
        self.health = health.max(0).unsigned_abs();
    }

    /// Reduce health by `amount`. Saturates at zero.
    /// # Errors
    /// - `InvalidDamage` unless `amount` is strictly positive
    pub fn take_damage(&mut self, amount: i64) -> Result<(), GameError> {
        if amount <= 0 {
            return Err(GameError::InvalidDamage(amount));
        }
        self.health = self.health.saturating_sub(amount.unsigned_abs());
        Ok(())
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}
impl Display for Enemy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\n\t\tThis is {}.\n\t\tIt has {} health points.\n\t\tIt has {} power points.\n",
            self.name, self.health, self.power
        )
    }
}
