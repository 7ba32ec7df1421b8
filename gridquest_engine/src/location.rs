//! Location definitions.
//!
//! A location is one cell of the world grid. It may be walled off by a colored
//! barrier and may hold enemies and gems.

use std::fmt::Display;

use crate::{Enemy, Gem, GemHolder, world::Coord};

/// One cell of the world grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub coord: Coord,
    pub name: String,
    pub description: String,
    /// Color of the active barrier, if any.
    barrier: Option<String>,
    pub enemies: Vec<Enemy>,
    gems: Vec<Gem>,
}
impl Location {
    /// Create an open, empty location at `coord`.
    pub fn new(coord: Coord, name: impl Into<String>, description: impl Into<String>) -> Location {
        Location {
            coord,
            name: name.into(),
            description: description.into(),
            barrier: None,
            enemies: Vec::new(),
            gems: Vec::new(),
        }
    }

    /// Builder-style helper to wall this location off.
    #[must_use]
    pub fn with_barrier(mut self, color: impl Into<String>) -> Location {
        self.set_barrier(color);
        self
    }

    #[must_use]
    pub fn with_enemies(mut self, enemies: Vec<Enemy>) -> Location {
        self.enemies = enemies;
        self
    }

    #[must_use]
    pub fn with_gems(mut self, gems: Vec<Gem>) -> Location {
        self.gems = gems;
        self
    }

    pub fn has_barrier(&self) -> bool {
        self.barrier.is_some()
    }

    pub fn barrier_color(&self) -> Option<&str> {
        self.barrier.as_deref()
    }

    pub fn set_barrier(&mut self, color: impl Into<String>) {
        self.barrier = Some(color.into());
    }

    /// Drop the barrier. Idempotent.
    pub fn remove_barrier(&mut self) {
        self.barrier = None;
    }

    pub fn clear_gems(&mut self) {
        self.gems.clear();
    }

    /// First enemy here with exactly this name.
    pub fn enemy(&self, name: &str) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.name() == name)
    }

    /// Remove the first enemy with this name, returning it.
    pub fn remove_enemy(&mut self, name: &str) -> Option<Enemy> {
        let idx = self.enemies.iter().position(|enemy| enemy.name() == name)?;
        Some(self.enemies.remove(idx))
    }
}
impl GemHolder for Location {
    fn gems(&self) -> &[Gem] {
        &self.gems
    }

    fn add_gem(&mut self, gem: Gem) {
        self.gems.push(gem);
    }

    fn take_gems(&mut self) -> Vec<Gem> {
        std::mem::take(&mut self.gems)
    }
}
impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}
