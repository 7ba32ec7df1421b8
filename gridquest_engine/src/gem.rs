//! Gem -- colored keys that open barriers

use crate::error::GameError;

/// A collectible gem. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gem {
    name: String,
    color: String,
}
impl Gem {
    /// # Errors
    /// - `EmptyName` / `EmptyColor` on empty input
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Result<Gem, GameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        let color = color.into();
        if color.is_empty() {
            return Err(GameError::EmptyColor);
        }
        Ok(Gem { name, color })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

/// Anything that keeps an ordered list of gems.
pub trait GemHolder {
    fn gems(&self) -> &[Gem];
    fn add_gem(&mut self, gem: Gem);
    /// Remove and return every gem, leaving the holder empty.
    fn take_gems(&mut self) -> Vec<Gem>;

    fn has_gems(&self) -> bool {
        !self.gems().is_empty()
    }
}
