//! Player -- module for the player character
use std::fmt::Display;

use crate::{
    Gem, GemHolder,
    error::{GameError, non_negative},
    helpers::join_names,
    world::Coord,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    location: Coord,
    power: u64,
    health: u64,
    base_health: u64,
    equipment: Vec<Gem>,
}
impl Player {
    /// Create a player. The starting health is remembered as the value `rest` restores.
    /// # Errors
    /// - `EmptyName`, `NegativePower` or `NegativeHealth`
    pub fn new(
        name: impl Into<String>,
        location: Coord,
        power: i64,
        health: i64,
        equipment: Vec<Gem>,
    ) -> Result<Player, GameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        let power = non_negative(power, GameError::NegativePower)?;
        let health = non_negative(health, GameError::NegativeHealth)?;
        Ok(Player {
            name,
            location,
            power,
            health,
            base_health: health,
            equipment,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Coord {
        self.location
    }

    pub(crate) fn set_location(&mut self, location: Coord) {
        self.location = location;
    }

    pub fn power(&self) -> u64 {
        self.power
    }

    pub fn health(&self) -> u64 {
        self.health
    }

    pub fn base_health(&self) -> u64 {
        self.base_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// # Errors
    /// - `NegativePower` if `power` < 0
    pub fn set_power(&mut self, power: i64) -> Result<(), GameError> {
        self.power = non_negative(power, GameError::NegativePower)?;
        Ok(())
    }

    /// # Errors
    /// - `NegativeHealth` if `health` < 0
    pub fn set_health(&mut self, health: i64) -> Result<(), GameError> {
        self.health = non_negative(health, GameError::NegativeHealth)?;
        Ok(())
    }

    /// Do damage to health. Saturates at zero; zero damage is allowed.
    /// # Errors
    /// - `NegativeDamage` if `amount` < 0
    pub fn take_damage(&mut self, amount: i64) -> Result<(), GameError> {
        let amount = non_negative(amount, GameError::NegativeDamage)?;
        self.health = self.health.saturating_sub(amount);
        Ok(())
    }

    /// Restore health to its starting value.
    pub fn rest(&mut self) -> String {
        self.health = self.base_health;
        "\n\t\tYour health points have been restored.\n".to_string()
    }

    pub fn equipment(&self) -> &[Gem] {
        &self.equipment
    }

    /// Remove and return the first gem of `color`, if any.
    pub fn take_gem_of_color(&mut self, color: &str) -> Option<Gem> {
        let idx = self.equipment.iter().position(|gem| gem.color() == color)?;
        Some(self.equipment.remove(idx))
    }

    /// Describe what the player is carrying.
    pub fn show_equipment(&self) -> String {
        if self.equipment.is_empty() {
            return "\n\t\tYou do not have items.\n".to_string();
        }
        format!("\n\t\tYou have {}\n", join_names(self.equipment.iter().map(Gem::name)))
    }
}
impl GemHolder for Player {
    fn gems(&self) -> &[Gem] {
        &self.equipment
    }

    fn add_gem(&mut self, gem: Gem) {
        self.equipment.push(gem);
    }

    fn take_gems(&mut self) -> Vec<Gem> {
        std::mem::take(&mut self.equipment)
    }
}
impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\n\t\tMy name is {}.\n\t\tMy current power is {}.\n\t\tMy current health is {}.\n",
            self.name, self.power, self.health
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jurek() -> Player {
        Player::new("Jurek Ogórek", Coord::new(1, 1), 5, 100, Vec::new()).unwrap()
    }

    #[test]
    fn create_rejects_negative_stats() {
        assert_eq!(
            Player::new("Jurek", Coord::default(), -1, 100, Vec::new()),
            Err(GameError::NegativePower(-1))
        );
        assert_eq!(
            Player::new("Jurek", Coord::default(), 5, -10, Vec::new()),
            Err(GameError::NegativeHealth(-10))
        );
        assert_eq!(
            Player::new("", Coord::default(), 5, 10, Vec::new()),
            Err(GameError::EmptyName)
        );
    }

    #[test]
    fn create_accepts_zero_stats() {
        let player = Player::new("Jurek", Coord::default(), 0, 0, Vec::new()).unwrap();
        assert_eq!(player.power(), 0);
        assert_eq!(player.health(), 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn create_accepts_stats_beyond_u32() {
        let player = Player::new("Jurek", Coord::default(), 4_294_967_296, 5_000_000_000, Vec::new()).unwrap();
        assert_eq!(player.power(), 4_294_967_296);
        assert_eq!(player.health(), 5_000_000_000);
        assert_eq!(player.base_health(), 5_000_000_000);
    }

    #[test]
    fn set_power_and_health() {
        let mut player = jurek();
        player.set_power(10).unwrap();
        assert_eq!(player.power(), 10);
        player.set_power(0).unwrap();
        assert_eq!(player.power(), 0);
        assert_eq!(player.set_power(-10), Err(GameError::NegativePower(-10)));
        assert_eq!(player.power(), 0);

        player.set_health(150).unwrap();
        assert_eq!(player.health(), 150);
        player.set_health(0).unwrap();
        assert_eq!(player.health(), 0);
        assert_eq!(player.set_health(-10), Err(GameError::NegativeHealth(-10)));
    }

    #[test]
    fn take_damage_saturates_and_allows_zero() {
        let mut player = jurek();
        player.take_damage(50).unwrap();
        assert_eq!(player.health(), 50);
        player.take_damage(0).unwrap();
        assert_eq!(player.health(), 50);
        player.take_damage(150).unwrap();
        assert_eq!(player.health(), 0);
        assert_eq!(player.take_damage(-50), Err(GameError::NegativeDamage(-50)));
    }

    #[test]
    fn rest_restores_base_health() {
        let mut player = jurek();
        player.take_damage(42).unwrap();
        assert_eq!(player.rest(), "\n\t\tYour health points have been restored.\n");
        assert_eq!(player.health(), 100);
    }

    #[test]
    fn stats_block() {
        let player = Player::new("Jurek Ogorek", Coord::new(1, 1), 3, 100, Vec::new()).unwrap();
        assert_eq!(
            player.to_string(),
            "\n\t\tMy name is Jurek Ogorek.\n\t\tMy current power is 3.\n\t\tMy current health is 100.\n"
        );
    }

    #[test]
    fn show_equipment_lists_names() {
        let mut player = jurek();
        assert_eq!(player.show_equipment(), "\n\t\tYou do not have items.\n");
        player.add_gem(Gem::new("green gem", "green").unwrap());
        player.add_gem(Gem::new("red gem", "red").unwrap());
        assert_eq!(player.show_equipment(), "\n\t\tYou have green gem, red gem\n");
    }

    #[test]
    fn take_gem_of_color_removes_first_match_only() {
        let mut player = jurek();
        player.add_gem(Gem::new("first", "green").unwrap());
        player.add_gem(Gem::new("ruby", "red").unwrap());
        player.add_gem(Gem::new("second", "green").unwrap());

        let used = player.take_gem_of_color("green").unwrap();
        assert_eq!(used.name(), "first");
        let left: Vec<_> = player.equipment().iter().map(Gem::name).collect();
        assert_eq!(left, ["ruby", "second"]);
        assert!(player.take_gem_of_color("blue").is_none());
    }

    #[test]
    fn players_do_not_share_equipment() {
        let mut first = jurek();
        let second = jurek();
        first.add_gem(Gem::new("green gem", "green").unwrap());
        assert_eq!(first.equipment().len(), 1);
        assert!(second.equipment().is_empty());
    }
}
