//! `play::inventory` module
//!
//! Commands that move gems between the map and the player's equipment.

use crate::{GemHolder, GridWorld};

use anyhow::Result;
use log::info;

pub const NO_GEMS_HERE: &str = "\n\t\tThere are no gems here\n";
pub const GEMS_TAKEN: &str = "\n\t\tGems were added to your equipment\n";

/// Move every gem at the player's location into equipment, keeping their order.
///
/// # Errors
/// - if the player's current location cannot be resolved
pub fn pickup_gems(world: &mut GridWorld) -> Result<String> {
    let gems = world.player_location_mut()?.take_gems();
    if gems.is_empty() {
        return Ok(NO_GEMS_HERE.to_string());
    }
    info!(
        "{} picked up {} gem(s) at {}",
        world.player.name(),
        gems.len(),
        world.player.location()
    );
    for gem in gems {
        world.player.add_gem(gem);
    }
    Ok(GEMS_TAKEN.to_string())
}

pub fn show_equipment(world: &GridWorld) -> String {
    world.player.show_equipment()
}
