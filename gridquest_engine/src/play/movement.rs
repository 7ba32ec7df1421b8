//! `play::movement` module
//!
//! Handlers for commands that change the player's position or open the way to
//! a neighboring cell.

use crate::{
    GemHolder, GridWorld, Location,
    world::{Coord, Direction},
};

use anyhow::Result;
use log::info;

pub const INVALID_DIRECTION: &str = "\n\t\tInvalid direction\n";
pub const BARRIER_IN_THE_WAY: &str = "\n\t\tThere is a barrier. You cannot go there\n";
pub const NO_BARRIER_THERE: &str = "\n\t\tThere is no barrier there.\n";
pub const NO_PROPER_GEM: &str = "\n\t\tYou do not have proper gem to remove this barrier.\n";
pub const BARRIER_REMOVED: &str = "\n\t\tYou used gem and removed barrier.\n";

/// Move the player one cell in `input_dir`, if nothing is in the way.
///
/// Leaving always clears the barrier of the cell being left, even when the
/// move itself fails. Edge (or unset cell) is checked before the destination's
/// barrier.
///
/// # Errors
/// - if the player's current location cannot be resolved
pub fn move_player(world: &mut GridWorld, input_dir: &str) -> Result<String> {
    let Ok(dir) = input_dir.parse::<Direction>() else {
        return Ok(INVALID_DIRECTION.to_string());
    };
    let here = world.player.location();
    world.player_location_mut()?.remove_barrier();

    let Some(destination) = neighbor_location(world, here, dir) else {
        info!("{} tried to go {dir} off the edge at {here}", world.player.name());
        return Ok(format!("\n\t\tCannot go {dir}\n"));
    };
    if destination.has_barrier() {
        info!(
            "{} blocked by {} barrier at {} ({})",
            world.player.name(),
            destination.barrier_color().unwrap_or_default(),
            destination.name,
            destination.coord
        );
        return Ok(BARRIER_IN_THE_WAY.to_string());
    }

    let (to, to_name) = (destination.coord, destination.name.clone());
    world.player.set_location(to);
    info!("{} moved {dir} to {to_name} ({to})", world.player.name());
    Ok(format!("\n\t\tYou moved {dir}\n"))
}

/// Spend a gem of matching color to remove the barrier on the neighboring cell.
///
/// Exactly one gem is consumed: the first one in equipment order whose color
/// matches. Off the edge or on an unset cell there is no barrier to remove.
pub fn use_gem(world: &mut GridWorld, input_dir: &str) -> String {
    let Ok(dir) = input_dir.parse::<Direction>() else {
        return INVALID_DIRECTION.to_string();
    };
    let here = world.player.location();
    let target = world.map.neighbor(here, dir).and_then(|coord| world.map.get_mut(coord));
    let Some(target) = target.filter(|loc| loc.has_barrier()) else {
        return NO_BARRIER_THERE.to_string();
    };

    let color = target.barrier_color().unwrap_or_default().to_string();
    if let Some(gem) = world.player.take_gem_of_color(&color) {
        target.remove_barrier();
        info!(
            "{} used {} to remove the {color} barrier at {} ({})",
            world.player.name(),
            gem.name(),
            target.name,
            target.coord
        );
        BARRIER_REMOVED.to_string()
    } else {
        info!(
            "{} has no {color} gem for {} ({}); carrying {} gem(s)",
            world.player.name(),
            target.name,
            target.coord,
            world.player.gems().len()
        );
        NO_PROPER_GEM.to_string()
    }
}

fn neighbor_location(world: &GridWorld, here: Coord, dir: Direction) -> Option<&Location> {
    world.map.neighbor(here, dir).and_then(|coord| world.map.get(coord))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Gem, Player, WorldMap};

    // 2x2: start at (1,0); (0,0) walled red, (1,1) walled green, (0,1) open.
    fn small_world(equipment: Vec<Gem>) -> GridWorld {
        let cells = vec![
            Location::new(Coord::new(0, 0), "Ridge", "Windy.").with_barrier("red"),
            Location::new(Coord::new(0, 1), "Meadow", "Grassy."),
            Location::new(Coord::new(1, 0), "Camp", "Quiet.").with_barrier("blue"),
            Location::new(Coord::new(1, 1), "Gate", "Tall.").with_barrier("green"),
        ];
        let map = WorldMap::from_locations(2, cells).unwrap();
        let player = Player::new("Tester", Coord::new(1, 0), 5, 100, equipment).unwrap();
        GridWorld::new(map, player)
    }

    fn gem(color: &str) -> Gem {
        Gem::new(format!("{color} gem"), color).unwrap()
    }

    #[test]
    fn invalid_direction_changes_nothing() {
        let mut world = small_world(Vec::new());
        assert_eq!(move_player(&mut world, "nort").unwrap(), INVALID_DIRECTION);
        assert_eq!(world.player.location(), Coord::new(1, 0));
        // the starting cell keeps its barrier because nothing was attempted
        assert!(world.player_location().unwrap().has_barrier());
    }

    #[test]
    fn edges_block_every_direction() {
        let mut world = small_world(Vec::new());
        assert_eq!(move_player(&mut world, "west").unwrap(), "\n\t\tCannot go west\n");
        assert_eq!(move_player(&mut world, "south").unwrap(), "\n\t\tCannot go south\n");
        assert_eq!(world.player.location(), Coord::new(1, 0));
    }

    #[test]
    fn leaving_clears_own_barrier_even_when_blocked() {
        let mut world = small_world(Vec::new());
        assert_eq!(move_player(&mut world, "north").unwrap(), BARRIER_IN_THE_WAY);
        assert_eq!(world.player.location(), Coord::new(1, 0));
        assert!(!world.player_location().unwrap().has_barrier());
    }

    #[test]
    fn unset_cell_cannot_be_entered() {
        let map = WorldMap::from_locations(2, vec![Location::new(Coord::new(0, 0), "Islet", "Tiny.")]).unwrap();
        let player = Player::new("Tester", Coord::new(0, 0), 5, 100, Vec::new()).unwrap();
        let mut world = GridWorld::new(map, player);
        assert_eq!(move_player(&mut world, "east").unwrap(), "\n\t\tCannot go east\n");
        assert_eq!(use_gem(&mut world, "east"), NO_BARRIER_THERE);
    }

    #[test]
    fn use_gem_opens_barrier_and_consumes_one_gem() {
        let mut world = small_world(vec![gem("green"), gem("red"), gem("green")]);
        assert_eq!(use_gem(&mut world, "east"), BARRIER_REMOVED);
        let colors: Vec<_> = world.player.equipment().iter().map(Gem::color).collect();
        assert_eq!(colors, ["red", "green"]);
        assert!(!world.map.get(Coord::new(1, 1)).unwrap().has_barrier());
        assert_eq!(move_player(&mut world, "east").unwrap(), "\n\t\tYou moved east\n");
        assert_eq!(world.player.location(), Coord::new(1, 1));
    }

    #[test]
    fn use_gem_without_match_changes_nothing() {
        let mut world = small_world(vec![gem("blue")]);
        assert_eq!(use_gem(&mut world, "east"), NO_PROPER_GEM);
        assert_eq!(world.player.equipment().len(), 1);
        assert!(world.map.get(Coord::new(1, 1)).unwrap().has_barrier());
    }

    #[test]
    fn use_gem_off_the_edge_finds_no_barrier() {
        let mut world = small_world(vec![gem("green")]);
        assert_eq!(use_gem(&mut world, "west"), NO_BARRIER_THERE);
        assert_eq!(use_gem(&mut world, "up"), INVALID_DIRECTION);
        assert_eq!(world.player.equipment().len(), 1);
    }
}
