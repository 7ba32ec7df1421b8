//! `play::look` module
//!
//! Descriptions of the player's surroundings and of individual enemies.

use std::fmt::Write;

use crate::{GemHolder, GridWorld, helpers::join_names, world::Direction};

use anyhow::Result;

/// Describe the current location, then each neighbor in east, west, north,
/// south order. Off-grid and unset cells show up as open sea.
///
/// # Errors
/// - if the player's current location cannot be resolved
pub fn look_around(world: &GridWorld) -> Result<String> {
    let here = world.player_location()?;
    let gems = if here.has_gems() {
        let colors: Vec<_> = here.gems().iter().map(|gem| format!("{} gem", gem.color())).collect();
        format!("You see {}", colors.join(", "))
    } else {
        "There are no gems here".to_string()
    };
    let enemies = if here.enemies.is_empty() {
        "There are no enemies here".to_string()
    } else {
        format!("You see {}", join_names(here.enemies.iter().map(|enemy| enemy.name())))
    };

    let mut view = format!(
        "\n\t\tYou are in {}. {}\n\t\t{gems}.\n\t\t{enemies}.",
        here.name, here.description
    );
    for dir in Direction::ALL {
        let neighbor = world.map.neighbor(here.coord, dir).and_then(|coord| world.map.get(coord));
        match neighbor {
            Some(next) => {
                write!(view, "\n\t\tTo the {dir} you see {}. ", next.name)?;
                match next.barrier_color() {
                    Some(color) => write!(view, "It has {color} barrier.")?,
                    None => view.push_str("It has no barrier."),
                }
            },
            None => write!(view, "\n\t\tTo the {dir} you see Sea {}. ", dir.title())?,
        }
    }
    view.push('\n');
    Ok(view)
}

/// Stats of the first enemy here with this name.
///
/// # Errors
/// - if the player's current location cannot be resolved
pub fn enemy_info(world: &GridWorld, name: &str) -> Result<String> {
    Ok(match world.player_location()?.enemy(name) {
        Some(enemy) => enemy.to_string(),
        None => format!("\n\t\tThere is no enemy named {name}\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Enemy, Gem, Location, Player, WorldMap, world::Coord};

    // 2x2 with the player at (1,0) and (1,1) unset.
    fn world() -> GridWorld {
        let camp = Location::new(Coord::new(1, 0), "Camp", "It is quiet.")
            .with_gems(vec![
                Gem::new("ruby", "red").unwrap(),
                Gem::new("jade", "green").unwrap(),
            ])
            .with_enemies(vec![Enemy::new("Rat", 2, 1).unwrap(), Enemy::new("Bat", 1, 1).unwrap()]);
        let cells = vec![
            Location::new(Coord::new(0, 0), "Ridge", "Windy.").with_barrier("blue"),
            Location::new(Coord::new(0, 1), "Meadow", "Grassy."),
            camp,
        ];
        let map = WorldMap::from_locations(2, cells).unwrap();
        GridWorld::new(map, Player::new("Tester", Coord::new(1, 0), 5, 100, Vec::new()).unwrap())
    }

    #[test]
    fn look_around_lists_contents_and_neighbors() {
        assert_eq!(
            look_around(&world()).unwrap(),
            "\n\t\tYou are in Camp. It is quiet.\
             \n\t\tYou see red gem, green gem.\
             \n\t\tYou see Rat, Bat.\
             \n\t\tTo the east you see Sea East. \
             \n\t\tTo the west you see Sea West. \
             \n\t\tTo the north you see Ridge. It has blue barrier.\
             \n\t\tTo the south you see Sea South. \n"
        );
    }

    #[test]
    fn look_around_empty_location() {
        let mut world = world();
        world.player.set_location(Coord::new(0, 1));
        let view = look_around(&world).unwrap();
        assert!(view.starts_with(
            "\n\t\tYou are in Meadow. Grassy.\n\t\tThere are no gems here.\n\t\tThere are no enemies here."
        ));
        assert!(view.contains("\n\t\tTo the west you see Ridge. It has blue barrier."));
        assert!(view.contains("\n\t\tTo the east you see Sea East. \n"));
    }

    #[test]
    fn enemy_info_by_exact_name() {
        let world = world();
        assert_eq!(
            enemy_info(&world, "Rat").unwrap(),
            "\n\t\tThis is Rat.\n\t\tIt has 2 health points.\n\t\tIt has 1 power points.\n"
        );
        assert_eq!(enemy_info(&world, "rat").unwrap(), "\n\t\tThere is no enemy named rat\n");
    }
}
