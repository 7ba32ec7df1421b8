//! Loader utilities for building a [`GridWorld`] from a save document.
//!
//! The JSON schema lives in `gridquest_data`; this module validates a parsed
//! [`SaveDef`] and turns its definitions into engine types. Reading and writing
//! the file itself is handled by [`crate::save_files`].

use gridquest_data::{EnemyDef, GemDef, LocationDef, PlayerDef, SaveDef, validate_save};
use log::{info, warn};

use crate::{
    Enemy, Gem, Location, Player,
    error::{CodecError, GameError},
    world::{Coord, GridWorld, WorldMap},
};

/// Deserialize the text of a save file.
///
/// # Errors
/// - `MissingKey` when any required field is absent
/// - `Malformed` for any other JSON problem
pub fn parse_save(text: &str) -> Result<SaveDef, CodecError> {
    serde_json::from_str(text).map_err(CodecError::from_json)
}

/// Validate a save document and build the world it describes.
///
/// Only the first `player` entry is used.
///
/// # Errors
/// - `MissingKey` if the player list is empty
/// - `Invalid` with every structural problem found by validation
/// - `Game` if a name, color or stat is rejected by its constructor
pub fn build_world(def: &SaveDef) -> Result<GridWorld, CodecError> {
    let Some(player_def) = def.player.first() else {
        return Err(CodecError::MissingKey("player list is empty".into()));
    };
    if def.player.len() > 1 {
        warn!("save lists {} players; only '{}' is loaded", def.player.len(), player_def.name);
    }

    let errors = validate_save(def);
    if !errors.is_empty() {
        return Err(CodecError::Invalid(errors));
    }

    let locations = player_def
        .locations
        .iter()
        .map(build_location)
        .collect::<Result<Vec<_>, _>>()?;
    let map = WorldMap::from_locations(def.map_size, locations)?;
    let player = build_player(player_def)?;
    info!(
        "loaded {} location(s) on a {}x{} map",
        map.locations().count(),
        map.size(),
        map.size()
    );
    Ok(GridWorld::new(map, player))
}

/// # Errors
/// - if the name or any stat is rejected, or the location is not an "x,y" pair
pub fn build_player(def: &PlayerDef) -> Result<Player, CodecError> {
    let location: Coord = def.current_location.parse().map_err(|_| {
        CodecError::Invalid(vec![gridquest_data::ValidationError::InvalidValue {
            context: format!("current_location '{}'", def.current_location),
        }])
    })?;
    let equipment = build_gems(&def.equipment)?;
    Ok(Player::new(&def.name, location, def.power, def.health, equipment)?)
}

/// A location's barrier only counts when its flag is set.
///
/// # Errors
/// - if an enemy or gem definition is rejected
pub fn build_location(def: &LocationDef) -> Result<Location, GameError> {
    let mut location = Location::new(Coord::new(def.x, def.y), &def.name, &def.description)
        .with_enemies(def.enemies.iter().map(build_enemy).collect::<Result<_, _>>()?)
        .with_gems(build_gems(&def.gems)?);
    if def.barrier
        && let Some(color) = &def.barrier_color
    {
        location.set_barrier(color);
    }
    Ok(location)
}

fn build_enemy(def: &EnemyDef) -> Result<Enemy, GameError> {
    Enemy::new(&def.name, def.health, def.power)
}

fn build_gems(defs: &[GemDef]) -> Result<Vec<Gem>, GameError> {
    defs.iter().map(|def| Gem::new(&def.name, &def.color)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GemHolder;

    const SAVE: &str = r#"{
        "map_size": 2,
        "player": [{
            "name": "Tester",
            "current_location": "0,1",
            "power": 5,
            "health": 40,
            "equipment": [{"name": "green gem", "color": "green"}],
            "locations": [
                {"x": 0, "y": 0, "name": "Gate", "description": "Tall.",
                 "barrier": true, "barrier_color": "red",
                 "enemies": [], "gems": []},
                {"x": 0, "y": 1, "name": "Camp", "description": "Quiet.",
                 "barrier": false, "barrier_color": null,
                 "enemies": [{"name": "Orc", "health": 5, "power": 5}],
                 "gems": [{"name": "blue gem", "color": "blue"}]}
            ]
        }]
    }"#;

    fn loaded() -> GridWorld {
        build_world(&parse_save(SAVE).unwrap()).unwrap()
    }

    #[test]
    fn builds_map_and_player() {
        let world = loaded();
        assert_eq!(world.map.size(), 2);
        assert_eq!(world.player.name(), "Tester");
        assert_eq!(world.player.location(), Coord::new(0, 1));
        assert_eq!(world.player.base_health(), 40);
        assert_eq!(world.player.equipment()[0].color(), "green");

        let camp = world.player_location().unwrap();
        assert_eq!(camp.enemies[0].name(), "Orc");
        assert_eq!(camp.gems()[0].name(), "blue gem");
        assert_eq!(world.map.get(Coord::new(0, 0)).unwrap().barrier_color(), Some("red"));
        assert!(world.map.get(Coord::new(1, 1)).is_none());
    }

    #[test]
    fn color_without_flag_is_no_barrier() {
        let text = SAVE.replace(r#""barrier": true, "barrier_color": "red""#, r#""barrier": 0, "barrier_color": "red""#);
        let world = build_world(&parse_save(&text).unwrap()).unwrap();
        assert!(!world.map.get(Coord::new(0, 0)).unwrap().has_barrier());
    }

    #[test]
    fn missing_key_is_reported() {
        let text = SAVE.replace(r#""map_size": 2,"#, "");
        assert!(matches!(parse_save(&text), Err(CodecError::MissingKey(_))));

        let text = SAVE.replace(r#""barrier": false, "barrier_color": null,"#, r#""barrier": false,"#);
        assert!(matches!(parse_save(&text), Err(CodecError::MissingKey(_))));
    }

    #[test]
    fn empty_player_list_is_missing_key() {
        let def = parse_save(r#"{"map_size": 2, "player": []}"#).unwrap();
        assert!(matches!(build_world(&def), Err(CodecError::MissingKey(_))));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(parse_save("{\"map_size\": "), Err(CodecError::Malformed(_))));
        assert!(matches!(
            parse_save(r#"{"map_size": "two", "player": []}"#),
            Err(CodecError::Malformed(_))
        ));
    }

    #[test]
    fn out_of_bounds_location_is_invalid() {
        let text = SAVE.replace(r#""x": 0, "y": 0"#, r#""x": 2, "y": 0"#);
        let err = build_world(&parse_save(&text).unwrap()).unwrap_err();
        assert!(matches!(err, CodecError::Invalid(_)));
        assert!(err.to_string().contains("location at 2,0 lies outside the 2x2 map"));
    }

    #[test]
    fn oversized_map_is_invalid() {
        let text = SAVE.replace(r#""map_size": 2,"#, r#""map_size": 5000000000,"#);
        let err = build_world(&parse_save(&text).unwrap()).unwrap_err();
        assert!(matches!(err, CodecError::Invalid(_)));
        assert!(err.to_string().contains("map_size 5000000000 exceeds the limit"));
    }

    #[test]
    fn stats_beyond_u32_load() {
        let text = SAVE
            .replace(r#""health": 40"#, r#""health": 5000000000"#)
            .replace(r#""health": 5, "power": 5"#, r#""health": 5000000000, "power": 5"#);
        let world = build_world(&parse_save(&text).unwrap()).unwrap();
        assert_eq!(world.player.health(), 5_000_000_000);
        assert_eq!(world.player_location().unwrap().enemies[0].health(), 5_000_000_000);
    }

    #[test]
    fn negative_stats_are_rejected() {
        let text = SAVE.replace(r#""health": 40"#, r#""health": -1"#);
        let err = build_world(&parse_save(&text).unwrap()).unwrap_err();
        assert!(matches!(err, CodecError::Game(GameError::NegativeHealth(-1))));

        let text = SAVE.replace(r#""name": "Orc""#, r#""name": """#);
        let err = build_world(&parse_save(&text).unwrap()).unwrap_err();
        assert!(matches!(err, CodecError::Game(GameError::EmptyName)));
    }
}
