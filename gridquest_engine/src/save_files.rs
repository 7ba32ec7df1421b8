//! Save-file reading and writing.
//!
//! A save file is a single JSON document in the `gridquest_data` schema. Loading
//! reads and validates it through [`crate::loader`]; saving flattens the live
//! world back into the same schema.

use std::fs;
use std::path::Path;

use gridquest_data::{EnemyDef, GemDef, LocationDef, PlayerDef, SaveDef, format_coordinate};
use log::info;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{
    GemHolder, GridWorld, Location,
    error::CodecError,
    loader::{build_world, parse_save},
};

/// Read, validate and build the world stored at `path`.
///
/// # Errors
/// - `IsADirectory`, `NotFound`, `PermissionDenied` or `Io` when the file can't be read
/// - any parse, validation or construction error from [`crate::loader`]
pub fn load_game(path: &Path) -> Result<GridWorld, CodecError> {
    if path.is_dir() {
        return Err(CodecError::IsADirectory(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|err| CodecError::from_io(path, err))?;
    let world = build_world(&parse_save(&text)?)?;
    info!("game loaded from '{}'", path.display());
    Ok(world)
}

/// Write the world to `path` as pretty-printed JSON (4-space indent).
///
/// # Errors
/// - `IsADirectory`, `NotFound`, `PermissionDenied` or `Io` when the file can't be written
pub fn save_game(path: &Path, world: &GridWorld) -> Result<(), CodecError> {
    if path.is_dir() {
        return Err(CodecError::IsADirectory(path.to_path_buf()));
    }
    let json = to_pretty_json(&world_to_def(world))?;
    fs::write(path, json).map_err(|err| CodecError::from_io(path, err))?;
    info!("game saved to '{}'", path.display());
    Ok(())
}

/// Flatten a world into the save schema. Unset cells are skipped; the rest are
/// listed row by row.
pub fn world_to_def(world: &GridWorld) -> SaveDef {
    let player = &world.player;
    let location = player.location();
    SaveDef {
        map_size: world.map.size(),
        player: vec![PlayerDef {
            name: player.name().to_string(),
            current_location: format_coordinate(location.x, location.y),
            power: stat(player.power()),
            health: stat(player.health()),
            equipment: gem_defs(player),
            locations: world.map.locations().map(location_def).collect(),
        }],
    }
}

fn location_def(location: &Location) -> LocationDef {
    LocationDef {
        x: location.coord.x,
        y: location.coord.y,
        name: location.name.clone(),
        description: location.description.clone(),
        barrier: location.has_barrier(),
        barrier_color: location.barrier_color().map(str::to_string),
        enemies: location
            .enemies
            .iter()
            .map(|enemy| EnemyDef {
                name: enemy.name().to_string(),
                health: stat(enemy.health()),
                power: stat(enemy.power()),
            })
            .collect(),
        gems: gem_defs(location),
    }
}

/// Stats only ever come from an `i64` and shrink during play.
fn stat(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn gem_defs(holder: &impl GemHolder) -> Vec<GemDef> {
    holder
        .gems()
        .iter()
        .map(|gem| GemDef {
            name: gem.name().to_string(),
            color: gem.color().to_string(),
        })
        .collect()
}

fn to_pretty_json(def: &SaveDef) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    def.serialize(&mut serializer).map_err(CodecError::Malformed)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Enemy, Gem, Player, WorldMap, world::Coord};
    use tempfile::tempdir;

    fn world() -> GridWorld {
        let cells = vec![
            Location::new(Coord::new(1, 1), "Keep", "Stone walls.").with_barrier("red"),
            Location::new(Coord::new(0, 1), "Road", "Muddy.")
                .with_enemies(vec![Enemy::new("Orc", 5, 5).unwrap()])
                .with_gems(vec![Gem::new("red gem", "red").unwrap()]),
        ];
        let map = WorldMap::from_locations(2, cells).unwrap();
        let equipment = vec![Gem::new("green gem", "green").unwrap()];
        GridWorld::new(map, Player::new("Tester", Coord::new(0, 1), 5, 80, equipment).unwrap())
    }

    #[test]
    fn def_lists_cells_row_major() {
        let def = world_to_def(&world());
        assert_eq!(def.map_size, 2);
        let player = &def.player[0];
        assert_eq!(player.current_location, "0,1");
        let names: Vec<_> = player.locations.iter().map(|loc| loc.name.as_str()).collect();
        assert_eq!(names, ["Road", "Keep"]);
        assert_eq!(player.locations[1].barrier_color.as_deref(), Some("red"));
        assert!(player.locations[1].barrier);
        assert_eq!(player.locations[0].barrier_color, None);
    }

    #[test]
    fn writes_four_space_json_in_schema_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("save.json");
        save_game(&path, &world()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n    \"map_size\": 2,\n    \"player\": [\n        {\n            \"name\": \"Tester\","));
        assert!(text.contains("\"barrier_color\": null"));
    }

    #[test]
    fn save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("save.json");
        let mut original = world();
        original.player.take_damage(30).unwrap();
        save_game(&path, &original).unwrap();

        let restored = load_game(&path).unwrap();
        assert_eq!(restored.player.name(), "Tester");
        assert_eq!(restored.player.health(), 50);
        assert_eq!(restored.player.base_health(), 50);
        assert_eq!(restored.player.location(), Coord::new(0, 1));
        assert_eq!(restored.player.equipment(), original.player.equipment());
        assert_eq!(restored.map, original.map);
    }

    #[test]
    fn load_reports_missing_file_and_directory() {
        let dir = tempdir().unwrap();
        let err = load_game(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CodecError::NotFound(_)));
        assert_eq!(err.to_string(), "Could not open this file");

        let err = load_game(dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "Can only work on files");
    }

    #[test]
    fn save_into_missing_directory_is_not_found() {
        let dir = tempdir().unwrap();
        let err = save_game(&dir.path().join("missing/save.json"), &world()).unwrap_err();
        assert!(matches!(err, CodecError::NotFound(_)));
    }
}
