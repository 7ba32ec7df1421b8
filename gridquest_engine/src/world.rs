//! Data structures representing the game world.
//!
//! [`WorldMap`] owns every [`Location`] in a square grid; [`GridWorld`] pairs the
//! map with the single [`Player`] exploring it. The player refers to its cell by
//! [`Coord`], so location changes made through the map are seen by the player.

use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use log::info;
use thiserror::Error;
use variantly::Variantly;

use gridquest_data::MAX_MAP_SIZE;

use crate::error::MapError;
use crate::{Location, Player};

/// Grid coordinate: `x` is the row, `y` the column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}
impl Coord {
    pub const fn new(x: usize, y: usize) -> Coord {
        Coord { x, y }
    }

    /// Coordinate one step in `dir`, or `None` when that would go below zero.
    /// The upper edge depends on the map and is checked by [`WorldMap::neighbor`].
    pub fn step(self, dir: Direction) -> Option<Coord> {
        match dir {
            Direction::East => Some(Coord::new(self.x, self.y.checked_add(1)?)),
            Direction::West => Some(Coord::new(self.x, self.y.checked_sub(1)?)),
            Direction::North => Some(Coord::new(self.x.checked_sub(1)?, self.y)),
            Direction::South => Some(Coord::new(self.x.checked_add(1)?, self.y)),
        }
    }
}
impl Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a coordinate of the form \"x,y\"")]
pub struct ParseCoordError(String);

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        gridquest_data::parse_coordinate(s)
            .map(|(x, y)| Coord::new(x, y))
            .ok_or_else(|| ParseCoordError(s.to_string()))
    }
}

/// The four ways out of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Variantly)]
pub enum Direction {
    East,
    West,
    North,
    South,
}
impl Direction {
    /// Order used when describing surroundings.
    pub const ALL: [Direction; 4] = [Direction::East, Direction::West, Direction::North, Direction::South];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::East => "east",
            Direction::West => "west",
            Direction::North => "north",
            Direction::South => "south",
        }
    }

    /// Capitalized name, as in "Sea North".
    pub fn title(self) -> &'static str {
        match self {
            Direction::East => "East",
            Direction::West => "West",
            Direction::North => "North",
            Direction::South => "South",
        }
    }
}
impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a direction")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Only the lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Square grid of locations, stored row-major.
///
/// Cells that were never given a location stay `None`. They cannot be entered
/// and read as open sea when looking around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldMap {
    size: usize,
    cells: Vec<Option<Location>>,
}
impl WorldMap {
    /// An N×N map with every cell unset.
    /// # Errors
    /// - `TooLarge` if `size` is above [`MAX_MAP_SIZE`]
    pub fn new(size: usize) -> Result<WorldMap, MapError> {
        let cells = size
            .checked_mul(size)
            .filter(|_| size <= MAX_MAP_SIZE)
            .ok_or(MapError::TooLarge(size))?;
        Ok(WorldMap {
            size,
            cells: vec![None; cells],
        })
    }

    /// Build a map and place each location at its own coordinate.
    /// # Errors
    /// - the grid is too large, a location lies outside it, or two share a cell
    pub fn from_locations(size: usize, locations: impl IntoIterator<Item = Location>) -> Result<WorldMap, MapError> {
        let mut map = WorldMap::new(size)?;
        for location in locations {
            map.place(location)?;
        }
        Ok(map)
    }

    /// Put a location into its (currently unset) cell.
    /// # Errors
    /// - `OutOfBounds` or `Duplicate`
    pub fn place(&mut self, location: Location) -> Result<(), MapError> {
        let coord = location.coord;
        let size = self.size;
        let idx = self.index(coord).ok_or(MapError::OutOfBounds { coord, size })?;
        let cell = &mut self.cells[idx];
        if cell.is_some() {
            return Err(MapError::Duplicate(coord));
        }
        *cell = Some(location);
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord).then(|| coord.x * self.size + coord.y)
    }

    /// Location at `coord`; `None` off the grid or on an unset cell.
    pub fn get(&self, coord: Coord) -> Option<&Location> {
        self.index(coord).and_then(|idx| self.cells[idx].as_ref())
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Location> {
        self.index(coord).and_then(|idx| self.cells[idx].as_mut())
    }

    /// The in-bounds coordinate next to `coord` in `dir`, if any.
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        coord.step(dir).filter(|next| self.in_bounds(*next))
    }

    /// Every real location, row by row.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.cells.iter().flatten()
    }

    /// Number of enemies left anywhere on the map.
    pub fn enemy_count(&self) -> usize {
        self.locations().map(|loc| loc.enemies.len()).sum()
    }
}

/// Complete state of a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWorld {
    pub map: WorldMap,
    pub player: Player,
}
impl GridWorld {
    pub fn new(map: WorldMap, player: Player) -> GridWorld {
        info!(
            "world ready: {}x{} map, {} locations, {} enemies, player '{}' at {}",
            map.size(),
            map.size(),
            map.locations().count(),
            map.enemy_count(),
            player.name(),
            player.location()
        );
        GridWorld { map, player }
    }

    /// Obtain a reference to the location the player occupies.
    /// # Errors
    /// - if the player's coordinate is off the map or on an unset cell
    pub fn player_location(&self) -> Result<&Location> {
        let coord = self.player.location();
        self.map
            .get(coord)
            .ok_or_else(|| anyhow!("player location ({coord}) not found on map"))
    }

    /// Obtain a mutable reference to the location the player occupies.
    /// # Errors
    /// - if the player's coordinate is off the map or on an unset cell
    pub fn player_location_mut(&mut self) -> Result<&mut Location> {
        let coord = self.player.location();
        self.map
            .get_mut(coord)
            .ok_or_else(|| anyhow!("player location ({coord}) not found on map"))
    }

    /// True once no enemy is left anywhere on the map.
    pub fn did_win(&self) -> bool {
        self.map.enemy_count() == 0
    }
}
