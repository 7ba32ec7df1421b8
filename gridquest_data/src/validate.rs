use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Largest `map_size` a save may declare.
pub const MAX_MAP_SIZE: usize = 1024;

/// Structural problem found in a save document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidValue { context: String },
    OutOfBounds { kind: &'static str, x: usize, y: usize, size: usize },
    DuplicateLocation { x: usize, y: usize },
    MissingReference { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
            ValidationError::OutOfBounds { kind, x, y, size } => {
                write!(f, "{kind} at {x},{y} lies outside the {size}x{size} map")
            },
            ValidationError::DuplicateLocation { x, y } => {
                write!(f, "more than one location at {x},{y}")
            },
            ValidationError::MissingReference { context } => {
                write!(f, "missing reference ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate coordinates and basic invariants of a save document.
///
/// Only the first player entry is checked; it is the only one the engine loads.
/// Value checks on names, health and power are left to the engine's constructors.
///
/// ```
/// use gridquest_data::{LocationDef, PlayerDef, SaveDef, validate_save};
///
/// let save = SaveDef {
///     map_size: 1,
///     player: vec![PlayerDef {
///         name: "Hero".into(),
///         current_location: "0,0".into(),
///         power: 5,
///         health: 100,
///         equipment: Vec::new(),
///         locations: vec![LocationDef {
///             x: 0,
///             y: 0,
///             name: "Camp".into(),
///             description: "A quiet camp.".into(),
///             barrier: false,
///             barrier_color: None,
///             enemies: Vec::new(),
///             gems: Vec::new(),
///         }],
///     }],
/// };
/// assert!(validate_save(&save).is_empty());
/// ```
pub fn validate_save(save: &SaveDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let size = save.map_size;

    if size == 0 {
        errors.push(ValidationError::InvalidValue {
            context: "map_size must be at least 1".into(),
        });
    } else if size > MAX_MAP_SIZE {
        errors.push(ValidationError::InvalidValue {
            context: format!("map_size {size} exceeds the limit of {MAX_MAP_SIZE}"),
        });
    }

    let Some(player) = save.player.first() else {
        return errors;
    };

    let mut occupied = HashSet::new();
    for loc in &player.locations {
        if loc.x >= size || loc.y >= size {
            errors.push(ValidationError::OutOfBounds {
                kind: "location",
                x: loc.x,
                y: loc.y,
                size,
            });
            continue;
        }
        if !occupied.insert((loc.x, loc.y)) {
            errors.push(ValidationError::DuplicateLocation { x: loc.x, y: loc.y });
        }
        if loc.barrier && loc.barrier_color.as_deref().is_none_or(str::is_empty) {
            errors.push(ValidationError::InvalidValue {
                context: format!("location '{}' has a barrier but no barrier_color", loc.name),
            });
        }
    }

    match parse_coordinate(&player.current_location) {
        Some((x, y)) if x >= size || y >= size => {
            errors.push(ValidationError::OutOfBounds {
                kind: "player",
                x,
                y,
                size,
            });
        },
        Some((x, y)) if !occupied.contains(&(x, y)) => {
            errors.push(ValidationError::MissingReference {
                context: format!("player starts at {x},{y} but no location is defined there"),
            });
        },
        Some(_) => {},
        None => {
            errors.push(ValidationError::InvalidValue {
                context: format!(
                    "current_location '{}' is not of the form \"x,y\"",
                    player.current_location
                ),
            });
        },
    }

    errors
}
