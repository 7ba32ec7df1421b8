//! Error types for world construction, play and save files.

use std::io;
use std::path::PathBuf;

use gridquest_data::ValidationError;
use thiserror::Error;

use crate::world::Coord;

/// Rejected values when building or mutating game objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Color name cannot be empty")]
    EmptyColor,
    #[error("Power cannot be negative (got {0})")]
    NegativePower(i64),
    #[error("Health cannot be negative (got {0})")]
    NegativeHealth(i64),
    #[error("Damage has to be positive (got {0})")]
    InvalidDamage(i64),
    #[error("Damage cannot be negative (got {0})")]
    NegativeDamage(i64),
}

/// Accept a stat value if it is not negative, otherwise report it with `reject`.
pub(crate) fn non_negative(value: i64, reject: fn(i64) -> GameError) -> Result<u64, GameError> {
    u64::try_from(value).map_err(|_| reject(value))
}

/// Problems placing locations on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("location at {coord} lies outside the {size}x{size} map")]
    OutOfBounds { coord: Coord, size: usize },
    #[error("more than one location at {0}")]
    Duplicate(Coord),
    #[error("a {0}x{0} map is too large")]
    TooLarge(usize),
}

/// Failures while reading or writing a save file.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Could not open this file")]
    NotFound(PathBuf),
    #[error("Missing permissions to open file")]
    PermissionDenied(PathBuf),
    #[error("Can only work on files")]
    IsADirectory(PathBuf),
    #[error("i/o error on '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Missing key in file")]
    MissingKey(String),
    #[error("malformed save file")]
    Malformed(#[source] serde_json::Error),
    #[error("invalid save file: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Map(#[from] MapError),
}

impl CodecError {
    /// Classify an i/o failure on `path` into the cases the player is told about.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => CodecError::NotFound(path),
            io::ErrorKind::PermissionDenied => CodecError::PermissionDenied(path),
            io::ErrorKind::IsADirectory => CodecError::IsADirectory(path),
            _ => CodecError::Io { path, source },
        }
    }

    /// Sort a serde failure into missing-key vs. everything else.
    pub fn from_json(source: serde_json::Error) -> Self {
        let message = source.to_string();
        if message.starts_with("missing field") {
            CodecError::MissingKey(message)
        } else {
            CodecError::Malformed(source)
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
