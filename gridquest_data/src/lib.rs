//! Save-file data model for GridQuest worlds.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{MAX_MAP_SIZE, ValidationError, validate_save};
