#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const GRIDQUEST_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod dice;
pub mod enemy;
pub mod error;
pub mod gem;
pub mod helpers;
pub mod loader;
pub mod location;
pub mod play;
pub mod player;
pub mod repl;
pub mod save_files;
pub mod style;
pub mod world;

// Re-exports for convenience
pub use enemy::Enemy;
pub use gem::{Gem, GemHolder};
pub use location::Location;
pub use player::Player;
pub use repl::run_repl;
pub use save_files::{load_game, save_game};
pub use world::{Coord, Direction, GridWorld, WorldMap};
