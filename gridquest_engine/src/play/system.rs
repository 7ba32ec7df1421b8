//! `play::system` module
//!
//! Out-of-world commands: help, stats, resting and saving.

use std::path::Path;

use crate::{GridWorld, command::COMMAND_HELP, save_files::save_game};

use log::{info, warn};

/// Fixed listing of every command.
pub fn help_text() -> String {
    let mut text = String::from("\n\t\tList of commands:\n");
    for (command, description) in COMMAND_HELP {
        text.push_str(&format!("\t\t'{command}' - {description}\n"));
    }
    text
}

pub fn show_stats(world: &GridWorld) -> String {
    world.player.to_string()
}

pub fn rest(world: &mut GridWorld) -> String {
    info!("{} rests at {}", world.player.name(), world.player.location());
    world.player.rest()
}

/// Write the world to `path`. Failures are reported as the returned message.
pub fn save_to(world: &GridWorld, path: &str) -> String {
    match save_game(Path::new(path), world) {
        Ok(()) => format!("\n\t\tsaved to {path}\n"),
        Err(err) => {
            warn!("saving to '{path}' failed: {err:?}");
            format!("\n\t\t{err}\n")
        },
    }
}
