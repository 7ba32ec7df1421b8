//! Play module
//!
//! Everything a single turn can do to a [`GridWorld`]. Handlers live in
//! submodules by theme; [`action`] turns a line of input into a call to one of
//! them and hands back the text to show the player.

pub mod combat;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod system;

pub use combat::{attack, enemy_attack, fight};
pub use inventory::{pickup_gems, show_equipment};
pub use look::{enemy_info, look_around};
pub use movement::{move_player, use_gem};
pub use system::{help_text, rest, save_to, show_stats};

use crate::{
    GridWorld,
    command::{Command, parse_command},
    dice::DamageRoll,
};

use anyhow::Result;
use log::{debug, error};

pub const INVALID_ACTION: &str = "Invalid action.";

/// Parse `input` and run it against the world.
///
/// Handler failures (a player off the map, a roll out of range) are logged and
/// their message is returned in place of the usual reply.
pub fn action(world: &mut GridWorld, dice: &mut dyn DamageRoll, input: &str) -> String {
    let command = parse_command(input);
    debug!("'{input}' parsed as {command:?}");
    run_command(world, dice, &command).unwrap_or_else(|err| {
        error!("'{input}' failed: {err:#}");
        err.to_string()
    })
}

/// Execute an already parsed command.
///
/// `Exit` has no meaning inside a turn and is answered like any unknown input;
/// the REPL intercepts it before getting here.
///
/// # Errors
/// - see [`action`]
pub fn run_command(world: &mut GridWorld, dice: &mut dyn DamageRoll, command: &Command) -> Result<String> {
    Ok(match command {
        Command::MoveTo(dir) => move_player(world, dir)?,
        Command::UseGem(dir) => use_gem(world, dir),
        Command::PickupGems => pickup_gems(world)?,
        Command::LookAround => look_around(world)?,
        Command::Fight(name) => fight(world, dice, name)?.unwrap_or_else(|| INVALID_ACTION.to_string()),
        Command::Rest => rest(world),
        Command::ShowEquipment => show_equipment(world),
        Command::ShowStats => show_stats(world),
        Command::EnemyInfo(name) => enemy_info(world, name)?,
        Command::Help => help_text(),
        Command::Save(path) => save_to(world, path),
        Command::Exit | Command::Unknown => INVALID_ACTION.to_string(),
    })
}
