//! Command module
//!
//! Turns one line of player input into a [`Command`]. Arity is checked here, so
//! anything that doesn't fit one of the known shapes becomes `Command::Unknown`.
use variantly::Variantly;

use crate::helpers::title_case;

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    /// Direction as typed (lowercased); validated by the movement handler.
    MoveTo(String),
    UseGem(String),
    PickupGems,
    LookAround,
    /// Enemy name, title-cased.
    Fight(String),
    Rest,
    ShowEquipment,
    ShowStats,
    EnemyInfo(String),
    Help,
    /// Target path, case preserved.
    Save(String),
    Exit,
    Unknown,
}

/// Parses an input string and returns the matching `Command`.
///
/// Verbs are matched case-insensitively.
pub fn parse_command(input: &str) -> Command {
    let words: Vec<&str> = input.split_whitespace().collect();
    let lowered: Vec<String> = words.iter().map(|word| word.to_lowercase()).collect();
    let verbs: Vec<&str> = lowered.iter().map(String::as_str).collect();

    match verbs.as_slice() {
        ["move", dir] => Command::MoveTo((*dir).to_string()),
        ["use", "gem", dir] => Command::UseGem((*dir).to_string()),
        ["pickup", "gems"] => Command::PickupGems,
        ["look", "around"] => Command::LookAround,
        ["fight", name @ ..] if !name.is_empty() => Command::Fight(title_case(&name.join(" "))),
        ["rest"] => Command::Rest,
        ["show", "equipment"] => Command::ShowEquipment,
        ["show", "stats"] => Command::ShowStats,
        ["enemy", "info", name] => Command::EnemyInfo(title_case(name)),
        ["help"] => Command::Help,
        ["save", _] => Command::Save(words[1].to_string()),
        ["exit"] => Command::Exit,
        _ => Command::Unknown,
    }
}

/// Every command with a short description, in the order `help` lists them.
pub const COMMAND_HELP: &[(&str, &str)] = &[
    ("show equipment", "shows player's current equipment"),
    ("show stats", "shows player's current stats"),
    ("pickup gems", "pickups all gems from current location"),
    ("use gem (direction)", "uses proper gem from equipment and removes barrier"),
    ("look around", "shows info about current location"),
    ("move (direction)", "moves player to new location"),
    ("fight (enemy)", "player fights with chosen enemy"),
    ("rest", "restores player's health"),
    ("enemy info (enemy)", "shows info about enemy"),
    ("save (path to file)", "saves game to chosen file"),
    ("exit", "closes the game"),
    ("help", "shows list of commands"),
];
