//! REPL and session flow.
//!
//! A session first asks whether to load a saved game, then reads commands one
//! line at a time and hands them to [`play::action`] until the player wins,
//! dies, or exits. Both phases read through a [`LineSource`] and print to any
//! writer, so a whole session can be driven from a script.

pub mod input;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::{
    GridWorld,
    command::parse_command,
    data_paths::default_world_path,
    dice::{DamageRoll, RngRoll},
    error::CodecError,
    play::{self, help_text},
    save_files::load_game,
    style::GameStyle,
};

use input::{GameInput, InputEvent};

const LOAD_PROMPT: &str = "\n\t\tLoad saved game? (yes \"path to game file\"/no)\n\n> ";
const COMMAND_PROMPT: &str = "> ";

/// Anything that can hand the REPL one line of input at a time.
pub trait LineSource {
    /// # Errors
    /// - if the underlying input can no longer be read
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;
}

impl LineSource for GameInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        GameInput::read_line(self, prompt)
    }
}

/// How a game session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    Quit,
}

/// Answer to the opening "load saved game?" question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadChoice {
    NewGame,
    Saved(PathBuf),
}

/// `no` starts the default world; `yes <path>` loads a save file. Anything
/// else (including `yes` without a path) is rejected.
pub fn parse_load_answer(answer: &str) -> Option<LoadChoice> {
    let words: Vec<&str> = answer.split_whitespace().collect();
    match words.as_slice() {
        ["no", ..] => Some(LoadChoice::NewGame),
        ["yes", path @ ..] if !path.is_empty() => Some(LoadChoice::Saved(PathBuf::from(path.join(" ")))),
        _ => None,
    }
}

/// # Errors
/// - any error from [`load_game`]
pub fn load_choice(choice: &LoadChoice) -> Result<GridWorld, CodecError> {
    match choice {
        LoadChoice::NewGame => load_game(&default_world_path()),
        LoadChoice::Saved(path) => load_game(path),
    }
}

/// `Won` once no enemy is left, `Lost` once the player has no health.
pub fn check_outcome(world: &GridWorld) -> Option<Outcome> {
    if world.did_win() {
        Some(Outcome::Won)
    } else if !world.player.is_alive() {
        Some(Outcome::Lost)
    } else {
        None
    }
}

/// Run a full interactive session on the terminal.
///
/// # Errors
/// - if terminal input or output fails
pub fn run_repl() -> Result<()> {
    let mut input = GameInput::open();
    let mut out = io::stdout();
    let Some(mut world) = bootstrap(&mut input, &mut out)? else {
        info!("input closed before a game was loaded");
        return Ok(());
    };
    let outcome = play_session(&mut world, &mut input, &mut RngRoll::thread(), &mut out)?;
    info!("session ended: {outcome:?}");
    Ok(())
}

/// Ask which game to load until one loads. Returns `None` if input ends first.
///
/// # Errors
/// - if reading input or writing output fails
pub fn bootstrap(input: &mut impl LineSource, out: &mut impl Write) -> Result<Option<GridWorld>> {
    loop {
        let answer = match input.read_line(LOAD_PROMPT).context("while reading load answer")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => return Ok(None),
            InputEvent::Interrupted => continue,
        };
        let Some(choice) = parse_load_answer(&answer) else {
            writeln!(out, "{}", "Wrong input, try again.".error_style())?;
            continue;
        };
        match load_choice(&choice) {
            Ok(world) => return Ok(Some(world)),
            Err(err) => {
                warn!("could not load {choice:?}: {err:?}");
                writeln!(out, "\t\t{}", err.to_string().error_style())?;
            },
        }
    }
}

/// Read and execute commands until the game is decided or the player exits.
/// End of input counts as exiting.
///
/// # Errors
/// - if reading input or writing output fails
pub fn play_session(
    world: &mut GridWorld,
    input: &mut impl LineSource,
    dice: &mut dyn DamageRoll,
    out: &mut impl Write,
) -> Result<Outcome> {
    writeln!(out, "\n\t\tStarting game")?;
    writeln!(out, "{}", help_text().help_style())?;

    loop {
        let line = match input.read_line(COMMAND_PROMPT).context("while reading command")? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => return Ok(Outcome::Quit),
            InputEvent::Interrupted => continue,
        };
        if parse_command(&line).is_exit() {
            info!("{} left the game", world.player.name());
            return Ok(Outcome::Quit);
        }

        let reply = play::action(world, dice, &line);
        writeln!(out, "{}", reply.reply_style())?;

        match check_outcome(world) {
            Some(Outcome::Won) => {
                info!("{} cleared the map", world.player.name());
                writeln!(out, "{}\n", "\t\tYou won".victory_style())?;
                return Ok(Outcome::Won);
            },
            Some(Outcome::Lost) => {
                info!("{} has fallen", world.player.name());
                writeln!(out, "{}\n", "\t\tYou lost".defeat_style())?;
                return Ok(Outcome::Lost);
            },
            Some(Outcome::Quit) | None => {},
        }
    }
}
