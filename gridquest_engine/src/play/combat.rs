//! `play::combat` module
//!
//! Single blows in both directions and the fight loop built from them.
//! Every roll goes through the supplied [`DamageRoll`], so tests can script
//! the outcome of a fight.

use std::fmt::Write;

use crate::{Enemy, GridWorld, dice::DamageRoll};

use anyhow::{Result, anyhow};
use log::info;

pub const NO_POWER: &str = "You have no power.";
pub const NOBODY_TO_ATTACK: &str = "There are no enemies to attack.";

fn no_such_enemy(name: &str) -> String {
    format!("There is no enemy named {name}.")
}

/// The player strikes the first enemy here called `name`.
///
/// # Errors
/// - if the player's location cannot be resolved
/// - `GameError::InvalidDamage` if the roll comes back as zero
pub fn attack(world: &mut GridWorld, dice: &mut dyn DamageRoll, name: &str) -> Result<String> {
    if world.player.power() == 0 {
        return Ok(NO_POWER.to_string());
    }
    let here = world.player_location()?;
    if here.enemies.is_empty() {
        return Ok(NOBODY_TO_ATTACK.to_string());
    }
    match enemy_index(world, name)? {
        Some(idx) => player_strikes(world, dice, idx),
        None => Ok(no_such_enemy(name)),
    }
}

/// The first enemy here called `name` strikes the player.
///
/// # Errors
/// - if the player's location cannot be resolved
pub fn enemy_attack(world: &mut GridWorld, dice: &mut dyn DamageRoll, name: &str) -> Result<String> {
    match enemy_index(world, name)? {
        Some(idx) => enemy_strikes(world, dice, idx),
        None => Ok(no_such_enemy(name)),
    }
}

/// Trade blows with `name` until one side falls.
///
/// Returns `None` when there is no such enemy at the player's location. A
/// slain enemy is removed from the location. Rounds also stop once neither
/// side has any power left.
///
/// # Errors
/// - if the player's location cannot be resolved
/// - if a roll produces an invalid amount of damage
pub fn fight(world: &mut GridWorld, dice: &mut dyn DamageRoll, name: &str) -> Result<Option<String>> {
    let Some(idx) = enemy_index(world, name)? else {
        return Ok(None);
    };
    info!(
        "{} ({} hp) fights {name} at {}",
        world.player.name(),
        world.player.health(),
        world.player.location()
    );

    let mut transcript = String::from("\n");
    while world.player.is_alive() {
        let blow = attack_or_explain(world, dice, idx)?;
        writeln!(transcript, "\t\t{blow}")?;

        let enemy = enemy_at(world, idx)?;
        if !enemy.is_alive() {
            writeln!(transcript, "\t\t{} died.", enemy.name())?;
            let slain = world
                .player_location_mut()?
                .remove_enemy(name)
                .ok_or_else(|| anyhow!("{name} vanished before it could be removed"))?;
            info!("{} slew {}", world.player.name(), slain.name());
            break;
        }
        let stalemate = world.player.power() == 0 && enemy.power() == 0;

        let blow = enemy_strikes(world, dice, idx)?;
        writeln!(transcript, "\t\t{blow}")?;
        if stalemate {
            info!("fight with {name} ends with neither side able to deal damage");
            break;
        }
    }
    if !world.player.is_alive() {
        info!("{} was killed by {name}", world.player.name());
    }
    Ok(Some(transcript))
}

fn enemy_index(world: &GridWorld, name: &str) -> Result<Option<usize>> {
    let here = world.player_location()?;
    Ok(here.enemies.iter().position(|enemy| enemy.name() == name))
}

fn enemy_at(world: &GridWorld, idx: usize) -> Result<&Enemy> {
    world
        .player_location()?
        .enemies
        .get(idx)
        .ok_or_else(|| anyhow!("no enemy at index {idx} in {}", world.player.location()))
}

fn attack_or_explain(world: &mut GridWorld, dice: &mut dyn DamageRoll, idx: usize) -> Result<String> {
    if world.player.power() == 0 {
        return Ok(NO_POWER.to_string());
    }
    player_strikes(world, dice, idx)
}

fn player_strikes(world: &mut GridWorld, dice: &mut dyn DamageRoll, idx: usize) -> Result<String> {
    let damage = dice.roll(1, world.player.power());
    let enemy = world
        .player_location_mut()?
        .enemies
        .get_mut(idx)
        .ok_or_else(|| anyhow!("enemy vanished mid-attack"))?;
    enemy.take_damage(i64::try_from(damage)?)?;
    let (name, left) = (enemy.name().to_string(), enemy.health());
    info!("{} hit {name} for {damage}, {left} hp left", world.player.name());
    Ok(format!(
        "{name} lost {damage} points of health. {name} has {left} points of health left.\n"
    ))
}

fn enemy_strikes(world: &mut GridWorld, dice: &mut dyn DamageRoll, idx: usize) -> Result<String> {
    let enemy = enemy_at(world, idx)?;
    let power = enemy.power();
    let damage = if power == 0 { 0 } else { dice.roll(1, power) };
    info!("{} hit {} for {damage}", enemy.name(), world.player.name());

    world.player.take_damage(i64::try_from(damage)?)?;
    let left = world.player.health();
    let mut report = format!("You lost {damage} points of health. You have {left} points of health left.\n");
    if left == 0 {
        report.push_str("\n\t\tYou died.");
    }
    Ok(report)
}
