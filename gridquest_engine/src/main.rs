#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** GridQuest **
//! Grid adventure: gems, barriers and enemies

use gridquest_engine::style::GameStyle;
use gridquest_engine::{GRIDQUEST_VERSION, run_repl};

use anyhow::{Context, Result};
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: GridQuest v{GRIDQUEST_VERSION}");

    println!("{:^60}", "GRIDQUEST".title_style());
    run_repl().context("while running the game session")?;

    info!("GridQuest session closed");
    Ok(())
}
