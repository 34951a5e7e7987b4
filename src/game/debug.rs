//! Developer commands. The only way `explored` ever goes back to false.

use super::types::{DebugCommand, PlayerAction};
use crate::abilities::cast_fireball;
use crate::character::{drain_energy, recharge};
use crate::combat::heal;
use crate::core::services::{PlayerInput, Visibility};
use crate::core::world::World;
use crate::progression::DerivedStats;
use log::debug;
use rand::Rng;

/// Experience granted by [`DebugCommand::GrantXp`].
pub const DEBUG_XP_GRANT: i32 = 500;

pub fn run_debug_command(
    world: &mut World,
    command: DebugCommand,
    visibility: &impl Visibility,
    input: &mut impl PlayerInput,
    rng: &mut impl Rng,
) -> PlayerAction {
    debug!("debug command {:?}", command);
    let player = world.player;

    match command {
        DebugCommand::RevealMap => {
            world.map.set_all_explored(true);
            world.log.info("Revealing the current map's tiles.");
        }
        DebugCommand::UnrevealMap => {
            world.map.set_all_explored(false);
            world.log.info("Unexploring the current map's tiles.");
        }
        DebugCommand::Heal => {
            if let Some(stats) = DerivedStats::calculate(world, player) {
                heal(world, player, stats.max_hp);
            }
            world.log.info("Health restored to full.");
        }
        DebugCommand::GrantXp => {
            if let Some(fighter) = world.entities.fighter_mut(player) {
                fighter.xp += DEBUG_XP_GRANT;
            }
            world.log.info("XP granted.");
        }
        DebugCommand::AdjustEnergy(amount) => {
            if amount >= 0 {
                recharge(world, amount);
            } else {
                drain_energy(world, -amount);
            }
            world.log.info(&format!("Energy adjusted by {}.", amount));
        }
        DebugCommand::Fireball => {
            cast_fireball(world, visibility, input, rng);
        }
    }
    PlayerAction::DidntTakeTurn
}

/// Parses and runs prompt text, logging unknown commands.
pub fn run_debug_text(
    world: &mut World,
    text: &str,
    visibility: &impl Visibility,
    input: &mut impl PlayerInput,
    rng: &mut impl Rng,
) -> PlayerAction {
    match DebugCommand::parse(text) {
        Some(command) => run_debug_command(world, command, visibility, input, rng),
        None => {
            world.log.info("Unknown command.");
            PlayerAction::DidntTakeTurn
        }
    }
}
