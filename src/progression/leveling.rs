//! Experience thresholds and level-ups.

use crate::core::color::Color;
use crate::core::constants::{LEVEL_UP_BASE, LEVEL_UP_FACTOR};
use crate::core::services::PlayerInput;
use crate::core::world::World;
use log::info;
use serde::{Deserialize, Serialize};

/// Attribute raised by a level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatChoice {
    Strength,
    Agility,
    Intelligence,
}

/// Experience needed to leave `level`.
pub fn xp_to_level_up(level: i32) -> i32 {
    LEVEL_UP_BASE + level * LEVEL_UP_FACTOR
}

/// Levels the player up once if enough experience has accumulated.
///
/// The attribute to raise is requested synchronously from `input`.
/// Returns the new level.
pub fn check_level_up(world: &mut World, input: &mut impl PlayerInput) -> Option<i32> {
    let player = world.player;
    let level = world.entities.player_stats(player)?.level;
    let xp = world.entities.fighter(player)?.xp;
    let threshold = xp_to_level_up(level);
    if xp < threshold {
        return None;
    }

    let new_level = level + 1;
    if let Some(stats) = world.entities.player_stats_mut(player) {
        stats.level = new_level;
    }
    if let Some(fighter) = world.entities.fighter_mut(player) {
        fighter.xp -= threshold;
    }
    world.log.message(
        &format!(
            "Your battle skills grow stronger! You reached level {}!",
            new_level
        ),
        Color::YELLOW,
        true,
    );
    info!("player reached level {}", new_level);

    let choice = input.choose_level_up_stat(world);
    apply_stat_choice(world, choice);
    Some(new_level)
}

pub fn apply_stat_choice(world: &mut World, choice: StatChoice) {
    let Some(stats) = world.entities.player_stats_mut(world.player) else {
        return;
    };
    match choice {
        StatChoice::Strength => stats.base_strength += 1,
        StatChoice::Agility => stats.base_agility += 1,
        StatChoice::Intelligence => stats.base_intelligence += 1,
    }
}
