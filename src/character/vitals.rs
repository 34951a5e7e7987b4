//! Player life support: oxygen and energy.

use crate::combat::{take_damage, DamageSource};
use crate::core::constants::SUFFOCATION_DAMAGE;
use crate::core::world::World;
use crate::progression::DerivedAttributes;
use rand::Rng;

/// Consumes oxygen. Races that do not breathe are unaffected. An empty tank
/// clamps at zero and costs the player hit points instead.
pub fn breathe(world: &mut World, amount: i32, rng: &mut impl Rng) {
    let player = world.player;
    let Some(stats) = world.entities.player_stats_mut(player) else {
        return;
    };
    if !stats.breathes() {
        return;
    }
    stats.oxygen -= amount;
    if stats.oxygen > 0 {
        return;
    }
    stats.oxygen = 0;
    take_damage(
        world,
        player,
        SUFFOCATION_DAMAGE,
        DamageSource::environment(),
        rng,
    );
}

/// Refills oxygen up to the derived maximum.
pub fn restore_oxygen(world: &mut World, amount: i32) {
    let player = world.player;
    let Some(max) = DerivedAttributes::calculate(world, player).map(|a| a.max_oxygen) else {
        return;
    };
    if let Some(stats) = world.entities.player_stats_mut(player) {
        stats.oxygen = (stats.oxygen + amount).min(max);
    }
}

/// Restores energy up to the derived maximum.
pub fn recharge(world: &mut World, amount: i32) {
    let player = world.player;
    let Some(max) = DerivedAttributes::calculate(world, player).map(|a| a.max_energy) else {
        return;
    };
    if let Some(stats) = world.entities.player_stats_mut(player) {
        stats.energy = (stats.energy + amount).min(max);
    }
}

pub fn drain_energy(world: &mut World, amount: i32) {
    let player = world.player;
    if let Some(stats) = world.entities.player_stats_mut(player) {
        stats.energy = (stats.energy - amount).max(0);
    }
}
