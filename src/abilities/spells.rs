//! Item use effects.

use super::targeting::{closest_monster, target_monster, target_tile};
use super::types::AbilityOutcome;
use crate::ai::Behavior;
use crate::character::restore_oxygen;
use crate::combat::{heal, take_damage, DamageSource};
use crate::core::color::Color;
use crate::core::constants::*;
use crate::core::services::{PlayerInput, Visibility};
use crate::core::world::World;
use crate::entity::{EntityId, UseEffect};
use crate::progression::{DerivedAttributes, DerivedStats};
use rand::Rng;

/// Applies `effect` on behalf of the player.
pub fn cast(
    world: &mut World,
    effect: UseEffect,
    visibility: &impl Visibility,
    input: &mut impl PlayerInput,
    rng: &mut impl Rng,
) -> AbilityOutcome {
    match effect {
        UseEffect::Heal => cast_heal(world),
        UseEffect::Oxygen => cast_oxygen(world),
        UseEffect::Lightning => cast_lightning(world, visibility, rng),
        UseEffect::Fireball => cast_fireball(world, visibility, input, rng),
        UseEffect::Confuse => cast_confuse(world, visibility, input),
    }
}

pub fn cast_heal(world: &mut World) -> AbilityOutcome {
    let player = world.player;
    let (Some(fighter), Some(stats)) = (
        world.entities.fighter(player),
        DerivedStats::calculate(world, player),
    ) else {
        return AbilityOutcome::Cancelled;
    };
    if fighter.hp >= stats.max_hp {
        world.log.message("You are already at full health.", Color::RED, true);
        return AbilityOutcome::Cancelled;
    }

    world.log.message(
        "You rub regenerative membrane on your wounds, and watch them close up before your eyes!",
        Color::LIGHT_VIOLET,
        true,
    );
    heal(world, player, HEAL_AMOUNT);
    AbilityOutcome::Used
}

/// Refuses unless the whole refill fits below the tank's capacity.
pub fn cast_oxygen(world: &mut World) -> AbilityOutcome {
    let player = world.player;
    let (Some(stats), Some(attrs)) = (
        world.entities.player_stats(player),
        DerivedAttributes::calculate(world, player),
    ) else {
        return AbilityOutcome::Cancelled;
    };
    let oxygen = stats.oxygen;

    if oxygen >= attrs.max_oxygen {
        world
            .log
            .message("Your main oxygen tank is already full.", Color::RED, true);
        return AbilityOutcome::Cancelled;
    }
    if oxygen + OXYGEN_REFILL_AMOUNT >= attrs.max_oxygen {
        world.log.message(
            "You decide not to refill your main oxygen tank, as it lacks the capacity to hold the extra air.",
            Color::RED,
            true,
        );
        return AbilityOutcome::Cancelled;
    }

    world.log.message(
        "You connect the new tank to your main one, turn a valve, and watch as the gauge changes.",
        Color::LIGHT_VIOLET,
        true,
    );
    restore_oxygen(world, OXYGEN_REFILL_AMOUNT);
    AbilityOutcome::Used
}

pub fn cast_lightning(
    world: &mut World,
    visibility: &impl Visibility,
    rng: &mut impl Rng,
) -> AbilityOutcome {
    let Some(target) = closest_monster(world, visibility, LIGHTNING_RANGE) else {
        world
            .log
            .message("No enemy is close enough to strike.", Color::RED, true);
        return AbilityOutcome::Cancelled;
    };

    let name = world.entities.name(target);
    world.log.message(
        &format!(
            "A lightning bolt strikes the {} with a loud thunder! The damage is {} hit points.",
            name, LIGHTNING_DAMAGE
        ),
        Color::LIGHT_BLUE,
        true,
    );
    take_damage(world, target, LIGHTNING_DAMAGE, DamageSource::effect(), rng);
    AbilityOutcome::Used
}

/// Burns every fighter within the radius of a chosen tile, the player included.
pub fn cast_fireball(
    world: &mut World,
    visibility: &impl Visibility,
    input: &mut impl PlayerInput,
    rng: &mut impl Rng,
) -> AbilityOutcome {
    world.log.message(
        "Choose a target tile for the fireball, or cancel.",
        Color::LIGHT_CYAN,
        true,
    );
    let Some((x, y)) = target_tile(world, visibility, input, None) else {
        return AbilityOutcome::Cancelled;
    };
    explode(world, x, y, rng);
    AbilityOutcome::Used
}

/// The fireball blast itself, without targeting.
pub fn explode(world: &mut World, x: i32, y: i32, rng: &mut impl Rng) {
    world.log.message(
        &format!(
            "The fireball explodes, burning everything within {} tiles!",
            FIREBALL_RADIUS
        ),
        Color::ORANGE,
        true,
    );

    let caught: Vec<EntityId> = world
        .entities
        .on_map()
        .iter()
        .copied()
        .filter(|&id| world.entities.fighter(id).is_some())
        .filter(|&id| {
            world
                .entities
                .get(id)
                .is_some_and(|e| e.distance(x, y) <= FIREBALL_RADIUS)
        })
        .collect();

    for id in caught {
        // An earlier burn in this blast may have killed it already.
        if world.entities.fighter(id).is_none() {
            continue;
        }
        world.log.message(
            &format!(
                "The {} gets burned for {} hit points.",
                world.entities.name(id),
                FIREBALL_DAMAGE
            ),
            Color::ORANGE,
            true,
        );
        take_damage(world, id, FIREBALL_DAMAGE, DamageSource::effect(), rng);
    }
}

/// Wraps a targeted monster's behavior in confusion.
pub fn cast_confuse(
    world: &mut World,
    visibility: &impl Visibility,
    input: &mut impl PlayerInput,
) -> AbilityOutcome {
    world.log.message(
        "Choose an enemy to confuse, or cancel.",
        Color::LIGHT_CYAN,
        true,
    );
    let Some(target) = target_monster(world, visibility, input, Some(CONFUSE_RANGE)) else {
        return AbilityOutcome::Cancelled;
    };

    if let Some(previous) = world.entities.remove_behavior(target) {
        world
            .entities
            .set_behavior(target, Behavior::confused(previous, CONFUSE_NUM_TURNS));
    }
    let name = world.entities.name(target);
    world.log.message(
        &format!(
            "The eyes of the {} look vacant, as they start to stumble around!",
            name
        ),
        Color::LIGHT_GREEN,
        true,
    );
    AbilityOutcome::Used
}
