//! The damage pipeline: evade, block, armor, application, death.
//!
//! Draw order per hit is fixed: the evade contest (accuracy, then two
//! evade dice), the block contest (same shape), then the armor roll.
//! Contests that cannot trigger consume no draws.

use super::death::handle_death;
use super::types::{DamageSource, HitOutcome, Margin};
use crate::core::color::Color;
use crate::core::rng::uniform_int;
use crate::core::world::World;
use crate::entity::{title_case, EntityId};
use crate::progression::DerivedStats;
use log::debug;
use rand::Rng;

/// Melee attack with the attacker's derived power.
///
/// Returns `None` when either side lacks a Fighter or the attacker has no
/// power to hit with.
pub fn attack(
    world: &mut World,
    attacker: EntityId,
    target: EntityId,
    rng: &mut impl Rng,
) -> Option<HitOutcome> {
    let power = DerivedStats::calculate(world, attacker)?.power;
    if power <= 0 {
        return None;
    }
    take_damage(world, target, power, DamageSource::melee(attacker), rng)
}

/// Runs `damage` through the pipeline against `target`.
///
/// `None` if the target has no Fighter.
pub fn take_damage(
    world: &mut World,
    target: EntityId,
    damage: i32,
    source: DamageSource,
    rng: &mut impl Rng,
) -> Option<HitOutcome> {
    let defender = DerivedStats::calculate(world, target)?;
    let target_name = title_case(&world.entities.name(target));

    if let Some(attacker) = source.attacker {
        let accuracy = DerivedStats::calculate(world, attacker).map_or(0, |s| s.accuracy);
        world.log.info(&format!(
            "{} attacks {}.",
            title_case(&world.entities.name(attacker)),
            target_name
        ));

        if let Some(margin) = opposed_roll(rng, accuracy, defender.evade) {
            let verb = match margin {
                Margin::Barely => "barely dodges",
                Margin::Clearly => "dodges",
            };
            world
                .log
                .message(&format!("{} {} the attack.", target_name, verb), Color::GREY, false);
            return Some(HitOutcome::Evaded(margin));
        }

        if let Some(margin) = opposed_roll(rng, accuracy, defender.block) {
            let verb = match margin {
                Margin::Barely => "barely blocks",
                Margin::Clearly => "blocks",
            };
            world
                .log
                .message(&format!("{} {} the attack.", target_name, verb), Color::GREY, false);
            return Some(HitOutcome::Blocked(margin));
        }
    }

    let mut damage = damage;
    if !source.piercing {
        let reduction = armor_roll(rng, defender.defense);
        debug!("{} rolled {} against {} damage", target_name, reduction, damage);
        damage -= reduction;
        if damage <= 0 {
            world.log.message(
                &format!("{}'s defenses completely absorb the attack.", target_name),
                Color::GREY,
                false,
            );
        }
    }

    if damage <= 0 {
        return Some(HitOutcome::Damaged {
            amount: 0,
            killed: false,
        });
    }

    let killed = apply_damage(world, target, damage);
    Some(HitOutcome::Damaged {
        amount: damage,
        killed,
    })
}

/// Defender's side of an opposed roll. The attacker rolls `[0, accuracy]`,
/// the defender averages two rolls of `[0, stat]` and wins on a strictly
/// higher result. A stat of zero or less never rolls and never wins.
pub fn opposed_roll(rng: &mut impl Rng, accuracy: i32, stat: i32) -> Option<Margin> {
    if stat <= 0 {
        return None;
    }
    let to_hit = uniform_int(rng, 0, accuracy);
    let first = uniform_int(rng, 0, stat);
    let second = uniform_int(rng, 0, stat);
    let defense = (first + second).div_euclid(2);

    if defense <= to_hit {
        return None;
    }
    if (defense - to_hit) as f64 <= stat as f64 * 0.2 {
        Some(Margin::Barely)
    } else {
        Some(Margin::Clearly)
    }
}

/// Amount of damage soaked by armor: a roll in `[0, defense]`.
pub fn armor_roll(rng: &mut impl Rng, defense: i32) -> i32 {
    uniform_int(rng, 0, defense.max(0))
}

/// Subtracts hp, clamps at zero and resolves death on the killing blow.
/// Returns whether this hit killed.
fn apply_damage(world: &mut World, target: EntityId, damage: i32) -> bool {
    let is_player = world.is_player(target);
    let name = title_case(&world.entities.name(target));
    let Some(fighter) = world.entities.fighter_mut(target) else {
        return false;
    };

    let was_alive = fighter.hp > 0;
    fighter.hp = (fighter.hp - damage).max(0);
    let killed = was_alive && fighter.hp == 0;
    let reward = fighter.xp;
    let death = fighter.death;

    let color = if is_player { Color::ORANGE } else { Color::WHITE };
    world
        .log
        .message(&format!("{} is hit for {} hit points.", name, damage), color, false);

    if !killed {
        return false;
    }

    if let Some(behavior) = death {
        handle_death(world, target, behavior);
    }
    if !is_player {
        let player = world.player;
        if let Some(player_fighter) = world.entities.fighter_mut(player) {
            player_fighter.xp += reward;
        }
    }
    true
}

/// Restores hp up to the derived maximum.
pub fn heal(world: &mut World, id: EntityId, amount: i32) {
    let Some(max_hp) = DerivedStats::calculate(world, id).map(|s| s.max_hp) else {
        return;
    };
    if let Some(fighter) = world.entities.fighter_mut(id) {
        fighter.hp = (fighter.hp + amount).min(max_hp);
    }
}
