//! Player actions and whether they cost a turn.

use super::types::PlayerAction;
use crate::character::breathe;
use crate::combat::{attack, tick};
use crate::core::color::Color;
use crate::core::constants::{BREATH_PER_ATTACK, BREATH_PER_MOVE};
use crate::core::services::{PlayerInput, Visibility};
use crate::core::world::World;
use crate::inventory::{drop_item, pick_up, use_item};
use crate::progression::DerivedStats;
use rand::Rng;

/// Attacks whatever fighter stands in the way, otherwise steps. Bumping
/// into a wall costs nothing.
pub fn move_or_attack(world: &mut World, dx: i32, dy: i32, rng: &mut impl Rng) -> PlayerAction {
    let player = world.player;
    let (x, y) = world.player_position();
    let (x, y) = (x + dx, y + dy);

    let target = world
        .entities
        .at(x, y)
        .into_iter()
        .find(|&id| id != player && world.entities.fighter(id).is_some());

    if let Some(target) = target {
        attack(world, player, target, rng);
        breathe(world, BREATH_PER_ATTACK, rng);
    } else if world.move_by(player, dx, dy) {
        breathe(world, BREATH_PER_MOVE, rng);
    } else {
        return PlayerAction::DidntTakeTurn;
    }
    tick(world, player);
    PlayerAction::TookTurn
}

/// Passes a turn in place.
pub fn wait(world: &mut World, rng: &mut impl Rng) -> PlayerAction {
    breathe(world, BREATH_PER_MOVE, rng);
    let player = world.player;
    tick(world, player);
    PlayerAction::TookTurn
}

/// Like [`wait`], but refused at full health or with a monster in view.
pub fn rest(world: &mut World, visibility: &impl Visibility, rng: &mut impl Rng) -> PlayerAction {
    let player = world.player;
    let at_full_health = match (world.player_fighter(), DerivedStats::calculate(world, player)) {
        (Some(fighter), Some(stats)) => fighter.hp >= stats.max_hp,
        _ => true,
    };
    if at_full_health {
        world.log.info("You are already at full health.");
        return PlayerAction::DidntTakeTurn;
    }

    let spotted = world.entities.on_map().iter().copied().find(|&id| {
        id != player
            && world.entities.fighter(id).is_some()
            && world
                .entities
                .get(id)
                .is_some_and(|e| visibility.is_visible(e.x, e.y))
    });
    if let Some(monster) = spotted {
        let name = world.entities.name(monster);
        world
            .log
            .message(&format!("There is a {} nearby!", name), Color::RED, true);
        return PlayerAction::DidntTakeTurn;
    }

    wait(world, rng)
}

/// Picks up the first item on the player's tile.
pub fn pick_up_here(world: &mut World) -> PlayerAction {
    let (x, y) = world.player_position();
    let item = world
        .entities
        .at(x, y)
        .into_iter()
        .find(|&id| world.entities.item(id).is_some());
    if let Some(item) = item {
        pick_up(world, item);
    }
    PlayerAction::DidntTakeTurn
}

pub fn drop_from_inventory(world: &mut World, index: usize) -> PlayerAction {
    drop_item(world, index);
    PlayerAction::DidntTakeTurn
}

pub fn use_from_inventory(
    world: &mut World,
    index: usize,
    visibility: &impl Visibility,
    input: &mut impl PlayerInput,
    rng: &mut impl Rng,
) -> PlayerAction {
    use_item(world, index, visibility, input, rng);
    PlayerAction::DidntTakeTurn
}

/// Whether the player is standing on the stairs.
pub fn on_stairs(world: &World) -> bool {
    world
        .stairs
        .and_then(|id| world.entities.get(id))
        .is_some_and(|stairs| stairs.position() == world.player_position())
}
