//! Asking the input layer for targets, and picking targets automatically.

use crate::core::services::{PlayerInput, Visibility};
use crate::core::world::World;
use crate::entity::EntityId;

/// A visible tile, optionally within `max_range` of the player.
///
/// Tiles that fail either test are refused and the request repeats until
/// the input layer answers with a valid tile or aborts with `None`.
/// Nothing in the world changes while asking.
pub fn target_tile(
    world: &World,
    visibility: &impl Visibility,
    input: &mut impl PlayerInput,
    max_range: Option<f64>,
) -> Option<(i32, i32)> {
    loop {
        let (x, y) = input.choose_target_tile(world, max_range)?;
        if is_valid_target(world, visibility, x, y, max_range) {
            return Some((x, y));
        }
    }
}

pub fn is_valid_target(
    world: &World,
    visibility: &impl Visibility,
    x: i32,
    y: i32,
    max_range: Option<f64>,
) -> bool {
    visibility.is_visible(x, y)
        && max_range.map_or(true, |range| world.player_entity().distance(x, y) <= range)
}

/// A fighter other than the player, chosen via [`target_tile`]. Valid tiles
/// without a monster on them are refused like invalid ones.
pub fn target_monster(
    world: &World,
    visibility: &impl Visibility,
    input: &mut impl PlayerInput,
    max_range: Option<f64>,
) -> Option<EntityId> {
    loop {
        let (x, y) = target_tile(world, visibility, input, max_range)?;
        let monster = world
            .entities
            .at(x, y)
            .into_iter()
            .find(|&id| !world.is_player(id) && world.entities.fighter(id).is_some());
        if monster.is_some() {
            return monster;
        }
    }
}

/// Nearest visible fighter other than the player closer than
/// `max_range + 1` tiles. Ties go to the earliest in the on-map list.
pub fn closest_monster(world: &World, visibility: &impl Visibility, max_range: f64) -> Option<EntityId> {
    let player = world.player_entity();
    let mut closest = None;
    let mut closest_distance = max_range + 1.0;

    for &id in world.entities.on_map() {
        if world.is_player(id) || world.entities.fighter(id).is_none() {
            continue;
        }
        let Some(entity) = world.entities.get(id) else {
            continue;
        };
        if !visibility.is_visible(entity.x, entity.y) {
            continue;
        }
        let distance = player.distance_to(entity);
        if distance < closest_distance {
            closest = Some(id);
            closest_distance = distance;
        }
    }
    closest
}
