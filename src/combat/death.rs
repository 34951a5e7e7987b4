//! What happens when a fighter's hp reaches zero.

use crate::core::color::Color;
use crate::core::world::{GameState, World};
use crate::entity::{DeathBehavior, EntityId};
use log::info;

pub fn handle_death(world: &mut World, id: EntityId, behavior: DeathBehavior) {
    match behavior {
        DeathBehavior::Player => player_death(world, id),
        DeathBehavior::Monster => monster_death(world, id),
    }
}

/// Game over: the player becomes a corpse but keeps its Fighter.
fn player_death(world: &mut World, id: EntityId) {
    world.log.message("You died!", Color::RED, true);
    world.state = GameState::Dead;
    if let Some(entity) = world.entities.get_mut(id) {
        entity.glyph = '%';
        entity.color = Color::DARK_RED;
    }
    info!("player died on dungeon level {}", world.dungeon_level);
}

/// Strips Fighter and behavior and leaves non-blocking remains at the
/// bottom of the draw order.
fn monster_death(world: &mut World, id: EntityId) {
    let reward = world.entities.fighter(id).map_or(0, |f| f.xp);
    let name = world.entities.name(id);
    world.log.message(
        &format!("The {} is dead! You gain {} experience points.", name, reward),
        Color::YELLOW,
        true,
    );

    world.entities.remove_fighter(id);
    world.entities.remove_behavior(id);
    if let Some(entity) = world.entities.get_mut(id) {
        entity.glyph = '%';
        entity.color = Color::DARK_RED;
        entity.blocks = false;
        entity.name = format!("remains of {}", name);
    }
    world.entities.send_to_back(id);
}
