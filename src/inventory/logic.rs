//! Picking up, dropping and using carried items.

use crate::abilities::{cast, AbilityOutcome};
use crate::core::color::Color;
use crate::core::services::{PlayerInput, Visibility};
use crate::core::world::World;
use crate::entity::EntityId;
use crate::progression::{dequip, equip, equipped_in_slot, toggle_equip};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickUpOutcome {
    /// Started a new inventory slot.
    PickedUp,
    /// Joined an existing stack, which now holds this many.
    Stacked(usize),
    /// No free slot; the item stays where it is.
    InventoryFull,
    /// Not an item on the map.
    NotAnItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UseOutcome {
    /// Equipment: toggled on or off, nothing consumed.
    Toggled,
    /// Effect applied and one item consumed.
    Used,
    /// Effect aborted; nothing consumed.
    Cancelled,
    /// The item has no use effect.
    Unusable,
}

/// Last slot whose head is named `name`.
pub fn find_stack(world: &World, name: &str) -> Option<usize> {
    world
        .inventory
        .heads()
        .enumerate()
        .filter(|&(_, id)| world.entities.get(id).is_some_and(|e| e.name == name))
        .map(|(index, _)| index)
        .last()
}

/// Moves an on-map item into the inventory.
///
/// Stackables join a same-named stack without needing a free slot.
/// Equipment is equipped on the spot when its slot is empty.
pub fn pick_up(world: &mut World, item: EntityId) -> PickUpOutcome {
    let Some(stackable) = world.entities.item(item).map(|i| i.stackable) else {
        return PickUpOutcome::NotAnItem;
    };
    if !world.entities.is_on_map(item) {
        return PickUpOutcome::NotAnItem;
    }
    let name = world.entities.name(item);

    if stackable {
        if let Some(index) = find_stack(world, &name) {
            let count = world.inventory.stack_onto(index, item).unwrap_or(1);
            world.entities.unplace(item);
            world.log.message(
                &format!("You now have {} {}s!", count, name),
                Color::GREEN,
                true,
            );
            return PickUpOutcome::Stacked(count);
        }
    }

    if !world.inventory.push_new(item) {
        world.log.message(
            &format!("Your inventory is full, cannot pick up {}.", name),
            Color::RED,
            true,
        );
        return PickUpOutcome::InventoryFull;
    }
    world.entities.unplace(item);
    world
        .log
        .message(&format!("You picked up a {}!", name), Color::GREEN, true);
    debug!("picked up {} ({} slots used)", name, world.inventory.len());

    if !stackable {
        let free_slot = world
            .entities
            .equipment(item)
            .map(|e| e.slot)
            .filter(|&slot| equipped_in_slot(world, world.player, slot).is_none());
        if free_slot.is_some() {
            equip(world, item, false);
        }
    }
    PickUpOutcome::PickedUp
}

/// Drops one item from slot `index` at the player's feet, dequipping it
/// first. Returns the entity placed on the map.
pub fn drop_item(world: &mut World, index: usize) -> Option<EntityId> {
    let stack = world.inventory.stack(index)?;
    let head = stack.head();
    let remaining_after_pop = stack.len().saturating_sub(1);
    let stackable = world.entities.item(head).is_some_and(|i| i.stackable);

    if world.entities.equipment(head).is_some() {
        dequip(world, head, false);
    }

    let (x, y) = world.player_position();
    let dropped = if stackable {
        world.inventory.pop_extra(index)
    } else {
        None
    };

    let dropped = match dropped {
        Some(extra) => {
            world.log.message(
                &format!(
                    "You dropped a {}. ({} remaining)",
                    world.entities.name(extra),
                    remaining_after_pop
                ),
                Color::YELLOW,
                true,
            );
            extra
        }
        None => {
            world.inventory.remove_slot(index);
            world.log.message(
                &format!("You dropped a {}.", world.entities.name(head)),
                Color::YELLOW,
                true,
            );
            head
        }
    };

    if let Some(entity) = world.entities.get_mut(dropped) {
        entity.x = x;
        entity.y = y;
    }
    world.entities.place(dropped);
    Some(dropped)
}

/// Uses the item in slot `index`.
pub fn use_item(
    world: &mut World,
    index: usize,
    visibility: &impl Visibility,
    input: &mut impl PlayerInput,
    rng: &mut impl Rng,
) -> Option<UseOutcome> {
    let head = world.inventory.stack(index)?.head();

    if world.entities.equipment(head).is_some() {
        toggle_equip(world, head);
        return Some(UseOutcome::Toggled);
    }

    let item = world.entities.item(head)?.clone();
    let Some(effect) = item.use_effect else {
        let name = world.entities.name(head);
        world.log.info(&format!("The {} cannot be used.", name));
        return Some(UseOutcome::Unusable);
    };

    if cast(world, effect, visibility, input, rng) == AbilityOutcome::Cancelled {
        return Some(UseOutcome::Cancelled);
    }

    // The effect may have killed the player, but the slot is still ours.
    let Some(slot) = world.inventory.slot_of(head) else {
        return Some(UseOutcome::Used);
    };
    let spent = if item.stackable {
        world.inventory.pop_extra(slot)
    } else {
        None
    };
    match spent {
        Some(extra) => {
            let remaining = world.inventory.stack(slot).map_or(0, |s| s.len());
            let name = world.entities.name(extra);
            world.entities.despawn(extra);
            world.log.message(
                &format!("You used a {}. ({} remaining)", name, remaining),
                Color::YELLOW,
                true,
            );
        }
        None => {
            world.inventory.remove_slot(slot);
            world.entities.despawn(head);
        }
    }
    Some(UseOutcome::Used)
}
