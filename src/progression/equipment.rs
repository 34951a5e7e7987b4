//! Equipment slots on the player.
//!
//! Only the player carries gear; every lookup for another entity is empty.

use crate::core::color::Color;
use crate::core::world::World;
use crate::entity::{EntityId, Slot};

/// Equipped items owned by `owner`, in inventory order.
pub fn all_equipped(world: &World, owner: EntityId) -> Vec<EntityId> {
    if !world.is_player(owner) {
        return Vec::new();
    }
    world
        .inventory
        .heads()
        .filter(|&id| world.entities.equipment(id).is_some_and(|e| e.is_equipped))
        .collect()
}

/// The item `owner` has equipped in `slot`, if any.
pub fn equipped_in_slot(world: &World, owner: EntityId, slot: Slot) -> Option<EntityId> {
    all_equipped(world, owner)
        .into_iter()
        .find(|&id| world.entities.equipment(id).is_some_and(|e| e.slot == slot))
}

/// Name of whatever sits in the player's `slot`, or "nothing".
pub fn equipped_name_in_slot(world: &World, slot: Slot) -> String {
    equipped_in_slot(world, world.player, slot)
        .map(|id| world.entities.name(id))
        .unwrap_or_else(|| "nothing".to_string())
}

/// Equips an inventory item, first dequipping whatever occupies its slot.
///
/// # Panics
/// If `item` is not equipment carried by the player.
pub fn equip(world: &mut World, item: EntityId, quiet: bool) {
    let slot = owned_equipment_slot(world, item);

    if let Some(occupant) = equipped_in_slot(world, world.player, slot) {
        if occupant != item {
            dequip(world, occupant, quiet);
        }
    }

    if let Some(equipment) = world.entities.equipment_mut(item) {
        equipment.is_equipped = true;
    }
    if !quiet {
        let text = format!("Equipped {} on {}.", world.entities.name(item), slot.name());
        world.log.message(&text, Color::LIGHT_GREEN, true);
    }
}

/// Dequips an inventory item. Does nothing if it is not equipped.
///
/// # Panics
/// If `item` is not equipment carried by the player.
pub fn dequip(world: &mut World, item: EntityId, quiet: bool) {
    let slot = owned_equipment_slot(world, item);
    let Some(equipment) = world.entities.equipment_mut(item) else {
        return;
    };
    if !equipment.is_equipped {
        return;
    }
    equipment.is_equipped = false;
    if !quiet {
        let text = format!("Dequipped {} from {}.", world.entities.name(item), slot.name());
        world.log.message(&text, Color::LIGHT_YELLOW, true);
    }
}

pub fn toggle_equip(world: &mut World, item: EntityId) {
    let equipped = world
        .entities
        .equipment(item)
        .is_some_and(|e| e.is_equipped);
    if equipped {
        dequip(world, item, false);
    } else {
        equip(world, item, false);
    }
}

fn owned_equipment_slot(world: &World, item: EntityId) -> Slot {
    assert!(
        world.inventory.contains(item),
        "equipment {:?} has no owner: it is not in the player's inventory",
        item
    );
    world
        .entities
        .equipment(item)
        .map(|e| e.slot)
        .unwrap_or_else(|| panic!("entity {:?} is not equipment", item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Race, Title};
    use crate::dungeon::TileMap;
    use crate::entity::{
        Components, DeathBehavior, Entity, EntityStore, Equipment, Fighter, PlayerSkills,
        PlayerStats, StatBonuses,
    };

    fn world_with_player() -> World {
        let mut entities = EntityStore::new();
        let player = entities.spawn(
            Entity::new("player", 1, 1, '@', Color::WHITE).blocking(),
            Components {
                fighter: Some(Fighter::new(15, 0, 2, 0, DeathBehavior::Player)),
                player: Some((PlayerStats::new(Race::Human, Title::Miner), PlayerSkills::new())),
                ..Default::default()
            },
        );
        World::with_player(TileMap::new(5, 5), entities, player)
    }

    fn carry(world: &mut World, name: &str, slot: Slot) -> EntityId {
        let id = world.entities.spawn_detached(
            Entity::new(name, 0, 0, '/', Color::GREY),
            Components::equipment(Equipment::new(slot, StatBonuses::default())),
        );
        world.inventory.push_new(id);
        id
    }

    fn is_equipped(world: &World, id: EntityId) -> bool {
        world.entities.equipment(id).unwrap().is_equipped
    }

    #[test]
    fn test_equip_into_occupied_slot_swaps_only_occupant() {
        let mut world = world_with_player();
        let wrench = carry(&mut world, "wrench", Slot::RightHand);
        let helmet = carry(&mut world, "helmet", Slot::Head);
        let knife = carry(&mut world, "knife", Slot::RightHand);

        equip(&mut world, wrench, true);
        equip(&mut world, helmet, true);
        equip(&mut world, knife, false);

        assert!(!is_equipped(&world, wrench));
        assert!(is_equipped(&world, knife));
        assert!(is_equipped(&world, helmet));

        let texts: Vec<&str> = world.log.lines().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Dequipped wrench from right hand.", "Equipped knife on right hand."]
        );
    }

    #[test]
    fn test_at_most_one_item_per_slot() {
        let mut world = world_with_player();
        let a = carry(&mut world, "a", Slot::Feet);
        let b = carry(&mut world, "b", Slot::Feet);
        let c = carry(&mut world, "c", Slot::Feet);
        for id in [a, b, c, a] {
            equip(&mut world, id, true);
            let in_slot = all_equipped(&world, world.player)
                .into_iter()
                .filter(|&i| world.entities.equipment(i).unwrap().slot == Slot::Feet)
                .count();
            assert_eq!(in_slot, 1);
        }
        assert_eq!(equipped_in_slot(&world, world.player, Slot::Feet), Some(a));
    }

    #[test]
    fn test_dequip_unequipped_is_silent_noop() {
        let mut world = world_with_player();
        let boots = carry(&mut world, "boots", Slot::Feet);
        dequip(&mut world, boots, false);
        assert!(world.log.is_empty());
    }

    #[test]
    fn test_toggle_equip() {
        let mut world = world_with_player();
        let tank = carry(&mut world, "O2 tank", Slot::Back);
        toggle_equip(&mut world, tank);
        assert!(is_equipped(&world, tank));
        toggle_equip(&mut world, tank);
        assert!(!is_equipped(&world, tank));
    }

    #[test]
    fn test_equipped_name_in_slot() {
        let mut world = world_with_player();
        assert_eq!(equipped_name_in_slot(&world, Slot::Head), "nothing");
        let helmet = carry(&mut world, "space helmet", Slot::Head);
        equip(&mut world, helmet, true);
        assert_eq!(equipped_name_in_slot(&world, Slot::Head), "space helmet");
    }

    #[test]
    #[should_panic(expected = "has no owner")]
    fn test_equip_without_owner_panics() {
        let mut world = world_with_player();
        let loose = world.entities.spawn(
            Entity::new("loose boots", 2, 2, 'b', Color::GREY),
            Components::equipment(Equipment::new(Slot::Feet, StatBonuses::default())),
        );
        equip(&mut world, loose, false);
    }
}
