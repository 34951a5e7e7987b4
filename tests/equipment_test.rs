//! Integration test: equipment slots and derived stats.

use hollow::character::{new_player, Race, Title};
use hollow::core::{Color, World};
use hollow::entity::{Components, Entity, EntityId, Equipment, Slot, StatBonuses};
use hollow::progression::{all_equipped, dequip, equip, equipped_in_slot, DerivedStats};

fn carry(world: &mut World, name: &str, slot: Slot, bonuses: StatBonuses) -> EntityId {
    let id = world.entities.spawn_detached(
        Entity::new(name, 0, 0, '/', Color::WHITE),
        Components::equipment(Equipment::new(slot, bonuses)),
    );
    assert!(world.inventory.push_new(id));
    id
}

#[test]
fn test_swap_dequips_only_the_occupant() {
    let mut world = new_player("Swapper", Race::Human, Title::Xenoarchaeologist);
    let player = world.player;
    let pickaxe = equipped_in_slot(&world, player, Slot::RightHand).unwrap();
    let others: Vec<_> = [Slot::Head, Slot::Exosuit, Slot::Suit, Slot::Feet]
        .into_iter()
        .map(|slot| equipped_in_slot(&world, player, slot))
        .collect();

    let laser = carry(
        &mut world,
        "laser",
        Slot::RightHand,
        StatBonuses {
            power: 5,
            ..Default::default()
        },
    );
    equip(&mut world, laser, false);

    assert_eq!(equipped_in_slot(&world, player, Slot::RightHand), Some(laser));
    assert!(!world.entities.equipment(pickaxe).unwrap().is_equipped);
    let after: Vec<_> = [Slot::Head, Slot::Exosuit, Slot::Suit, Slot::Feet]
        .into_iter()
        .map(|slot| equipped_in_slot(&world, player, slot))
        .collect();
    assert_eq!(others, after);
    assert_eq!(all_equipped(&world, player).len(), 5);

    assert!(world.log.contains("Dequipped pickaxe from right hand."));
    assert!(world.log.contains("Equipped laser on right hand."));
}

#[test]
fn test_derived_power_tracks_equipment() {
    let mut world = new_player("Striker", Race::Human, Title::Xenoarchaeologist);
    let player = world.player;
    let base = world.player_fighter().unwrap().base_power;

    let pickaxe = equipped_in_slot(&world, player, Slot::RightHand).unwrap();
    assert_eq!(DerivedStats::calculate(&world, player).unwrap().power, base + 1);

    dequip(&mut world, pickaxe, false);
    assert_eq!(DerivedStats::calculate(&world, player).unwrap().power, base);

    let blade = carry(
        &mut world,
        "blade",
        Slot::RightHand,
        StatBonuses {
            power: 2,
            ..Default::default()
        },
    );
    equip(&mut world, blade, true);
    let first = DerivedStats::calculate(&world, player).unwrap();
    let second = DerivedStats::calculate(&world, player).unwrap();
    assert_eq!(first.power, base + 2);
    assert_eq!(first, second);
}

#[test]
fn test_block_requires_off_hand() {
    let mut world = new_player("Guard", Race::Human, Title::Miner);
    let player = world.player;
    assert_eq!(DerivedStats::calculate(&world, player).unwrap().block, 0);

    let shield = carry(
        &mut world,
        "riot shield",
        Slot::LeftHand,
        StatBonuses {
            block: 6,
            ..Default::default()
        },
    );
    equip(&mut world, shield, true);
    assert!(DerivedStats::calculate(&world, player).unwrap().block >= 6);
}

#[test]
#[should_panic(expected = "has no owner")]
fn test_equip_without_owner_panics() {
    let mut world = new_player("Loner", Race::Human, Title::Miner);
    let stray = world.entities.spawn_detached(
        Entity::new("stray helmet", 0, 0, 'H', Color::GREY),
        Components::equipment(Equipment::new(Slot::Head, StatBonuses::default())),
    );
    equip(&mut world, stray, false);
}
