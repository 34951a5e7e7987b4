//! Player creation: base stats, race and title adjustments, starting gear.

use super::types::{Race, Title};
use crate::core::color::Color;
use crate::core::constants::*;
use crate::core::world::World;
use crate::dungeon::TileMap;
use crate::entity::{
    Components, DeathBehavior, Entity, EntityId, EntityStore, Equipment, Fighter, Item,
    PlayerSkills, PlayerStats, Slot, StatBonuses, UseEffect,
};
use crate::progression::{equip, DerivedAttributes};

/// One piece of starting kit.
#[derive(Debug, Clone, PartialEq)]
pub struct StartingItem {
    pub name: &'static str,
    pub glyph: char,
    pub color: Color,
    pub kind: StartingKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StartingKind {
    /// Worn and equipped from the start.
    Gear { slot: Slot, bonuses: StatBonuses },
    /// Carried, usable.
    Supply(UseEffect),
}

impl StartingItem {
    fn gear(name: &'static str, glyph: char, color: Color, slot: Slot, bonuses: StatBonuses) -> Self {
        Self {
            name,
            glyph,
            color,
            kind: StartingKind::Gear { slot, bonuses },
        }
    }
}

fn pickaxe() -> StartingItem {
    let bonuses = StatBonuses {
        power: 1,
        defense: 1,
        ..Default::default()
    };
    StartingItem::gear("pickaxe", 'T', Color::GREY, Slot::RightHand, bonuses)
}

fn wrench() -> StartingItem {
    let bonuses = StatBonuses {
        power: 1,
        ..Default::default()
    };
    StartingItem::gear("wrench", 'Y', Color::GREY, Slot::RightHand, bonuses)
}

/// Kit for a title, followed by the suit everyone wears, in inventory order.
pub fn starting_kit(title: Title) -> Vec<StartingItem> {
    let mut kit = match title {
        Title::Xenoarchaeologist | Title::Miner => vec![pickaxe()],
        Title::SecurityOfficer => vec![StartingItem::gear(
            "stunbaton",
            '|',
            Color::GREY,
            Slot::RightHand,
            StatBonuses {
                power: 2,
                ..Default::default()
            },
        )],
        Title::Engineer => vec![
            wrench(),
            StartingItem::gear(
                "O2 tank",
                '0',
                Color::BLUE,
                Slot::Back,
                StatBonuses {
                    oxygen: 500,
                    ..Default::default()
                },
            ),
        ],
        Title::MedicalDoctor => vec![
            wrench(),
            StartingItem {
                name: "medical kit",
                glyph: '+',
                color: Color::GREEN,
                kind: StartingKind::Supply(UseEffect::Heal),
            },
        ],
        Title::Scientist | Title::Roboticist => vec![wrench()],
    };

    let armor = StatBonuses {
        defense: 1,
        ..Default::default()
    };
    kit.push(StartingItem::gear("voidsuit", 'H', Color::GREY, Slot::Exosuit, armor));
    kit.push(StartingItem::gear("space helmet", 'H', Color::GREY, Slot::Head, armor));
    kit.push(StartingItem::gear("jumpsuit", 'S', Color::GREY, Slot::Suit, StatBonuses::default()));
    kit.push(StartingItem::gear("shoes", 'b', Color::GREY, Slot::Feet, StatBonuses::default()));
    kit
}

/// Spawns the player entity with race and title adjustments applied.
/// The player starts at `(0, 0)` until a level places it.
pub fn spawn_player(entities: &mut EntityStore, name: &str, race: Race, title: Title) -> EntityId {
    let mut fighter = Fighter::new(
        PLAYER_BASE_HP,
        PLAYER_BASE_DEFENSE,
        PLAYER_BASE_POWER,
        0,
        DeathBehavior::Player,
    );
    let mut stats = PlayerStats::new(race, title);

    match race {
        Race::Human => {}
        Race::Tajaran => {
            fighter.adjust_all_hp(-2);
            stats.base_agility += 1;
            stats.base_strength -= 1;
        }
        Race::Unathi => {
            fighter.adjust_all_hp(6);
            stats.base_agility -= 1;
            stats.base_strength += 1;
        }
        Race::Skrell => {
            fighter.adjust_all_hp(-2);
            stats.base_agility -= 1;
            stats.base_intelligence += 1;
        }
        Race::Synthetic => {
            fighter.species = "Synthetic".to_string();
            let tank = stats.base_max_oxygen;
            stats.adjust_all_oxygen(-tank);
            stats.adjust_all_energy(500);
            fighter.adjust_all_hp(20);
            fighter.base_defense += 3;
        }
        Race::Diona => {
            fighter.adjust_all_hp(24);
            stats.base_agility -= 2;
        }
    }

    match title {
        Title::Xenoarchaeologist => {}
        Title::Miner => {
            fighter.adjust_all_hp(8);
            stats.base_strength += 2;
            stats.base_agility -= 1;
            stats.base_intelligence -= 1;
        }
        Title::SecurityOfficer => {
            stats.base_strength += 1;
            stats.base_agility -= 1;
        }
        Title::Engineer => {
            stats.base_intelligence += 1;
        }
        Title::Scientist => {
            stats.base_strength -= 2;
            stats.base_agility -= 1;
            stats.base_intelligence += 3;
        }
        Title::MedicalDoctor => {
            stats.base_strength += 1;
            stats.base_intelligence += 1;
        }
        Title::Roboticist => {
            stats.base_agility -= 1;
            stats.base_intelligence += 1;
        }
    }

    entities.spawn(
        Entity::new(name, 0, 0, '@', Color::WHITE).blocking(),
        Components {
            fighter: Some(fighter),
            player: Some((stats, PlayerSkills::new())),
            ..Default::default()
        },
    )
}

/// Puts the title's starting kit into the inventory and silently equips
/// the gear. Engineers start with their extra tank already full.
pub fn outfit_player(world: &mut World) {
    let Some(title) = world.entities.player_stats(world.player).map(|s| s.title) else {
        return;
    };

    for piece in starting_kit(title) {
        let entity = Entity::new(piece.name, 0, 0, piece.glyph, piece.color).always_visible();
        let components = match piece.kind {
            StartingKind::Gear { slot, bonuses } => {
                Components::equipment(Equipment::new(slot, bonuses))
            }
            StartingKind::Supply(effect) => Components::item(Item {
                stackable: true,
                use_effect: Some(effect),
            }),
        };
        let is_gear = components.equipment.is_some();
        let id = world.entities.spawn_detached(entity, components);
        world.inventory.push_new(id);
        if is_gear {
            equip(world, id, true);
        }
    }

    if title == Title::Engineer {
        let player = world.player;
        if let Some(max) = DerivedAttributes::calculate(world, player).map(|a| a.max_oxygen) {
            if let Some(stats) = world.entities.player_stats_mut(player) {
                stats.oxygen = max;
            }
        }
    }
}

/// A world holding only a fully equipped player on a solid map.
pub fn new_player(name: &str, race: Race, title: Title) -> World {
    let mut entities = EntityStore::new();
    let player = spawn_player(&mut entities, name, race, title);
    let mut world = World::with_player(TileMap::new(MAP_WIDTH, MAP_HEIGHT), entities, player);
    outfit_player(&mut world);
    world
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::{all_equipped, equipped_name_in_slot, DerivedStats};

    fn attributes(world: &World) -> (i32, i32, i32) {
        let stats = world.entities.player_stats(world.player).unwrap();
        (stats.base_strength, stats.base_agility, stats.base_intelligence)
    }

    #[test]
    fn test_human_xenoarchaeologist_baseline() {
        let world = new_player("Ada", Race::Human, Title::Xenoarchaeologist);
        assert_eq!(attributes(&world), (8, 8, 8));
        assert_eq!(world.player_entity().name, "Ada");

        let fighter = world.player_fighter().unwrap();
        assert_eq!(fighter.hp, 15);
        assert_eq!(fighter.base_power, 2);

        // pickaxe, voidsuit, space helmet, jumpsuit, shoes
        assert_eq!(world.inventory.len(), 5);
        assert_eq!(all_equipped(&world, world.player).len(), 5);
        assert_eq!(equipped_name_in_slot(&world, Slot::RightHand), "pickaxe");

        let derived = DerivedStats::calculate(&world, world.player).unwrap();
        assert_eq!(derived.power, 3);
        assert_eq!(derived.defense, 3);
        // Silent equips.
        assert!(world.log.is_empty());
    }

    #[test]
    fn test_race_adjustments() {
        let unathi = new_player("U", Race::Unathi, Title::Roboticist);
        assert_eq!(unathi.player_fighter().unwrap().base_max_hp, 21);
        assert_eq!(attributes(&unathi), (9, 6, 9));

        let diona = new_player("D", Race::Diona, Title::Xenoarchaeologist);
        assert_eq!(diona.player_fighter().unwrap().hp, 39);
        assert_eq!(attributes(&diona), (8, 6, 8));
    }

    #[test]
    fn test_synthetic_has_no_oxygen_but_keeps_title() {
        let world = new_player("S", Race::Synthetic, Title::Miner);
        let stats = world.entities.player_stats(world.player).unwrap();
        assert_eq!(stats.base_max_oxygen, 0);
        assert_eq!(stats.oxygen, 0);
        assert_eq!(stats.energy, 500);
        let fighter = world.player_fighter().unwrap();
        assert_eq!(fighter.species, "Synthetic");
        assert_eq!(fighter.base_defense, 3);
        // 15 + 20 (synthetic) + 8 (miner)
        assert_eq!(fighter.base_max_hp, 43);
        assert_eq!(equipped_name_in_slot(&world, Slot::RightHand), "pickaxe");
    }

    #[test]
    fn test_engineer_tank_starts_full() {
        let world = new_player("E", Race::Human, Title::Engineer);
        let stats = world.entities.player_stats(world.player).unwrap();
        assert_eq!(stats.oxygen, 1500);
        assert_eq!(equipped_name_in_slot(&world, Slot::Back), "O2 tank");
        assert_eq!(attributes(&world).2, 9);
    }

    #[test]
    fn test_medical_doctor_carries_medical_kit() {
        let world = new_player("M", Race::Human, Title::MedicalDoctor);
        let names: Vec<String> = world
            .inventory
            .heads()
            .map(|id| world.entities.name(id))
            .collect();
        assert!(names.contains(&"medical kit".to_string()));
        assert!(names.contains(&"wrench".to_string()));
        let kit = world
            .inventory
            .heads()
            .find(|&id| world.entities.name(id) == "medical kit")
            .unwrap();
        assert_eq!(world.entities.item(kit).unwrap().use_effect, Some(UseEffect::Heal));
    }

    #[test]
    fn test_kit_is_never_on_map() {
        let world = new_player("K", Race::Skrell, Title::SecurityOfficer);
        assert_eq!(world.entities.on_map(), &[world.player]);
        for id in world.inventory.heads() {
            assert!(world.entities.get(id).unwrap().always_visible);
        }
    }
}
