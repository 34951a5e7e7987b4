//! Per-turn progress for a fighter: autoheal, and energy recharge for the player.

use super::logic::heal;
use crate::character::recharge;
use crate::core::constants::AUTOHEAL_INTERVAL_TICKS;
use crate::core::world::World;
use crate::entity::EntityId;

/// Advances `id`'s tick counter. Every interval the fighter regains 1 hp,
/// and the player also regains 1 energy.
pub fn tick(world: &mut World, id: EntityId) {
    let Some(fighter) = world.entities.fighter_mut(id) else {
        return;
    };
    fighter.tick_total += 1;
    if fighter.tick_total % AUTOHEAL_INTERVAL_TICKS != 0 {
        return;
    }

    heal(world, id, 1);
    if world.entities.player_stats(id).is_some() {
        recharge(world, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Race, Title};
    use crate::core::color::Color;
    use crate::dungeon::TileMap;
    use crate::entity::{
        Components, DeathBehavior, Entity, EntityStore, Fighter, PlayerSkills, PlayerStats,
    };

    fn world() -> World {
        let mut entities = EntityStore::new();
        let mut stats = PlayerStats::new(Race::Synthetic, Title::Engineer);
        stats.adjust_all_energy(10);
        stats.energy = 0;
        let player = entities.spawn(
            Entity::new("player", 1, 1, '@', Color::WHITE),
            Components {
                fighter: Some(Fighter::new(15, 0, 2, 0, DeathBehavior::Player)),
                player: Some((stats, PlayerSkills::new())),
                ..Default::default()
            },
        );
        World::with_player(TileMap::new(3, 3), entities, player)
    }

    #[test]
    fn test_autoheal_every_interval() {
        let mut world = world();
        let player = world.player;
        world.entities.fighter_mut(player).unwrap().hp = 5;

        for _ in 0..19 {
            tick(&mut world, player);
        }
        assert_eq!(world.entities.fighter(player).unwrap().hp, 5);
        assert_eq!(world.entities.player_stats(player).unwrap().energy, 0);

        tick(&mut world, player);
        assert_eq!(world.entities.fighter(player).unwrap().hp, 6);
        assert_eq!(world.entities.player_stats(player).unwrap().energy, 1);
        assert_eq!(world.entities.fighter(player).unwrap().tick_total, 20);
    }

    #[test]
    fn test_monster_tick_only_heals() {
        let mut world = world();
        let rat = world.entities.spawn(
            Entity::new("rat", 2, 2, 'r', Color::GREY),
            Components::monster(Fighter::new(4, 0, 1, 5, DeathBehavior::Monster), None),
        );
        world.entities.fighter_mut(rat).unwrap().hp = 1;
        for _ in 0..40 {
            tick(&mut world, rat);
        }
        assert_eq!(world.entities.fighter(rat).unwrap().hp, 3);
        assert_eq!(world.entities.player_stats(world.player).unwrap().energy, 0);
    }
}
