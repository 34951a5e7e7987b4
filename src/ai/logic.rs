//! The turn scheduler and behavior dispatch.

use super::types::Behavior;
use crate::combat::{attack, tick};
use crate::core::color::Color;
use crate::core::rng::uniform_int;
use crate::core::services::Visibility;
use crate::core::world::World;
use crate::entity::EntityId;
use rand::Rng;

/// Runs one turn for every on-map entity with a behavior.
///
/// Iterates a snapshot of the on-map list taken before anyone acts, in
/// list order. Corpses have no behavior and are skipped.
pub fn take_monster_turns(world: &mut World, visibility: &impl Visibility, rng: &mut impl Rng) {
    let actors: Vec<EntityId> = world.entities.on_map().to_vec();
    for id in actors {
        take_turn(world, id, visibility, rng);
    }
}

/// Dispatches `id`'s active behavior, then ticks it.
pub fn take_turn(world: &mut World, id: EntityId, visibility: &impl Visibility, rng: &mut impl Rng) {
    let Some(behavior) = world.entities.behavior(id).cloned() else {
        return;
    };

    match behavior {
        Behavior::ChaseAndAttack => chase_and_attack(world, id, visibility, rng),
        Behavior::Confused {
            previous,
            remaining_turns,
        } => stumble(world, id, *previous, remaining_turns, rng),
    }
    tick(world, id);
}

fn chase_and_attack(world: &mut World, id: EntityId, visibility: &impl Visibility, rng: &mut impl Rng) {
    let Some(monster) = world.entities.get(id) else {
        return;
    };
    if !visibility.is_visible(monster.x, monster.y) {
        return;
    }

    let player = world.player;
    let (player_x, player_y) = world.player_position();
    if monster.distance(player_x, player_y) >= 2.0 {
        world.move_towards(id, player_x, player_y);
    } else if world.player_fighter().is_some_and(|f| f.hp > 0) {
        attack(world, id, player, rng);
    }
}

fn stumble(world: &mut World, id: EntityId, previous: Behavior, remaining_turns: u32, rng: &mut impl Rng) {
    if remaining_turns > 0 {
        let dx = uniform_int(rng, -1, 1);
        let dy = uniform_int(rng, -1, 1);
        world.move_by(id, dx, dy);
        world
            .entities
            .set_behavior(id, Behavior::confused(previous, remaining_turns - 1));
        return;
    }

    world.entities.set_behavior(id, previous);
    let name = world.entities.name(id);
    world
        .log
        .message(&format!("The {} is no longer confused!", name), Color::RED, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{AllVisible, NothingVisible};
    use crate::dungeon::TileMap;
    use crate::entity::{Components, DeathBehavior, Entity, EntityStore, Fighter};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn open_world() -> World {
        let mut map = TileMap::new(20, 20);
        for x in 1..19 {
            for y in 1..19 {
                map.carve(x, y);
            }
        }
        let mut entities = EntityStore::new();
        let player = entities.spawn(
            Entity::new("player", 2, 2, '@', Color::WHITE).blocking(),
            Components {
                fighter: Some(Fighter::new(30, 0, 2, 0, DeathBehavior::Player)),
                ..Default::default()
            },
        );
        World::with_player(map, entities, player)
    }

    fn spawn_monster(world: &mut World, x: i32, y: i32, behavior: Behavior) -> EntityId {
        world.entities.spawn(
            Entity::new("drone", x, y, 'd', Color::GREY).blocking(),
            Components::monster(Fighter::new(5, 0, 2, 10, DeathBehavior::Monster), Some(behavior)),
        )
    }

    #[test]
    fn test_chaser_steps_towards_visible_player() {
        let mut world = open_world();
        let drone = spawn_monster(&mut world, 8, 2, Behavior::ChaseAndAttack);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        take_monster_turns(&mut world, &AllVisible, &mut rng);
        assert_eq!(world.entities.get(drone).unwrap().position(), (7, 2));
        assert_eq!(world.entities.fighter(drone).unwrap().tick_total, 1);
    }

    #[test]
    fn test_unseen_chaser_waits_but_ticks() {
        let mut world = open_world();
        let drone = spawn_monster(&mut world, 8, 2, Behavior::ChaseAndAttack);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        take_monster_turns(&mut world, &NothingVisible, &mut rng);
        assert_eq!(world.entities.get(drone).unwrap().position(), (8, 2));
        assert_eq!(world.entities.fighter(drone).unwrap().tick_total, 1);
    }

    #[test]
    fn test_adjacent_chaser_attacks() {
        let mut world = open_world();
        spawn_monster(&mut world, 3, 3, Behavior::ChaseAndAttack);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        take_monster_turns(&mut world, &AllVisible, &mut rng);
        assert!(world.log.contains("Drone attacks Player."));
    }

    #[test]
    fn test_chaser_leaves_dead_player_alone() {
        let mut world = open_world();
        let player = world.player;
        world.entities.fighter_mut(player).unwrap().hp = 0;
        spawn_monster(&mut world, 3, 2, Behavior::ChaseAndAttack);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        take_monster_turns(&mut world, &AllVisible, &mut rng);
        assert!(world.log.is_empty());
    }

    #[test]
    fn test_confusion_counts_down_then_restores() {
        let mut world = open_world();
        let drone = spawn_monster(
            &mut world,
            10,
            10,
            Behavior::confused(Behavior::ChaseAndAttack, 2),
        );
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        take_monster_turns(&mut world, &NothingVisible, &mut rng);
        assert_eq!(
            world.entities.behavior(drone),
            Some(&Behavior::confused(Behavior::ChaseAndAttack, 1))
        );
        take_monster_turns(&mut world, &NothingVisible, &mut rng);
        take_monster_turns(&mut world, &NothingVisible, &mut rng);
        assert_eq!(world.entities.behavior(drone), Some(&Behavior::ChaseAndAttack));
        assert!(world.log.contains("The drone is no longer confused!"));

        let (x, y) = world.entities.get(drone).unwrap().position();
        assert!((x - 10).abs() <= 2 && (y - 10).abs() <= 2);
    }

    #[test]
    fn test_corpses_and_items_are_skipped() {
        let mut world = open_world();
        let rock = world
            .entities
            .spawn(Entity::new("rock", 5, 5, '*', Color::GREY), Components::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        take_monster_turns(&mut world, &AllVisible, &mut rng);
        assert_eq!(world.entities.get(rock).unwrap().position(), (5, 5));
        assert!(world.log.is_empty());
    }

    #[test]
    fn test_turn_order_follows_list() {
        let mut world = open_world();
        // The second can only advance because the first has already moved.
        let first = spawn_monster(&mut world, 4, 2, Behavior::ChaseAndAttack);
        let second = spawn_monster(&mut world, 5, 2, Behavior::ChaseAndAttack);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        take_monster_turns(&mut world, &AllVisible, &mut rng);
        assert_eq!(world.entities.get(first).unwrap().position(), (3, 2));
        assert_eq!(world.entities.get(second).unwrap().position(), (4, 2));
    }
}
