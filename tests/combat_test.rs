//! Integration test: the damage pipeline and death handling.

use hollow::ai::Behavior;
use hollow::character::{new_player, Race, Title};
use hollow::combat::{attack, take_damage, DamageSource, HitOutcome};
use hollow::core::{Color, GameState, World};
use hollow::entity::{Components, DeathBehavior, Entity, EntityId, Fighter};
use hollow::progression::DerivedStats;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn arena() -> World {
    let mut world = new_player("Fighter", Race::Human, Title::Xenoarchaeologist);
    for y in 1..10 {
        for x in 1..10 {
            world.map.carve(x, y);
        }
    }
    if let Some(player) = world.entities.get_mut(world.player) {
        player.x = 2;
        player.y = 2;
    }
    world
}

fn spawn_dummy(world: &mut World, hp: i32, defense: i32, xp: i32) -> EntityId {
    let mut fighter = Fighter::new(hp, defense, 3, xp, DeathBehavior::Monster);
    fighter.base_evade = 0;
    world.entities.spawn(
        Entity::new("dummy", 3, 2, 'd', Color::GREEN).blocking(),
        Components::monster(fighter, Some(Behavior::ChaseAndAttack)),
    )
}

#[test]
fn test_zero_evade_and_block_always_take_the_hit() {
    let mut world = arena();
    let dummy = spawn_dummy(&mut world, 100_000, 0, 0);
    let player = world.player;
    let power = DerivedStats::calculate(&world, player).unwrap().power;
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for _ in 0..200 {
        let outcome = attack(&mut world, player, dummy, &mut rng).unwrap();
        assert_eq!(
            outcome,
            HitOutcome::Damaged {
                amount: power,
                killed: false
            }
        );
    }
}

#[test]
fn test_unopposed_hit_draws_nothing() {
    let mut world = arena();
    let dummy = spawn_dummy(&mut world, 50, 0, 0);
    let player = world.player;
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut untouched = rng.clone();

    take_damage(&mut world, dummy, 4, DamageSource::melee(player), &mut rng);
    assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
}

#[test]
fn test_armor_residual_within_raw_damage() {
    let mut world = arena();
    let dummy = spawn_dummy(&mut world, 100_000, 5, 0);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let mut saw_full_absorb = false;
    for _ in 0..300 {
        let outcome = take_damage(&mut world, dummy, 3, DamageSource::effect(), &mut rng).unwrap();
        let amount = outcome.damage();
        assert!((0..=3).contains(&amount));
        saw_full_absorb |= amount == 0;
    }
    assert!(saw_full_absorb);
}

#[test]
fn test_piercing_damage_ignores_armor() {
    let mut world = arena();
    let dummy = spawn_dummy(&mut world, 100, 50, 0);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let outcome = take_damage(&mut world, dummy, 7, DamageSource::environment(), &mut rng).unwrap();
    assert_eq!(outcome.damage(), 7);
}

#[test]
fn test_monster_dies_once_and_pays_xp_once() {
    let mut world = arena();
    let dummy = spawn_dummy(&mut world, 5, 0, 35);
    let player = world.player;
    let xp_before = world.player_fighter().unwrap().xp;
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let first = take_damage(&mut world, dummy, 10, DamageSource::environment(), &mut rng).unwrap();
    assert!(first.killed());
    assert_eq!(world.player_fighter().unwrap().xp, xp_before + 35);

    // The corpse has no fighter left to hurt.
    assert!(take_damage(&mut world, dummy, 10, DamageSource::environment(), &mut rng).is_none());
    assert!(attack(&mut world, player, dummy, &mut rng).is_none());
    assert_eq!(world.player_fighter().unwrap().xp, xp_before + 35);

    let corpse = world.entities.get(dummy).unwrap();
    assert_eq!(corpse.name, "remains of dummy");
    assert!(!corpse.blocks);
    assert!(world.entities.behavior(dummy).is_none());
}

#[test]
fn test_player_death_is_idempotent() {
    let mut world = arena();
    let player = world.player;
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let first = take_damage(&mut world, player, 1_000, DamageSource::environment(), &mut rng).unwrap();
    assert!(first.killed());
    assert_eq!(world.state, GameState::Dead);
    assert_eq!(world.player_fighter().unwrap().hp, 0);

    let second = take_damage(&mut world, player, 1_000, DamageSource::environment(), &mut rng);
    assert!(!second.is_some_and(|hit| hit.killed()));
    assert_eq!(world.player_fighter().unwrap().hp, 0);
    assert_eq!(world.log.lines().filter(|l| l.text.contains("You died!")).count(), 1);
}
