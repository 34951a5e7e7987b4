//! A simple autopilot: fight what it sees, loot what it stands on,
//! explore, then take the stairs.

use super::fov::TorchFov;
use crate::core::constants::{FIREBALL_RADIUS, LIGHTNING_RANGE};
use crate::core::services::{PlayerInput, Visibility};
use crate::core::world::World;
use crate::definitions::DefinitionTables;
use crate::dungeon::GenerationParams;
use crate::entity::{EntityId, UseEffect};
use crate::game::{
    descend, move_or_attack, on_stairs, pick_up_here, rest, use_from_inventory, wait, PlayerAction,
};
use crate::progression::{DerivedStats, StatChoice};
use rand::Rng;
use std::collections::{HashSet, VecDeque};

const DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (1, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
];

const LEVEL_UP_ORDER: [StatChoice; 3] = [
    StatChoice::Strength,
    StatChoice::Agility,
    StatChoice::Intelligence,
];

/// What the bot did with its last decision, for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotMove {
    Attacked,
    Stepped,
    UsedItem(UseEffect),
    PickedUp,
    Rested,
    Descended,
    Waited,
}

#[derive(Debug, Default)]
pub struct Bot {
    level_ups: usize,
    target: Option<(i32, i32)>,
    ignored_items: HashSet<EntityId>,
}

impl Bot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks and performs one player action.
    pub fn act(
        &mut self,
        world: &mut World,
        fov: &TorchFov,
        defs: &DefinitionTables,
        params: &GenerationParams,
        rng: &mut impl Rng,
    ) -> (PlayerAction, BotMove) {
        if let Some(index) = self.healing_slot(world) {
            use_from_inventory(world, index, fov, self, rng);
            return (PlayerAction::DidntTakeTurn, BotMove::UsedItem(UseEffect::Heal));
        }

        if let Some(item) = self.item_underfoot(world) {
            pick_up_here(world);
            if world.entities.is_on_map(item) {
                self.ignored_items.insert(item);
            }
            return (PlayerAction::DidntTakeTurn, BotMove::PickedUp);
        }

        match nearest_visible_monster(world, fov) {
            Some(monster) => {
                if let Some(outcome) = self.try_ranged(world, fov, monster, rng) {
                    return outcome;
                }
                if let Some(pos) = world.entities.get(monster).map(|m| m.position()) {
                    if let Some(step) = first_step(world, |x, y| (x, y) == pos) {
                        return self.step(world, step, rng);
                    }
                }
            }
            None if below_fraction(world, 2) => {
                if rest(world, fov, rng) == PlayerAction::TookTurn {
                    return (PlayerAction::TookTurn, BotMove::Rested);
                }
            }
            None => {}
        }

        if let Some(step) = first_step(world, |x, y| !fov.is_explored(x, y)) {
            return self.step(world, step, rng);
        }

        if on_stairs(world) {
            descend(world, defs, params, rng);
            return (PlayerAction::DidntTakeTurn, BotMove::Descended);
        }
        let stairs = world
            .stairs
            .and_then(|id| world.entities.get(id))
            .map(|s| s.position());
        if let Some(pos) = stairs {
            if let Some(step) = first_step(world, |x, y| (x, y) == pos) {
                return self.step(world, step, rng);
            }
        }

        (wait(world, rng), BotMove::Waited)
    }

    fn step(&mut self, world: &mut World, (dx, dy): (i32, i32), rng: &mut impl Rng) -> (PlayerAction, BotMove) {
        let (x, y) = world.player_position();
        let attacking = world.fighter_at(x + dx, y + dy).is_some();
        match move_or_attack(world, dx, dy, rng) {
            PlayerAction::TookTurn if attacking => (PlayerAction::TookTurn, BotMove::Attacked),
            PlayerAction::TookTurn => (PlayerAction::TookTurn, BotMove::Stepped),
            _ => (wait(world, rng), BotMove::Waited),
        }
    }

    /// Heals once hp drops below a third.
    fn healing_slot(&self, world: &World) -> Option<usize> {
        if !below_fraction(world, 3) {
            return None;
        }
        slot_with_effect(world, UseEffect::Heal)
    }

    fn item_underfoot(&self, world: &World) -> Option<EntityId> {
        let (x, y) = world.player_position();
        world
            .entities
            .at(x, y)
            .into_iter()
            .find(|&id| world.entities.item(id).is_some() && !self.ignored_items.contains(&id))
    }

    /// Spends a scroll on a monster that is visible but not yet adjacent.
    fn try_ranged(
        &mut self,
        world: &mut World,
        fov: &TorchFov,
        monster: EntityId,
        rng: &mut impl Rng,
    ) -> Option<(PlayerAction, BotMove)> {
        let pos = world.entities.get(monster)?.position();
        let distance = world.player_entity().distance(pos.0, pos.1);
        if !(2.0..LIGHTNING_RANGE + 1.0).contains(&distance) {
            return None;
        }
        let confused = world
            .entities
            .behavior(monster)
            .is_some_and(|behavior| behavior.is_confused());
        let (index, effect) = [UseEffect::Lightning, UseEffect::Confuse, UseEffect::Fireball]
            .into_iter()
            .filter(|&effect| effect != UseEffect::Fireball || distance > FIREBALL_RADIUS)
            .filter(|&effect| effect != UseEffect::Confuse || !confused)
            .find_map(|effect| slot_with_effect(world, effect).map(|i| (i, effect)))?;

        self.target = Some(pos);
        use_from_inventory(world, index, fov, self, rng);
        self.target = None;
        Some((PlayerAction::DidntTakeTurn, BotMove::UsedItem(effect)))
    }

    pub fn level_ups(&self) -> usize {
        self.level_ups
    }
}

impl PlayerInput for Bot {
    /// Answers once with the current target, then aborts.
    fn choose_target_tile(&mut self, _world: &World, _max_range: Option<f64>) -> Option<(i32, i32)> {
        self.target.take()
    }

    fn choose_level_up_stat(&mut self, _world: &World) -> StatChoice {
        let choice = LEVEL_UP_ORDER[self.level_ups % LEVEL_UP_ORDER.len()];
        self.level_ups += 1;
        choice
    }
}

/// Player hp is under `1 / denominator` of its maximum.
fn below_fraction(world: &World, denominator: i32) -> bool {
    let Some(stats) = DerivedStats::calculate(world, world.player) else {
        return false;
    };
    world
        .player_fighter()
        .is_some_and(|fighter| fighter.hp * denominator < stats.max_hp)
}

fn slot_with_effect(world: &World, effect: UseEffect) -> Option<usize> {
    world.inventory.slots().iter().position(|stack| {
        world
            .entities
            .item(stack.head())
            .is_some_and(|item| item.use_effect == Some(effect))
    })
}

fn nearest_visible_monster(world: &World, fov: &TorchFov) -> Option<EntityId> {
    let player = world.player_entity();
    world
        .entities
        .on_map()
        .iter()
        .copied()
        .filter(|&id| !world.is_player(id) && world.entities.fighter(id).is_some())
        .filter_map(|id| world.entities.get(id).map(|e| (id, e)))
        .filter(|(_, e)| fov.is_visible(e.x, e.y))
        .min_by(|(_, a), (_, b)| player.distance_to(a).total_cmp(&player.distance_to(b)))
        .map(|(id, _)| id)
}

/// Breadth-first search over passable tiles from the player to the nearest
/// tile satisfying `goal`. Returns the first step of the path.
pub fn first_step(world: &World, goal: impl Fn(i32, i32) -> bool) -> Option<(i32, i32)> {
    let start = world.player_position();
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::new();

    for (dx, dy) in DIRECTIONS {
        let next = (start.0 + dx, start.1 + dy);
        if !world.map.is_blocked(next.0, next.1) && seen.insert(next) {
            queue.push_back((next, (dx, dy)));
        }
    }

    while let Some(((x, y), first)) = queue.pop_front() {
        if goal(x, y) {
            return Some(first);
        }
        for (dx, dy) in DIRECTIONS {
            let next = (x + dx, y + dy);
            if !world.map.is_blocked(next.0, next.1) && seen.insert(next) {
                queue.push_back((next, first));
            }
        }
    }
    None
}
