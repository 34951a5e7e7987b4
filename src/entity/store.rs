//! Entity arena with one sparse map per component kind.
//!
//! Ids come from a counter and are never reused; despawned entities leave
//! nothing behind. A component's owner is simply the key it is stored under. The on-map
//! list (`order`) doubles as draw order and AI iteration order; inventory
//! entities live in the arena but not in that list.

use super::components::{Equipment, Fighter, Item, PlayerSkills, PlayerStats};
use super::types::{Entity, EntityId};
use crate::ai::Behavior;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Components to attach at spawn time. One field per kind, so an entity
/// can never carry two components of the same kind.
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub fighter: Option<Fighter>,
    pub behavior: Option<Behavior>,
    pub item: Option<Item>,
    pub equipment: Option<Equipment>,
    pub player: Option<(PlayerStats, PlayerSkills)>,
}

impl Components {
    pub fn monster(fighter: Fighter, behavior: Option<Behavior>) -> Self {
        Self {
            fighter: Some(fighter),
            behavior,
            ..Default::default()
        }
    }

    pub fn item(item: Item) -> Self {
        Self {
            item: Some(item),
            ..Default::default()
        }
    }

    pub fn equipment(equipment: Equipment) -> Self {
        Self {
            equipment: Some(equipment),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityStore {
    next_id: u32,
    entities: BTreeMap<EntityId, Entity>,
    order: Vec<EntityId>,
    fighters: BTreeMap<EntityId, Fighter>,
    behaviors: BTreeMap<EntityId, Behavior>,
    items: BTreeMap<EntityId, Item>,
    equipment: BTreeMap<EntityId, Equipment>,
    player_stats: BTreeMap<EntityId, PlayerStats>,
    player_skills: BTreeMap<EntityId, PlayerSkills>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an entity and appends it to the on-map list.
    pub fn spawn(&mut self, entity: Entity, components: Components) -> EntityId {
        let id = self.spawn_detached(entity, components);
        self.order.push(id);
        id
    }

    /// Creates an entity that is not on the map (e.g. starting gear
    /// going straight into the inventory).
    pub fn spawn_detached(&mut self, entity: Entity, components: Components) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, entity);

        let Components {
            fighter,
            behavior,
            mut item,
            equipment,
            player,
        } = components;

        if let Some(equipment) = equipment {
            // Equipment needs an Item component to be picked up and used.
            item.get_or_insert_with(Item::default);
            self.equipment.insert(id, equipment);
        }
        if let Some(item) = item {
            self.items.insert(id, item);
        }
        if let Some(fighter) = fighter {
            self.fighters.insert(id, fighter);
        }
        if let Some(behavior) = behavior {
            self.behaviors.insert(id, behavior);
        }
        if let Some((stats, skills)) = player {
            self.player_stats.insert(id, stats);
            self.player_skills.insert(id, skills);
        }
        id
    }

    /// Removes an entity and every component keyed by it. Outstanding ids
    /// stop resolving.
    pub fn despawn(&mut self, id: EntityId) {
        self.entities.remove(&id);
        self.order.retain(|&other| other != id);
        self.fighters.remove(&id);
        self.behaviors.remove(&id);
        self.items.remove(&id);
        self.equipment.remove(&id);
        self.player_stats.remove(&id);
        self.player_skills.remove(&id);
    }

    pub fn exists(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Name of a live entity, or an empty string for a stale id.
    pub fn name(&self, id: EntityId) -> String {
        self.get(id).map(|e| e.name.clone()).unwrap_or_default()
    }

    // ── On-map list ─────────────────────────────────────────────

    /// Ids on the map in draw order.
    pub fn on_map(&self) -> &[EntityId] {
        &self.order
    }

    pub fn is_on_map(&self, id: EntityId) -> bool {
        self.order.contains(&id)
    }

    /// Appends an existing entity to the end of the on-map list.
    pub fn place(&mut self, id: EntityId) {
        if self.exists(id) && !self.is_on_map(id) {
            self.order.push(id);
        }
    }

    /// Takes an entity off the map without destroying it.
    pub fn unplace(&mut self, id: EntityId) {
        self.order.retain(|&other| other != id);
    }

    /// Moves an entity to the front of the list so everything else draws above it.
    pub fn send_to_back(&mut self, id: EntityId) {
        if let Some(pos) = self.order.iter().position(|&other| other == id) {
            self.order.remove(pos);
            self.order.insert(0, id);
        }
    }

    /// On-map entities standing on `(x, y)`, in list order.
    pub fn at(&self, x: i32, y: i32) -> Vec<EntityId> {
        self.order
            .iter()
            .copied()
            .filter(|&id| self.get(id).is_some_and(|e| e.x == x && e.y == y))
            .collect()
    }

    /// Despawns every on-map entity except `keep`.
    pub fn clear_map_except(&mut self, keep: EntityId) {
        let doomed: Vec<EntityId> = self.order.iter().copied().filter(|&id| id != keep).collect();
        for id in doomed {
            self.despawn(id);
        }
    }

    // ── Components ──────────────────────────────────────────────

    pub fn fighter(&self, id: EntityId) -> Option<&Fighter> {
        self.fighters.get(&id)
    }

    pub fn fighter_mut(&mut self, id: EntityId) -> Option<&mut Fighter> {
        self.fighters.get_mut(&id)
    }

    pub fn remove_fighter(&mut self, id: EntityId) -> Option<Fighter> {
        self.fighters.remove(&id)
    }

    pub fn behavior(&self, id: EntityId) -> Option<&Behavior> {
        self.behaviors.get(&id)
    }

    /// Swaps the active behavior, returning the previous one.
    pub fn set_behavior(&mut self, id: EntityId, behavior: Behavior) -> Option<Behavior> {
        self.behaviors.insert(id, behavior)
    }

    pub fn remove_behavior(&mut self, id: EntityId) -> Option<Behavior> {
        self.behaviors.remove(&id)
    }

    pub fn item(&self, id: EntityId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn equipment(&self, id: EntityId) -> Option<&Equipment> {
        self.equipment.get(&id)
    }

    pub fn equipment_mut(&mut self, id: EntityId) -> Option<&mut Equipment> {
        self.equipment.get_mut(&id)
    }

    pub fn player_stats(&self, id: EntityId) -> Option<&PlayerStats> {
        self.player_stats.get(&id)
    }

    pub fn player_stats_mut(&mut self, id: EntityId) -> Option<&mut PlayerStats> {
        self.player_stats.get_mut(&id)
    }

    pub fn player_skills(&self, id: EntityId) -> Option<&PlayerSkills> {
        self.player_skills.get(&id)
    }

    pub fn player_skills_mut(&mut self, id: EntityId) -> Option<&mut PlayerSkills> {
        self.player_skills.get_mut(&id)
    }

    /// Number of live entities in the arena, on the map or not.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
