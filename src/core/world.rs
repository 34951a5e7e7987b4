//! The explicit world context every operation receives.

use super::messages::MessageLog;
use crate::dungeon::TileMap;
use crate::entity::{Entity, EntityId, EntityStore, Fighter};
use crate::inventory::Inventory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Dead,
}

/// Owns the tile grid, entities, inventory, dungeon level and log.
///
/// Mutated only by the thread driving the turn loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub map: TileMap,
    pub entities: EntityStore,
    pub inventory: Inventory,
    pub player: EntityId,
    pub stairs: Option<EntityId>,
    pub dungeon_level: u32,
    pub log: MessageLog,
    pub state: GameState,
}

impl World {
    /// Wraps an already-spawned player in an otherwise empty world.
    pub fn with_player(map: TileMap, entities: EntityStore, player: EntityId) -> Self {
        Self {
            map,
            entities,
            inventory: Inventory::new(),
            player,
            stairs: None,
            dungeon_level: 1,
            log: MessageLog::new(),
            state: GameState::Playing,
        }
    }

    pub fn is_player(&self, id: EntityId) -> bool {
        id == self.player
    }

    pub fn player_entity(&self) -> &Entity {
        self.entities
            .get(self.player)
            .expect("the player entity is never despawned")
    }

    pub fn player_position(&self) -> (i32, i32) {
        self.player_entity().position()
    }

    pub fn player_fighter(&self) -> Option<&Fighter> {
        self.entities.fighter(self.player)
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    /// A tile is blocked by walls, the map edge, or any blocking entity on it.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        if self.map.is_blocked(x, y) {
            return true;
        }
        self.entities
            .on_map()
            .iter()
            .filter_map(|&id| self.entities.get(id))
            .any(|e| e.blocks && e.x == x && e.y == y)
    }

    /// Moves by the given amount if the destination is free. Returns
    /// whether the entity moved.
    pub fn move_by(&mut self, id: EntityId, dx: i32, dy: i32) -> bool {
        let Some((x, y)) = self.entities.get(id).map(Entity::position) else {
            return false;
        };
        if self.is_blocked(x + dx, y + dy) {
            return false;
        }
        if let Some(entity) = self.entities.get_mut(id) {
            entity.x += dx;
            entity.y += dy;
        }
        true
    }

    /// One grid step along the normalised vector to the target.
    pub fn move_towards(&mut self, id: EntityId, target_x: i32, target_y: i32) -> bool {
        let Some(entity) = self.entities.get(id) else {
            return false;
        };
        let (dx, dy) = step_towards(entity.x, entity.y, target_x, target_y);
        self.move_by(id, dx, dy)
    }

    /// The fighter (other than the player) standing on `(x, y)`, if any.
    pub fn fighter_at(&self, x: i32, y: i32) -> Option<EntityId> {
        self.entities
            .at(x, y)
            .into_iter()
            .find(|&id| self.entities.fighter(id).is_some())
    }
}

/// Direction vector normalised to length 1 and rounded to the grid.
pub fn step_towards(x: i32, y: i32, target_x: i32, target_y: i32) -> (i32, i32) {
    let dx = (target_x - x) as f64;
    let dy = (target_y - y) as f64;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance == 0.0 {
        return (0, 0);
    }
    ((dx / distance).round() as i32, (dy / distance).round() as i32)
}
