//! Room-and-tunnel level generation with level-scaled content placement.

use super::tables::level_value;
use super::types::{Rect, TileMap};
use crate::core::color::Color;
use crate::core::constants::*;
use crate::core::rng::{random_choice, uniform_int};
use crate::core::world::World;
use crate::definitions::{DefinitionTables, LevelTable};
use crate::entity::{Components, Entity};
use log::{debug, warn};
use rand::Rng;
use std::collections::BTreeSet;

/// Inputs to a generation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub width: i32,
    pub height: i32,
    pub room_min_size: i32,
    pub room_max_size: i32,
    pub max_rooms: usize,
    pub monsters_per_room: LevelTable,
    pub items_per_room: LevelTable,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            room_min_size: ROOM_MIN_SIZE,
            room_max_size: ROOM_MAX_SIZE,
            max_rooms: MAX_ROOMS,
            monsters_per_room: MONSTERS_PER_ROOM.to_vec(),
            items_per_room: ITEMS_PER_ROOM.to_vec(),
        }
    }
}

/// Unique monster kinds already placed during one generation pass.
type PlacedUniques = BTreeSet<String>;

/// Builds a fresh level for `world.dungeon_level`.
///
/// Everything on the map except the player is despawned first; the
/// inventory is untouched. Returns the accepted rooms in acceptance order.
/// If no room fits, the map stays solid and the player keeps its position.
pub fn make_map(
    world: &mut World,
    defs: &DefinitionTables,
    params: &GenerationParams,
    rng: &mut impl Rng,
) -> Vec<Rect> {
    world.entities.clear_map_except(world.player);
    world.stairs = None;
    world.map = TileMap::new(params.width, params.height);

    let mut rooms: Vec<Rect> = Vec::new();
    let mut uniques = PlacedUniques::new();

    for _ in 0..params.max_rooms {
        let w = uniform_int(rng, params.room_min_size, params.room_max_size);
        let h = uniform_int(rng, params.room_min_size, params.room_max_size);
        let (max_x, max_y) = (params.width - w - 1, params.height - h - 1);
        if max_x < 0 || max_y < 0 {
            continue;
        }
        let x = uniform_int(rng, 0, max_x);
        let y = uniform_int(rng, 0, max_y);
        let new_room = Rect::new(x, y, w, h);

        if rooms.iter().any(|other| new_room.intersects(other)) {
            continue;
        }

        create_room(&mut world.map, &new_room);
        let (new_x, new_y) = new_room.center();

        match rooms.last() {
            None => {
                if let Some(player) = world.entities.get_mut(world.player) {
                    player.x = new_x;
                    player.y = new_y;
                }
            }
            Some(previous) => {
                let (prev_x, prev_y) = previous.center();
                if uniform_int(rng, 0, 1) == 1 {
                    create_h_tunnel(&mut world.map, prev_x, new_x, prev_y);
                    create_v_tunnel(&mut world.map, prev_y, new_y, new_x);
                } else {
                    create_v_tunnel(&mut world.map, prev_y, new_y, prev_x);
                    create_h_tunnel(&mut world.map, prev_x, new_x, new_y);
                }
            }
        }

        place_monsters(world, defs, params, &new_room, &mut uniques, rng);
        place_items(world, defs, params, &new_room, rng);
        rooms.push(new_room);
    }

    if let Some(last) = rooms.last() {
        let (x, y) = last.center();
        let stairs = world.entities.spawn(
            Entity::new("stairs", x, y, '<', Color::WHITE).always_visible(),
            Components::default(),
        );
        world.entities.send_to_back(stairs);
        world.stairs = Some(stairs);
    }

    debug!(
        "generated level {}: {} rooms, {} entities on map",
        world.dungeon_level,
        rooms.len(),
        world.entities.on_map().len()
    );
    rooms
}

fn create_room(map: &mut TileMap, room: &Rect) {
    for (x, y) in room.interior() {
        map.carve(x, y);
    }
}

fn create_h_tunnel(map: &mut TileMap, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        map.carve(x, y);
    }
}

fn create_v_tunnel(map: &mut TileMap, y1: i32, y2: i32, x: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        map.carve(x, y);
    }
}

/// Random interior tile of a room.
fn random_spot(room: &Rect, rng: &mut impl Rng) -> (i32, i32) {
    let x = uniform_int(rng, room.x1 + 1, room.x2 - 1);
    let y = uniform_int(rng, room.y1 + 1, room.y2 - 1);
    (x, y)
}

fn place_monsters(
    world: &mut World,
    defs: &DefinitionTables,
    params: &GenerationParams,
    room: &Rect,
    uniques: &mut PlacedUniques,
    rng: &mut impl Rng,
) {
    let level = world.dungeon_level;
    let max_monsters = level_value(&params.monsters_per_room, level);
    let chances = defs.monster_chances(level);
    let num_monsters = uniform_int(rng, 0, max_monsters);

    for _ in 0..num_monsters {
        let (x, y) = random_spot(room, rng);
        if world.is_blocked(x, y) {
            continue;
        }

        let Some(choice) = random_choice(&chances, rng) else {
            continue;
        };
        let def = match defs.monster(choice) {
            Ok(def) => def,
            Err(err) => {
                warn!("abandoning monster placement: {}", err);
                continue;
            }
        };

        // A unique kind drawn twice simply loses this slot.
        if def.unique && !uniques.insert(choice.clone()) {
            continue;
        }

        world.entities.spawn(
            Entity::new(choice, x, y, def.glyph, def.color()).blocking(),
            def.components(),
        );
        debug!("placed a {} at {},{}", choice, x, y);
    }
}

fn place_items(
    world: &mut World,
    defs: &DefinitionTables,
    params: &GenerationParams,
    room: &Rect,
    rng: &mut impl Rng,
) {
    let level = world.dungeon_level;
    let chances = defs.item_chances(level);
    let max_items = level_value(&params.items_per_room, level);
    let num_items = uniform_int(rng, 0, max_items);

    for _ in 0..num_items {
        let (x, y) = random_spot(room, rng);
        if world.is_blocked(x, y) {
            continue;
        }

        let Some(choice) = random_choice(&chances, rng) else {
            continue;
        };
        let def = match defs.item(choice) {
            Ok(def) => def,
            Err(err) => {
                warn!("abandoning item placement: {}", err);
                continue;
            }
        };

        let id = world.entities.spawn(
            Entity::new(choice, x, y, def.glyph, def.color()).always_visible(),
            def.components(),
        );
        world.entities.send_to_back(id);
        debug!("placed a {} at {},{}", choice, x, y);
    }
}
