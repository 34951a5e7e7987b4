//! Torch-radius field of view with line-of-sight.

use crate::core::services::Visibility;
use crate::core::world::World;
use crate::dungeon::TileMap;
use std::collections::HashSet;

/// Recomputed from the player's position every turn. Seen tiles are also
/// marked explored on the map.
#[derive(Debug, Clone)]
pub struct TorchFov {
    radius: i32,
    visible: HashSet<(i32, i32)>,
    explored: HashSet<(i32, i32)>,
    level: u32,
}

impl TorchFov {
    pub fn new(radius: i32) -> Self {
        Self {
            radius,
            visible: HashSet::new(),
            explored: HashSet::new(),
            level: 0,
        }
    }

    pub fn compute(&mut self, world: &mut World) {
        if world.dungeon_level != self.level {
            self.explored.clear();
            self.level = world.dungeon_level;
        }
        self.visible.clear();

        let (px, py) = world.player_position();
        for y in (py - self.radius)..=(py + self.radius) {
            for x in (px - self.radius)..=(px + self.radius) {
                let (dx, dy) = (x - px, y - py);
                if dx * dx + dy * dy > self.radius * self.radius {
                    continue;
                }
                if !world.map.in_bounds(x, y) || !line_of_sight(&world.map, px, py, x, y) {
                    continue;
                }
                self.visible.insert((x, y));
                self.explored.insert((x, y));
                world.map.mark_explored(x, y);
            }
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }
}

impl Visibility for TorchFov {
    fn is_visible(&self, x: i32, y: i32) -> bool {
        self.visible.contains(&(x, y))
    }

    fn is_explored(&self, x: i32, y: i32) -> bool {
        self.explored.contains(&(x, y))
    }
}

/// Bresenham walk from `(x0, y0)`. The end tile itself may block sight
/// (walls are seen); anything in between may not.
pub fn line_of_sight(map: &TileMap, x0: i32, y0: i32, x1: i32, y1: i32) -> bool {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        if x == x1 && y == y1 {
            return true;
        }
        if (x, y) != (x0, y0) && map.blocks_sight(x, y) {
            return false;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
