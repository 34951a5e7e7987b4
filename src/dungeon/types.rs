//! Tile grid and generation rectangles.

use serde::{Deserialize, Serialize};

/// A tile of the map and its properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub blocked: bool,
    pub block_sight: bool,
    /// Monotonic during play; only debug commands reset it.
    pub explored: bool,
}

impl Tile {
    pub fn wall() -> Self {
        Self {
            blocked: true,
            block_sight: true,
            explored: false,
        }
    }

    pub fn floor() -> Self {
        Self {
            blocked: false,
            block_sight: false,
            explored: false,
        }
    }
}

/// Fixed-size grid indexed by `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// A map filled with walls.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![Tile::wall(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y).then(|| (y * self.width + x) as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        self.index(x, y).map(|i| &self.tiles[i])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        self.index(x, y).map(move |i| &mut self.tiles[i])
    }

    /// Out-of-bounds counts as blocked.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.get(x, y).map_or(true, |t| t.blocked)
    }

    pub fn blocks_sight(&self, x: i32, y: i32) -> bool {
        self.get(x, y).map_or(true, |t| t.block_sight)
    }

    pub fn is_explored(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|t| t.explored)
    }

    /// Makes a tile passable and see-through.
    pub fn carve(&mut self, x: i32, y: i32) {
        if let Some(tile) = self.get_mut(x, y) {
            tile.blocked = false;
            tile.block_sight = false;
        }
    }

    pub fn mark_explored(&mut self, x: i32, y: i32) {
        if let Some(tile) = self.get_mut(x, y) {
            tile.explored = true;
        }
    }

    pub fn set_all_explored(&mut self, explored: bool) {
        for tile in &mut self.tiles {
            tile.explored = explored;
        }
    }

    /// Number of passable tiles.
    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|t| !t.blocked).count()
    }
}

/// A rectangle on the map, used to characterise a room during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + w,
            y2: y + h,
        }
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Overlap on both axes, bounds inclusive. Touching edges intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    /// Interior tiles carved for the room (the border stays wall).
    pub fn interior(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.x1 + 1..self.x2).flat_map(move |x| (self.y1 + 1..self.y2).map(move |y| (x, y)))
    }

    pub fn contains_interior(&self, x: i32, y: i32) -> bool {
        x > self.x1 && x < self.x2 && y > self.y1 && y < self.y2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_all_wall() {
        let map = TileMap::new(10, 5);
        assert_eq!(map.floor_count(), 0);
        assert!(map.is_blocked(3, 3));
        assert!(map.blocks_sight(3, 3));
    }

    #[test]
    fn test_out_of_bounds_is_blocked() {
        let map = TileMap::new(4, 4);
        assert!(map.is_blocked(-1, 0));
        assert!(map.is_blocked(4, 0));
        assert!(map.get(0, 4).is_none());
    }

    #[test]
    fn test_carve_opens_tile() {
        let mut map = TileMap::new(4, 4);
        map.carve(1, 2);
        assert!(!map.is_blocked(1, 2));
        assert!(!map.blocks_sight(1, 2));
        assert!(map.is_blocked(2, 1));
    }

    #[test]
    fn test_rect_center_rounds_down() {
        let r = Rect::new(0, 0, 7, 6);
        assert_eq!(r.center(), (3, 3));
    }

    #[test]
    fn test_rect_intersection_is_inclusive() {
        let a = Rect::new(0, 0, 5, 5);
        let touching = Rect::new(5, 0, 5, 5);
        let apart = Rect::new(6, 0, 5, 5);
        let diagonal = Rect::new(5, 5, 3, 3);
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
        assert!(a.intersects(&diagonal));
        assert!(apart.intersects(&apart));
    }

    #[test]
    fn test_interior_excludes_border() {
        let r = Rect::new(2, 2, 4, 3);
        let tiles: Vec<(i32, i32)> = r.interior().collect();
        assert_eq!(tiles.len(), 3 * 2);
        assert!(tiles.iter().all(|&(x, y)| r.contains_interior(x, y)));
    }
}
