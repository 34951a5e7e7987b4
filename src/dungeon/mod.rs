//! Dungeon levels: tile grid, rooms, level-scaled tables and generation.

pub mod generation;
pub mod tables;
pub mod types;

pub use generation::{make_map, GenerationParams};
pub use tables::level_value;
pub use types::{Rect, Tile, TileMap};
