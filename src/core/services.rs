//! Collaborators the core consumes but does not implement: the
//! field-of-view computation and the player's input layer.

use super::world::World;
use crate::progression::StatChoice;

/// Visibility as computed by whoever owns field of view.
pub trait Visibility {
    /// Tile is inside the player's current view.
    fn is_visible(&self, x: i32, y: i32) -> bool;
    /// Tile has been seen at least once.
    fn is_explored(&self, x: i32, y: i32) -> bool;
}

/// Everything is in view. Useful for tests and debug reveal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllVisible;

impl Visibility for AllVisible {
    fn is_visible(&self, _x: i32, _y: i32) -> bool {
        true
    }

    fn is_explored(&self, _x: i32, _y: i32) -> bool {
        true
    }
}

/// Nothing is in view.
#[derive(Debug, Clone, Copy, Default)]
pub struct NothingVisible;

impl Visibility for NothingVisible {
    fn is_visible(&self, _x: i32, _y: i32) -> bool {
        false
    }

    fn is_explored(&self, _x: i32, _y: i32) -> bool {
        false
    }
}

/// Synchronous requests answered by the input layer before the turn continues.
pub trait PlayerInput {
    /// Pick a tile to target. `None` aborts the request.
    fn choose_target_tile(&mut self, world: &World, max_range: Option<f64>) -> Option<(i32, i32)>;

    /// Pick the attribute raised by a pending level-up. Must answer.
    fn choose_level_up_stat(&mut self, world: &World) -> StatChoice;
}
