use crate::core::color::Color;
use serde::{Deserialize, Serialize};

/// Stable arena index. Ids are never reused, so a stale id simply stops
/// resolving once its entity is despawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// A game object: the player, a monster, an item, the stairs...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub glyph: char,
    pub color: Color,
    /// Blocks movement into its tile.
    pub blocks: bool,
    /// Rendered on explored tiles even when outside the current view.
    pub always_visible: bool,
}

impl Entity {
    pub fn new(name: &str, x: i32, y: i32, glyph: char, color: Color) -> Self {
        Self {
            name: name.to_string(),
            x,
            y,
            glyph,
            color,
            blocks: false,
            always_visible: false,
        }
    }

    pub fn blocking(mut self) -> Self {
        self.blocks = true;
        self
    }

    pub fn always_visible(mut self) -> Self {
        self.always_visible = true;
        self
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn distance(&self, x: i32, y: i32) -> f64 {
        let dx = (x - self.x) as f64;
        let dy = (y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn distance_to(&self, other: &Entity) -> f64 {
        self.distance(other.x, other.y)
    }

    /// Name with the first letter of every word capitalised.
    pub fn title_name(&self) -> String {
        title_case(&self.name)
    }
}

pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
