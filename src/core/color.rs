//! Opaque RGB colours passed through to whatever renders the world.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255);
    pub const GREY: Color = Color(127, 127, 127);
    pub const RED: Color = Color(255, 0, 0);
    pub const DARK_RED: Color = Color(191, 0, 0);
    pub const ORANGE: Color = Color(255, 127, 0);
    pub const YELLOW: Color = Color(255, 255, 0);
    pub const LIGHT_YELLOW: Color = Color(255, 255, 115);
    pub const GREEN: Color = Color(0, 255, 0);
    pub const LIGHT_GREEN: Color = Color(115, 255, 115);
    pub const BLUE: Color = Color(0, 0, 255);
    pub const LIGHT_BLUE: Color = Color(115, 115, 255);
    pub const LIGHT_CYAN: Color = Color(115, 255, 255);
    pub const LIGHT_VIOLET: Color = Color(185, 115, 255);
    pub const CYAN: Color = Color(0, 255, 255);
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Color(rgb[0], rgb[1], rgb[2])
    }
}
