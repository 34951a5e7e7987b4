//! Item use effects and targeting.

pub mod spells;
pub mod targeting;
pub mod types;

pub use spells::{cast, cast_confuse, cast_fireball, cast_heal, cast_lightning, cast_oxygen, explode};
pub use targeting::{closest_monster, is_valid_target, target_monster, target_tile};
pub use types::AbilityOutcome;
