//! The player character: races, titles, creation and life support.

pub mod creation;
pub mod types;
pub mod vitals;

pub use creation::{new_player, outfit_player, spawn_player, starting_kit, StartingItem, StartingKind};
pub use types::{Race, Title};
pub use vitals::{breathe, drain_energy, recharge, restore_oxygen};
