//! Progression & equipment: derived stats, leveling, slot management.

pub mod derived;
pub mod equipment;
pub mod leveling;

pub use derived::{equipped_bonuses, level_hp_bonus, DerivedAttributes, DerivedStats};
pub use equipment::{
    all_equipped, dequip, equip, equipped_in_slot, equipped_name_in_slot, toggle_equip,
};
pub use leveling::{apply_stat_choice, check_level_up, xp_to_level_up, StatChoice};
