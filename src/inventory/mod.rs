//! The player's inventory: stacked slots, pick up, drop and use.

pub mod logic;
pub mod types;

pub use logic::{drop_item, find_stack, pick_up, use_item, PickUpOutcome, UseOutcome};
pub use types::{Inventory, Stack};
