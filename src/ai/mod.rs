//! Non-player behavior and the per-turn scheduler.

pub mod logic;
pub mod types;

pub use logic::{take_monster_turns, take_turn};
pub use types::{AiKind, Behavior};
