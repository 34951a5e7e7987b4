//! Combat resolution: the damage pipeline, death, dice and per-turn ticks.

pub mod death;
pub mod dice;
pub mod logic;
pub mod tick;
pub mod types;

pub use death::handle_death;
pub use dice::{parse_dice, roll_dice};
pub use logic::{armor_roll, attack, heal, opposed_roll, take_damage};
pub use tick::tick;
pub use types::{DamageSource, HitOutcome, Margin};
