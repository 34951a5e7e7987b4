//! Player actions, level transitions, turn glue and debug commands.

pub mod actions;
pub mod debug;
pub mod logic;
pub mod types;

pub use actions::{
    drop_from_inventory, move_or_attack, on_stairs, pick_up_here, rest, use_from_inventory, wait,
};
pub use debug::{run_debug_command, run_debug_text, DEBUG_XP_GRANT};
pub use logic::{descend, end_turn, new_game, next_level};
pub use types::{DebugCommand, PlayerAction};
