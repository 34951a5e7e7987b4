use serde::{Deserialize, Serialize};

/// The single active behavior of a non-player actor.
///
/// Confusion wraps the behavior it replaces and hands it back when it
/// wears off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    /// Step towards a visible player; attack when adjacent.
    ChaseAndAttack,
    /// Stumble randomly for `remaining_turns`, then restore `previous`.
    Confused {
        previous: Box<Behavior>,
        remaining_turns: u32,
    },
}

impl Behavior {
    pub fn confused(previous: Behavior, turns: u32) -> Self {
        Behavior::Confused {
            previous: Box::new(previous),
            remaining_turns: turns,
        }
    }

    pub fn is_confused(&self) -> bool {
        matches!(self, Behavior::Confused { .. })
    }
}

/// Behavior names accepted in monster definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiKind {
    #[serde(rename = "basic")]
    Basic,
}

impl AiKind {
    pub fn behavior(self) -> Behavior {
        match self {
            AiKind::Basic => Behavior::ChaseAndAttack,
        }
    }
}
