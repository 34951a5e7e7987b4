use serde::{Deserialize, Serialize};

/// Whether an ability went off. Cancelled abilities consume nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityOutcome {
    Used,
    Cancelled,
}

impl AbilityOutcome {
    pub fn is_used(&self) -> bool {
        *self == AbilityOutcome::Used
    }
}
