use crate::entity::EntityId;
use serde::{Deserialize, Serialize};

/// Where incoming damage comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageSource {
    /// The attacking fighter. Only attacks can be evaded or blocked.
    pub attacker: Option<EntityId>,
    /// Piercing damage skips armor mitigation.
    pub piercing: bool,
}

impl DamageSource {
    pub fn melee(attacker: EntityId) -> Self {
        Self {
            attacker: Some(attacker),
            piercing: false,
        }
    }

    /// Spells, explosions and the like: no attacker, armor still applies.
    pub fn effect() -> Self {
        Self {
            attacker: None,
            piercing: false,
        }
    }

    /// No attacker and no armor roll (suffocation).
    pub fn environment() -> Self {
        Self {
            attacker: None,
            piercing: true,
        }
    }
}

/// How a defender won an opposed roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Margin {
    /// Won by at most a fifth of the defending stat.
    Barely,
    Clearly,
}

/// Terminal state of one pass through the damage pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitOutcome {
    Evaded(Margin),
    Blocked(Margin),
    /// Residual damage after mitigation, possibly zero. `killed` is set
    /// only on the hit that took hp from positive to zero.
    Damaged { amount: i32, killed: bool },
}

impl HitOutcome {
    pub fn damage(&self) -> i32 {
        match self {
            HitOutcome::Damaged { amount, .. } => *amount,
            _ => 0,
        }
    }

    pub fn killed(&self) -> bool {
        matches!(self, HitOutcome::Damaged { killed: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let hit = HitOutcome::Damaged {
            amount: 4,
            killed: true,
        };
        assert_eq!(hit.damage(), 4);
        assert!(hit.killed());
        assert_eq!(HitOutcome::Evaded(Margin::Barely).damage(), 0);
        assert!(!HitOutcome::Blocked(Margin::Clearly).killed());
    }

    #[test]
    fn test_sources() {
        assert!(DamageSource::environment().piercing);
        assert!(!DamageSource::effect().piercing);
        assert_eq!(DamageSource::melee(EntityId(3)).attacker, Some(EntityId(3)));
    }
}
