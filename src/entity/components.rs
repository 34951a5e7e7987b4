//! Optional capability components. An entity is a bag of these, never a
//! class hierarchy: the store keys each kind by [`EntityId`](super::EntityId).

use crate::character::{Race, Title};
use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What happens when a fighter's hp reaches zero. Resolved from definition
/// names at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathBehavior {
    #[serde(rename = "player_death")]
    Player,
    #[serde(rename = "monster_death")]
    Monster,
}

/// Combat-related state for monsters and the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub base_max_hp: i32,
    pub hp: i32,
    pub base_defense: i32,
    pub base_power: i32,
    pub base_evade: i32,
    pub base_block: i32,
    pub base_accuracy: i32,
    /// Reward on death for monsters; accumulated experience for the player.
    pub xp: i32,
    pub species: String,
    pub death: Option<DeathBehavior>,
    pub tick_total: u64,
}

impl Fighter {
    pub fn new(hp: i32, defense: i32, power: i32, xp: i32, death: DeathBehavior) -> Self {
        Self {
            base_max_hp: hp,
            hp,
            base_defense: defense,
            base_power: power,
            base_evade: DEFAULT_EVADE,
            base_block: DEFAULT_BLOCK,
            base_accuracy: DEFAULT_ACCURACY,
            xp,
            species: DEFAULT_SPECIES.to_string(),
            death: Some(death),
            tick_total: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Shifts both maximum and current hp.
    pub fn adjust_all_hp(&mut self, amount: i32) {
        self.base_max_hp += amount;
        self.hp += amount;
    }
}

/// Per-stat bonuses granted by an equipped item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatBonuses {
    pub power: i32,
    pub accuracy: i32,
    pub defense: i32,
    pub evade: i32,
    pub block: i32,
    pub max_hp: i32,
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub oxygen: i32,
    pub energy: i32,
}

impl StatBonuses {
    pub fn add(&mut self, other: &StatBonuses) {
        self.power += other.power;
        self.accuracy += other.accuracy;
        self.defense += other.defense;
        self.evade += other.evade;
        self.block += other.block;
        self.max_hp += other.max_hp;
        self.strength += other.strength;
        self.agility += other.agility;
        self.intelligence += other.intelligence;
        self.oxygen += other.oxygen;
        self.energy += other.energy;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Slot {
    #[serde(rename = "right hand")]
    RightHand,
    #[serde(rename = "left hand")]
    LeftHand,
    #[serde(rename = "head")]
    Head,
    #[serde(rename = "exosuit")]
    Exosuit,
    #[serde(rename = "suit")]
    Suit,
    #[serde(rename = "feet")]
    Feet,
    #[serde(rename = "back")]
    Back,
}

impl Slot {
    /// The slot a shield must occupy to allow blocking.
    pub const OFF_HAND: Slot = Slot::LeftHand;

    pub fn name(&self) -> &'static str {
        match self {
            Slot::RightHand => "right hand",
            Slot::LeftHand => "left hand",
            Slot::Head => "head",
            Slot::Exosuit => "exosuit",
            Slot::Suit => "suit",
            Slot::Feet => "feet",
            Slot::Back => "back",
        }
    }
}

/// Equippable gear. Always paired with an [`Item`] on the same entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub slot: Slot,
    pub bonuses: StatBonuses,
    pub is_equipped: bool,
}

impl Equipment {
    pub fn new(slot: Slot, bonuses: StatBonuses) -> Self {
        Self {
            slot,
            bonuses,
            is_equipped: false,
        }
    }
}

/// Effect applied when an item is used from the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseEffect {
    Heal,
    Oxygen,
    Lightning,
    Fireball,
    Confuse,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub stackable: bool,
    pub use_effect: Option<UseEffect>,
}

/// Player-only attributes and life support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub base_strength: i32,
    pub base_agility: i32,
    pub base_intelligence: i32,
    pub base_max_oxygen: i32,
    pub oxygen: i32,
    pub base_max_energy: i32,
    pub energy: i32,
    pub race: Race,
    pub title: Title,
    pub level: i32,
}

impl PlayerStats {
    pub fn new(race: Race, title: Title) -> Self {
        Self {
            base_strength: PLAYER_BASE_ATTRIBUTE,
            base_agility: PLAYER_BASE_ATTRIBUTE,
            base_intelligence: PLAYER_BASE_ATTRIBUTE,
            base_max_oxygen: PLAYER_BASE_OXYGEN,
            oxygen: PLAYER_BASE_OXYGEN,
            base_max_energy: 0,
            energy: 0,
            race,
            title,
            level: 1,
        }
    }

    /// Races that do not consume oxygen.
    pub fn breathes(&self) -> bool {
        !matches!(self.race, Race::Synthetic | Race::Diona)
    }

    pub fn adjust_all_oxygen(&mut self, amount: i32) {
        self.base_max_oxygen += amount;
        self.oxygen += amount;
    }

    pub fn adjust_all_energy(&mut self, amount: i32) {
        self.base_max_energy += amount;
        self.energy += amount;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    Command,
    Fighting,
    Armor,
    Dodge,
    Shields,
    Stealth,
    UnarmedCombat,
    ShortBlades,
    LongBlades,
    BluntWeapons,
    Axes,
    Ballistics,
    Energy,
    Crossbow,
    Throwing,
    Eva,
    Construction,
    ElectricalEngineering,
    HeavyMachinery,
    ComplexDevices,
    InfoTech,
    Chemistry,
    Medicine,
}

impl Skill {
    pub const ALL: [Skill; 23] = [
        Skill::Command,
        Skill::Fighting,
        Skill::Armor,
        Skill::Dodge,
        Skill::Shields,
        Skill::Stealth,
        Skill::UnarmedCombat,
        Skill::ShortBlades,
        Skill::LongBlades,
        Skill::BluntWeapons,
        Skill::Axes,
        Skill::Ballistics,
        Skill::Energy,
        Skill::Crossbow,
        Skill::Throwing,
        Skill::Eva,
        Skill::Construction,
        Skill::ElectricalEngineering,
        Skill::HeavyMachinery,
        Skill::ComplexDevices,
        Skill::InfoTech,
        Skill::Chemistry,
        Skill::Medicine,
    ];
}

/// Trained skill levels; every skill starts at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSkills {
    levels: BTreeMap<Skill, i32>,
}

impl PlayerSkills {
    pub fn new() -> Self {
        Self {
            levels: Skill::ALL.iter().map(|&s| (s, 0)).collect(),
        }
    }

    pub fn get(&self, skill: Skill) -> i32 {
        self.levels.get(&skill).copied().unwrap_or(0)
    }

    pub fn set(&mut self, skill: Skill, level: i32) {
        self.levels.insert(skill, level);
    }
}

impl Default for PlayerSkills {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fighter_defaults() {
        let f = Fighter::new(10, 1, 3, 35, DeathBehavior::Monster);
        assert_eq!(f.hp, 10);
        assert_eq!(f.base_evade, 10);
        assert_eq!(f.base_block, 0);
        assert_eq!(f.base_accuracy, 12);
        assert_eq!(f.species, "Humanoid");
    }

    #[test]
    fn test_adjust_all_hp_moves_both() {
        let mut f = Fighter::new(15, 0, 2, 0, DeathBehavior::Player);
        f.adjust_all_hp(-2);
        assert_eq!((f.base_max_hp, f.hp), (13, 13));
    }

    #[test]
    fn test_skills_start_at_zero() {
        let skills = PlayerSkills::new();
        for skill in Skill::ALL {
            assert_eq!(skills.get(skill), 0);
        }
    }

    #[test]
    fn test_slot_names_match_serde() {
        for slot in [Slot::RightHand, Slot::LeftHand, Slot::Back] {
            let json = serde_json::to_string(&slot).unwrap();
            assert_eq!(json, format!("\"{}\"", slot.name()));
        }
    }

    #[test]
    fn test_unknown_slot_rejected() {
        assert!(serde_json::from_str::<Slot>("\"tail\"").is_err());
    }
}
