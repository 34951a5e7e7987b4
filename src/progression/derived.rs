//! Derived statistics: base values plus everything currently equipped.
//!
//! Recomputed on every call.

use super::equipment::{all_equipped, equipped_in_slot};
use crate::core::world::World;
use crate::entity::{EntityId, Skill, Slot, StatBonuses};

/// Combat statistics used by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStats {
    pub max_hp: i32,
    pub power: i32,
    pub accuracy: i32,
    pub defense: i32,
    pub evade: i32,
    pub block: i32,
}

/// Player attributes after equipment bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedAttributes {
    pub strength: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub max_oxygen: i32,
    pub max_energy: i32,
}

/// Sum of bonuses from every item `owner` has equipped.
pub fn equipped_bonuses(world: &World, owner: EntityId) -> StatBonuses {
    let mut total = StatBonuses::default();
    for id in all_equipped(world, owner) {
        if let Some(equipment) = world.entities.equipment(id) {
            total.add(&equipment.bonuses);
        }
    }
    total
}

/// Hit point bonus earned by player level.
pub fn level_hp_bonus(level: i32) -> i32 {
    (11 * level).div_euclid(2)
}

impl DerivedAttributes {
    /// `None` for anything other than the player.
    pub fn calculate(world: &World, id: EntityId) -> Option<Self> {
        let stats = world.entities.player_stats(id)?;
        let bonus = equipped_bonuses(world, id);
        Some(Self {
            strength: stats.base_strength + bonus.strength,
            agility: stats.base_agility + bonus.agility,
            intelligence: stats.base_intelligence + bonus.intelligence,
            max_oxygen: stats.base_max_oxygen + bonus.oxygen,
            max_energy: stats.base_max_energy + bonus.energy,
        })
    }
}

impl DerivedStats {
    /// `None` if the entity has no Fighter.
    ///
    /// Player-only contributions (level hp, attribute accuracy, Dodge and
    /// Shields skills) apply only when `id` is the player.
    pub fn calculate(world: &World, id: EntityId) -> Option<Self> {
        let fighter = world.entities.fighter(id)?;
        let bonus = equipped_bonuses(world, id);

        let mut max_hp = fighter.base_max_hp + bonus.max_hp;
        let mut accuracy = fighter.base_accuracy + bonus.accuracy;
        let mut evade = fighter.base_evade + bonus.evade;
        let has_shield = equipped_in_slot(world, id, Slot::OFF_HAND).is_some();
        let mut block = if has_shield {
            fighter.base_block + bonus.block
        } else {
            0
        };

        if world.is_player(id) {
            if let Some(stats) = world.entities.player_stats(id) {
                max_hp += level_hp_bonus(stats.level);
            }
            if let Some(attrs) = DerivedAttributes::calculate(world, id) {
                accuracy += (attrs.strength + attrs.agility).div_euclid(2);
            }
            if let Some(skills) = world.entities.player_skills(id) {
                evade += skills.get(Skill::Dodge);
                if has_shield {
                    block += skills.get(Skill::Shields);
                }
            }
        }

        Some(Self {
            max_hp,
            power: fighter.base_power + bonus.power,
            accuracy,
            defense: fighter.base_defense + bonus.defense,
            evade,
            block,
        })
    }
}
