//! Monster and item definition tables.
//!
//! Tables arrive as JSON and are validated once at load time, so unknown
//! behavior or slot names fail before any level is generated.

pub mod types;

pub use types::*;

use crate::core::error::ConfigError;
use crate::dungeon::level_value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const BUILTIN_DEFINITIONS: &str = include_str!("../../data/definitions.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionTables {
    /// Declaration order of monster kinds; weighted draws follow it.
    pub monster_list: Vec<String>,
    pub item_list: Vec<String>,
    pub monsters: BTreeMap<String, MonsterDef>,
    pub items: BTreeMap<String, ItemDef>,
}

impl DefinitionTables {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tables: DefinitionTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// The tables shipped with the crate.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_DEFINITIONS)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for name in &self.monster_list {
            let def = self.monsters.get(name).ok_or_else(|| ConfigError::UndefinedKind {
                list: "monster",
                name: name.clone(),
            })?;
            if def.hp <= 0 {
                return Err(ConfigError::InvalidMonster {
                    name: name.clone(),
                    reason: format!("hp must be positive, got {}", def.hp),
                });
            }
            if def.chance.is_empty() {
                return Err(ConfigError::InvalidMonster {
                    name: name.clone(),
                    reason: "chance table is empty".to_string(),
                });
            }
        }

        for name in &self.item_list {
            let def = self.items.get(name).ok_or_else(|| ConfigError::UndefinedKind {
                list: "item",
                name: name.clone(),
            })?;
            if def.chance.is_empty() {
                return Err(ConfigError::InvalidItem {
                    name: name.clone(),
                    reason: "chance table is empty".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn monster(&self, name: &str) -> Result<&MonsterDef, ConfigError> {
        self.monsters
            .get(name)
            .ok_or_else(|| ConfigError::UnknownMonster(name.to_string()))
    }

    pub fn item(&self, name: &str) -> Result<&ItemDef, ConfigError> {
        self.items
            .get(name)
            .ok_or_else(|| ConfigError::UnknownItem(name.to_string()))
    }

    /// `(kind, weight)` for every listed monster at this dungeon level.
    pub fn monster_chances(&self, level: u32) -> Vec<(String, u32)> {
        self.monster_list
            .iter()
            .map(|name| {
                let weight = self
                    .monsters
                    .get(name)
                    .map_or(0, |def| level_value(&def.chance, level));
                (name.clone(), weight.max(0) as u32)
            })
            .collect()
    }

    /// `(kind, weight)` for every listed item at this dungeon level.
    pub fn item_chances(&self, level: u32) -> Vec<(String, u32)> {
        self.item_list
            .iter()
            .map(|name| {
                let weight = self
                    .items
                    .get(name)
                    .map_or(0, |def| level_value(&def.chance, level));
                (name.clone(), weight.max(0) as u32)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Slot, UseEffect};

    #[test]
    fn test_builtin_tables_load() {
        let defs = DefinitionTables::builtin().unwrap();
        assert!(!defs.monster_list.is_empty());
        assert!(!defs.item_list.is_empty());
    }

    #[test]
    fn test_monster_defaults_fill_optional_fields() {
        let json = r#"{
            "monster_list": ["grub"],
            "item_list": [],
            "monsters": {
                "grub": {
                    "glyph": "g", "color": [0, 255, 0],
                    "hp": 4, "defense": 0, "power": 1, "xp": 5,
                    "death_function": "monster_death",
                    "chance": [[10, 1]]
                }
            },
            "items": {}
        }"#;
        let defs = DefinitionTables::from_json(json).unwrap();
        let grub = defs.monster("grub").unwrap();
        assert_eq!(grub.species, "Humanoid");
        assert_eq!(grub.evade, 10);
        assert_eq!(grub.block, 0);
        assert_eq!(grub.accuracy, 12);
        assert!(!grub.unique);
        assert_eq!(grub.ai, None);
    }

    #[test]
    fn test_missing_required_field_is_config_error() {
        let json = r#"{
            "monster_list": ["grub"], "item_list": [],
            "monsters": { "grub": { "glyph": "g", "color": [0, 0, 0], "defense": 0,
                "power": 1, "xp": 5, "death_function": "monster_death", "chance": [[1, 1]] } },
            "items": {}
        }"#;
        assert!(matches!(
            DefinitionTables::from_json(json),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_death_behavior_fails_fast() {
        let json = r#"{
            "monster_list": ["grub"], "item_list": [],
            "monsters": { "grub": { "glyph": "g", "color": [0, 0, 0], "hp": 3, "defense": 0,
                "power": 1, "xp": 5, "death_function": "explode", "chance": [[1, 1]] } },
            "items": {}
        }"#;
        assert!(DefinitionTables::from_json(json).is_err());
    }

    #[test]
    fn test_unknown_slot_fails_fast() {
        let json = r#"{
            "monster_list": [], "item_list": ["tail ring"],
            "monsters": {},
            "items": { "tail ring": { "glyph": "o", "color": [0, 0, 0], "type": "equipment",
                "slot": "tail", "chance": [[1, 1]] } }
        }"#;
        assert!(matches!(
            DefinitionTables::from_json(json),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_list_entry_without_definition() {
        let json = r#"{ "monster_list": ["ghost"], "item_list": [], "monsters": {}, "items": {} }"#;
        assert!(matches!(
            DefinitionTables::from_json(json),
            Err(ConfigError::UndefinedKind { .. })
        ));
    }

    #[test]
    fn test_item_kinds_parse() {
        let defs = DefinitionTables::builtin().unwrap();
        match &defs.item("medical kit").unwrap().kind {
            ItemKind::Item {
                stackable,
                use_effect,
            } => {
                assert!(*stackable);
                assert_eq!(*use_effect, Some(UseEffect::Heal));
            }
            other => panic!("unexpected kind {:?}", other),
        }
        match &defs.item("riot shield").unwrap().kind {
            ItemKind::Equipment { slot, bonuses } => {
                assert_eq!(*slot, Slot::LeftHand);
                assert_eq!(bonuses.block, 6);
                assert_eq!(bonuses.power, 0);
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_chances_follow_list_order_and_level() {
        let defs = DefinitionTables::builtin().unwrap();
        let chances = defs.monster_chances(1);
        let names: Vec<&str> = chances.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, defs.monster_list.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(chances[0].1, 80);
        assert_eq!(chances[1].1, 0);
    }

    #[test]
    fn test_unknown_lookup_is_error() {
        let defs = DefinitionTables::builtin().unwrap();
        assert!(matches!(
            defs.monster("dragon"),
            Err(ConfigError::UnknownMonster(_))
        ));
    }
}
