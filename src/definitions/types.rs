use crate::ai::AiKind;
use crate::core::color::Color;
use crate::core::constants::{DEFAULT_ACCURACY, DEFAULT_BLOCK, DEFAULT_EVADE, DEFAULT_SPECIES};
use crate::entity::{Components, DeathBehavior, Equipment, Fighter, Item, Slot, StatBonuses, UseEffect};
use serde::{Deserialize, Serialize};

/// `(value, threshold_level)` pairs, see [`crate::dungeon::level_value`].
pub type LevelTable = Vec<(i32, u32)>;

fn default_species() -> String {
    DEFAULT_SPECIES.to_string()
}

fn default_evade() -> i32 {
    DEFAULT_EVADE
}

fn default_block() -> i32 {
    DEFAULT_BLOCK
}

fn default_accuracy() -> i32 {
    DEFAULT_ACCURACY
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterDef {
    pub glyph: char,
    pub color: [u8; 3],
    pub hp: i32,
    pub defense: i32,
    pub power: i32,
    pub xp: i32,
    #[serde(rename = "death_function")]
    pub death: DeathBehavior,
    #[serde(default)]
    pub ai: Option<AiKind>,
    #[serde(default = "default_species")]
    pub species: String,
    #[serde(default = "default_evade")]
    pub evade: i32,
    #[serde(default = "default_block")]
    pub block: i32,
    #[serde(default = "default_accuracy")]
    pub accuracy: i32,
    pub chance: LevelTable,
    #[serde(default)]
    pub unique: bool,
}

impl MonsterDef {
    pub fn color(&self) -> Color {
        Color::from(self.color)
    }

    pub fn fighter(&self) -> Fighter {
        Fighter {
            species: self.species.clone(),
            base_evade: self.evade,
            base_block: self.block,
            base_accuracy: self.accuracy,
            ..Fighter::new(self.hp, self.defense, self.power, self.xp, self.death)
        }
    }

    pub fn components(&self) -> Components {
        Components::monster(self.fighter(), self.ai.map(AiKind::behavior))
    }
}

/// Plain item or equippable gear, tagged by `"type"` in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    Item {
        #[serde(default)]
        stackable: bool,
        #[serde(default)]
        use_effect: Option<UseEffect>,
    },
    Equipment {
        slot: Slot,
        #[serde(default)]
        bonuses: StatBonuses,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDef {
    pub glyph: char,
    pub color: [u8; 3],
    #[serde(flatten)]
    pub kind: ItemKind,
    pub chance: LevelTable,
}

impl ItemDef {
    pub fn color(&self) -> Color {
        Color::from(self.color)
    }

    pub fn components(&self) -> Components {
        match &self.kind {
            ItemKind::Item {
                stackable,
                use_effect,
            } => Components::item(Item {
                stackable: *stackable,
                use_effect: *use_effect,
            }),
            ItemKind::Equipment { slot, bonuses } => {
                Components::equipment(Equipment::new(*slot, *bonuses))
            }
        }
    }
}
