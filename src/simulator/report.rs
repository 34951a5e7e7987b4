//! Simulation report generation.

use crate::core::world::World;
use serde::Serialize;

/// Counters from one headless run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimReport {
    pub generated_at: String,
    pub seed: u64,
    pub race: String,
    pub title: String,

    pub turns_requested: u32,
    pub turns_taken: u32,
    pub steps: u64,
    pub survived: bool,

    pub player_level: i32,
    pub dungeon_level: u32,
    pub final_hp: i32,
    pub xp: i32,

    pub kills: u32,
    pub attacks: u32,
    pub items_picked_up: u32,
    pub items_used: u32,
    pub descents: u32,
    pub level_ups: usize,
    pub tiles_explored: usize,
    pub last_message: Option<String>,
}

/// Written by `--json`: the report plus the final snapshot.
#[derive(Debug, Serialize)]
pub struct SimDump<'a> {
    pub report: &'a SimReport,
    pub world: &'a World,
}

impl SimReport {
    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Seed {}: {} {}, {} of {} turns ({} steps)\n\n",
            self.seed, self.race, self.title, self.turns_taken, self.turns_requested, self.steps
        ));

        report.push_str("── OUTCOME ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Status:          {}\n",
            if self.survived { "alive" } else { "dead" }
        ));
        report.push_str(&format!("  Dungeon Level:   {}\n", self.dungeon_level));
        report.push_str(&format!("  Player Level:    {}\n", self.player_level));
        report.push_str(&format!("  Final HP:        {}\n", self.final_hp));
        report.push_str(&format!("  XP:              {}\n\n", self.xp));

        report.push_str("── ACTIVITY ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Kills:           {}\n", self.kills));
        report.push_str(&format!("  Attacks:         {}\n", self.attacks));
        report.push_str(&format!("  Items Picked Up: {}\n", self.items_picked_up));
        report.push_str(&format!("  Items Used:      {}\n", self.items_used));
        report.push_str(&format!("  Descents:        {}\n", self.descents));
        report.push_str(&format!("  Level-ups:       {}\n", self.level_ups));
        report.push_str(&format!("  Tiles Explored:  {}\n", self.tiles_explored));

        if let Some(message) = &self.last_message {
            report.push_str(&format!("\nLast message: {}\n", message));
        }
        report
    }

    pub fn to_json(&self, world: &World) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&SimDump {
            report: self,
            world,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_mentions_outcome() {
        let report = SimReport {
            seed: 9,
            race: "Human".to_string(),
            title: "Miner".to_string(),
            survived: false,
            kills: 3,
            last_message: Some("You died!".to_string()),
            ..Default::default()
        };
        let text = report.to_text();
        assert!(text.contains("Seed 9: Human Miner"));
        assert!(text.contains("dead"));
        assert!(text.contains("Kills:           3"));
        assert!(text.contains("You died!"));
    }
}
