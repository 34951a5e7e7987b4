//! Simulation configuration.

use crate::character::{Race, Title};

/// Configuration for a single headless run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Random seed for reproducibility
    pub seed: u64,

    /// Player turns to play before stopping
    pub turns: u32,

    pub race: Race,
    pub title: Title,

    /// Name given to the simulated character
    pub name: String,

    /// Write the report and final snapshot as JSON
    pub json: bool,

    /// Print the message log as it grows
    pub verbose: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            turns: 2_000,
            race: Race::Human,
            title: Title::SecurityOfficer,
            name: "Bot".to_string(),
            json: false,
            verbose: false,
        }
    }
}

impl SimConfig {
    /// Quick config for tests: small turn budget, fixed seed.
    pub fn quick(seed: u64, turns: u32) -> Self {
        Self {
            seed,
            turns,
            ..Default::default()
        }
    }

    /// Upper bound on loop iterations, including actions that cost no turn.
    pub fn max_steps(&self) -> u64 {
        u64::from(self.turns) * 4 + 16
    }
}
