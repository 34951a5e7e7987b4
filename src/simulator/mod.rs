//! Headless simulator: a seeded bot plays the core end to end.
//!
//! The bot stands in for the player's input layer and [`TorchFov`] for the
//! field-of-view service, so a run exercises generation, combat, AI,
//! inventory and leveling exactly as a real game would.

mod bot;
mod config;
mod fov;
mod report;
mod runner;

pub use bot::{first_step, Bot, BotMove};
pub use config::SimConfig;
pub use fov::{line_of_sight, TorchFov};
pub use report::{SimDump, SimReport};
pub use runner::{run_simulation, run_with, SimRun};
