//! Shared plumbing: constants, the world context, message log, random
//! draws, errors and the external service traits.

pub mod color;
pub mod constants;
pub mod error;
pub mod messages;
pub mod rng;
pub mod services;
pub mod world;

pub use color::Color;
pub use error::{ConfigError, DiceError, SaveError};
pub use messages::{LogLine, MessageLog};
pub use rng::{random_choice, random_choice_index, uniform_int};
pub use services::{AllVisible, NothingVisible, PlayerInput, Visibility};
pub use world::{step_towards, GameState, World};
