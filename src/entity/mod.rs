//! Entity & component model.

pub mod components;
pub mod store;
pub mod types;

pub use components::*;
pub use store::*;
pub use types::*;
