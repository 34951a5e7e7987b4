//! Hollow - turn-based simulation core for a hollowed-asteroid roguelike.
//!
//! The core decides what exists in the world, how levels are generated,
//! how combat is resolved and how monsters act each turn. Rendering,
//! input and field of view are collaborators behind the traits in
//! [`core::services`](crate::core::services); the [`simulator`] module provides headless stand-ins.

pub mod abilities;
pub mod ai;
pub mod character;
pub mod combat;
pub mod core;
pub mod definitions;
pub mod dungeon;
pub mod entity;
pub mod game;
pub mod inventory;
pub mod progression;
pub mod save;
pub mod simulator;
