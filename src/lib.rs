//! Scroll Runner library.
//!
//! Exposes the game's ECS components, resources, systems and events, plus the
//! session setup in [`game`], so the simulation can be driven headless from
//! integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
