//! Game systems.
//!
//! Submodules overview, in tick order:
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`gamestate`] – quit and win checks, plus the running-state run condition
//! - [`playercontrol`] – player movement, gravity and platform landing
//! - [`scroll`] – compute this frame's world scroll from the player position
//! - [`movement`] – scroll and per-kind motion for every entity
//! - [`collision`] – coin pickup and enemy contact
//! - [`render`] – draw the world, HUD, debug overlay and end screen using Raylib
//! - [`time`] – advance wall-clock session time

pub mod collision;
pub mod gamestate;
pub mod input;
pub mod movement;
pub mod playercontrol;
pub mod render;
pub mod scroll;
pub mod time;
