//! ECS resources made available to systems.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – screen size, physics tuning and rules, loaded from INI
//! - `gamestate` – running or terminal state of the session
//! - `group` – per-kind entity lists in spawn order
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `score` – coins collected so far
//! - `scroll` – forward-only world scroll
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – wall-clock session time and frame count
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod group;
pub mod input;
pub mod score;
pub mod scroll;
pub mod texturestore;
pub mod worldtime;
