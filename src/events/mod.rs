//! Event types and observers.
//!
//! Submodules:
//! - [`gamestate`] – emitted when the session reaches a terminal state
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod gamestate;
pub mod switchdebug;
