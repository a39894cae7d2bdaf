//! ECS components for level entities.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangle used for collision and drawing
//! - [`entitykind`] – closed set of entity kinds and their per-tick update
//! - [`rigidbody`] – player velocity, ground contact and platform physics
//! - [`bob`] – coin bobbing parameters
//! - [`patrol`] – enemy walking parameters
//! - [`drift`] – cloud drift parameters
//! - [`sprite`] – texture key used by the renderer
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod bob;
pub mod boxcollider;
pub mod drift;
pub mod entitykind;
pub mod patrol;
pub mod rigidbody;
pub mod sprite;
pub mod zindex;
