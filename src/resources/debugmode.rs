//! Debug toggle resource.
//!
//! The mere presence of this resource enables the debug overlay. Remove it to
//! disable.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws collider outlines and stats.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
