//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame from the session clock.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Record `now` (seconds since the session started) and count the frame.
///
/// Elapsed time is taken from the clock rather than summed from frame deltas,
/// so it never drifts.
pub fn update_world_time(world: &mut World, now: f64) {
    let mut wt = world.resource_mut::<WorldTime>();
    wt.delta = (now - wt.elapsed).max(0.0) as f32;
    wt.elapsed = now;
    wt.frame_count += 1;
}
