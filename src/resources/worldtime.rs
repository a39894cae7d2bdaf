use bevy_ecs::prelude::Resource;

/// Wall-clock time of the session, sampled once per frame.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldTime {
    /// Seconds since the session started, read from the clock each frame.
    pub elapsed: f64,
    /// Seconds between the last two samples.
    pub delta: f32,
    /// Frames simulated so far.
    pub frame_count: u64,
}

impl WorldTime {
    pub fn elapsed_ms(&self) -> f32 {
        (self.elapsed * 1000.0) as f32
    }
}
