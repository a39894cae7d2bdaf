//! Vertical bobbing used by coins.

/// Sine bob around a fixed baseline, driven by wall-clock time so the bob
/// speed does not depend on the frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bob {
    pub base_y: f32,
    pub amplitude: f32,
    /// Radians per second.
    pub speed: f32,
}

impl Bob {
    pub fn new(base_y: f32) -> Self {
        Self {
            base_y,
            amplitude: 10.0,
            speed: 2.0,
        }
    }

    /// Top edge at `time_ms` milliseconds since the session started.
    pub fn y_at(&self, time_ms: f32) -> f32 {
        self.base_y + self.amplitude * (time_ms * self.speed / 1000.0).sin()
    }
}
