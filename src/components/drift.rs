//! Background drift used by clouds.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    /// Extra leftward motion per tick on top of the world scroll.
    pub speed: f32,
}

impl Drift {
    /// Pick a drift speed in `[0.5, 1.0)`.
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self {
            speed: 0.5 + 0.5 * rng.f32(),
        }
    }
}
