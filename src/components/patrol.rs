//! Back-and-forth walking used by enemies.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Patrol {
    pub speed: f32,
    /// +1.0 walks right, -1.0 walks left.
    pub direction: f32,
}

impl Default for Patrol {
    fn default() -> Self {
        Self {
            speed: 2.0,
            direction: 1.0,
        }
    }
}

impl Patrol {
    pub fn step(&self) -> f32 {
        self.speed * self.direction
    }

    pub fn turn(&mut self) {
        self.direction = -self.direction;
    }
}
