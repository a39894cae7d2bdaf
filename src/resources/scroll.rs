//! Forward-only horizontal camera.
//!
//! The world scrolls instead of the camera: whenever the player walks past
//! the threshold, every entity is shifted left by the overshoot, which pins
//! the player at the threshold on screen.

use bevy_ecs::prelude::Resource;
use log::trace;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScrollManager {
    /// Screen x beyond which the world scrolls.
    pub threshold: f32,
    /// Total distance scrolled so far. Never decreases.
    pub world_shift: f32,
    /// Scroll applied on the current frame.
    pub scroll_amount: f32,
}

impl ScrollManager {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            world_shift: 0.0,
            scroll_amount: 0.0,
        }
    }

    /// Compute this frame's scroll from the player's screen x.
    pub fn update(&mut self, player_x: f32) -> f32 {
        let shift = if player_x > self.threshold {
            player_x - self.threshold
        } else {
            0.0
        };
        if shift > 0.0 {
            self.world_shift += shift;
            trace!("Scrolled {} (world shift {})", shift, self.world_shift);
        }
        self.scroll_amount = shift;
        shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_scroll_at_or_before_threshold() {
        let mut sm = ScrollManager::new(300.0);
        for x in [-50.0, 0.0, 100.0, 299.9, 300.0] {
            assert_eq!(sm.update(x), 0.0);
        }
        assert_eq!(sm.world_shift, 0.0);
        assert_eq!(sm.scroll_amount, 0.0);
    }

    #[test]
    fn scroll_is_overshoot_past_threshold() {
        let mut sm = ScrollManager::new(300.0);
        assert_eq!(sm.update(305.0), 5.0);
        assert_eq!(sm.scroll_amount, 5.0);
        assert_eq!(sm.update(420.0), 120.0);
        assert_eq!(sm.world_shift, 125.0);
    }

    #[test]
    fn world_shift_is_sum_of_deltas() {
        let mut sm = ScrollManager::new(300.0);
        let xs = [100.0, 305.0, 300.0, 310.0, 250.0, 302.5, 600.0];
        let total: f32 = xs.iter().map(|x| sm.update(*x)).sum();
        assert_eq!(sm.world_shift, total);
        assert_eq!(total, 317.5);
    }

    #[test]
    fn scroll_amount_resets_when_behind_threshold() {
        let mut sm = ScrollManager::new(300.0);
        sm.update(350.0);
        sm.update(200.0);
        assert_eq!(sm.scroll_amount, 0.0);
        assert_eq!(sm.world_shift, 50.0);
    }
}
