//! Kinematic body for the player.
//!
//! The [`RigidBody`] stores the player's velocity and ground contact. It is the
//! payload of [`EntityKind::Player`](super::entitykind::EntityKind::Player) and
//! owns the only input-driven physics in the game: horizontal movement, jump,
//! gravity, integration and platform landing, all in per-tick units (no delta
//! time scaling, the simulation is frame-stepped).

use raylib::prelude::Vector2;

use super::boxcollider::BoxCollider;

/// Movement keys held this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Tuning values for the player's physics, in world units per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub gravity: f32,
    /// Vertical velocity set on jump. Negative is up.
    pub jump_strength: f32,
    pub move_speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidBody {
    pub velocity: Vector2,
    pub on_ground: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    pub fn new() -> Self {
        Self {
            velocity: Vector2::zero(),
            on_ground: false,
        }
    }

    /// Run one tick of input, gravity, integration and platform collision.
    ///
    /// Platforms are tested in slice order. Each overlapping platform hit
    /// while falling snaps the body's bottom to its top; since the snap zeroes
    /// the vertical velocity, later platforms in the same pass cannot snap again.
    pub fn handle_input_and_move(
        &mut self,
        collider: &mut BoxCollider,
        keys: MoveKeys,
        platforms: &[BoxCollider],
        physics: &Physics,
    ) {
        // Left is tested first, so holding both walks left.
        self.velocity.x = if keys.left {
            -physics.move_speed
        } else if keys.right {
            physics.move_speed
        } else {
            0.0
        };

        if keys.jump && self.on_ground {
            self.velocity.y = physics.jump_strength;
            self.on_ground = false;
        }

        self.velocity.y += physics.gravity;

        collider.pos.x += self.velocity.x;
        collider.pos.y += self.velocity.y;

        self.resolve_platforms(collider, platforms);
    }

    fn resolve_platforms(&mut self, collider: &mut BoxCollider, platforms: &[BoxCollider]) {
        self.on_ground = false;
        for platform in platforms {
            if collider.overlaps(platform) && self.velocity.y > 0.0 {
                collider.set_bottom(platform.top());
                self.velocity.y = 0.0;
                self.on_ground = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn physics() -> Physics {
        Physics {
            gravity: 0.5,
            jump_strength: -15.0,
            move_speed: 5.0,
        }
    }

    fn ground() -> Vec<BoxCollider> {
        (0..5)
            .map(|i| BoxCollider::new(i as f32 * 200.0, 550.0, 200.0, 50.0))
            .collect()
    }

    #[test]
    fn first_tick_from_spawn_without_platforms() {
        let mut body = RigidBody::new();
        let mut player = BoxCollider::new(100.0, 500.0, 50.0, 70.0);
        body.handle_input_and_move(&mut player, MoveKeys::default(), &[], &physics());
        assert!((body.velocity.y - 0.5).abs() < EPSILON);
        assert!((player.top() - 500.5).abs() < EPSILON);
        assert_eq!(player.left(), 100.0);
        assert!(!body.on_ground);
    }

    #[test]
    fn gravity_accumulates_while_falling() {
        let mut body = RigidBody::new();
        let mut player = BoxCollider::new(100.0, 0.0, 50.0, 70.0);
        let mut last = body.velocity.y;
        for _ in 0..30 {
            body.handle_input_and_move(&mut player, MoveKeys::default(), &[], &physics());
            assert!(body.velocity.y > last);
            last = body.velocity.y;
        }
    }

    #[test]
    fn falling_onto_platform_lands_on_its_top() {
        for x in [-45.0, 0.0, 75.0, 180.0, 349.0] {
            let mut body = RigidBody::new();
            body.velocity.y = 6.0;
            let mut player = BoxCollider::new(x, 475.0, 50.0, 70.0);
            body.handle_input_and_move(&mut player, MoveKeys::default(), &ground(), &physics());
            assert_eq!(player.bottom(), 550.0, "x = {x}");
            assert_eq!(body.velocity.y, 0.0);
            assert!(body.on_ground);
        }
    }

    #[test]
    fn standing_player_stays_on_ground() {
        let mut body = RigidBody::new();
        let mut player = BoxCollider::new(100.0, 480.0, 50.0, 70.0);
        for _ in 0..10 {
            body.handle_input_and_move(&mut player, MoveKeys::default(), &ground(), &physics());
            assert_eq!(player.bottom(), 550.0);
            assert!(body.on_ground);
        }
    }

    #[test]
    fn rising_through_platform_does_not_snap() {
        let mut body = RigidBody::new();
        body.velocity.y = -10.0;
        let mut player = BoxCollider::new(100.0, 560.0, 50.0, 70.0);
        body.handle_input_and_move(&mut player, MoveKeys::default(), &ground(), &physics());
        assert!((player.top() - 550.5).abs() < EPSILON);
        assert!(!body.on_ground);
    }

    #[test]
    fn horizontal_velocity_is_reset_every_tick() {
        let keys = [
            (MoveKeys { left: true, ..Default::default() }, -5.0),
            (MoveKeys { right: true, ..Default::default() }, 5.0),
            (MoveKeys { left: true, right: true, jump: false }, -5.0),
            (MoveKeys::default(), 0.0),
        ];
        let mut body = RigidBody::new();
        let mut player = BoxCollider::new(100.0, 480.0, 50.0, 70.0);
        for (k, expected) in keys {
            let before = player.left();
            body.handle_input_and_move(&mut player, k, &ground(), &physics());
            assert_eq!(body.velocity.x, expected);
            assert_eq!(player.left() - before, expected);
        }
    }

    #[test]
    fn holding_both_directions_walks_left() {
        let both = MoveKeys { left: true, right: true, jump: false };
        let mut body = RigidBody::new();
        let mut player = BoxCollider::new(100.0, 480.0, 50.0, 70.0);
        for _ in 0..3 {
            body.handle_input_and_move(&mut player, both, &ground(), &physics());
        }
        assert_eq!(body.velocity.x, -5.0);
        assert!((player.left() - 85.0).abs() < EPSILON);
    }

    #[test]
    fn jump_requires_ground_contact() {
        let jump = MoveKeys { jump: true, ..Default::default() };
        let mut body = RigidBody::new();
        let mut player = BoxCollider::new(100.0, 480.0, 50.0, 70.0);

        // Land first.
        body.handle_input_and_move(&mut player, MoveKeys::default(), &ground(), &physics());
        assert!(body.on_ground);

        body.handle_input_and_move(&mut player, jump, &ground(), &physics());
        assert!((body.velocity.y - (-14.5)).abs() < EPSILON);
        assert!(!body.on_ground);
        assert!((player.top() - 465.5).abs() < EPSILON);

        // Holding jump mid-air does nothing extra.
        body.handle_input_and_move(&mut player, jump, &ground(), &physics());
        assert!((body.velocity.y - (-14.0)).abs() < EPSILON);
    }

    #[test]
    fn boundary_between_platforms_lands_once() {
        let mut body = RigidBody::new();
        body.velocity.y = 2.0;
        // Straddles the seam at x = 200.
        let mut player = BoxCollider::new(180.0, 479.0, 50.0, 70.0);
        body.handle_input_and_move(&mut player, MoveKeys::default(), &ground(), &physics());
        assert_eq!(player.bottom(), 550.0);
        assert!(body.on_ground);
    }
}
