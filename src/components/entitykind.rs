//! Closed set of entity kinds and their per-tick update rule.
//!
//! Every level entity carries one [`EntityKind`] next to its
//! [`BoxCollider`]. The kind holds whatever state that kind needs and
//! [`EntityKind::update`] applies the world scroll plus the kind-specific
//! behavior in one place:
//!
//! | kind     | update                                                        |
//! |----------|---------------------------------------------------------------|
//! | Player   | shift left by the scroll amount (physics ran earlier)         |
//! | Platform | shift left by the scroll amount                               |
//! | Coin     | shift left, then bob vertically around its baseline           |
//! | Enemy    | shift left, walk, turn around at the screen edges             |
//! | Cloud    | shift left by scroll plus drift, wrap to the right when gone  |

use bevy_ecs::prelude::Component;

use super::bob::Bob;
use super::boxcollider::BoxCollider;
use super::drift::Drift;
use super::patrol::Patrol;
use super::rigidbody::RigidBody;

/// Per-frame inputs shared by every entity update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateContext {
    pub screen_width: f32,
    /// Milliseconds since the session started.
    pub time_ms: f32,
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    Player(RigidBody),
    Platform,
    Coin(Bob),
    Enemy(Patrol),
    Cloud(Drift),
}

impl EntityKind {
    /// Advance this entity by one tick given the world scroll for the frame.
    pub fn update(&mut self, collider: &mut BoxCollider, scroll_amount: f32, ctx: &UpdateContext) {
        match self {
            EntityKind::Player(_) | EntityKind::Platform => {
                collider.shift_x(-scroll_amount);
            }
            EntityKind::Coin(bob) => {
                collider.shift_x(-scroll_amount);
                collider.pos.y = bob.y_at(ctx.time_ms);
            }
            EntityKind::Enemy(patrol) => {
                collider.shift_x(-scroll_amount);
                collider.shift_x(patrol.step());
                // Bounds are the visible screen, not the level.
                if collider.left() < 0.0 || collider.right() > ctx.screen_width {
                    patrol.turn();
                }
            }
            EntityKind::Cloud(drift) => {
                collider.shift_x(-(scroll_amount + drift.speed));
                if collider.right() < 0.0 {
                    collider.set_left(ctx.screen_width);
                }
            }
        }
    }

    /// Key of the texture used to draw this kind.
    pub fn tex_key(&self) -> &'static str {
        match self {
            EntityKind::Player(_) => "player",
            EntityKind::Platform => "platform",
            EntityKind::Coin(_) => "coin",
            EntityKind::Enemy(_) => "enemy",
            EntityKind::Cloud(_) => "cloud",
        }
    }

    /// Draw order: player first, clouds last (on top).
    pub fn z_index(&self) -> i32 {
        match self {
            EntityKind::Player(_) => 0,
            EntityKind::Platform => 1,
            EntityKind::Coin(_) => 2,
            EntityKind::Enemy(_) => 3,
            EntityKind::Cloud(_) => 4,
        }
    }
}
