//! Axis-aligned bounding box component.
//!
//! Every entity in the level is described by a [`BoxCollider`]: its top-left
//! corner and its size in world units. The same rectangle is used for
//! platform collision, pickup/contact tests, and as the destination rectangle
//! when drawing the entity's texture.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    /// Top-left corner.
    pub pos: Vector2,
    /// Width and height, both positive.
    pub size: Vector2,
}

impl BoxCollider {
    /// Create a collider with its top-left corner at `(x, y)`.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Self {
            pos: Vector2::new(x, y),
            size: Vector2::new(width, height),
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Move horizontally so the left edge sits at `x`.
    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    /// Move vertically so the bottom edge sits at `y`.
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Shift horizontally by `dx` (negative moves left).
    pub fn shift_x(&mut self, dx: f32) {
        self.pos.x += dx;
    }

    /// AABB vs AABB overlap test. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// The collider as a raylib rectangle, for drawing.
    pub fn to_rectangle(&self) -> Rectangle {
        Rectangle {
            x: self.pos.x,
            y: self.pos.y,
            width: self.size.x,
            height: self.size.y,
        }
    }
}
