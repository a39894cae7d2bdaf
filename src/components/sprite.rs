//! Sprite component.
//!
//! A sprite only names the texture to draw; the destination rectangle comes
//! from the entity's [`BoxCollider`](super::boxcollider::BoxCollider) and the
//! whole texture is stretched to fit it.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub tex_key: &'static str,
}
