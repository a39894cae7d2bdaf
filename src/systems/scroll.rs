//! Scroll system: turn the player's position into this frame's world scroll.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::resources::group::EntityGroups;
use crate::resources::scroll::ScrollManager;

pub fn scroll_system(
    query: Query<&BoxCollider>,
    groups: Res<EntityGroups>,
    mut scroll: ResMut<ScrollManager>,
) {
    let player_x = groups
        .player
        .and_then(|p| query.get(p).ok())
        .map(|c| c.left());
    match player_x {
        Some(x) => {
            scroll.update(x);
        }
        None => scroll.scroll_amount = 0.0,
    }
}
