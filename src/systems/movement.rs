use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::entitykind::{EntityKind, UpdateContext};
use crate::resources::gameconfig::GameConfig;
use crate::resources::scroll::ScrollManager;
use crate::resources::worldtime::WorldTime;

/// Apply this frame's scroll and kind-specific motion to every entity.
pub fn entity_update_system(
    mut query: Query<(&mut BoxCollider, &mut EntityKind)>,
    scroll: Res<ScrollManager>,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
) {
    let ctx = UpdateContext {
        screen_width: config.screen_width as f32,
        time_ms: time.elapsed_ms(),
    };
    for (mut collider, mut kind) in query.iter_mut() {
        kind.update(&mut collider, scroll.scroll_amount, &ctx);
    }
}
