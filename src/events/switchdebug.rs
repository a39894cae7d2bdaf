//! F11 debug overlay toggle.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::debugmode::DebugMode;
use crate::resources::group::EntityGroups;

/// Triggered by the input system when F11 goes down.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Insert [`DebugMode`] when absent, remove it when present.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
    groups: Option<Res<EntityGroups>>,
) {
    if debug_mode.is_some() {
        commands.remove_resource::<DebugMode>();
        debug!("Debug overlay off");
        return;
    }
    commands.insert_resource(DebugMode {});
    let tracked = groups.map(|g| g.total()).unwrap_or_default();
    debug!("Debug overlay on ({} tracked entities)", tracked);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_debug_mode_back_and_forth() {
        let mut world = World::new();
        world.add_observer(switch_debug_observer);
        world.flush();

        world.trigger(SwitchDebugEvent {});
        world.flush();
        assert!(world.contains_resource::<DebugMode>());

        world.trigger(SwitchDebugEvent {});
        world.flush();
        assert!(!world.contains_resource::<DebugMode>());
    }
}
