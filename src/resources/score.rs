use bevy_ecs::prelude::Resource;

/// Coins collected this session.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub coins: u32,
}
