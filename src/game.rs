//! Session setup and the per-tick schedule.
//!
//! [`init_session`] inserts the session resources and spawns the fixed level;
//! [`build_tick_schedule`] chains the simulation systems in their fixed order.
//! Both work on a bare [`World`], so the whole simulation runs headless in
//! tests; only [`load_textures`] and the renderer need a raylib window.

use std::path::Path;

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use log::info;
use raylib::{RaylibHandle, RaylibThread};

use crate::components::bob::Bob;
use crate::components::boxcollider::BoxCollider;
use crate::components::drift::Drift;
use crate::components::entitykind::EntityKind;
use crate::components::patrol::Patrol;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameState;
use crate::resources::group::EntityGroups;
use crate::resources::input::InputState;
use crate::resources::score::Score;
use crate::resources::scroll::ScrollManager;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::{coin_pickup_system, enemy_contact_system};
use crate::systems::gamestate::{quit_system, state_is_running, win_check_system};
use crate::systems::movement::entity_update_system;
use crate::systems::playercontrol::player_control_system;
use crate::systems::scroll::scroll_system;

pub const PLAYER_START: (f32, f32) = (100.0, 500.0);
pub const PLAYER_SIZE: (f32, f32) = (50.0, 70.0);
pub const PLATFORM_SIZE: (f32, f32) = (200.0, 50.0);
pub const COIN_SIZE: (f32, f32) = (20.0, 20.0);
pub const ENEMY_SIZE: (f32, f32) = (50.0, 50.0);
pub const CLOUD_SIZE: (f32, f32) = (100.0, 60.0);
pub const CLOUD_COUNT: usize = 5;

const GROUND_Y: f32 = 550.0;
const ITEM_Y: f32 = 500.0;

/// Texture keys and the files they are loaded from.
const TEXTURES: [(&str, &str); 6] = [
    ("background", "background_sea.png"),
    ("platform", "platform_grass.png"),
    ("player", "mario.png"),
    ("coin", "coin.png"),
    ("enemy", "enemy.png"),
    ("cloud", "cloud.png"),
];

/// Load every texture the game draws from `dir`.
pub fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    dir: &Path,
) -> Result<TextureStore, String> {
    let mut store = TextureStore::new();
    for (key, file) in TEXTURES {
        let path = dir.join(file);
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("Asset path is not valid UTF-8: {:?}", path))?;
        let texture = rl
            .load_texture(thread, path_str)
            .map_err(|e| format!("Failed to load texture '{}' from {}: {:?}", key, path_str, e))?;
        store.insert(key, texture);
    }
    info!("Loaded {} textures from {}", store.len(), dir.display());
    Ok(store)
}

/// Insert all session resources, with nothing spawned yet.
pub fn insert_session_resources(world: &mut World, config: GameConfig) {
    world.insert_resource(ScrollManager::new(config.scroll_threshold));
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(WorldTime::default());
    world.insert_resource(Score::default());
    world.insert_resource(GameState::new());
    world.insert_resource(EntityGroups::default());
}

/// Spawn one entity and register it in [`EntityGroups`].
pub fn spawn_entity(world: &mut World, collider: BoxCollider, kind: EntityKind) -> Entity {
    let entity = world
        .spawn((
            collider,
            kind,
            Sprite {
                tex_key: kind.tex_key(),
            },
            ZIndex(kind.z_index()),
        ))
        .id();
    world.resource_mut::<EntityGroups>().register(entity, &kind);
    entity
}

/// Spawn the fixed level. Only the clouds use `rng`.
pub fn spawn_level(world: &mut World, rng: &mut fastrand::Rng) {
    let screen_width = world.resource::<GameConfig>().screen_width as i32;

    spawn_entity(
        world,
        BoxCollider::new(PLAYER_START.0, PLAYER_START.1, PLAYER_SIZE.0, PLAYER_SIZE.1),
        EntityKind::Player(RigidBody::new()),
    );

    for x in (0..5000).step_by(200) {
        spawn_entity(
            world,
            BoxCollider::new(x as f32, GROUND_Y, PLATFORM_SIZE.0, PLATFORM_SIZE.1),
            EntityKind::Platform,
        );
    }

    for x in (300..3000).step_by(400) {
        spawn_entity(
            world,
            BoxCollider::new(x as f32, ITEM_Y, COIN_SIZE.0, COIN_SIZE.1),
            EntityKind::Coin(Bob::new(ITEM_Y)),
        );
    }

    for x in (500..3000).step_by(600) {
        spawn_entity(
            world,
            BoxCollider::new(x as f32, ITEM_Y, ENEMY_SIZE.0, ENEMY_SIZE.1),
            EntityKind::Enemy(Patrol::default()),
        );
    }

    for _ in 0..CLOUD_COUNT {
        let x = rng.i32(0..=screen_width) as f32;
        let y = rng.i32(50..=200) as f32;
        spawn_entity(
            world,
            BoxCollider::new(x, y, CLOUD_SIZE.0, CLOUD_SIZE.1),
            EntityKind::Cloud(Drift::random(rng)),
        );
    }

    let groups = world.resource::<EntityGroups>();
    info!(
        "Spawned level: {} platforms, {} coins, {} enemies, {} clouds",
        groups.platforms.len(),
        groups.coins.len(),
        groups.enemies.len(),
        groups.clouds.len()
    );
}

/// Resources plus the level, with clouds laid out from `seed`.
pub fn init_session(world: &mut World, config: GameConfig, seed: u64) {
    insert_session_resources(world, config);
    let mut rng = fastrand::Rng::with_seed(seed);
    spawn_level(world, &mut rng);
}

/// The simulation tick: quit, player, scroll, entity update, coins, enemies, win.
///
/// Every step after the quit check runs only while the session is running, so
/// the first terminal state reached in a tick stops the rest of it.
pub fn build_tick_schedule() -> Schedule {
    let mut tick = Schedule::default();
    tick.set_executor_kind(ExecutorKind::SingleThreaded);
    tick.add_systems(
        (
            quit_system,
            player_control_system.run_if(state_is_running),
            scroll_system.run_if(state_is_running),
            entity_update_system.run_if(state_is_running),
            coin_pickup_system.run_if(state_is_running),
            enemy_contact_system.run_if(state_is_running),
            win_check_system.run_if(state_is_running),
        )
            .chain(),
    );
    tick
}
