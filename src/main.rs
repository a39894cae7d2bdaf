//! Scroll Runner main entry point.
//!
//! A small side-scrolling platformer written in Rust using:
//! - **raylib** for windowing, textures and text
//! - **bevy_ecs** for the world, resources and the per-tick schedule
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the raylib window and load the textures
//! 2. Insert the session resources and spawn the level
//! 3. Each frame: advance time, poll input, run the simulation tick, draw
//! 4. On win or loss, hold the end message for a couple of seconds and exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use scrollrunner::events::gamestate::observe_gamestate_change_event;
use scrollrunner::events::switchdebug::switch_debug_observer;
use scrollrunner::game;
use scrollrunner::resources::debugmode::DebugMode;
use scrollrunner::resources::gameconfig::GameConfig;
use scrollrunner::resources::gamestate::{GameState, GameStates};
use scrollrunner::systems::input::update_input_state;
use scrollrunner::systems::render::render_system;
use scrollrunner::systems::time::update_world_time;

/// Scroll Runner
#[derive(Parser)]
#[command(version, about = "Run right, grab coins, dodge enemies.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for the cloud layout. Random when omitted.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Start with the debug overlay enabled (toggle with F11).
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using default settings", e);
    }

    let (screen_w, screen_h) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(screen_w as i32, screen_h as i32)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);
    // Only the window close button quits.
    rl.set_exit_key(None);

    let textures = match game::load_textures(&mut rl, &thread, &config.asset_dir) {
        Ok(textures) => textures,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let end_screen_seconds = config.end_screen_seconds as f64;
    let seed = cli.seed.unwrap_or_else(|| fastrand::u64(..));
    info!("Starting session (cloud seed {})", seed);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::init_session(&mut world, config, seed);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_non_send_resource(textures);
    let session_start = rl.get_time();
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.add_observer(switch_debug_observer);
    world.add_observer(observe_gamestate_change_event);
    world.flush();

    let mut input = Schedule::default();
    input.add_systems(update_input_state);
    let mut tick = game::build_tick_schedule();

    // --------------- Main loop ---------------
    loop {
        let now = world.non_send_resource::<raylib::RaylibHandle>().get_time() - session_start;
        update_world_time(&mut world, now);

        input.run(&mut world);
        tick.run(&mut world);

        if !world.resource::<GameState>().is_running() {
            break;
        }
        render_system(&mut world);
    }

    // --------------- End screen ---------------
    let outcome = world.resource::<GameState>().get();
    if matches!(outcome, GameStates::Won | GameStates::Lost) {
        let start = world.non_send_resource::<raylib::RaylibHandle>().get_time();
        loop {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            if rl.window_should_close() || rl.get_time() - start >= end_screen_seconds {
                break;
            }
            render_system(&mut world);
        }
    }
    info!("Bye!");
}
