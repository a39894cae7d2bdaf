//! Game configuration resource.
//!
//! Holds the screen size, physics tuning, camera threshold and win rule for a
//! session. Values start at safe defaults matching the stock game and can be
//! overridden from an INI file.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//! title = Scroll Runner
//!
//! [physics]
//! gravity = 0.5
//! jump_strength = -15
//! move_speed = 5
//!
//! [camera]
//! scroll_threshold = 300
//!
//! [rules]
//! coins_to_win = 20
//! end_screen_seconds = 2
//!
//! [assets]
//! dir = ./assets
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::rigidbody::Physics;

const DEFAULT_SCREEN_WIDTH: u32 = 800;
const DEFAULT_SCREEN_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Scroll Runner";
const DEFAULT_GRAVITY: f32 = 0.5;
const DEFAULT_JUMP_STRENGTH: f32 = -15.0;
const DEFAULT_MOVE_SPEED: f32 = 5.0;
const DEFAULT_SCROLL_THRESHOLD: f32 = 300.0;
const DEFAULT_COINS_TO_WIN: u32 = 20;
const DEFAULT_END_SCREEN_SECONDS: f32 = 2.0;
const DEFAULT_ASSET_DIR: &str = "./assets";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Unwrap a typed INI lookup, warning about values that fail to parse.
fn parsed<T>(value: Result<Option<T>, String>, section: &str, key: &str) -> Option<T> {
    match value {
        Ok(v) => v,
        Err(e) => {
            warn!("Ignoring [{}] {}: {}", section, key, e);
            None
        }
    }
}

fn uint_value(config: &Ini, section: &str, key: &str) -> Option<u64> {
    parsed(config.getuint(section, key), section, key)
}

fn float_value(config: &Ini, section: &str, key: &str) -> Option<f64> {
    parsed(config.getfloat(section, key), section, key)
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Screen width in pixels; also the enemy patrol and cloud wrap bound.
    pub screen_width: u32,
    /// Screen height in pixels.
    pub screen_height: u32,
    /// Target ticks (and frames) per second.
    pub target_fps: u32,
    /// Window title.
    pub title: String,
    /// Added to the player's vertical velocity every tick.
    pub gravity: f32,
    /// Vertical velocity on jump. Negative is up.
    pub jump_strength: f32,
    /// Horizontal player speed per tick.
    pub move_speed: f32,
    /// Player x beyond which the world scrolls.
    pub scroll_threshold: f32,
    /// Coins needed to win.
    pub coins_to_win: u32,
    /// How long the end-of-session message stays up.
    pub end_screen_seconds: f32,
    /// Directory holding the textures.
    pub asset_dir: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with the default values.
    pub fn new() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            gravity: DEFAULT_GRAVITY,
            jump_strength: DEFAULT_JUMP_STRENGTH,
            move_speed: DEFAULT_MOVE_SPEED,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            coins_to_win: DEFAULT_COINS_TO_WIN,
            end_screen_seconds: DEFAULT_END_SCREEN_SECONDS,
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file {:?}: {}", self.config_path, e))?;

        // [window] section
        if let Some(width) = uint_value(&config, "window", "width") {
            self.screen_width = width as u32;
        }
        if let Some(height) = uint_value(&config, "window", "height") {
            self.screen_height = height as u32;
        }
        if let Some(fps) = uint_value(&config, "window", "target_fps") {
            self.target_fps = fps as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [physics] section
        if let Some(gravity) = float_value(&config, "physics", "gravity") {
            self.gravity = gravity as f32;
        }
        if let Some(jump) = float_value(&config, "physics", "jump_strength") {
            self.jump_strength = jump as f32;
        }
        if let Some(speed) = float_value(&config, "physics", "move_speed") {
            self.move_speed = speed as f32;
        }

        // [camera] section
        if let Some(threshold) = float_value(&config, "camera", "scroll_threshold") {
            self.scroll_threshold = threshold as f32;
        }

        // [rules] section
        if let Some(coins) = uint_value(&config, "rules", "coins_to_win") {
            self.coins_to_win = coins as u32;
        }
        if let Some(secs) = float_value(&config, "rules", "end_screen_seconds") {
            self.end_screen_seconds = secs as f32;
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "dir") {
            self.asset_dir = PathBuf::from(dir);
        }

        info!(
            "Loaded config: {}x{} screen, fps={}, gravity={}, jump={}, speed={}, threshold={}",
            self.screen_width,
            self.screen_height,
            self.target_fps,
            self.gravity,
            self.jump_strength,
            self.move_speed,
            self.scroll_threshold
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.screen_width.to_string()));
        config.set("window", "height", Some(self.screen_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "title", Some(self.title.clone()));

        config.set("physics", "gravity", Some(self.gravity.to_string()));
        config.set("physics", "jump_strength", Some(self.jump_strength.to_string()));
        config.set("physics", "move_speed", Some(self.move_speed.to_string()));

        config.set("camera", "scroll_threshold", Some(self.scroll_threshold.to_string()));

        config.set("rules", "coins_to_win", Some(self.coins_to_win.to_string()));
        config.set(
            "rules",
            "end_screen_seconds",
            Some(self.end_screen_seconds.to_string()),
        );

        config.set(
            "assets",
            "dir",
            Some(self.asset_dir.to_string_lossy().into_owned()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Player physics tuning taken from this configuration.
    pub fn physics(&self) -> Physics {
        Physics {
            gravity: self.gravity,
            jump_strength: self.jump_strength,
            move_speed: self.move_speed,
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_game() {
        let c = GameConfig::new();
        assert_eq!(c.window_size(), (800, 600));
        assert_eq!(c.target_fps, 60);
        assert_eq!(c.gravity, 0.5);
        assert_eq!(c.jump_strength, -15.0);
        assert_eq!(c.move_speed, 5.0);
        assert_eq!(c.scroll_threshold, 300.0);
        assert_eq!(c.coins_to_win, 20);
        assert_eq!(c.end_screen_seconds, 2.0);
    }

    #[test]
    fn missing_file_is_an_error_and_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = GameConfig::with_path(dir.path().join("nope.ini"));
        assert!(c.load_from_file().is_err());
        assert_eq!(c, GameConfig::with_path(dir.path().join("nope.ini")));
    }

    #[test]
    fn partial_file_overrides_only_present_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(
            &path,
            "[window]\nwidth = 1024\n\n[physics]\ngravity = 0.25\njump_strength = -12\n\n[assets]\ndir = /tmp/art\n",
        )
        .unwrap();

        let mut c = GameConfig::with_path(&path);
        c.load_from_file().unwrap();
        assert_eq!(c.screen_width, 1024);
        assert_eq!(c.screen_height, 600);
        assert_eq!(c.gravity, 0.25);
        assert_eq!(c.jump_strength, -12.0);
        assert_eq!(c.move_speed, 5.0);
        assert_eq!(c.asset_dir, PathBuf::from("/tmp/art"));
    }

    #[test]
    fn malformed_values_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(
            &path,
            "[window]\nwidth = wide\nheight = 720\n\n[physics]\ngravity = abc\nmove_speed = 7\n",
        )
        .unwrap();

        let mut c = GameConfig::with_path(&path);
        c.load_from_file().unwrap();
        assert_eq!(c.screen_width, 800);
        assert_eq!(c.screen_height, 720);
        assert_eq!(c.gravity, 0.5);
        assert_eq!(c.move_speed, 7.0);
    }

    #[test]
    fn parsed_passes_values_through_and_drops_errors() {
        assert_eq!(parsed(Ok(Some(3u64)), "window", "width"), Some(3));
        assert_eq!(parsed::<u64>(Ok(None), "window", "width"), None);
        assert_eq!(
            parsed::<f64>(Err("not a float".to_string()), "physics", "gravity"),
            None
        );
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.ini");

        let mut original = GameConfig::with_path(&path);
        original.screen_height = 720;
        original.scroll_threshold = 400.0;
        original.coins_to_win = 5;
        original.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn physics_mirrors_config() {
        let p = GameConfig::new().physics();
        assert_eq!(p.gravity, 0.5);
        assert_eq!(p.jump_strength, -15.0);
        assert_eq!(p.move_speed, 5.0);
    }
}
