//! Texture store.
//!
//! Loaded textures keyed by the names used in
//! [`Sprite`](crate::components::sprite::Sprite). Raylib textures must stay on
//! the main thread, so this lives in the world as a non-send resource; use
//! `NonSend<TextureStore>` or `world.non_send_resource::<TextureStore>()`.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

pub struct TextureStore {
    map: FxHashMap<&'static str, Texture2D>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: &'static str, texture: Texture2D) {
        self.map.insert(key, texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
