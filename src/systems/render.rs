use bevy_ecs::prelude::*;
use log::warn;
use raylib::prelude::*;
use raylib::{RaylibHandle, RaylibThread};

use crate::components::boxcollider::BoxCollider;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::score::Score;
use crate::resources::scroll::ScrollManager;
use crate::resources::texturestore::TextureStore;

const HUD_FONT_SIZE: i32 = 30;

/// Draw one frame. The raylib handle and thread are taken out of the world
/// for the duration of the drawing scope and put back afterwards.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        warn!("render_system: RaylibHandle missing, skipping frame");
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        warn!("render_system: RaylibThread missing, skipping frame");
        world.insert_non_send_resource(rl);
        return;
    };

    {
        let mut d = rl.begin_drawing(&thread);
        if world.resource::<GameState>().is_running() {
            render_pass(world, &mut d);
        } else {
            render_end_screen(world, &mut d);
        }
    }

    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}

/// Stretch the whole texture over `dest`.
fn draw_stretched(d: &mut RaylibDrawHandle, tex: &Texture2D, dest: Rectangle) {
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: tex.width as f32,
        height: tex.height as f32,
    };
    d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
}

/// Background, entities sorted by z, then the coin counter.
pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    let (screen_w, screen_h) = {
        let config = world.resource::<GameConfig>();
        (config.screen_width as f32, config.screen_height as f32)
    };
    let scroll = *world.resource::<ScrollManager>();
    let coins = world.resource::<Score>().coins;
    let screen = BoxCollider::new(0.0, 0.0, screen_w, screen_h);

    let mut to_draw: Vec<(Sprite, BoxCollider, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &BoxCollider, &ZIndex)>();
        q.iter(world)
            .filter(|(_, c, _)| c.overlaps(&screen))
            .map(|(s, c, z)| (*s, *c, *z))
            .collect()
    };
    to_draw.sort_by_key(|(_, _, z)| *z);

    d.clear_background(Color::WHITE);

    let textures = world.non_send_resource::<TextureStore>();
    if let Some(bg) = textures.get("background") {
        // One screen-sized copy, nudged by this frame's scroll.
        let dest = Rectangle {
            x: -scroll.scroll_amount,
            y: 0.0,
            width: screen_w,
            height: screen_h,
        };
        draw_stretched(d, bg, dest);
    }

    for (sprite, collider, _z) in to_draw.iter() {
        if let Some(tex) = textures.get(sprite.tex_key) {
            draw_stretched(d, tex, collider.to_rectangle());
        }
    }

    d.draw_text(
        &format!("Coins: {}", coins),
        10,
        10,
        HUD_FONT_SIZE,
        Color::WHITE,
    );

    if world.contains_resource::<DebugMode>() {
        render_debug_overlay(world, d);
    }
}

/// Collider outlines and a few counters.
fn render_debug_overlay(world: &mut World, d: &mut RaylibDrawHandle) {
    let mut colliders = world.query::<&BoxCollider>();
    let mut entity_count = 0;
    for collider in colliders.iter(world) {
        d.draw_rectangle_lines(
            collider.left() as i32,
            collider.top() as i32,
            collider.size.x as i32,
            collider.size.y as i32,
            Color::RED,
        );
        entity_count += 1;
    }

    let scroll = world.resource::<ScrollManager>();
    let screen_h = world.resource::<GameConfig>().screen_height as i32;
    let text = format!(
        "DEBUG (F11) | FPS: {} | Entities: {} | World shift: {:.1}",
        d.get_fps(),
        entity_count,
        scroll.world_shift
    );
    d.draw_text(&text, 10, screen_h - 20, 10, Color::BLACK);
}

/// Black screen with the outcome message.
pub fn render_end_screen(world: &mut World, d: &mut RaylibDrawHandle) {
    let config = world.resource::<GameConfig>();
    let state = world.resource::<GameState>().get();

    d.clear_background(Color::BLACK);

    let Some(message) = state.end_message(config.coins_to_win) else {
        return;
    };
    let color = match state {
        GameStates::Won => Color::GREEN,
        _ => Color::WHITE,
    };
    d.draw_text(
        &message,
        (config.screen_width / 4) as i32,
        (config.screen_height / 2) as i32,
        HUD_FONT_SIZE,
        color,
    );
}
