//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: includes DefaultPlugins (window/render) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins;

pub fn run() {
    App::new()
        .insert_resource(Tunables::from_env())
        .add_plugins(configure_full)
        .run();
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App) {
    let arena = app
        .world()
        .get_resource::<Tunables>()
        .map_or_else(|| Tunables::default().arena, |t| t.arena);

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Ninja Attack".into(),
            resolution: WindowResolution::new(arena.x as u32, arena.y as u32),
            resizable: false,
            ..default()
        }),
        ..default()
    }));

    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (camera).
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
