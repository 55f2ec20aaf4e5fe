//! Feature plugins.

use bevy::prelude::*;

pub mod collision;
pub mod core;
pub mod flight;
pub mod lifecycle;
pub mod monsters;
pub mod physics;
pub mod player;
pub mod projectiles;
pub mod scoring;

// Render-only
pub mod camera;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    scoring::plugin(app);
    player::plugin(app);
    projectiles::plugin(app);
    lifecycle::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
}

