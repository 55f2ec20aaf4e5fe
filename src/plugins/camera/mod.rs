//! Camera plugin (render-only).
//!
//! Gameplay works in screen points with the origin at the bottom-left corner.
//! Centering a default 2D camera on the arena makes world space line up with
//! that, so pointer positions convert with `viewport_to_world_2d` and nothing
//! else.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

#[derive(Component, Debug, Clone, Copy)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
}

fn spawn_camera(mut commands: Commands, tunables: Res<Tunables>) {
    let center = tunables.arena * 0.5;
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        Transform::from_xyz(center.x, center.y, 999.0),
    ));
}
