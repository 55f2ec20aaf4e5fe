//! Player plugin.
//!
//! The player is a launch origin and nothing else: it never moves and has no
//! physics body, so monsters pass it without interacting.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{state::GameState, tunables::Tunables};

#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn);
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    commands.spawn((
        Name::new("Player"),
        Player,
        Sprite {
            color: Color::srgb(0.1, 0.1, 0.12),
            custom_size: Some(tunables.player_size),
            ..default()
        },
        Transform::from_translation(tunables.player_origin().extend(1.0)),
        DespawnOnExit(GameState::InGame),
    ));
}
