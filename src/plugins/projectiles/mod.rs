//! Projectile launcher: producer → message → consumer.
//!
//! ```text
//!   Update
//!   (A) request_launches        pointer release → LaunchRequest { target }
//!   (B) launch_projectiles      LaunchRequest + player position → projectile
//! ```
//!
//! Producers only turn raw input into a world-space target. The consumer owns
//! every rule about whether a shot happens:
//! - the player only faces right: a target behind or level with the player
//!   (`offset.x <= 0`) is ignored
//! - otherwise the shot flies `overshoot` units along the aim for a fixed
//!   time, which always carries it off screen, then vanishes
//!
//! Projectiles are dynamic bodies against kinematic sensor monsters, so every
//! monster/projectile pair has a moving side avian will test and a sensor
//! side that suppresses any response. Their filters name monsters only, so
//! two projectiles never meet. They opt into swept CCD; at several hundred
//! units per second a discrete overlap test can step straight over a monster.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::{Category, CategoryMasks};
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::common::vector;
use crate::plugins::camera::MainCamera;
use crate::plugins::flight::{ArrivalAction, Flight, FlightState};
use crate::plugins::player::Player;

#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile;

/// A request to fire at a world-space point.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct LaunchRequest {
    pub target: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchPlan {
    pub origin: Vec2,
    pub destination: Vec2,
    pub travel_secs: f32,
}

/// Aim from `origin` toward `target`. `None` means "no shot".
pub fn plan_launch(origin: Vec2, target: Vec2, overshoot: f32, travel_secs: f32) -> Option<LaunchPlan> {
    let offset = target - origin;
    if offset.x <= 0.0 {
        return None;
    }
    let direction = vector::normalize(offset)?;

    Some(LaunchPlan {
        origin,
        destination: origin + direction * overshoot,
        travel_secs,
    })
}

pub fn spawn_projectile(commands: &mut Commands, plan: &LaunchPlan, radius: f32) -> Entity {
    let masks = CategoryMasks::PROJECTILE;
    let flight = Flight::new(plan.origin, plan.destination, plan.travel_secs, ArrivalAction::Vanish);
    let velocity = LinearVelocity(flight.velocity());

    commands
        .spawn((
            Name::new("Projectile"),
            Projectile,
            masks,
            flight,
            FlightState::Spawned,
            Sprite {
                color: Color::srgb(0.15, 0.15, 0.18),
                custom_size: Some(Vec2::splat(radius * 2.0)),
                ..default()
            },
            Transform::from_translation(plan.origin.extend(2.0)),
            (
                RigidBody::Dynamic,
                Collider::circle(radius),
                velocity,
                masks.collision_layers(Category::MONSTER),
                SweptCcd::default(),
            ),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

pub fn plugin(app: &mut App) {
    app.add_message::<LaunchRequest>().add_systems(
        Update,
        (
            request_launches,
            launch_projectiles.after(request_launches),
        )
            .run_if(in_state(GameState::InGame)),
    );
}

/// Producer: a released left button or touch becomes a launch request.
///
/// Input resources are optional so headless apps simply produce nothing.
pub fn request_launches(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut writer: MessageWriter<LaunchRequest>,
) {
    let clicked = buttons.is_some_and(|b| b.just_released(MouseButton::Left));
    let touched = touches.as_ref().and_then(|t| t.iter_just_released().next().map(|touch| touch.position()));

    let screen_point = if clicked {
        match windows.single() {
            Ok(w) => w.cursor_position(),
            Err(e) => {
                debug!("No single Window: {e:?}");
                return;
            }
        }
    } else {
        touched
    };
    let Some(screen_point) = screen_point else {
        return;
    };

    let Ok((camera, camera_tf)) = q_camera.single() else {
        debug!("No single MainCamera");
        return;
    };
    let target = match camera.viewport_to_world_2d(camera_tf, screen_point) {
        Ok(p) => p,
        Err(e) => {
            debug!("viewport_to_world_2d failed: {e:?}");
            return;
        }
    };

    writer.write(LaunchRequest { target });
}

/// Consumer: apply the aiming rules and spawn.
pub fn launch_projectiles(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut reader: MessageReader<LaunchRequest>,
    q_player: Query<&Transform, With<Player>>,
) {
    let origin = q_player.single().ok().map(|tf| tf.translation.truncate());

    for req in reader.read() {
        let Some(origin) = origin else {
            debug!("No single Player; launch dropped");
            continue;
        };
        let Some(plan) = plan_launch(origin, req.target, tunables.projectile_overshoot, tunables.projectile_travel) else {
            debug!(aim = ?req.target, "launch ignored: target not ahead of the player");
            continue;
        };
        spawn_projectile(&mut commands, &plan, tunables.projectile_radius);
    }
}

#[cfg(test)]
mod tests;
