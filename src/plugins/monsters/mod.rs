//! Monster spawner.
//!
//! A monster enters just past the right edge at a random height, drifts
//! straight left at constant speed, and leaves just past the left edge at the
//! same height. Reaching the left edge loses the round (see `flight`).
//!
//! Planning is split from spawning so the random draws can be checked
//! without an ECS world.

use std::ops::RangeInclusive;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::Rng;

use crate::common::layers::{Category, CategoryMasks};
use crate::common::rng::uniform;
use crate::common::state::GameState;
use crate::plugins::flight::{ArrivalAction, Flight, FlightState};

#[derive(Component, Debug, Clone, Copy)]
pub struct Monster;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonsterPlan {
    pub spawn: Vec2,
    pub destination: Vec2,
    pub travel_secs: f32,
}

/// Draw a spawn height and travel time for a monster with the given
/// half-extents inside an `arena`-sized screen.
///
/// Two independent draws, in this order: the height in
/// `[half.y, arena.y - half.y]`, then the duration in `travel`.
pub fn plan_monster<R: Rng>(
    arena: Vec2,
    half_extents: Vec2,
    travel: RangeInclusive<f32>,
    rng: &mut R,
) -> MonsterPlan {
    let y = uniform(rng, half_extents.y, arena.y - half_extents.y);
    let travel_secs = uniform(rng, *travel.start(), *travel.end());

    MonsterPlan {
        spawn: Vec2::new(arena.x + half_extents.x, y),
        destination: Vec2::new(-half_extents.x, y),
        travel_secs,
    }
}

/// Spawn a monster and schedule its whole life: move, lose on arrival, remove.
pub fn spawn_monster(commands: &mut Commands, plan: &MonsterPlan, size: Vec2) -> Entity {
    let masks = CategoryMasks::MONSTER;
    let flight = Flight::new(plan.spawn, plan.destination, plan.travel_secs, ArrivalAction::TriggerLoss);
    let velocity = LinearVelocity(flight.velocity());

    commands
        .spawn((
            Name::new("Monster"),
            Monster,
            masks,
            flight,
            FlightState::Spawned,
            Sprite {
                color: Color::srgb(0.42, 0.2, 0.52),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(plan.spawn.extend(1.0)),
            (
                RigidBody::Kinematic,
                Collider::rectangle(size.x, size.y),
                Sensor,
                velocity,
                masks.collision_layers(Category::NONE),
                // Monsters are the reporting side: avian emits CollisionStart
                // only when one of the pair opts in.
                CollisionEventsEnabled,
            ),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}
