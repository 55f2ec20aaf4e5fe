//! Launcher tests.
//!
//! The aiming rules are checked on `plan_launch` directly; the consumer system
//! is driven by writing `LaunchRequest` messages, the same way the input
//! producer would.

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::*;
use crate::common::test_utils::run_system_once;

const OVERSHOOT: f32 = 1000.0;
const TRAVEL: f32 = 2.0;

fn outside_arena(p: Vec2, arena: Vec2) -> bool {
    p.x < 0.0 || p.x > arena.x || p.y < 0.0 || p.y > arena.y
}

#[test]
fn target_behind_player_is_ignored() {
    let origin = Vec2::new(96.0, 320.0);
    assert_eq!(plan_launch(origin, Vec2::new(95.0, 320.0), OVERSHOOT, TRAVEL), None);
    assert_eq!(plan_launch(origin, Vec2::new(0.0, 600.0), OVERSHOOT, TRAVEL), None);
    assert_eq!(plan_launch(origin, Vec2::new(-50.0, 0.0), OVERSHOOT, TRAVEL), None);
}

#[test]
fn target_on_player_is_ignored() {
    let origin = Vec2::new(96.0, 320.0);
    assert_eq!(plan_launch(origin, origin, OVERSHOOT, TRAVEL), None);
}

#[test]
fn target_level_with_player_is_ignored() {
    let origin = Vec2::new(96.0, 320.0);
    assert_eq!(plan_launch(origin, Vec2::new(96.0, 400.0), OVERSHOOT, TRAVEL), None);
    assert_eq!(plan_launch(origin, Vec2::new(96.0, 0.0), OVERSHOOT, TRAVEL), None);
}

#[test]
fn non_finite_target_is_ignored() {
    let origin = Vec2::new(96.0, 320.0);
    assert_eq!(plan_launch(origin, Vec2::new(f32::INFINITY, 320.0), OVERSHOOT, TRAVEL), None);
    assert_eq!(plan_launch(origin, Vec2::new(f32::NAN, 320.0), OVERSHOOT, TRAVEL), None);
}

#[test]
fn forward_shots_leave_the_arena_along_the_aim() {
    let t = Tunables::default();
    let origin = t.player_origin();
    let mut rng = Pcg32::seed_from_u64(0xA11A);

    for _case in 0..20_000 {
        let target = Vec2::new(
            rng.random_range(origin.x + 0.01..t.arena.x * 2.0),
            rng.random_range(-t.arena.y..t.arena.y * 2.0),
        );

        let plan = plan_launch(origin, target, t.projectile_overshoot, t.projectile_travel)
            .expect("forward aim fires");

        assert_eq!(plan.origin, origin);
        assert_eq!(plan.travel_secs, 2.0);
        assert!(outside_arena(plan.destination, t.arena), "{plan:?} stays on screen");

        // Same direction as the aim, exactly `overshoot` away.
        let aim = (target - origin).normalize();
        let shot = plan.destination - origin;
        assert!((shot.length() - t.projectile_overshoot).abs() < 1e-2);
        assert!(aim.dot(shot.normalize()) > 0.9999);
    }
}

fn world_with_player(origin: Vec2) -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<Messages<LaunchRequest>>();
    world.spawn((Player, Transform::from_translation(origin.extend(1.0))));
    world
}

fn projectiles(world: &mut World) -> Vec<Entity> {
    world
        .query_filtered::<Entity, With<Projectile>>()
        .iter(world)
        .collect()
}

#[test]
fn launch_spawns_configured_projectile() {
    let origin = Tunables::default().player_origin();
    let mut world = world_with_player(origin);

    world.write_message(LaunchRequest { target: origin + Vec2::new(300.0, 0.0) });
    run_system_once(&mut world, launch_projectiles);

    let spawned = projectiles(&mut world);
    assert_eq!(spawned.len(), 1);
    let e = spawned[0];

    assert_eq!(*world.get::<CategoryMasks>(e).unwrap(), CategoryMasks::PROJECTILE);
    assert!(world.get::<SweptCcd>(e).is_some());
    assert_eq!(*world.get::<RigidBody>(e).unwrap(), RigidBody::Dynamic);
    assert!(world.get::<Sensor>(e).is_none());
    assert_eq!(*world.get::<FlightState>(e).unwrap(), FlightState::Spawned);

    let layers = world.get::<CollisionLayers>(e).unwrap();
    assert!(layers.memberships.has_all(Category::PROJECTILE));
    assert!(layers.filters.has_all(Category::MONSTER));

    let flight = world.get::<Flight>(e).unwrap();
    assert_eq!(flight.on_arrival, ArrivalAction::Vanish);
    assert_eq!(flight.to, origin + Vec2::new(1000.0, 0.0));
    assert!((flight.duration_secs() - 2.0).abs() < 1e-6);

    let vel = world.get::<LinearVelocity>(e).unwrap();
    assert_eq!(vel.0, Vec2::new(500.0, 0.0));

    let tf = world.get::<Transform>(e).unwrap();
    assert_eq!(tf.translation.truncate(), origin);
}

#[test]
fn rejected_launches_spawn_nothing() {
    let origin = Tunables::default().player_origin();
    let mut world = world_with_player(origin);

    world.write_message(LaunchRequest { target: origin - Vec2::new(1.0, 0.0) });
    world.write_message(LaunchRequest { target: origin });
    world.write_message(LaunchRequest { target: origin + Vec2::new(0.0, 80.0) });
    run_system_once(&mut world, launch_projectiles);

    assert!(projectiles(&mut world).is_empty());
}

#[test]
fn launch_without_player_is_dropped() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<Messages<LaunchRequest>>();

    world.write_message(LaunchRequest { target: Vec2::new(500.0, 300.0) });
    run_system_once(&mut world, launch_projectiles);

    assert!(projectiles(&mut world).is_empty());
}

#[test]
fn one_projectile_per_request() {
    let origin = Tunables::default().player_origin();
    let mut world = world_with_player(origin);

    for dy in [-100.0, 0.0, 100.0] {
        world.write_message(LaunchRequest { target: origin + Vec2::new(200.0, dy) });
    }
    run_system_once(&mut world, launch_projectiles);

    assert_eq!(projectiles(&mut world).len(), 3);
}
