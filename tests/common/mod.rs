//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - `TransformPlugin` so avian sees the same transforms it would in the full app.
//! - we then call `ninja_attack::game::configure_headless` to install gameplay plugins.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use ninja_attack::common::tunables::Tunables;

/// Bevy's default fixed timestep (64 Hz).
pub const FIXED_STEP: Duration = Duration::from_micros(15_625);

pub fn app_headless() -> App {
    app_headless_with(Tunables {
        rng_seed: Some(0x5EED),
        ..default()
    })
}

pub fn app_headless_with(tunables: Tunables) -> App {
    let mut app = App::new();

    // AssetPlugin + ScenePlugin so avian's collider/mesh plumbing has what it needs.
    app.add_plugins((
        MinimalPlugins,
        TransformPlugin,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    app.insert_resource(tunables);

    ninja_attack::game::configure_headless(&mut app);
    // `App::run` would do this; tests drive `update` by hand.
    app.finish();
    app.cleanup();
    app
}

/// Every `update` after the first advances time by exactly one fixed step.
pub fn one_fixed_step_per_update(app: &mut App) {
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FIXED_STEP));
}

pub fn count<C: Component>(app: &mut App) -> usize {
    app.world_mut().query::<&C>().iter(app.world()).count()
}
