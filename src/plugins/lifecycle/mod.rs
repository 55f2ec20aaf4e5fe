//! Scene lifecycle driver.
//!
//! Owns the round's clockwork and the order things happen in within one
//! fixed step:
//!
//! ```text
//!   FixedUpdate       drive_spawns          cadence → plan_monster → spawn_monster
//!                     advance_flights       Spawned → InFlight, tick timers
//!   FixedPostUpdate   (avian step, CollisionStart messages)
//!                     resolve_contacts      kills
//!                     complete_arrivals     escapes + misses
//!   PostUpdate        despawn_removed
//! ```
//!
//! Contacts resolve before arrivals, so a monster shot on the step it would
//! have escaped counts as a kill.
//!
//! Outside the round, `GameOver` waits `restart_delay` seconds and starts a
//! new one.

use std::time::Duration;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::rng::GameRng;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::collision::resolve_contacts;
use crate::plugins::flight::{advance_flights, complete_arrivals, despawn_removed};
use crate::plugins::monsters::{plan_monster, spawn_monster};
use crate::plugins::scoring::Scoreboard;

/// Repeating spawn clock. The first query after a reset is due immediately,
/// then one spawn per interval.
#[derive(Resource, Debug, Clone)]
pub struct SpawnCadence {
    timer: Timer,
    primed: bool,
}

impl SpawnCadence {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(interval_secs, TimerMode::Repeating),
            primed: false,
        }
    }

    /// How many spawns fall due after `delta` more time.
    pub fn due(&mut self, delta: Duration) -> u32 {
        let initial = if self.primed {
            0
        } else {
            self.primed = true;
            1
        };
        self.timer.tick(delta);
        initial + self.timer.times_finished_this_tick()
    }
}

impl Default for SpawnCadence {
    fn default() -> Self {
        Self::new(Tunables::default().spawn_interval)
    }
}

#[derive(Resource, Debug, Clone)]
pub struct RestartTimer(pub Timer);

pub fn plugin(app: &mut App) {
    app.init_resource::<SpawnCadence>()
        .add_systems(OnEnter(GameState::InGame), reset_cadence)
        .add_systems(
            FixedUpdate,
            (drive_spawns, advance_flights)
                .chain()
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            (
                resolve_contacts.after(CollisionEventSystems),
                complete_arrivals.after(resolve_contacts),
            )
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(PostUpdate, despawn_removed)
        .add_systems(OnEnter(GameState::GameOver), arm_restart)
        .add_systems(
            Update,
            count_down_restart.run_if(in_state(GameState::GameOver)),
        );
}

fn reset_cadence(mut commands: Commands, tunables: Res<Tunables>) {
    commands.insert_resource(SpawnCadence::new(tunables.spawn_interval));
}

/// Spawn every monster the cadence says is due, unless the round is over.
pub fn drive_spawns(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    board: Res<Scoreboard>,
    mut cadence: ResMut<SpawnCadence>,
    mut rng: ResMut<GameRng>,
) {
    if board.outcome().is_terminal() {
        return;
    }

    let half = tunables.monster_size * 0.5;
    for _ in 0..cadence.due(time.delta()) {
        let plan = plan_monster(tunables.arena, half, tunables.monster_travel(), &mut rng.0);
        let e = spawn_monster(&mut commands, &plan, tunables.monster_size);
        debug!(?e, y = plan.spawn.y, secs = plan.travel_secs, "monster spawned");
    }
}

fn arm_restart(mut commands: Commands, tunables: Res<Tunables>) {
    commands.insert_resource(RestartTimer(Timer::from_seconds(
        tunables.restart_delay,
        TimerMode::Once,
    )));
}

pub fn count_down_restart(
    time: Res<Time>,
    mut restart: ResMut<RestartTimer>,
    mut next: ResMut<NextState<GameState>>,
) {
    if restart.0.tick(time.delta()).just_finished() {
        info!("starting a new round");
        next.set(GameState::InGame);
    }
}
