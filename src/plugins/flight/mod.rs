//! Scheduled flights: move-then-callback-then-remove, made explicit.
//!
//! Every monster and projectile is spawned with a `Flight` (straight line,
//! fixed duration, what to do on arrival) and a `FlightState`:
//!
//! ```text
//!   Spawned ──first fixed step──> InFlight ──contact──> RemovedByContact
//!                                     │
//!                                     └──timer done──> RemovedByArrival
//! ```
//!
//! The physics engine moves the body (constant `LinearVelocity`);
//! the timer decides when it has arrived. Both removal states are terminal
//! and carry `PendingRemoval`, which `despawn_removed` commits in PostUpdate.
//! Whatever reaches a removal state first wins; later actions see a non-live
//! state and do nothing, so an entity is never removed twice.

use bevy::prelude::*;

use crate::plugins::scoring::{OutcomeReached, Scoreboard};

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlightState {
    #[default]
    Spawned,
    InFlight,
    RemovedByContact,
    RemovedByArrival,
}

impl FlightState {
    #[inline]
    pub fn is_live(self) -> bool {
        matches!(self, FlightState::Spawned | FlightState::InFlight)
    }
}

/// The callback scheduled between arriving and being removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrivalAction {
    /// A monster made it across: the round is lost.
    TriggerLoss,
    /// A projectile ran out of range: a miss, no score change.
    Vanish,
}

#[derive(Component, Debug, Clone)]
pub struct Flight {
    pub from: Vec2,
    pub to: Vec2,
    pub timer: Timer,
    pub on_arrival: ArrivalAction,
}

impl Flight {
    pub fn new(from: Vec2, to: Vec2, seconds: f32, on_arrival: ArrivalAction) -> Self {
        Self {
            from,
            to,
            timer: Timer::from_seconds(seconds, TimerMode::Once),
            on_arrival,
        }
    }

    #[inline]
    pub fn duration_secs(&self) -> f32 {
        self.timer.duration().as_secs_f32()
    }

    /// Constant velocity that covers the path in exactly the scheduled time.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        let secs = self.duration_secs();
        if secs > 0.0 {
            (self.to - self.from) / secs
        } else {
            Vec2::ZERO
        }
    }

    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.timer.is_finished()
    }
}

/// Marker: commit the despawn in PostUpdate.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingRemoval;

/// FixedUpdate: start new flights and advance running ones.
pub fn advance_flights(time: Res<Time<Fixed>>, mut q: Query<(&mut Flight, &mut FlightState)>) {
    for (mut flight, mut state) in &mut q {
        if *state == FlightState::Spawned {
            *state = FlightState::InFlight;
        }
        if *state == FlightState::InFlight {
            flight.timer.tick(time.delta());
        }
    }
}

/// FixedPostUpdate, after contact resolution: fire arrival callbacks, then
/// schedule removal.
///
/// Running after the resolver means a kill and an arrival in the same step
/// resolve as a kill.
pub fn complete_arrivals(
    mut commands: Commands,
    mut board: ResMut<Scoreboard>,
    mut outcomes: MessageWriter<OutcomeReached>,
    mut q: Query<(Entity, &Flight, &mut FlightState), Without<PendingRemoval>>,
) {
    for (e, flight, mut state) in &mut q {
        if *state != FlightState::InFlight || !flight.has_arrived() {
            continue;
        }

        if flight.on_arrival == ArrivalAction::TriggerLoss {
            info!(destroyed = board.destroyed(), "monster escaped");
            if let Some(outcome) = board.record_escape() {
                outcomes.write(OutcomeReached::from_board(outcome, &board));
            }
        }

        *state = FlightState::RemovedByArrival;
        commands.entity(e).insert(PendingRemoval);
    }
}

/// Centralized structural cleanup.
pub fn despawn_removed(mut commands: Commands, q: Query<Entity, With<PendingRemoval>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
