//! Scoring: destroyed-monster count and the round outcome.
//!
//! `Scoreboard` is the single source of truth for "how is this round going".
//! Its two mutators return `Some(outcome)` only on the call that makes the
//! round terminal, so whoever calls them can raise `OutcomeReached` without
//! any extra bookkeeping and the signal fires once per round.
//!
//! ```text
//!   Ongoing ──record_kill (count > threshold)──> Won
//!      │
//!      └────record_escape──────────────────────> Lost
//! ```
//!
//! Terminal states absorb every later call.

use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    destroyed: u32,
    outcome: Outcome,
    win_threshold: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(Tunables::default().win_threshold)
    }
}

impl Scoreboard {
    pub fn new(win_threshold: u32) -> Self {
        Self {
            destroyed: 0,
            outcome: Outcome::Ongoing,
            win_threshold,
        }
    }

    #[inline]
    pub fn destroyed(&self) -> u32 {
        self.destroyed
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn win_threshold(&self) -> u32 {
        self.win_threshold
    }

    /// Count one destroyed monster. Returns `Some(Won)` on the kill that
    /// pushes the count past the threshold.
    pub fn record_kill(&mut self) -> Option<Outcome> {
        if self.outcome.is_terminal() {
            return None;
        }
        self.destroyed += 1;
        if self.destroyed > self.win_threshold {
            self.outcome = Outcome::Won;
            return Some(Outcome::Won);
        }
        None
    }

    /// A monster got through. Loses the round regardless of the count.
    pub fn record_escape(&mut self) -> Option<Outcome> {
        if self.outcome.is_terminal() {
            return None;
        }
        self.outcome = Outcome::Lost;
        Some(Outcome::Lost)
    }

    /// Start a fresh round.
    pub fn reset(&mut self, win_threshold: u32) {
        *self = Self::new(win_threshold);
    }
}

/// Raised exactly once per round, on the transition to a terminal outcome.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutcomeReached {
    pub outcome: Outcome,
    pub destroyed: u32,
}

impl OutcomeReached {
    pub fn from_board(outcome: Outcome, board: &Scoreboard) -> Self {
        Self {
            outcome,
            destroyed: board.destroyed(),
        }
    }
}

pub fn plugin(app: &mut App) {
    app.insert_resource(Scoreboard::default())
        .add_message::<OutcomeReached>()
        .add_systems(OnEnter(GameState::InGame), reset_scoreboard)
        .add_systems(
            PostUpdate,
            enter_game_over.run_if(in_state(GameState::InGame)),
        );
}

fn reset_scoreboard(tunables: Res<Tunables>, mut board: ResMut<Scoreboard>) {
    board.reset(tunables.win_threshold);
}

/// Outcome observer: hand the round over to the `GameOver` state.
pub fn enter_game_over(
    mut reached: MessageReader<OutcomeReached>,
    mut next: ResMut<NextState<GameState>>,
) {
    for ev in reached.read() {
        match ev.outcome {
            Outcome::Won => info!(destroyed = ev.destroyed, "round won"),
            Outcome::Lost => info!(destroyed = ev.destroyed, "round lost"),
            Outcome::Ongoing => continue,
        }
        next.set(GameState::GameOver);
    }
}
