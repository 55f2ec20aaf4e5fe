//! Contact resolution.
//!
//! Avian reports every overlap start as a `CollisionStart` message with the
//! two colliders in no particular order. The resolver:
//!
//! 1. looks up each side's `CategoryMasks` (bodies without one are not ours)
//! 2. orders the pair by ascending category value, so the monster side
//!    (1) always comes before the projectile side (2)
//! 3. accepts the pair only if the first is a monster and the second a
//!    projectile; everything else is ignored
//! 4. accepts it only if both are still live, so a projectile that already
//!    hit something this step cannot score again
//! 5. removes both and records the kill
//!
//! Runs in FixedPostUpdate right after avian writes its collision messages
//! and before arrival callbacks.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::{Category, CategoryMasks};
use crate::plugins::flight::{FlightState, PendingRemoval};
use crate::plugins::scoring::{OutcomeReached, Scoreboard};

/// One side of a contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactBody {
    pub entity: Entity,
    pub category: Category,
}

/// A recognized monster/projectile contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub monster: Entity,
    pub projectile: Entity,
}

/// Classify an unordered contact pair.
pub fn classify_contact(a: ContactBody, b: ContactBody) -> Option<Hit> {
    let (first, second) = if a.category < b.category { (a, b) } else { (b, a) };

    let is_hit = first.category.intersects(Category::MONSTER)
        && second.category.intersects(Category::PROJECTILE);

    is_hit.then_some(Hit {
        monster: first.entity,
        projectile: second.entity,
    })
}

#[inline]
fn contact_body(q: &Query<&CategoryMasks>, entity: Entity) -> Option<ContactBody> {
    let masks = q.get(entity).ok()?;
    Some(ContactBody {
        entity,
        category: masks.category,
    })
}

pub fn resolve_contacts(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    mut board: ResMut<Scoreboard>,
    mut outcomes: MessageWriter<OutcomeReached>,
    q_masks: Query<&CategoryMasks>,
    mut q_state: Query<&mut FlightState>,
) {
    for ev in started.read() {
        let a = ev.body1.unwrap_or(ev.collider1);
        let b = ev.body2.unwrap_or(ev.collider2);

        let (Some(a), Some(b)) = (contact_body(&q_masks, a), contact_body(&q_masks, b)) else {
            continue;
        };
        let Some(hit) = classify_contact(a, b) else {
            continue;
        };

        let Ok([mut monster, mut projectile]) = q_state.get_many_mut([hit.monster, hit.projectile]) else {
            continue;
        };
        if !monster.is_live() || !projectile.is_live() {
            continue;
        }

        *monster = FlightState::RemovedByContact;
        *projectile = FlightState::RemovedByContact;
        commands.entity(hit.monster).insert(PendingRemoval);
        commands.entity(hit.projectile).insert(PendingRemoval);

        let reached = board.record_kill();
        info!(destroyed = board.destroyed(), "hit");
        if let Some(outcome) = reached {
            outcomes.write(OutcomeReached::from_board(outcome, &board));
        }
    }
}
