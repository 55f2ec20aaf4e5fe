//! Seedable randomness for gameplay.
//!
//! Everything random (spawn height, travel time) draws from one `GameRng`
//! resource so a fixed seed replays a whole round.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct GameRng(pub Pcg32);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(Pcg32::from_rng(&mut rand::rng()))
    }
}

/// `u * (max - min) + min` with `u` uniform in `[0, 1)`.
#[inline]
pub fn uniform<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    rng.random::<f32>() * (max - min) + min
}
