//! Tunable gameplay constants.
//!
//! World units are screen points with the origin at the bottom-left corner of
//! the arena.

use std::ops::RangeInclusive;

use bevy::prelude::*;

/// Environment variable that pins the RNG seed for a whole session.
pub const SEED_ENV: &str = "NINJA_ATTACK_SEED";

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub arena: Vec2,
    pub player_size: Vec2,
    pub monster_size: Vec2,
    pub projectile_radius: f32,
    /// Seconds between monster spawns.
    pub spawn_interval: f32,
    pub monster_travel_min: f32,
    pub monster_travel_max: f32,
    pub projectile_travel: f32,
    /// How far past the player a shot is sent; large enough to leave the
    /// arena in every direction.
    pub projectile_overshoot: f32,
    /// Kills must exceed this to win.
    pub win_threshold: u32,
    pub restart_delay: f32,
    pub rng_seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 40.0,
            arena: Vec2::new(960.0, 640.0),
            player_size: Vec2::new(30.0, 42.0),
            monster_size: Vec2::new(40.0, 46.0),
            projectile_radius: 8.0,
            spawn_interval: 1.0,
            monster_travel_min: 2.0,
            monster_travel_max: 4.0,
            projectile_travel: 2.0,
            projectile_overshoot: 1000.0,
            win_threshold: 30,
            restart_delay: 3.0,
            rng_seed: None,
        }
    }
}

impl Tunables {
    /// Defaults, with the seed taken from [`SEED_ENV`] when it parses.
    pub fn from_env() -> Self {
        let rng_seed = std::env::var(SEED_ENV).ok().and_then(|s| s.trim().parse().ok());
        Self { rng_seed, ..default() }
    }

    /// Where the player stands: a tenth of the way in, halfway up.
    #[inline]
    pub fn player_origin(&self) -> Vec2 {
        Vec2::new(self.arena.x * 0.1, self.arena.y * 0.5)
    }

    #[inline]
    pub fn monster_travel(&self) -> RangeInclusive<f32> {
        self.monster_travel_min..=self.monster_travel_max
    }
}
