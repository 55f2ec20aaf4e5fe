//! Core plugin: shared resources and global settings.
//!
//! A `Tunables` inserted before this plugin runs wins over the defaults; the
//! RNG is seeded from it.

use bevy::prelude::*;

use crate::common::{rng::GameRng, tunables::Tunables};

pub fn plugin(app: &mut App) {
    if !app.world().contains_resource::<Tunables>() {
        app.insert_resource(Tunables::default());
    }

    let rng = match app.world().resource::<Tunables>().rng_seed {
        Some(seed) => {
            info!(seed, "seeded RNG");
            GameRng::seeded(seed)
        }
        None => GameRng::from_entropy(),
    };

    app.insert_resource(rng);
    app.insert_resource(ClearColor(Color::WHITE));
}
