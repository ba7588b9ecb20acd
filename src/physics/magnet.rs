use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::Particle;
use crate::core::config::GameConfig;
use crate::interaction::input::PointerWorld;
use crate::physics::rapier::ForceFieldSet;

/// Cursor-attracting "magnet" mode, flipped by a key press.
#[derive(Resource, Debug, Default)]
pub struct CursorMagnet {
    pub enabled: bool,
}

pub struct MagnetPlugin;

impl Plugin for MagnetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorMagnet>()
            .add_systems(Update, apply_magnet_force.in_set(ForceFieldSet));
    }
}

fn apply_magnet_force(
    magnet: Res<CursorMagnet>,
    pointer: Res<PointerWorld>,
    cfg: Res<GameConfig>,
    mut particles: Query<(&Transform, &mut ExternalForce), With<Particle>>,
) {
    if !magnet.enabled {
        return;
    }
    let Some(cursor) = pointer.0 else {
        return;
    };
    for (tf, mut force) in particles.iter_mut() {
        // Pull strength is constant: direction-normalized, not scaled by distance.
        let pull = (cursor - tf.translation.truncate()).normalize_or_zero();
        force.force += pull * cfg.magnet.strength;
    }
}
