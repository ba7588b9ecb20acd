//! Speed-based particle tinting: a precomputed blue->red palette of
//! `ColorMaterial` handles, indexed per frame by each particle's speed.

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use crate::core::components::{Particle, PrevVelocity};
use crate::core::config::GameConfig;
use crate::core::system::system_order::PostPhysicsAdjustSet;

const TINT_STEPS: usize = 24;
const SLOW_COLOR: [f32; 3] = [0.0, 0.3, 1.0];
const FAST_COLOR: [f32; 3] = [0.9, 0.1, 0.1];

#[derive(Resource)]
pub struct SpeedTintPalette {
    pub handles: Vec<Handle<ColorMaterial>>,
}

impl SpeedTintPalette {
    /// Palette index for a speed already scaled into [0,1].
    pub fn index_for(&self, tint: f32) -> usize {
        let clamped = tint.clamp(0.0, 1.0);
        ((clamped * (self.handles.len() - 1) as f32) as usize).min(self.handles.len() - 1)
    }
}

pub struct ParticleTintPlugin;

impl Plugin for ParticleTintPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_tint_palette)
            .add_systems(Update, retint_particles.in_set(PostPhysicsAdjustSet));
    }
}

fn setup_tint_palette(mut materials: ResMut<Assets<ColorMaterial>>, mut commands: Commands) {
    let mut handles = Vec::with_capacity(TINT_STEPS);
    for i in 0..TINT_STEPS {
        let t = i as f32 / (TINT_STEPS - 1) as f32;
        let mix = |a: f32, b: f32| a + (b - a) * t;
        let color = Color::srgb(
            mix(SLOW_COLOR[0], FAST_COLOR[0]),
            mix(SLOW_COLOR[1], FAST_COLOR[1]),
            mix(SLOW_COLOR[2], FAST_COLOR[2]),
        );
        handles.push(materials.add(color));
    }
    commands.insert_resource(SpeedTintPalette { handles });
}

fn retint_particles(
    palette: Option<Res<SpeedTintPalette>>,
    cfg: Res<GameConfig>,
    mut particles: Query<
        (&Velocity, &mut PrevVelocity, &mut MeshMaterial2d<ColorMaterial>),
        With<Particle>,
    >,
) {
    let Some(palette) = palette else {
        return;
    };
    for (vel, mut prev, mut material) in particles.iter_mut() {
        let speed = vel.linvel.length();
        let idx = palette.index_for(speed * cfg.particles.speed_tint_scale);
        let handle = &palette.handles[idx];
        if material.0 != *handle {
            material.0 = handle.clone();
        }
        prev.0 = vel.linvel;
    }
}
