//! Ring-shaped shockwave field: a fixed-size slot arena advanced each frame,
//! exerting radial forces on particles and feeding the distortion pass.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::Particle;
use crate::core::config::{GameConfig, ShockwaveConfig};
use crate::physics::rapier::ForceFieldSet;

/// One pool slot. Inactive slots are reused by linear scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shockwave {
    pub active: bool,
    pub center: Vec2,
    /// Normalized ring progress in [0,1).
    pub t: f32,
    /// +1.0 expanding, -1.0 contracting.
    pub direction: f32,
}

impl Shockwave {
    /// Radial force on a particle at `pos`, or `None` outside the outer radius.
    /// `span` is the window height; the ring band is `margin` px wide on each side.
    pub fn force_at(&self, pos: Vec2, span: f32, cfg: &ShockwaveConfig) -> Option<Vec2> {
        let outer = self.t * (span + cfg.ring_margin);
        let inner = self.t * (span - cfg.ring_margin);
        let offset = pos - self.center;
        let distance = offset.length();
        if distance >= outer {
            return None;
        }
        let magnitude = if distance < inner {
            cfg.core_power
        } else {
            cfg.ring_power
        };
        Some(offset.normalize_or_zero() * magnitude * self.direction)
    }
}

/// Fixed-capacity arena of shockwave slots. Owned and mutated by the loop thread only.
#[derive(Resource, Debug)]
pub struct ShockwavePool {
    slots: Vec<Shockwave>,
}

impl ShockwavePool {
    pub fn new(pool_size: usize) -> Self {
        Self {
            slots: vec![Shockwave::default(); pool_size],
        }
    }

    /// Claim the first free slot, or silently drop the request when the pool is full.
    pub fn activate(&mut self, center: Vec2, inverse: bool) -> Option<usize> {
        let idx = self.slots.iter().position(|s| !s.active)?;
        let direction = if inverse { -1.0 } else { 1.0 };
        self.slots[idx] = Shockwave {
            active: true,
            center,
            t: if inverse { 1.0 } else { 0.0 },
            direction,
        };
        Some(idx)
    }

    /// Advance every active wave and free the ones whose progress left [0,1).
    pub fn advance(&mut self, dt: f32, speed: f32) {
        for slot in &mut self.slots {
            if !slot.active {
                continue;
            }
            slot.t += dt * speed * slot.direction;
            if slot.t >= 1.0 || slot.t < 0.0 {
                slot.active = false;
            }
        }
    }

    pub fn active(&self) -> impl Iterator<Item = &Shockwave> {
        self.slots.iter().filter(|s| s.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

pub struct ShockwavePlugin;

impl Plugin for ShockwavePlugin {
    fn build(&self, app: &mut App) {
        let pool_size = app
            .world()
            .get_resource::<GameConfig>()
            .map(|cfg| cfg.shockwave.pool_size)
            .unwrap_or_else(|| ShockwaveConfig::default().pool_size);
        app.insert_resource(ShockwavePool::new(pool_size)).add_systems(
            Update,
            (advance_shockwaves, apply_shockwave_forces)
                .chain()
                .in_set(ForceFieldSet),
        );
    }
}

fn advance_shockwaves(time: Res<Time>, cfg: Res<GameConfig>, mut pool: ResMut<ShockwavePool>) {
    pool.advance(time.delta_secs(), cfg.shockwave.speed);
}

fn apply_shockwave_forces(
    pool: Res<ShockwavePool>,
    cfg: Res<GameConfig>,
    windows: Query<&Window>,
    mut particles: Query<(&Transform, &mut ExternalForce), With<Particle>>,
) {
    if pool.active_count() == 0 {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let span = window.height();
    for wave in pool.active() {
        for (tf, mut force) in particles.iter_mut() {
            if let Some(push) = wave.force_at(tf.translation.truncate(), span, &cfg.shockwave) {
                force.force += push;
            }
        }
    }
}
