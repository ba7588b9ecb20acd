use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Particle Sandbox".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
    /// Hard ceiling on live particles; spawn requests beyond it are dropped.
    pub capacity: usize,
    pub radius: f32,
    pub density: f32,
    pub friction: f32,
    /// Uniform per-axis jitter (px) applied to the cursor position on spawn.
    pub spawn_jitter: f32,
    /// Speed -> [0,1] tint factor; full red at 1/scale px/s.
    pub speed_tint_scale: f32,
}
impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            capacity: 4096,
            radius: 4.0,
            density: 1.0,
            friction: 0.3,
            spawn_jitter: 5.0,
            speed_tint_scale: 0.01,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ShockwaveConfig {
    /// Fixed slot count of the wave arena.
    pub pool_size: usize,
    /// Progress per second; a wave crosses its full radius in 1/speed seconds.
    pub speed: f32,
    /// Half-width (px) of the ring band: outer = t*(h+margin), inner = t*(h-margin).
    pub ring_margin: f32,
    /// Force magnitude applied inside the ring band (between inner and outer radius).
    pub ring_power: f32,
    /// Force magnitude applied inside the inner radius.
    pub core_power: f32,
}
impl Default for ShockwaveConfig {
    fn default() -> Self {
        Self {
            pool_size: 128,
            speed: 0.4,
            ring_margin: 30.0,
            ring_power: 300.0,
            core_power: 5000.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MagnetConfig {
    /// Pull force toward the cursor. Constant with distance.
    pub strength: f32,
}
impl Default for MagnetConfig {
    fn default() -> Self {
        Self { strength: 800.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity_y: f32,
    /// Fixed simulation step advanced per rendered frame (slow-motion by design).
    pub time_step: f32,
    pub substeps: usize,
    /// Half-thickness of the four arena walls.
    pub wall_thickness: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_y: -10.0,
            time_step: 5.0 / 60.0,
            substeps: 4,
            wall_thickness: 10.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub particles: ParticleConfig,
    pub shockwave: ShockwaveConfig,
    pub magnet: MagnetConfig,
    pub physics: PhysicsConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data =
            fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        ron::from_str(&data).with_context(|| format!("parse RON {}", path.display()))
    }

    /// Fall back to defaults on any load error, reporting it to the caller.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(format!("{e:#}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.particles.capacity, 4096);
        assert_eq!(cfg.shockwave.pool_size, 128);
        assert_eq!(cfg.shockwave.ring_power, 300.0);
        assert_eq!(cfg.shockwave.core_power, 5000.0);
        assert_eq!(cfg.magnet.strength, 800.0);
        assert!((cfg.physics.time_step - 5.0 / 60.0).abs() < 1e-6);
        assert_eq!(cfg.physics.substeps, 4);
    }

    #[test]
    fn partial_ron_overrides_only_named_fields() {
        let cfg: GameConfig =
            ron::from_str("(particles: (capacity: 16), magnet: (strength: 50.0))").unwrap();
        assert_eq!(cfg.particles.capacity, 16);
        assert_eq!(cfg.magnet.strength, 50.0);
        // untouched sections keep defaults
        assert_eq!(cfg.particles.radius, 4.0);
        assert_eq!(cfg.shockwave.pool_size, 128);
    }
}
