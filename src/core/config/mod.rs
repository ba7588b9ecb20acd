pub mod config;

pub use config::{
    GameConfig, MagnetConfig, ParticleConfig, PhysicsConfig, ShockwaveConfig, WindowConfig,
};
