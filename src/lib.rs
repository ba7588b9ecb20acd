pub mod app;
pub mod core;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::SandboxPlugin;
pub use crate::core::components::{Particle, PrevVelocity};
pub use crate::core::config::{GameConfig, WindowConfig};
pub use crate::physics::shockwave::{Shockwave, ShockwavePool};
