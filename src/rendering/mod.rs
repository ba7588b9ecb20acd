pub mod camera;
pub mod hud;
pub mod particles;
pub mod postprocess;
