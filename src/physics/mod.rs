pub mod magnet;
pub mod rapier;
pub mod shockwave;
