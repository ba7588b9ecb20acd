use bevy::prelude::*;

/// Marker component identifying a particle entity (holds physics body & collider).
#[derive(Component)]
pub struct Particle;

/// Linear velocity observed on the previous frame, written back after the tint pass.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone, Default)]
pub struct PrevVelocity(pub Vec2);
