use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Particle, PrevVelocity};
use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::interaction::input::{InputCaptureSet, SpawnRequest};
use crate::rendering::particles::SpeedTintPalette;

/// Shared circle mesh for all particle visuals.
#[derive(Resource, Deref)]
pub struct CircleMesh(pub Handle<Mesh>);

/// Turns this frame's spawn requests into bodies; after input capture.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ParticleSpawnSet;

pub struct ParticleSpawnPlugin;

impl Plugin for ParticleSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SpawnRequest>()
            .configure_sets(
                Update,
                ParticleSpawnSet.in_set(PrePhysicsSet).after(InputCaptureSet),
            )
            .add_systems(Update, spawn_requested_particles.in_set(ParticleSpawnSet));
    }
}

/// Consume this frame's spawn requests, enforcing the particle capacity ceiling.
/// Requests beyond capacity are dropped without notice.
fn spawn_requested_particles(
    mut commands: Commands,
    mut requests: EventReader<SpawnRequest>,
    circle: Option<Res<CircleMesh>>,
    palette: Option<Res<SpeedTintPalette>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cfg: Res<GameConfig>,
    q_particles: Query<(), With<Particle>>,
) {
    if requests.is_empty() {
        return;
    }

    // Ensure the shared mesh exists (first spawn may precede Startup ordering in tests).
    let circle_handle = if let Some(circle) = circle {
        circle.0.clone()
    } else {
        let handle = meshes.add(Mesh::from(Circle {
            radius: cfg.particles.radius,
        }));
        commands.insert_resource(CircleMesh(handle.clone()));
        handle
    };

    let mut live = q_particles.iter().count();
    for request in requests.read() {
        if live >= cfg.particles.capacity {
            break;
        }
        let material = match palette.as_ref() {
            Some(palette) if !palette.handles.is_empty() => palette.handles[0].clone(),
            _ => materials.add(Color::srgb(0.0, 0.3, 1.0)),
        };
        spawn_particle_entity(&mut commands, &circle_handle, material, request.position, &cfg);
        live += 1;
    }
}

/// Spawn one resting particle: dynamic circle body plus its mesh visual.
pub fn spawn_particle_entity(
    commands: &mut Commands,
    circle_mesh: &Handle<Mesh>,
    material: Handle<ColorMaterial>,
    position: Vec2,
    cfg: &GameConfig,
) -> Entity {
    commands
        .spawn((
            Particle,
            PrevVelocity::default(),
            RigidBody::Dynamic,
            Collider::ball(cfg.particles.radius),
            ColliderMassProperties::Density(cfg.particles.density),
            Friction::coefficient(cfg.particles.friction),
            Velocity::zero(),
            ExternalForce::default(),
            Mesh2d::from(circle_mesh.clone()),
            MeshMaterial2d(material),
            Transform::from_translation(position.extend(0.0)),
            GlobalTransform::default(),
            Visibility::Visible,
        ))
        .id()
}
