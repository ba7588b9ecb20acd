use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::interaction::input::InputCaptureSet;

/// Clears last frame's accumulated forces; runs before any field system.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ForceResetSet;

/// Magnet and shockwave force accumulation.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ForceFieldSet;

/// Wrapper configuring Rapier (slow-motion fixed stepping) and the arena walls.
pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let (time_step, substeps) = app
            .world()
            .get_resource::<GameConfig>()
            .map(|cfg| (cfg.physics.time_step, cfg.physics.substeps))
            .unwrap_or_else(|| {
                let d = crate::core::config::PhysicsConfig::default();
                (d.time_step, d.substeps)
            });
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            // Each rendered frame advances a fixed slice of simulated time,
            // regardless of wall clock. Deliberately not real-time-accurate.
            .insert_resource(TimestepMode::Fixed {
                dt: time_step,
                substeps,
            })
            .configure_sets(
                Update,
                (
                    ForceResetSet.in_set(PrePhysicsSet).after(InputCaptureSet),
                    ForceFieldSet.in_set(PrePhysicsSet).after(ForceResetSet),
                ),
            )
            .add_systems(Startup, (configure_gravity, spawn_arena_walls))
            .add_systems(Update, reset_external_forces.in_set(ForceResetSet));
    }
}

fn configure_gravity(mut rapier_cfg: Query<&mut RapierConfiguration>, cfg: Res<GameConfig>) {
    let Ok(mut rapier_cfg) = rapier_cfg.single_mut() else {
        warn!("Rapier context not ready; keeping default gravity");
        return;
    };
    rapier_cfg.gravity = Vect::new(0.0, cfg.physics.gravity_y);
}

/// Four static thick cuboids forming a box slightly larger than the window,
/// so particles can never leave the play area.
fn spawn_arena_walls(mut commands: Commands, cfg: Res<GameConfig>) {
    let half_w = cfg.window.width * 0.5;
    let half_h = cfg.window.height * 0.5;
    let t = cfg.physics.wall_thickness;

    let walls = [
        ("WallBottom", Vec2::new(0.0, -half_h - t), Vec2::new(half_w + t, t)),
        ("WallTop", Vec2::new(0.0, half_h + t), Vec2::new(half_w + t, t)),
        ("WallLeft", Vec2::new(-half_w - t, 0.0), Vec2::new(t, half_h + t)),
        ("WallRight", Vec2::new(half_w + t, 0.0), Vec2::new(t, half_h + t)),
    ];

    for (name, position, half_extents) in walls {
        commands.spawn((
            Name::new(name),
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y),
            Transform::from_translation(position.extend(0.0)),
            GlobalTransform::default(),
        ));
    }
}

/// Forces are re-accumulated every frame; clear before the field systems run.
pub fn reset_external_forces(mut forces: Query<&mut ExternalForce>) {
    for mut force in &mut forces {
        force.force = Vec2::ZERO;
        force.torque = 0.0;
    }
}
