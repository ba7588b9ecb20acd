// Capacity ceiling: spawn requests beyond the particle limit are dropped silently.

use bevy::prelude::*;
use particle_sandbox::core::config::GameConfig;
use particle_sandbox::gameplay::spawn::ParticleSpawnPlugin;
use particle_sandbox::interaction::input::SpawnRequest;
use particle_sandbox::Particle;

fn capacity_app(capacity: usize) -> App {
    let mut cfg = GameConfig::default();
    cfg.particles.capacity = capacity;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(cfg)
        .init_resource::<Assets<Mesh>>()
        .init_resource::<Assets<ColorMaterial>>()
        .add_plugins(ParticleSpawnPlugin);
    app
}

fn particle_count(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), With<Particle>>()
        .iter(app.world())
        .count()
}

#[test]
fn under_capacity_every_request_spawns() {
    let mut app = capacity_app(8);
    for _ in 0..5 {
        app.world_mut().send_event(SpawnRequest {
            position: Vec2::ZERO,
        });
    }
    app.update();
    assert_eq!(particle_count(&mut app), 5);
}

#[test]
fn requests_beyond_capacity_are_dropped() {
    let mut app = capacity_app(8);
    // 3 frames x 4 requests = 12 requests against a ceiling of 8.
    for _ in 0..3 {
        for _ in 0..4 {
            app.world_mut().send_event(SpawnRequest {
                position: Vec2::new(10.0, -20.0),
            });
        }
        app.update();
    }
    assert_eq!(particle_count(&mut app), 8);

    // Later requests stay dropped; the ceiling is permanent.
    app.world_mut().send_event(SpawnRequest {
        position: Vec2::ZERO,
    });
    app.update();
    assert_eq!(particle_count(&mut app), 8);
}

#[test]
fn spawned_particles_start_at_rest() {
    use bevy_rapier2d::prelude::Velocity;

    let mut app = capacity_app(4);
    app.world_mut().send_event(SpawnRequest {
        position: Vec2::new(3.0, 4.0),
    });
    app.update();

    let mut q = app.world_mut().query_filtered::<&Velocity, With<Particle>>();
    let vel = q.iter(app.world()).next().expect("one particle spawned");
    assert_eq!(vel.linvel, Vec2::ZERO);
}
