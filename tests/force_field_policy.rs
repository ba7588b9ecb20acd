// Radial force policy of the shockwave field and the distance-independent magnet.

use bevy::prelude::*;
use bevy_rapier2d::prelude::ExternalForce;
use particle_sandbox::core::config::{GameConfig, ShockwaveConfig};
use particle_sandbox::physics::magnet::{CursorMagnet, MagnetPlugin};
use particle_sandbox::physics::shockwave::Shockwave;
use particle_sandbox::interaction::input::PointerWorld;
use particle_sandbox::{Particle, PrevVelocity};

const SPAN: f32 = 600.0;

fn wave_at_half() -> Shockwave {
    Shockwave {
        active: true,
        center: Vec2::ZERO,
        t: 0.5,
        direction: 1.0,
    }
}

#[test]
fn no_force_at_or_beyond_outer_radius() {
    let cfg = ShockwaveConfig::default();
    let wave = wave_at_half();
    // outer = 0.5 * (600 + 30) = 315
    assert!(wave.force_at(Vec2::new(315.0, 0.0), SPAN, &cfg).is_none());
    assert!(wave.force_at(Vec2::new(500.0, 0.0), SPAN, &cfg).is_none());
}

#[test]
fn ring_band_gets_weak_push_core_gets_strong_push() {
    let cfg = ShockwaveConfig::default();
    let wave = wave_at_half();
    // inner = 0.5 * (600 - 30) = 285; band is [285, 315)
    let band = wave
        .force_at(Vec2::new(300.0, 0.0), SPAN, &cfg)
        .expect("inside outer radius");
    assert!((band.length() - cfg.ring_power).abs() < 1e-3);

    let core = wave
        .force_at(Vec2::new(100.0, 0.0), SPAN, &cfg)
        .expect("inside inner radius");
    assert!((core.length() - cfg.core_power).abs() < 1e-3);

    // Exactly on the inner radius counts as band, not core.
    let edge = wave
        .force_at(Vec2::new(285.0, 0.0), SPAN, &cfg)
        .expect("inside outer radius");
    assert!((edge.length() - cfg.ring_power).abs() < 1e-3);
}

#[test]
fn expanding_pushes_out_contracting_pulls_in() {
    let cfg = ShockwaveConfig::default();
    let pos = Vec2::new(100.0, 50.0);

    let expanding = wave_at_half();
    let out = expanding.force_at(pos, SPAN, &cfg).unwrap();
    assert!(out.dot(pos) > 0.0, "expanding wave must push away");

    let contracting = Shockwave {
        direction: -1.0,
        ..expanding
    };
    let inward = contracting.force_at(pos, SPAN, &cfg).unwrap();
    assert!(inward.dot(pos) < 0.0, "contracting wave must pull in");
}

#[test]
fn particle_at_wave_center_feels_no_push() {
    let cfg = ShockwaveConfig::default();
    let wave = wave_at_half();
    let force = wave.force_at(Vec2::ZERO, SPAN, &cfg).unwrap();
    assert_eq!(force, Vec2::ZERO);
}

#[test]
fn magnet_pull_is_independent_of_distance() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(GameConfig::default())
        .insert_resource(PointerWorld(Some(Vec2::ZERO)))
        .add_plugins(MagnetPlugin);
    app.world_mut().resource_mut::<CursorMagnet>().enabled = true;

    let near = app
        .world_mut()
        .spawn((
            Particle,
            PrevVelocity::default(),
            Transform::from_xyz(10.0, 0.0, 0.0),
            ExternalForce::default(),
        ))
        .id();
    let far = app
        .world_mut()
        .spawn((
            Particle,
            PrevVelocity::default(),
            Transform::from_xyz(1000.0, 0.0, 0.0),
            ExternalForce::default(),
        ))
        .id();

    app.update();

    let strength = GameConfig::default().magnet.strength;
    let f_near = app.world().get::<ExternalForce>(near).unwrap().force;
    let f_far = app.world().get::<ExternalForce>(far).unwrap().force;
    assert!((f_near.length() - strength).abs() < 1e-3);
    assert!((f_far.length() - strength).abs() < 1e-3);
    // Both point toward the cursor at the origin.
    assert!(f_near.x < 0.0);
    assert!(f_far.x < 0.0);
}
