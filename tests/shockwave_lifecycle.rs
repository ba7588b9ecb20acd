// Shockwave pool lifecycle: progress window [0,1), slot reuse, bounded arena.

use bevy::prelude::*;
use particle_sandbox::ShockwavePool;

const SPEED: f32 = 0.4;

#[test]
fn expanding_wave_dies_once_progress_reaches_one() {
    let mut pool = ShockwavePool::new(4);
    pool.activate(Vec2::ZERO, false);
    assert_eq!(pool.active_count(), 1);

    // 0.4/s over 0.1s steps: alive until t crosses 1.0.
    let mut steps = 0;
    while pool.active_count() > 0 {
        pool.advance(0.1, SPEED);
        steps += 1;
        assert!(steps <= 26, "wave failed to deactivate");
    }
    // t crosses 1.0 after ~25 steps of 0.04; allow one step of float slack.
    assert!((25..=26).contains(&steps), "took {steps} steps");
}

#[test]
fn contracting_wave_dies_once_progress_drops_below_zero() {
    let mut pool = ShockwavePool::new(4);
    pool.activate(Vec2::ZERO, true);
    let wave = pool.active().next().unwrap();
    assert_eq!(wave.t, 1.0);
    assert_eq!(wave.direction, -1.0);

    let mut steps = 0;
    while pool.active_count() > 0 {
        pool.advance(0.1, SPEED);
        steps += 1;
        assert!(steps <= 27, "wave failed to deactivate");
    }
}

#[test]
fn full_pool_ignores_requests_until_a_slot_frees() {
    let mut pool = ShockwavePool::new(2);
    assert!(pool.activate(Vec2::new(1.0, 0.0), false).is_some());
    assert!(pool.activate(Vec2::new(2.0, 0.0), false).is_some());
    assert!(pool.activate(Vec2::new(3.0, 0.0), false).is_none());
    assert_eq!(pool.active_count(), 2);

    // Retire every wave, then the next request must land in a freed slot.
    for _ in 0..30 {
        pool.advance(0.1, SPEED);
    }
    assert_eq!(pool.active_count(), 0);
    assert!(pool.activate(Vec2::new(4.0, 0.0), false).is_some());
    assert_eq!(pool.active_count(), 1);
}

#[test]
fn pool_capacity_is_fixed() {
    let mut pool = ShockwavePool::new(128);
    for i in 0..200 {
        pool.activate(Vec2::new(i as f32, 0.0), false);
    }
    assert_eq!(pool.capacity(), 128);
    assert_eq!(pool.active_count(), 128);
}
