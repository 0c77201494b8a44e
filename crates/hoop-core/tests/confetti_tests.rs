// Host-side integration tests for the confetti particle system.

use glam::Vec2;
use hoop_core::*;

#[test]
fn burst_spawns_one_batch_at_origin_within_ranges() {
    let mut confetti = Confetti::new(1);
    assert!(confetti.is_idle());
    let origin = Vec2::new(640.0, 300.0);
    confetti.burst(origin);
    assert_eq!(confetti.len(), CONFETTI_BURST);
    assert_eq!(confetti.len(), 100);
    for p in confetti.particles() {
        assert_eq!(p.position, origin);
        assert!((5.0..=10.0).contains(&p.size));
        assert!((-4.0..=4.0).contains(&p.velocity.x));
        assert!((-15.0..=-5.0).contains(&p.velocity.y));
        assert!((-5.0..=5.0).contains(&p.rotation_speed_deg));
        assert!((0.0..360.0).contains(&p.hue));
        assert_eq!(p.gravity, 0.1);
    }
}

#[test]
fn particles_move_spin_and_fall() {
    let mut confetti = Confetti::new(2);
    confetti.burst(Vec2::new(100.0, 100.0));
    let before = confetti.particles()[0];
    confetti.advance(720.0);
    let after = confetti.particles()[0];
    assert_eq!(after.position, before.position + before.velocity);
    assert!((after.velocity.y - (before.velocity.y + 0.1)).abs() < 1e-6);
    assert_eq!(after.velocity.x, before.velocity.x);
    assert!(
        (after.rotation_deg - (before.rotation_deg + before.rotation_speed_deg)).abs() < 1e-4
    );
}

#[test]
fn batch_drains_to_idle_once_everything_falls_off_screen() {
    let height = 720.0;
    let mut confetti = Confetti::new(3);
    confetti.burst(Vec2::new(640.0, 300.0));
    let mut ticks = 0;
    while !confetti.is_idle() {
        confetti.advance(height);
        for p in confetti.particles() {
            assert!(p.position.y <= height);
        }
        ticks += 1;
        assert!(ticks < 2000, "confetti never drained");
    }
    assert_eq!(confetti.len(), 0);
}

#[test]
fn bursts_accumulate_and_clear() {
    let mut confetti = Confetti::new(4);
    confetti.burst(Vec2::ZERO);
    confetti.burst(Vec2::ZERO);
    assert_eq!(confetti.len(), 200);
    confetti.clear();
    assert!(confetti.is_idle());
    confetti.advance(720.0);
    assert!(confetti.is_idle());
}
