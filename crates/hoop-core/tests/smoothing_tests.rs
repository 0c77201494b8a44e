// Host-side integration tests for exponential smoothing and channel audio targets.

use glam::Vec2;
use hoop_core::*;
use rand::prelude::*;

const FRAME: f32 = 1.0 / 60.0;

fn index_finger_hand(extended: bool, depth: f32) -> HandObservation {
    let palm_y = 0.9;
    let mut pts = vec![Vec2::new(0.5, palm_y); LANDMARK_COUNT];
    if extended {
        pts[INDEX_TIP] = Vec2::new(0.5, palm_y - depth);
    }
    HandObservation::new(Handedness::Right, &pts).unwrap()
}

fn detect(bank: &mut ChannelBank, extended: bool) {
    bank.begin_detection();
    bank.apply_hand(&index_finger_hand(extended, 0.3));
}

#[test]
fn approach_never_overshoots() {
    let mut v = 0.0;
    for _ in 0..1000 {
        v = approach(v, 0.1, FRAME, GAIN_TAU_SEC);
        assert!(v <= 0.1);
    }
    assert!((v - 0.1).abs() < 1e-6);
}

#[test]
fn gain_stays_in_range_and_decays_monotonically_when_inactive() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut bank = ChannelBank::new();
    let mut prev_gain = 0.0_f32;
    let mut prev_active = false;
    for _ in 0..2000 {
        let active = rng.gen_bool(0.5);
        detect(&mut bank, active);
        let dt = rng.gen_range(0.001..0.05);
        bank.advance(dt);
        let g = bank.get(1).unwrap().gain.value;
        assert!(g >= 0.0, "gain went negative: {g}");
        assert!(g <= ACTIVE_GAIN, "gain exceeded ceiling: {g}");
        if !active && !prev_active {
            assert!(g <= prev_gain, "gain rose while inactive: {prev_gain} -> {g}");
        }
        prev_gain = g;
        prev_active = active;
    }
}

#[test]
fn gain_reaches_ceiling_when_held_active() {
    let mut bank = ChannelBank::new();
    detect(&mut bank, true);
    for _ in 0..120 {
        bank.advance(FRAME);
    }
    assert!((bank.get(1).unwrap().gain.value - ACTIVE_GAIN).abs() < 1e-5);
}

#[test]
fn frequency_tracks_depth_and_holds_when_released() {
    let mut bank = ChannelBank::new();
    let base = channel_base_pitch(1);
    assert!((bank.get(1).unwrap().frequency.value - base).abs() < 1e-3);

    detect(&mut bank, true);
    let target = bank.frequency_target(1).unwrap();
    assert!((target - base * (1.0 + 2.0 * 0.3)).abs() < 1e-2);
    for _ in 0..120 {
        bank.advance(FRAME);
    }
    let held = bank.get(1).unwrap().frequency.value;
    assert!((held - target).abs() < 0.05);

    detect(&mut bank, false);
    assert_eq!(bank.frequency_target(1), None);
    for _ in 0..120 {
        bank.advance(FRAME);
    }
    assert_eq!(bank.get(1).unwrap().frequency.value, held);
}

#[test]
fn audio_frame_reports_targets_and_time_constants() {
    let mut bank = ChannelBank::new();
    detect(&mut bank, true);
    let frame = bank.audio_frame();
    let ch1 = frame.channels[1];
    assert_eq!(ch1.gain_target, ACTIVE_GAIN);
    assert!(ch1.frequency_target.is_some());
    assert_eq!(ch1.gain_tau_sec, GAIN_TAU_SEC);
    assert_eq!(ch1.frequency_tau_sec, FREQUENCY_TAU_SEC);
    let ch0 = frame.channels[0];
    assert_eq!(ch0.gain_target, 0.0);
    assert_eq!(ch0.frequency_target, None);
}

#[test]
fn silence_mutes_immediately() {
    let mut bank = ChannelBank::new();
    detect(&mut bank, true);
    for _ in 0..30 {
        bank.advance(FRAME);
    }
    assert!(bank.get(1).unwrap().gain.value > 0.05);
    bank.silence();
    assert_eq!(bank.get(1).unwrap().gain.value, 0.0);
    assert_eq!(bank.active_count(), 0);
}

#[test]
fn gain_attack_is_faster_than_pitch_glide() {
    let g = approach(0.0, 1.0, FRAME, GAIN_TAU_SEC);
    let f = approach(0.0, 1.0, FRAME, FREQUENCY_TAU_SEC);
    assert!(g > f);
}
