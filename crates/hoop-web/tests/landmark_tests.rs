// Host-side tests for detector result conversion.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/landmarks.rs"]
mod landmarks;

use glam::Vec2;
use hoop_core::{Handedness, LANDMARK_COUNT, WRIST};
use landmarks::*;

fn skeleton(y: f32) -> Vec<Vec2> {
    (0..LANDMARK_COUNT)
        .map(|i| Vec2::new(i as f32 / LANDMARK_COUNT as f32, y))
        .collect()
}

#[test]
fn labels_map_to_handedness() {
    let right = observation_from_raw(&RawHand::new(Some("Right"), skeleton(0.5))).unwrap();
    let left = observation_from_raw(&RawHand::new(Some("Left"), skeleton(0.5))).unwrap();
    let unlabeled = observation_from_raw(&RawHand::new(None, skeleton(0.5))).unwrap();
    assert_eq!(right.handedness(), Handedness::Right);
    assert_eq!(left.handedness(), Handedness::Left);
    assert_eq!(unlabeled.handedness(), Handedness::Left);
    assert_eq!(right.landmark(WRIST), Vec2::new(0.0, 0.5));
}

#[test]
fn malformed_hands_are_dropped_but_valid_ones_kept() {
    let mut with_nan = skeleton(0.4);
    with_nan[12].x = f32::NAN;
    let raw = vec![
        RawHand::new(Some("Right"), skeleton(0.5)[..20].to_vec()),
        RawHand::new(Some("Left"), with_nan),
        RawHand::new(Some("Left"), skeleton(0.6)),
    ];
    let hands = observations_from_raw(&raw);
    assert_eq!(hands.len(), 1);
    assert_eq!(hands[0].handedness(), Handedness::Left);
    assert_eq!(hands[0].palm().y, 0.6);
}

#[test]
fn at_most_two_hands_survive() {
    let raw: Vec<RawHand> = (0..4)
        .map(|i| RawHand::new(Some("Right"), skeleton(0.1 * i as f32)))
        .collect();
    let hands = observations_from_raw(&raw);
    assert_eq!(hands.len(), 2);
    assert_eq!(hands[1].palm().y, 0.1);
}

#[test]
fn empty_results_yield_no_hands() {
    assert!(observations_from_raw(&[]).is_empty());
}
