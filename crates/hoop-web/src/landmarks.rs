//! Conversion of raw detector output into validated hand observations.
//!
//! Pure Rust so it can be exercised on the host; the wasm entry point only
//! pulls numbers out of the JS result object and hands them over here.

use glam::Vec2;
use hoop_core::{HandObservation, Handedness, ObservationError, MAX_HANDS};

/// One hand as reported by the detector, before validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawHand {
    /// "Left"/"Right" classification label, if the detector sent one.
    pub label: Option<String>,
    pub points: Vec<Vec2>,
}

impl RawHand {
    pub fn new(label: Option<&str>, points: Vec<Vec2>) -> Self {
        Self {
            label: label.map(str::to_owned),
            points,
        }
    }
}

pub fn observation_from_raw(raw: &RawHand) -> Result<HandObservation, ObservationError> {
    // A missing label is treated like any label other than "Right".
    let handedness = raw
        .label
        .as_deref()
        .map_or(Handedness::Left, Handedness::from_label);
    HandObservation::new(handedness, &raw.points)
}

/// Validate every detector hand, dropping (and logging) the malformed ones.
/// At most [`MAX_HANDS`] observations are returned, in detector order.
pub fn observations_from_raw(raw: &[RawHand]) -> Vec<HandObservation> {
    raw.iter()
        .enumerate()
        .filter_map(|(i, hand)| match observation_from_raw(hand) {
            Ok(obs) => Some(obs),
            Err(e) => {
                log::warn!("dropping detector hand {}: {}", i, e);
                None
            }
        })
        .take(MAX_HANDS)
        .collect()
}
