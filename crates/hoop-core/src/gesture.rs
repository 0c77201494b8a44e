//! Per-finger extension state and depth for a single hand observation.

use crate::constants::{EXTENSION_MARGIN, FINGERS_PER_HAND};
use crate::hand::{HandObservation, FINGERTIPS};

/// Extension reading for one finger of one hand.
///
/// `control_value` is the normalized height of the tip above the palm and is
/// only meaningful (and strictly positive) when `extended` is true.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FingerSignal {
    pub channel: usize,
    pub extended: bool,
    pub control_value: f32,
}

/// A finger counts as extended when its tip sits above the wrist by more
/// than the noise margin (smaller y is higher on screen).
#[inline]
pub fn is_extended(tip_y: f32, palm_y: f32) -> bool {
    tip_y < palm_y - EXTENSION_MARGIN
}

/// Extract thumb..pinky signals for one hand. Pure; reads only `hand`.
pub fn extract(hand: &HandObservation) -> [FingerSignal; FINGERS_PER_HAND] {
    let palm_y = hand.palm().y;
    let offset = hand.handedness().channel_offset();
    let mut out = [FingerSignal::default(); FINGERS_PER_HAND];
    for (rank, (signal, &tip)) in out.iter_mut().zip(FINGERTIPS.iter()).enumerate() {
        let tip_y = hand.landmark(tip).y;
        let extended = is_extended(tip_y, palm_y);
        *signal = FingerSignal {
            channel: rank + offset,
            extended,
            control_value: if extended { palm_y - tip_y } else { 0.0 },
        };
    }
    out
}
