//! Detector-side hand types.
//!
//! A `HandObservation` is one detected hand for one detector invocation:
//! a handedness label plus the full 21-point skeleton in normalized
//! coordinates (origin top-left, y down). Observations can only be built
//! through [`HandObservation::new`], so everything downstream may index
//! landmarks freely.

use crate::error::ObservationError;
use glam::Vec2;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// Tip landmarks ordered thumb -> pinky.
pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Skeleton edges used for the overlay.
#[rustfmt::skip]
pub const HAND_CONNECTIONS: [(usize, usize); 24] = [
    (0, 1), (1, 2), (2, 3), (3, 4),
    (0, 5), (5, 6), (6, 7), (7, 8),
    (0, 9), (9, 10), (10, 11), (11, 12),
    (0, 13), (13, 14), (14, 15), (15, 16),
    (0, 17), (17, 18), (18, 19), (19, 20),
    (0, 17), (5, 9), (9, 13), (13, 17),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// Parse the detector's label. Anything but "Right" counts as left, as
    /// the detector only ever reports the two labels.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("right") {
            Handedness::Right
        } else {
            Handedness::Left
        }
    }

    /// First channel index owned by this hand.
    #[inline]
    pub fn channel_offset(self) -> usize {
        match self {
            Handedness::Right => 0,
            Handedness::Left => 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HandObservation {
    handedness: Handedness,
    landmarks: [Vec2; LANDMARK_COUNT],
}

impl HandObservation {
    /// Validate a detector hand. Partial skeletons are rejected outright
    /// rather than patched, so upstream detector bugs stay visible.
    pub fn new(handedness: Handedness, points: &[Vec2]) -> Result<Self, ObservationError> {
        if points.len() != LANDMARK_COUNT {
            return Err(ObservationError::WrongLandmarkCount {
                found: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(ObservationError::NonFinite { index });
        }
        let mut landmarks = [Vec2::ZERO; LANDMARK_COUNT];
        landmarks.copy_from_slice(points);
        Ok(Self {
            handedness,
            landmarks,
        })
    }

    #[inline]
    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    #[inline]
    pub fn landmarks(&self) -> &[Vec2; LANDMARK_COUNT] {
        &self.landmarks
    }

    #[inline]
    pub fn landmark(&self, index: usize) -> Vec2 {
        self.landmarks[index]
    }

    #[inline]
    pub fn palm(&self) -> Vec2 {
        self.landmarks[WRIST]
    }

    /// Project a landmark onto a surface of `size` pixels, optionally
    /// mirroring x for a selfie-view video.
    #[inline]
    pub fn to_surface(&self, index: usize, size: Vec2, mirror: bool) -> Vec2 {
        normalized_to_surface(self.landmarks[index], size, mirror)
    }
}

#[inline]
pub fn normalized_to_surface(p: Vec2, size: Vec2, mirror: bool) -> Vec2 {
    let x = if mirror { 1.0 - p.x } else { p.x };
    Vec2::new(x * size.x, p.y * size.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_partial_skeleton() {
        let pts = vec![Vec2::splat(0.5); 20];
        assert_eq!(
            HandObservation::new(Handedness::Left, &pts),
            Err(ObservationError::WrongLandmarkCount { found: 20 })
        );
    }

    #[test]
    fn rejects_nan_landmark() {
        let mut pts = vec![Vec2::splat(0.5); LANDMARK_COUNT];
        pts[7].y = f32::NAN;
        assert_eq!(
            HandObservation::new(Handedness::Right, &pts),
            Err(ObservationError::NonFinite { index: 7 })
        );
    }

    #[test]
    fn mirrored_projection_flips_x_only() {
        let mut pts = vec![Vec2::ZERO; LANDMARK_COUNT];
        pts[INDEX_TIP] = Vec2::new(0.25, 0.5);
        let hand = HandObservation::new(Handedness::Right, &pts).unwrap();
        let size = Vec2::new(1000.0, 500.0);
        assert_eq!(hand.to_surface(INDEX_TIP, size, false), Vec2::new(250.0, 250.0));
        assert_eq!(hand.to_surface(INDEX_TIP, size, true), Vec2::new(750.0, 250.0));
    }

    #[test]
    fn handedness_labels() {
        assert_eq!(Handedness::from_label("Right"), Handedness::Right);
        assert_eq!(Handedness::from_label("Left"), Handedness::Left);
        assert_eq!(Handedness::Right.channel_offset(), 0);
        assert_eq!(Handedness::Left.channel_offset(), 5);
    }
}
