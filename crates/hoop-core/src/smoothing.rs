//! Exponential target-approach smoothing (first-order low-pass with time constant tau).

/// Move `value` toward `target` as if `dt` seconds elapsed under a
/// first-order lag with time constant `tau`.
///
/// Never overshoots: the result always lies between `value` and `target`.
/// A non-positive `tau` snaps straight to the target.
#[inline]
pub fn approach(value: f32, target: f32, dt_sec: f32, tau_sec: f32) -> f32 {
    if tau_sec <= 0.0 {
        return target;
    }
    let keep = (-dt_sec.max(0.0) / tau_sec).exp();
    target + (value - target) * keep
}

/// A smoothed scalar with a fixed time constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed {
    pub value: f32,
    pub tau_sec: f32,
}

impl Smoothed {
    pub fn new(value: f32, tau_sec: f32) -> Self {
        Self { value, tau_sec }
    }

    #[inline]
    pub fn update(&mut self, target: f32, dt_sec: f32) -> f32 {
        self.value = approach(self.value, target, dt_sec, self.tau_sec);
        self.value
    }

    /// Jump to `value` without smoothing.
    #[inline]
    pub fn set(&mut self, value: f32) {
        self.value = value;
    }
}
