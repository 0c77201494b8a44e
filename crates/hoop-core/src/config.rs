//! Session configuration: the three user toggles plus court layout.
//!
//! Validated once by `Session::start`; the session only hands out shared
//! references afterwards, so the record is read-only for its lifetime.

use crate::ball::BallParams;
use crate::basket::Basket;
use crate::constants::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::error::ConfigError;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

impl SurfaceSize {
    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }
}

/// Static placement of the hoop and the ball at session start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CourtLayout {
    pub basket: Basket,
    pub ball: BallParams,
    pub ball_spawn: Vec2,
}

impl Default for CourtLayout {
    fn default() -> Self {
        Self {
            basket: Basket::default(),
            ball: BallParams::default(),
            ball_spawn: Vec2::new(SURFACE_WIDTH * 0.5, SURFACE_HEIGHT * 0.3),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    /// Emit audio-control output.
    pub sound_enabled: bool,
    /// Draw hand skeleton overlays.
    pub show_hand_marks: bool,
    /// Mirror landmark x before use (selfie view).
    pub mirror_video: bool,
    pub surface: SurfaceSize,
    pub layout: CourtLayout,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            show_hand_marks: true,
            mirror_video: true,
            surface: SurfaceSize::default(),
            layout: CourtLayout::default(),
        }
    }
}

impl SessionConfig {
    pub fn with_toggles(sound_enabled: bool, show_hand_marks: bool, mirror_video: bool) -> Self {
        Self {
            sound_enabled,
            show_hand_marks,
            mirror_video,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let SurfaceSize { width, height } = self.surface;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::EmptySurface { width, height });
        }

        validate_ball(&self.layout.ball)?;

        let basket = &self.layout.basket;
        let (min, max) = basket.bounds();
        if !(self.surface.contains(min) && self.surface.contains(max)) {
            return Err(ConfigError::BasketOutsideSurface);
        }
        // The ball leaves the net only once its lower edge passes the net
        // bottom, and the floor clamps that edge to the surface height.
        if basket.net_bottom() >= height {
            return Err(ConfigError::BasketOutsideSurface);
        }

        let spawn = self.layout.ball_spawn;
        if !self.surface.contains(spawn) {
            return Err(ConfigError::SpawnOutsideSurface {
                x: spawn.x,
                y: spawn.y,
            });
        }
        Ok(())
    }
}

fn validate_ball(p: &BallParams) -> Result<(), ConfigError> {
    let checks: [(&'static str, f32, bool); 5] = [
        ("radius", p.radius, p.radius > 0.0),
        ("gravity", p.gravity, p.gravity >= 0.0),
        ("air_friction", p.air_friction, p.air_friction > 0.0 && p.air_friction < 1.0),
        (
            "bounce_efficiency",
            p.bounce_efficiency,
            p.bounce_efficiency > 0.0 && p.bounce_efficiency < 1.0,
        ),
        ("max_speed", p.max_speed, p.max_speed > 0.0),
    ];
    for (name, value, ok) in checks {
        if !ok || !value.is_finite() {
            return Err(ConfigError::BallParam { name, value });
        }
    }
    Ok(())
}
