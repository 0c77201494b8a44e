use crate::constants::{
    BALL_AIR_FRICTION, BALL_BOUNCE_EFFICIENCY, BALL_GRAVITY, BALL_MAX_SPEED, BALL_RADIUS,
};
use glam::Vec2;

/// Physical constants of the ball, in surface pixels per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallParams {
    pub radius: f32,
    pub gravity: f32,
    /// Per-tick velocity retention in (0, 1).
    pub air_friction: f32,
    /// Fraction of speed kept on a wall bounce, in (0, 1).
    pub bounce_efficiency: f32,
    pub max_speed: f32,
}

impl Default for BallParams {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            gravity: BALL_GRAVITY,
            air_friction: BALL_AIR_FRICTION,
            bounce_efficiency: BALL_BOUNCE_EFFICIENCY,
            max_speed: BALL_MAX_SPEED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    pub params: BallParams,
}

impl Ball {
    pub fn new(position: Vec2, params: BallParams) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            params,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.params.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.params.radius
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Uniformly rescale velocity so its magnitude does not exceed `max_speed`.
    #[inline]
    pub fn clamp_speed(&mut self) {
        self.velocity = clamp_magnitude(self.velocity, self.params.max_speed);
    }
}

#[inline]
pub fn clamp_magnitude(v: Vec2, max: f32) -> Vec2 {
    let len = v.length();
    if len > max && len > 0.0 {
        v * (max / len)
    } else {
        v
    }
}
