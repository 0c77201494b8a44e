//! Confetti burst shown after a basket.

use crate::constants::{
    CONFETTI_BURST, CONFETTI_GRAVITY, CONFETTI_SIZE, CONFETTI_SPIN_DEG, CONFETTI_VX, CONFETTI_VY,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    /// Hue in degrees; saturation and lightness are fixed by the renderer.
    pub hue: f32,
    pub rotation_deg: f32,
    pub rotation_speed_deg: f32,
    pub gravity: f32,
}

impl ConfettiParticle {
    #[inline]
    fn advance(&mut self) {
        self.position += self.velocity;
        self.velocity.y += self.gravity;
        self.rotation_deg += self.rotation_speed_deg;
    }
}

pub struct Confetti {
    particles: Vec<ConfettiParticle>,
    rng: StdRng,
}

impl Confetti {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn particles(&self) -> &[ConfettiParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True when there is nothing left to animate.
    pub fn is_idle(&self) -> bool {
        self.particles.is_empty()
    }

    /// Spawn one batch at `origin`.
    pub fn burst(&mut self, origin: Vec2) {
        self.particles.reserve(CONFETTI_BURST);
        for _ in 0..CONFETTI_BURST {
            let rng = &mut self.rng;
            self.particles.push(ConfettiParticle {
                position: origin,
                velocity: Vec2::new(
                    rng.gen_range(CONFETTI_VX.0..=CONFETTI_VX.1),
                    rng.gen_range(CONFETTI_VY.0..=CONFETTI_VY.1),
                ),
                size: rng.gen_range(CONFETTI_SIZE.0..=CONFETTI_SIZE.1),
                hue: rng.gen_range(0.0..360.0),
                rotation_deg: rng.gen_range(0.0..360.0),
                rotation_speed_deg: rng.gen_range(CONFETTI_SPIN_DEG.0..=CONFETTI_SPIN_DEG.1),
                gravity: CONFETTI_GRAVITY,
            });
        }
    }

    /// Advance every particle one tick and drop those below `floor_y`.
    pub fn advance(&mut self, floor_y: f32) {
        if self.is_idle() {
            return;
        }
        for p in &mut self.particles {
            p.advance();
        }
        self.particles.retain(|p| p.position.y <= floor_y);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
