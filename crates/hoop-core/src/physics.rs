//! Ball kinematics, wall/rim/fingertip collisions and the basket scoring
//! state machine.
//!
//! One call to [`Simulator::step`] is one physics tick. All constants are
//! per tick, so the caller decides the tick rate (see `timestep`).

use crate::ball::{Ball, BallParams};
use crate::basket::Basket;
use crate::constants::{
    FINGERTIP_IMPULSE_SCALE, FINGERTIP_JITTER, FINGERTIP_MIN_DISPLACEMENT, FINGERTIP_REACH,
    RIM_BOUNCE_FACTOR, RIM_DEFLECT_SPEED, SCORE_COOLDOWN_SEC,
};
use crate::fingertips::{FingertipHistory, FingertipKey};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BallState {
    Free,
    InBasket,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RimEdge {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    Bounce { wall: Wall, impact_speed: f32 },
    RimHit { edge: RimEdge },
    EnteredBasket,
    Scored { score: u32, origin: Vec2 },
}

pub type StepEvents = SmallVec<[GameEvent; 4]>;

#[derive(Clone, Debug)]
pub struct Simulator {
    ball: Ball,
    basket: Basket,
    surface: Vec2,
    state: BallState,
    last_score_time: Option<f64>,
    score: u32,
    history: FingertipHistory,
}

impl Simulator {
    pub fn new(surface: Vec2, basket: Basket, params: BallParams, spawn: Vec2) -> Self {
        Self {
            ball: Ball::new(spawn, params),
            basket,
            surface,
            state: BallState::Free,
            last_score_time: None,
            score: 0,
            history: FingertipHistory::new(),
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn surface(&self) -> Vec2 {
        self.surface
    }

    pub fn state(&self) -> BallState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn last_score_time(&self) -> Option<f64> {
        self.last_score_time
    }

    pub fn history(&self) -> &FingertipHistory {
        &self.history
    }

    /// Put the ball at `position` with `velocity`, back in the free state.
    pub fn reset_ball(&mut self, position: Vec2, velocity: Vec2) {
        self.ball.position = position;
        self.ball.velocity = velocity;
        self.ball.clamp_speed();
        self.state = BallState::Free;
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Advance one tick. `now_sec` is only used for the scoring cooldown.
    pub fn step(&mut self, now_sec: f64) -> StepEvents {
        let mut events = StepEvents::new();

        self.ball.velocity.y += self.ball.params.gravity;
        self.ball.position += self.ball.velocity;

        self.collide_walls(&mut events);

        match self.state {
            BallState::Free => self.collide_rim(&mut events),
            BallState::InBasket => self.check_net_exit(now_sec, &mut events),
        }

        self.ball.velocity *= self.ball.params.air_friction;
        self.ball.clamp_speed();
        events
    }

    fn collide_walls(&mut self, events: &mut StepEvents) {
        let r = self.ball.params.radius;
        let k = -self.ball.params.bounce_efficiency;
        let ball = &mut self.ball;

        if ball.position.x - r < 0.0 {
            ball.position.x = r;
            events.push(GameEvent::Bounce {
                wall: Wall::Left,
                impact_speed: ball.velocity.x.abs(),
            });
            ball.velocity.x *= k;
        } else if ball.position.x + r > self.surface.x {
            ball.position.x = self.surface.x - r;
            events.push(GameEvent::Bounce {
                wall: Wall::Right,
                impact_speed: ball.velocity.x.abs(),
            });
            ball.velocity.x *= k;
        }

        if ball.position.y - r < 0.0 {
            ball.position.y = r;
            events.push(GameEvent::Bounce {
                wall: Wall::Top,
                impact_speed: ball.velocity.y.abs(),
            });
            ball.velocity.y *= k;
        } else if ball.position.y + r > self.surface.y {
            ball.position.y = self.surface.y - r;
            events.push(GameEvent::Bounce {
                wall: Wall::Bottom,
                impact_speed: ball.velocity.y.abs(),
            });
            ball.velocity.y *= k;
        }
    }

    fn collide_rim(&mut self, events: &mut StepEvents) {
        let b = &self.basket;
        let ball = &mut self.ball;
        let r = ball.params.radius;
        let p = ball.position;

        let in_band = p.y + r >= b.rim_top() && p.y - r <= b.rim_bottom();
        let over_rim = p.x + r >= b.rim_left() && p.x - r <= b.rim_right();
        if !(in_band && over_rim && ball.velocity.y > 0.0) {
            return;
        }

        let inner_left = b.rim_left() + r * 0.5;
        let inner_right = b.rim_right() - r * 0.5;
        if p.x > inner_left && p.x < inner_right {
            self.state = BallState::InBasket;
            events.push(GameEvent::EnteredBasket);
            return;
        }

        ball.velocity.y *= -RIM_BOUNCE_FACTOR;
        let edge = if p.x <= inner_left {
            ball.velocity.x -= RIM_DEFLECT_SPEED;
            RimEdge::Left
        } else {
            ball.velocity.x += RIM_DEFLECT_SPEED;
            RimEdge::Right
        };
        log::trace!("rim hit on {:?} edge at x={:.1}", edge, p.x);
        events.push(GameEvent::RimHit { edge });
    }

    fn check_net_exit(&mut self, now_sec: f64, events: &mut StepEvents) {
        if self.ball.bottom() <= self.basket.net_bottom() {
            return;
        }
        self.state = BallState::Free;

        let cooled = self
            .last_score_time
            .map_or(true, |t| now_sec - t >= SCORE_COOLDOWN_SEC);
        if !cooled {
            log::debug!("score suppressed by cooldown at t={:.3}", now_sec);
            return;
        }
        self.score += 1;
        self.last_score_time = Some(now_sec);
        log::info!("score! total={}", self.score);
        events.push(GameEvent::Scored {
            score: self.score,
            origin: self.basket.net_center(),
        });
    }

    /// Push the ball with any fingertip that swept through it since the
    /// previous detection. Every fingertip's position is recorded whether
    /// or not it touched the ball. Returns the number of impulses applied.
    pub fn apply_fingertips<R: Rng>(
        &mut self,
        tips: &[(FingertipKey, Vec2)],
        rng: &mut R,
    ) -> usize {
        let reach = self.ball.params.radius + FINGERTIP_REACH;
        let mut impulses = 0;
        for &(key, tip) in tips {
            let previous = self.history.record(key, tip);
            let Some(prev) = previous else {
                continue;
            };
            if tip.distance(self.ball.position) >= reach {
                continue;
            }
            let d = tip - prev;
            if d.x.abs() <= FINGERTIP_MIN_DISPLACEMENT && d.y.abs() <= FINGERTIP_MIN_DISPLACEMENT {
                continue;
            }
            let jitter = Vec2::new(
                rng.gen_range(-FINGERTIP_JITTER..=FINGERTIP_JITTER),
                rng.gen_range(-FINGERTIP_JITTER..=FINGERTIP_JITTER),
            );
            self.ball.velocity += d * FINGERTIP_IMPULSE_SCALE + jitter;
            self.ball.clamp_speed();
            impulses += 1;
        }
        impulses
    }
}
