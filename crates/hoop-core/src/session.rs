//! Frame orchestration: one explicit context value owning all simulation state.
//!
//! Scheduling policy, applied by every [`Session::tick`]:
//! 1. drain the most recent pending detection (channel activity, then
//!    fingertip impulses against the current ball);
//! 2. advance channel smoothing by the real frame time;
//! 3. run the fixed-rate physics substeps owed for this frame, each one
//!    advancing confetti and then the ball, bursting confetti on a score;
//! 4. collect audio targets and one-shot sounds.
//!
//! Detections therefore always act on the ball before gravity does within
//! the same frame.

use crate::channel::{AudioFrame, ChannelBank};
use crate::confetti::Confetti;
use crate::config::SessionConfig;
use crate::constants::{BOUNCE_SOUND_MIN_SPEED, CHANNEL_COUNT, MAX_HANDS, SCORE_FLASH_SEC};
use crate::draw::{self, DrawCommand};
use crate::error::ConfigError;
use crate::fingertips::FingertipKey;
use crate::hand::{HandObservation, FINGERTIPS};
use crate::music::OneShot;
use crate::physics::{GameEvent, Simulator};
use crate::timestep::FixedTimestep;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use std::time::Duration;

/// Everything a front end needs to act on after one tick.
#[derive(Clone, Debug, Default)]
pub struct FrameOutput {
    /// Channel targets; `None` when sound is disabled or the session stopped.
    pub audio: Option<AudioFrame>,
    pub sounds: SmallVec<[OneShot; 4]>,
    pub events: Vec<GameEvent>,
    pub substeps: u32,
}

pub struct Session {
    config: SessionConfig,
    channels: ChannelBank,
    sim: Simulator,
    confetti: Confetti,
    jitter_rng: StdRng,
    timestep: FixedTimestep,
    pending: Option<Vec<HandObservation>>,
    hands: Vec<HandObservation>,
    running: bool,
    now_sec: f64,
}

// Derive independent RNG streams from one seed.
fn stream_seed(seed: u64, stream: u64) -> u64 {
    seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

impl Session {
    pub fn start(config: SessionConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = config.layout;
        let sim = Simulator::new(
            config.surface.as_vec2(),
            layout.basket,
            layout.ball,
            layout.ball_spawn,
        );
        log::info!(
            "session started: sound={} marks={} mirror={} surface={}x{}",
            config.sound_enabled,
            config.show_hand_marks,
            config.mirror_video,
            config.surface.width,
            config.surface.height
        );
        Ok(Self {
            config,
            channels: ChannelBank::new(),
            sim,
            confetti: Confetti::new(stream_seed(seed, 2)),
            jitter_rng: StdRng::seed_from_u64(stream_seed(seed, 1)),
            timestep: FixedTimestep::default(),
            pending: None,
            hands: Vec::new(),
            running: true,
            now_sec: 0.0,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn channels(&self) -> &ChannelBank {
        &self.channels
    }

    pub fn simulator(&self) -> &Simulator {
        &self.sim
    }

    pub fn confetti(&self) -> &Confetti {
        &self.confetti
    }

    pub fn score(&self) -> u32 {
        self.sim.score()
    }

    /// Hands from the last drained detection.
    pub fn hands(&self) -> &[HandObservation] {
        &self.hands
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Queue a detector result for the next tick. A newer detection replaces
    /// one that has not been drained yet; hands beyond the second are ignored.
    pub fn submit_detection(&mut self, mut hands: Vec<HandObservation>) {
        if !self.running {
            return;
        }
        hands.truncate(MAX_HANDS);
        self.pending = Some(hands);
    }

    pub fn tick(&mut self, now_sec: f64, dt: Duration) -> FrameOutput {
        let mut out = FrameOutput::default();
        if !self.running {
            return out;
        }
        self.now_sec = now_sec;

        if let Some(hands) = self.pending.take() {
            self.ingest(hands);
        }

        self.channels.advance(dt.as_secs_f32());

        out.substeps = self.timestep.advance(dt);
        let floor = self.config.surface.height;
        for _ in 0..out.substeps {
            self.confetti.advance(floor);
            for ev in self.sim.step(now_sec) {
                match ev {
                    GameEvent::Scored { origin, .. } => {
                        self.confetti.burst(origin);
                        out.sounds.push(OneShot::score());
                    }
                    GameEvent::Bounce { impact_speed, .. }
                        if impact_speed > BOUNCE_SOUND_MIN_SPEED =>
                    {
                        out.sounds.push(OneShot::bounce(impact_speed));
                    }
                    _ => {}
                }
                out.events.push(ev);
            }
        }

        if self.config.sound_enabled {
            out.audio = Some(self.channels.audio_frame());
        } else {
            out.sounds.clear();
        }
        out
    }

    fn ingest(&mut self, hands: Vec<HandObservation>) {
        self.channels.begin_detection();
        let size = self.config.surface.as_vec2();
        let mirror = self.config.mirror_video;
        let mut tips: SmallVec<[(FingertipKey, Vec2); CHANNEL_COUNT]> = SmallVec::new();
        for (slot, hand) in hands.iter().enumerate() {
            self.channels.apply_hand(hand);
            for &tip in FINGERTIPS.iter() {
                tips.push((FingertipKey::new(slot, tip), hand.to_surface(tip, size, mirror)));
            }
        }
        let impulses = self.sim.apply_fingertips(&tips, &mut self.jitter_rng);
        if impulses > 0 {
            log::debug!("{} fingertip impulse(s) applied", impulses);
        }
        self.hands = hands;
    }

    /// Stop the session. Channels fall silent at once and per-session
    /// history is dropped; later ticks and detections are ignored.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.pending = None;
        self.hands.clear();
        self.channels.silence();
        self.sim.clear_history();
        self.confetti.clear();
        self.timestep.reset();
        log::info!("session stopped with score {}", self.sim.score());
    }

    /// Build this frame's drawing intents. `texture_ready` reports whether the
    /// ball image has finished loading on the front end.
    pub fn draw(&self, texture_ready: bool) -> Vec<DrawCommand> {
        let mut out = Vec::with_capacity(128 + self.confetti.len());
        out.push(DrawCommand::Clear);
        let basket = self.sim.basket();
        draw::push_basket(&mut out, basket);
        let ball = self.sim.ball();
        draw::push_ball(&mut out, ball.position, ball.radius(), texture_ready);
        draw::push_confetti(&mut out, self.confetti.particles());
        // Hand overlays go on top of the court.
        if self.config.show_hand_marks {
            let size = self.config.surface.as_vec2();
            for hand in &self.hands {
                draw::push_hand(&mut out, hand, size, self.config.mirror_video);
            }
        }

        let flash = self
            .sim
            .last_score_time()
            .filter(|t| self.now_sec - t < SCORE_FLASH_SEC)
            .map(|_| Vec2::new(basket.center_x(), basket.y - 30.0));
        draw::push_score(&mut out, self.sim.score(), flash);
        out
    }
}
