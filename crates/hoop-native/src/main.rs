use anyhow::Context;
use glam::Vec2;
use hoop_core::{
    GameEvent, HandObservation, Handedness, Session, SessionConfig,
    INDEX_TIP, LANDMARK_COUNT, THUMB_TIP,
};
use std::time::Duration;

const DEFAULT_SECONDS: f64 = 20.0;
const FPS: f64 = 60.0;
// The detector runs at half the display rate.
const DETECT_EVERY: u64 = 2;
const SWIPE_PERIOD_FRAMES: u64 = 120;
const SWIPE_FRAMES: u64 = 6;
// Start point and per-frame travel of a swipe, relative to the ball, in pixels.
const SWIPE_START: Vec2 = Vec2::new(-45.0, 45.0);
const SWIPE_STEP: Vec2 = Vec2::new(9.0, -12.0);
const SEED: u64 = 42;

/// Inverse of the session's surface projection, so the scripted hand can aim
/// at surface positions.
fn surface_to_normalized(p: Vec2, size: Vec2, mirror: bool) -> Vec2 {
    let n = p / size;
    if mirror {
        Vec2::new(1.0 - n.x, n.y)
    } else {
        n
    }
}

/// A right hand with the wrist low in frame and the index finger raised to
/// `index_tip`. The thumb is raised every other second to vary the chord.
fn scripted_hand(index_tip: Vec2, frame: u64) -> anyhow::Result<HandObservation> {
    let wrist = Vec2::new(index_tip.x, 0.95);
    let mut pts = vec![wrist; LANDMARK_COUNT];
    pts[INDEX_TIP] = index_tip;
    if (frame / FPS as u64) % 2 == 1 {
        pts[THUMB_TIP] = wrist - Vec2::new(0.05, 0.2);
    }
    HandObservation::new(Handedness::Right, &pts).context("scripted hand")
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let seconds = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<f64>()
            .with_context(|| format!("invalid duration {arg:?}"))?,
        None => DEFAULT_SECONDS,
    };
    anyhow::ensure!(seconds.is_finite() && seconds >= 0.0, "duration must be non-negative");

    let config = SessionConfig::default();
    let size = config.surface.as_vec2();
    let mirror = config.mirror_video;
    let mut session = Session::start(config, SEED).context("starting session")?;

    let frame_dt = Duration::from_secs_f64(1.0 / FPS);
    let total_frames = (seconds * FPS).round() as u64;
    let mut bounces = 0u32;
    let mut rim_hits = 0u32;
    let mut sounds = 0usize;

    for frame in 0..total_frames {
        let now_sec = frame as f64 / FPS;

        if frame % DETECT_EVERY == 0 {
            let phase = frame % SWIPE_PERIOD_FRAMES;
            let ball = session.simulator().ball().position;
            let offset = if phase < SWIPE_FRAMES {
                SWIPE_START + SWIPE_STEP * phase as f32
            } else {
                // Rest well below the ball between swipes.
                SWIPE_START + Vec2::new(0.0, 200.0)
            };
            let target = (ball + offset).clamp(Vec2::ZERO, size);
            let tip = surface_to_normalized(target, size, mirror);
            session.submit_detection(vec![scripted_hand(tip, frame)?]);
        }

        let out = session.tick(now_sec, frame_dt);
        sounds += out.sounds.len();
        for ev in &out.events {
            match ev {
                GameEvent::Bounce { wall, impact_speed } => {
                    bounces += 1;
                    log::debug!("t={:.2}s bounce {:?} at {:.1}", now_sec, wall, impact_speed);
                }
                GameEvent::RimHit { edge } => {
                    rim_hits += 1;
                    log::info!("t={:.2}s rim hit {:?}", now_sec, edge);
                }
                GameEvent::EnteredBasket => log::info!("t={:.2}s ball in the basket", now_sec),
                GameEvent::Scored { score, .. } => log::info!("t={:.2}s scored, total {}", now_sec, score),
            }
        }
        if frame % FPS as u64 == 0 {
            log::debug!(
                "t={:.0}s active channels={} confetti={}",
                now_sec,
                session.channels().active_count(),
                session.confetti().len()
            );
        }
    }

    session.stop();
    log::info!(
        "{:.1}s simulated: {} bounces, {} rim hits, {} sounds",
        seconds,
        bounces,
        rim_hits,
        sounds
    );
    println!("final score: {}", session.score());
    Ok(())
}
