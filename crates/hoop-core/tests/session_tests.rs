// Host-side integration tests for the per-frame session orchestration.

use glam::Vec2;
use hoop_core::*;
use std::time::Duration;

const FPS: f64 = 60.0;

fn frame() -> Duration {
    Duration::from_secs_f64(1.0 / FPS)
}

/// A right hand resting at the bottom of the frame with only `tips` raised.
fn hand_with(handedness: Handedness, tips: &[usize]) -> HandObservation {
    let mut pts = vec![Vec2::new(0.5, 0.9); LANDMARK_COUNT];
    for &tip in tips {
        pts[tip] = Vec2::new(0.5, 0.6);
    }
    HandObservation::new(handedness, &pts).unwrap()
}

fn active_channels(session: &Session) -> Vec<usize> {
    session
        .channels()
        .channels()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_active)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn ball_dropped_over_hoop_scores_once_and_bursts_confetti() {
    let mut config = SessionConfig::default();
    let basket = config.layout.basket;
    config.layout.ball_spawn = Vec2::new(basket.center_x(), 100.0);
    let mut session = Session::start(config, 42).unwrap();

    let mut scores = 0;
    for i in 0..300 {
        let now = i as f64 / FPS;
        let out = session.tick(now, frame());
        let scored: Vec<_> = out
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::Scored { .. }))
            .collect();
        if scored.is_empty() {
            continue;
        }
        scores += scored.len();
        assert_eq!(out.substeps, 1);
        assert_eq!(session.confetti().len(), CONFETTI_BURST);
        for p in session.confetti().particles() {
            assert_eq!(p.position, basket.net_center());
        }
        assert!(out
            .sounds
            .iter()
            .any(|s| s.kind == SoundKind::Score));
    }
    assert_eq!(scores, 1);
    assert_eq!(session.score(), 1);
}

#[test]
fn detection_is_drained_on_next_tick() {
    let mut session = Session::start(SessionConfig::default(), 1).unwrap();
    session.submit_detection(vec![hand_with(Handedness::Right, &[INDEX_TIP])]);
    assert!(active_channels(&session).is_empty());

    let out = session.tick(0.0, frame());
    assert_eq!(active_channels(&session), vec![1]);
    assert_eq!(session.hands().len(), 1);
    let audio = out.audio.expect("sound is enabled");
    assert_eq!(audio.channels[1].gain_target, ACTIVE_GAIN);
    assert_eq!(audio.channels[0].gain_target, 0.0);
}

#[test]
fn newer_detection_replaces_pending_one() {
    let mut session = Session::start(SessionConfig::default(), 1).unwrap();
    session.submit_detection(vec![hand_with(Handedness::Right, &[INDEX_TIP])]);
    session.submit_detection(vec![hand_with(Handedness::Left, &[PINKY_TIP])]);
    session.tick(0.0, frame());
    assert_eq!(active_channels(&session), vec![9]);
}

#[test]
fn hands_beyond_two_are_ignored() {
    let mut session = Session::start(SessionConfig::default(), 1).unwrap();
    session.submit_detection(vec![
        hand_with(Handedness::Right, &[THUMB_TIP]),
        hand_with(Handedness::Left, &[THUMB_TIP]),
        hand_with(Handedness::Right, &[PINKY_TIP]),
    ]);
    session.tick(0.0, frame());
    assert_eq!(session.hands().len(), MAX_HANDS);
    assert_eq!(active_channels(&session), vec![0, 5]);
}

#[test]
fn mirroring_flips_fingertip_x_before_physics() {
    let mut pts = vec![Vec2::new(0.5, 0.9); LANDMARK_COUNT];
    pts[INDEX_TIP] = Vec2::new(0.25, 0.5);
    let hand = HandObservation::new(Handedness::Right, &pts).unwrap();
    let key = FingertipKey::new(0, INDEX_TIP);

    let mut mirrored = Session::start(SessionConfig::with_toggles(true, true, true), 1).unwrap();
    mirrored.submit_detection(vec![hand.clone()]);
    mirrored.tick(0.0, frame());
    assert_eq!(
        mirrored.simulator().history().get(key),
        Some(Vec2::new(960.0, 360.0))
    );

    let mut plain = Session::start(SessionConfig::with_toggles(true, true, false), 1).unwrap();
    plain.submit_detection(vec![hand]);
    plain.tick(0.0, frame());
    assert_eq!(
        plain.simulator().history().get(key),
        Some(Vec2::new(320.0, 360.0))
    );
}

#[test]
fn sound_toggle_gates_all_audio_output() {
    let run = |sound: bool| {
        let mut session =
            Session::start(SessionConfig::with_toggles(sound, true, true), 5).unwrap();
        let mut audio_frames = 0;
        let mut sounds = 0;
        let mut bounces = 0;
        for i in 0..180 {
            let out = session.tick(i as f64 / FPS, frame());
            audio_frames += out.audio.is_some() as usize;
            sounds += out.sounds.len();
            bounces += out
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::Bounce { .. }))
                .count();
        }
        (audio_frames, sounds, bounces)
    };

    let (audio, sounds, bounces) = run(true);
    assert_eq!(audio, 180);
    assert!(bounces > 0);
    assert!(sounds > 0);

    let (audio, sounds, bounces) = run(false);
    assert_eq!(audio, 0);
    assert_eq!(sounds, 0);
    assert!(bounces > 0, "physics keeps running with sound off");
}

#[test]
fn stop_silences_and_ignores_further_input() {
    let mut session = Session::start(SessionConfig::default(), 9).unwrap();
    session.submit_detection(vec![hand_with(Handedness::Right, &[INDEX_TIP])]);
    for i in 0..30 {
        session.tick(i as f64 / FPS, frame());
    }
    assert!(session.channels().get(1).unwrap().gain.value > 0.0);
    assert!(!session.simulator().history().is_empty());

    session.stop();
    assert!(!session.is_running());
    assert_eq!(session.channels().active_count(), 0);
    assert!(session
        .channels()
        .channels()
        .iter()
        .all(|c| c.gain.value == 0.0));
    assert!(session.simulator().history().is_empty());
    assert!(session.confetti().is_idle());
    assert!(session.hands().is_empty());

    let ball_before = *session.simulator().ball();
    session.submit_detection(vec![hand_with(Handedness::Left, &[PINKY_TIP])]);
    let out = session.tick(1.0, frame());
    assert!(out.audio.is_none());
    assert!(out.events.is_empty());
    assert_eq!(out.substeps, 0);
    assert_eq!(session.simulator().ball().position, ball_before.position);
    assert_eq!(session.channels().active_count(), 0);

    // Stopping twice is harmless.
    session.stop();
    assert!(!session.is_running());
}

#[test]
fn draw_uses_texture_only_once_loaded() {
    let session = Session::start(SessionConfig::default(), 3).unwrap();
    let has_image = |cmds: &[DrawCommand]| {
        cmds.iter()
            .any(|c| matches!(c, DrawCommand::Image { asset: Asset::BallTexture, .. }))
    };
    let loaded = session.draw(true);
    let pending = session.draw(false);
    assert_eq!(loaded.first(), Some(&DrawCommand::Clear));
    assert!(has_image(&loaded));
    assert!(!has_image(&pending));
    assert!(pending.len() > 1);
}

#[test]
fn hand_marks_toggle_controls_skeleton_overlay() {
    let hand = hand_with(Handedness::Right, &[INDEX_TIP]);

    let mut shown = Session::start(SessionConfig::with_toggles(true, true, true), 3).unwrap();
    shown.submit_detection(vec![hand.clone()]);
    shown.tick(0.0, frame());

    let mut hidden = Session::start(SessionConfig::with_toggles(true, false, true), 3).unwrap();
    hidden.submit_detection(vec![hand]);
    hidden.tick(0.0, frame());

    assert!(shown.draw(true).len() > hidden.draw(true).len());
}

#[test]
fn hand_overlay_is_drawn_over_the_court() {
    let mut session = Session::start(SessionConfig::default(), 3).unwrap();
    session.submit_detection(vec![hand_with(Handedness::Right, &[INDEX_TIP])]);
    session.tick(0.0, frame());
    let cmds = session.draw(true);

    let is_hand = |c: &DrawCommand| {
        matches!(c, DrawCommand::Path { paint: Paint::Stroke(color, _), .. }
            if *color == Color::Rgb(0, 255, 0))
    };
    let first_hand = cmds.iter().position(is_hand).expect("hand overlay drawn");
    let last_hand = cmds.iter().rposition(is_hand).unwrap();
    let ball = cmds
        .iter()
        .position(|c| matches!(c, DrawCommand::Image { .. }))
        .expect("ball drawn");
    let score = cmds
        .iter()
        .position(|c| matches!(c, DrawCommand::Text { .. }))
        .expect("score drawn");

    assert!(ball < first_hand, "ball at {ball}, hand from {first_hand}");
    assert!(last_hand < score, "score text must stay on top");
}
