#![cfg(target_arch = "wasm32")]
mod audio;
mod camera;
mod canvas;
mod dom;
mod frame;
pub mod landmarks;
mod raf_slot;

use anyhow::anyhow;
use glam::Vec2;
use hoop_core::{Session, SessionConfig};
use landmarks::RawHand;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const CANVAS_ID: &str = "game-canvas";
const VIDEO_ID: &str = "webcam";
const START_BUTTON_ID: &str = "start-button";
const STOP_BUTTON_ID: &str = "stop-button";
const SOUND_TOGGLE_ID: &str = "sound-toggle";
const MARKS_TOGGLE_ID: &str = "marks-toggle";
const MIRROR_TOGGLE_ID: &str = "mirror-toggle";

const CAMERA_ERROR: &str =
    "Unable to access the camera. Please make sure it is connected and permissions are granted.";

/// Live state of a started session; `None` while stopped.
struct Running {
    session: Rc<RefCell<Session>>,
    stream: web::MediaStream,
    video: web::HtmlVideoElement,
    tones: Option<Rc<audio::ToneBank>>,
}

thread_local! {
    static RUNNING: RefCell<Option<Running>> = RefCell::new(None);
    // One audio context for the page, reused across start/stop.
    static TONES: RefCell<Option<Rc<audio::ToneBank>>> = RefCell::new(None);
    static STARTING: RefCell<bool> = RefCell::new(false);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hoop-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;

    dom::add_click_listener(&document, START_BUTTON_ID, || {
        let already = STARTING.with(|s| s.replace(true))
            || RUNNING.with(|r| r.borrow().is_some());
        if already {
            log::warn!("[ui] session already running; ignoring start");
            return;
        }
        spawn_local(async move {
            if let Err(e) = start_session().await {
                log::error!("start error: {:?}", e);
            }
            STARTING.with(|s| *s.borrow_mut() = false);
        });
    });
    dom::add_click_listener(&document, STOP_BUTTON_ID, stop_session);

    dom::set_button_disabled(&document, START_BUTTON_ID, false);
    dom::set_button_disabled(&document, STOP_BUTTON_ID, true);
    Ok(())
}

fn tone_bank() -> anyhow::Result<Rc<audio::ToneBank>> {
    if let Some(tones) = TONES.with(|t| t.borrow().clone()) {
        tones.resume();
        return Ok(tones);
    }
    let ctx = web::AudioContext::new().map_err(|e| anyhow!("AudioContext error: {:?}", e))?;
    let tones = Rc::new(audio::ToneBank::new(ctx)?);
    tones.resume();
    TONES.with(|t| *t.borrow_mut() = Some(tones.clone()));
    Ok(tones)
}

async fn start_session() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let video: web::HtmlVideoElement = dom::element_by_id(&document, VIDEO_ID)?;

    let defaults = SessionConfig::default();
    let config = SessionConfig::with_toggles(
        dom::checkbox_checked(&document, SOUND_TOGGLE_ID, defaults.sound_enabled),
        dom::checkbox_checked(&document, MARKS_TOGGLE_ID, defaults.show_hand_marks),
        dom::checkbox_checked(&document, MIRROR_TOGGLE_ID, defaults.mirror_video),
    );
    let (width, height) = (config.surface.width as u32, config.surface.height as u32);
    canvas.set_width(width);
    canvas.set_height(height);

    // Audio must be created inside the click that started us.
    let tones = if config.sound_enabled {
        match tone_bank() {
            Ok(t) => Some(t),
            Err(e) => {
                log::error!("[audio] disabled: {:?}", e);
                None
            }
        }
    } else {
        None
    };

    let seed = js_sys::Date::now() as u64;
    let session = Session::start(config, seed).map_err(|e| anyhow!("invalid config: {e}"))?;
    let session = Rc::new(RefCell::new(session));
    let painter = canvas::Painter::new(&canvas)?;

    // Nothing fallible may follow: the stream is only stopped via `RUNNING`.
    let stream = match camera::attach_webcam(&video, width, height).await {
        Ok(s) => s,
        Err(e) => {
            log::error!("Error starting camera: {:?}", e);
            dom::alert(CAMERA_ERROR);
            return Ok(());
        }
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        session.clone(),
        painter,
        tones.clone(),
        video.clone(),
    )));
    RUNNING.with(|r| {
        *r.borrow_mut() = Some(Running {
            session,
            stream,
            video,
            tones,
        })
    });
    frame::start_loop(frame_ctx);

    dom::set_button_disabled(&document, START_BUTTON_ID, true);
    dom::set_button_disabled(&document, STOP_BUTTON_ID, false);
    log::info!("[ui] session started (seed {})", seed);
    Ok(())
}

fn stop_session() {
    let Some(running) = RUNNING.with(|r| r.borrow_mut().take()) else {
        return;
    };
    running.session.borrow_mut().stop();
    camera::stop_stream(&running.stream, &running.video);
    if let Some(tones) = &running.tones {
        tones.silence();
    }
    if let Some(document) = dom::window_document() {
        dom::set_button_disabled(&document, START_BUTTON_ID, false);
        dom::set_button_disabled(&document, STOP_BUTTON_ID, true);
    }
}

/// True while a session is running; the JS glue only feeds the detector then.
#[wasm_bindgen]
pub fn is_running() -> bool {
    RUNNING.with(|r| r.borrow().is_some())
}

/// Receive one MediaPipe Hands `results` object. Ignored when stopped.
#[wasm_bindgen]
pub fn submit_hands(results: JsValue) {
    let raw = match read_results(&results) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("[hands] unreadable detector results: {:?}", e);
            return;
        }
    };
    let hands = landmarks::observations_from_raw(&raw);
    RUNNING.with(|r| {
        if let Some(running) = r.borrow().as_ref() {
            running.session.borrow_mut().submit_detection(hands);
        }
    });
}

fn get(target: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
}

fn number(target: &JsValue, key: &str) -> f32 {
    get(target, key)
        .ok()
        .and_then(|v| v.as_f64())
        .map_or(f32::NAN, |v| v as f32)
}

// `multiHandLandmarks[i]` is an array of {x, y, z}; `multiHandedness[i].label`
// is "Left" or "Right". Missing numbers become NaN and fail validation later.
fn read_results(results: &JsValue) -> Result<Vec<RawHand>, JsValue> {
    let hands = get(results, "multiHandLandmarks")?;
    if hands.is_undefined() || hands.is_null() {
        return Ok(Vec::new());
    }
    let hands: js_sys::Array = hands.dyn_into()?;
    let labels = get(results, "multiHandedness")?
        .dyn_into::<js_sys::Array>()
        .unwrap_or_else(|_| js_sys::Array::new());

    let mut raw = Vec::with_capacity(hands.length() as usize);
    for (i, hand) in hands.iter().enumerate() {
        let points: js_sys::Array = hand.dyn_into()?;
        let points = points
            .iter()
            .map(|p| Vec2::new(number(&p, "x"), number(&p, "y")))
            .collect();
        let label = get(&labels.get(i as u32), "label")
            .ok()
            .and_then(|v| v.as_string());
        raw.push(RawHand::new(label.as_deref(), points));
    }
    Ok(raw)
}
