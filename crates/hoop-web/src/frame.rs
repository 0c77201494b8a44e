use crate::audio::ToneBank;
use crate::canvas::Painter;
use crate::raf_slot::CallbackSlot;
use hoop_core::Session;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub painter: Painter,
    pub tones: Option<Rc<ToneBank>>,
    pub video: web::HtmlVideoElement,

    pub started_at: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        session: Rc<RefCell<Session>>,
        painter: Painter,
        tones: Option<Rc<ToneBank>>,
        video: web::HtmlVideoElement,
    ) -> Self {
        let now = Instant::now();
        Self {
            session,
            painter,
            tones,
            video,
            started_at: now,
            last_instant: now,
        }
    }

    /// Run one display frame. Returns false once the session has stopped,
    /// after clearing the canvas.
    pub fn frame(&mut self) -> bool {
        if !self.session.borrow().is_running() {
            self.painter.clear();
            return false;
        }

        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let now_sec = (now - self.started_at).as_secs_f64();

        let out = self.session.borrow_mut().tick(now_sec, dt);
        if let Some(tones) = &self.tones {
            if let Some(audio) = &out.audio {
                tones.apply(audio);
            }
            for shot in &out.sounds {
                tones.fire(shot);
            }
        }

        let session = self.session.borrow();
        let commands = session.draw(self.painter.texture_ready());
        self.painter
            .paint(&commands, Some(&self.video), session.config().mirror_video);
        true
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until the session stops.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: CallbackSlot<Closure<dyn FnMut()>> = CallbackSlot::new();
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    tick.install(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow_mut().frame() {
            log::info!("[frame] loop stopped");
            // Drop only after this call has returned.
            let finished = tick_clone.release();
            spawn_local(async move {
                drop(finished);
            });
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &CallbackSlot<Closure<dyn FnMut()>>) {
    if let Some(w) = web::window() {
        let _ = tick.with(|cb| w.request_animation_frame(cb.as_ref().unchecked_ref()));
    }
}
