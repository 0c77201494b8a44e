//! Webcam acquisition through `getUserMedia`.

use anyhow::anyhow;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Request a `width`×`height` video stream and start playing it into `video`.
pub async fn attach_webcam(
    video: &web::HtmlVideoElement,
    width: u32,
    height: u32,
) -> anyhow::Result<web::MediaStream> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| anyhow!("mediaDevices unavailable: {:?}", e))?;

    let video_opts = js_sys::Object::new();
    let set = |key: &str, value: u32| {
        js_sys::Reflect::set(&video_opts, &JsValue::from_str(key), &JsValue::from(value))
            .map_err(|e| anyhow!("constraint {key}: {:?}", e))
    };
    set("width", width)?;
    set("height", height)?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&video_opts);
    constraints.set_audio(&JsValue::FALSE);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| anyhow!("getUserMedia error: {:?}", e))?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("camera permission or device error: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("not a MediaStream: {:?}", e))?;

    video.set_src_object(Some(&stream));
    let play = video
        .play()
        .map_err(|e| anyhow!("video play error: {:?}", e))?;
    JsFuture::from(play)
        .await
        .map_err(|e| anyhow!("video play error: {:?}", e))?;
    log::info!("[camera] streaming {}x{}", width, height);
    Ok(stream)
}

/// Stop every track and detach the stream from `video`.
pub fn stop_stream(stream: &web::MediaStream, video: &web::HtmlVideoElement) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
            track.stop();
        }
    }
    video.set_src_object(None);
}
