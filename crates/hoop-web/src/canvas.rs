//! Replays core draw intents onto a Canvas2D context.

use anyhow::anyhow;
use hoop_core::{Asset, DrawCommand, Paint, TextAlign};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub const BALL_TEXTURE_URL: &str = "ball.svg";

pub struct Painter {
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
    ball: web::HtmlImageElement,
}

impl Painter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!(format!("{:?}", e)))?;
        let ball = web::HtmlImageElement::new().map_err(|e| anyhow!("image error: {:?}", e))?;
        ball.set_src(BALL_TEXTURE_URL);
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            ball,
        })
    }

    /// The ball texture is usable once it decoded to a non-empty image.
    pub fn texture_ready(&self) -> bool {
        self.ball.complete() && self.ball.natural_width() > 0
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    /// Paint the webcam frame, mirrored for the selfie view if asked.
    pub fn video_frame(&self, video: &web::HtmlVideoElement, mirror: bool) {
        let ctx = &self.ctx;
        ctx.save();
        if mirror {
            let _ = ctx.translate(self.width, 0.0);
            let _ = ctx.scale(-1.0, 1.0);
        }
        let _ = ctx.draw_image_with_html_video_element_and_dw_and_dh(
            video,
            0.0,
            0.0,
            self.width,
            self.height,
        );
        ctx.restore();
    }

    /// Replay `commands` in order. `video` is painted whenever a `Clear`
    /// is encountered so overlays always sit on top of the camera image.
    pub fn paint(&self, commands: &[DrawCommand], video: Option<&web::HtmlVideoElement>, mirror: bool) {
        for cmd in commands {
            if let Err(e) = self.paint_one(cmd, video, mirror) {
                log::warn!("[canvas] draw error: {:?}", e);
            }
        }
    }

    #[allow(deprecated)]
    fn apply_paint(&self, paint: Paint) {
        match paint {
            Paint::Fill(color) => self.ctx.set_fill_style(&JsValue::from_str(&color.to_css())),
            Paint::Stroke(color, width) => {
                self.ctx.set_stroke_style(&JsValue::from_str(&color.to_css()));
                self.ctx.set_line_width(width as f64);
            }
        }
    }

    fn finish(&self, paint: Paint) {
        match paint {
            Paint::Fill(_) => self.ctx.fill(),
            Paint::Stroke(..) => self.ctx.stroke(),
        }
    }

    fn paint_one(
        &self,
        cmd: &DrawCommand,
        video: Option<&web::HtmlVideoElement>,
        mirror: bool,
    ) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match cmd {
            DrawCommand::Clear => {
                self.clear();
                if let Some(v) = video {
                    self.video_frame(v, mirror);
                }
            }
            DrawCommand::Arc {
                center,
                radius,
                start_rad,
                end_rad,
                paint,
            } => {
                self.apply_paint(*paint);
                ctx.begin_path();
                ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    *radius as f64,
                    *start_rad as f64,
                    *end_rad as f64,
                )?;
                self.finish(*paint);
            }
            DrawCommand::Rect {
                center,
                size,
                rotation_rad,
                paint,
            } => {
                ctx.save();
                ctx.translate(center.x as f64, center.y as f64)?;
                ctx.rotate(*rotation_rad as f64)?;
                self.apply_paint(*paint);
                let (w, h) = (size.x as f64, size.y as f64);
                match paint {
                    Paint::Fill(_) => ctx.fill_rect(-w / 2.0, -h / 2.0, w, h),
                    Paint::Stroke(..) => ctx.stroke_rect(-w / 2.0, -h / 2.0, w, h),
                }
                ctx.restore();
            }
            DrawCommand::Path {
                points,
                closed,
                paint,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    return Ok(());
                };
                self.apply_paint(*paint);
                ctx.begin_path();
                ctx.move_to(first.x as f64, first.y as f64);
                for p in rest {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
                if *closed {
                    ctx.close_path();
                }
                self.finish(*paint);
            }
            DrawCommand::Text {
                position,
                text,
                size_px,
                align,
                paint,
            } => {
                self.apply_paint(*paint);
                ctx.set_font(&format!("bold {}px sans-serif", size_px));
                ctx.set_text_align(match align {
                    TextAlign::Left => "left",
                    TextAlign::Center => "center",
                    TextAlign::Right => "right",
                });
                let (x, y) = (position.x as f64, position.y as f64);
                match paint {
                    Paint::Fill(_) => ctx.fill_text(text, x, y)?,
                    Paint::Stroke(..) => ctx.stroke_text(text, x, y)?,
                }
            }
            DrawCommand::Image {
                asset: Asset::BallTexture,
                center,
                size,
                rotation_rad,
            } => {
                ctx.save();
                ctx.translate(center.x as f64, center.y as f64)?;
                ctx.rotate(*rotation_rad as f64)?;
                let (w, h) = (size.x as f64, size.y as f64);
                ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    &self.ball,
                    -w / 2.0,
                    -h / 2.0,
                    w,
                    h,
                )?;
                ctx.restore();
            }
        }
        Ok(())
    }
}
