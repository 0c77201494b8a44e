//! Drawing intents emitted once per frame.
//!
//! The core never touches a canvas. It describes the frame as a flat list of
//! [`DrawCommand`]s which a front end replays onto its surface in order.

use crate::basket::Basket;
use crate::confetti::ConfettiParticle;
use crate::hand::{normalized_to_surface, Handedness, HandObservation, HAND_CONNECTIONS};
use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f32),
    /// Hue in degrees, saturation and lightness in percent.
    Hsl(f32, u8, u8),
}

impl Color {
    pub const WHITE: Color = Color::Rgb(255, 255, 255);

    pub fn to_css(&self) -> String {
        match *self {
            Color::Rgb(r, g, b) => format!("rgb({r}, {g}, {b})"),
            Color::Rgba(r, g, b, a) => format!("rgba({r}, {g}, {b}, {a:.3})"),
            Color::Hsl(h, s, l) => format!("hsl({:.0}, {s}%, {l}%)", h.rem_euclid(360.0)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Fill(Color),
    Stroke(Color, f32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asset {
    BallTexture,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Arc {
        center: Vec2,
        radius: f32,
        start_rad: f32,
        end_rad: f32,
        paint: Paint,
    },
    /// Rectangle centred on `center`, rotated about it.
    Rect {
        center: Vec2,
        size: Vec2,
        rotation_rad: f32,
        paint: Paint,
    },
    Path {
        points: Vec<Vec2>,
        closed: bool,
        paint: Paint,
    },
    Text {
        position: Vec2,
        text: String,
        size_px: f32,
        align: TextAlign,
        paint: Paint,
    },
    Image {
        asset: Asset,
        center: Vec2,
        size: Vec2,
        rotation_rad: f32,
    },
}

const BALL_ORANGE: Color = Color::Rgb(232, 119, 46);
const BALL_SEAM: Color = Color::Rgb(60, 30, 10);
const RIM_COLOR: Color = Color::Rgb(255, 69, 0);
const NET_COLOR: Color = Color::Rgba(255, 255, 255, 0.8);
const BACKBOARD_FILL: Color = Color::Rgba(255, 255, 255, 0.85);
const BACKBOARD_EDGE: Color = Color::Rgb(40, 40, 40);
const NET_TAPER: f32 = 0.7;

// Right hand green, left hand red; connections brighter than joints.
fn hand_colors(h: Handedness) -> (Color, Color) {
    match h {
        Handedness::Right => (Color::Rgb(0, 255, 0), Color::Rgb(0, 204, 0)),
        Handedness::Left => (Color::Rgb(255, 0, 0), Color::Rgb(204, 0, 0)),
    }
}

pub fn push_basket(out: &mut Vec<DrawCommand>, b: &Basket) {
    let (bb_origin, bb_size) = b.backboard();
    out.push(DrawCommand::Rect {
        center: bb_origin + bb_size * 0.5,
        size: bb_size,
        rotation_rad: 0.0,
        paint: Paint::Fill(BACKBOARD_FILL),
    });
    out.push(DrawCommand::Rect {
        center: bb_origin + bb_size * 0.5,
        size: bb_size,
        rotation_rad: 0.0,
        paint: Paint::Stroke(BACKBOARD_EDGE, 2.0),
    });

    // Net: tapered strands from rim to net bottom plus horizontal mesh rows.
    let top_l = b.rim_left();
    let top_w = b.rim_width;
    let bot_w = b.rim_width * NET_TAPER;
    let bot_l = b.center_x() - bot_w * 0.5;
    let strands = ((top_w / b.net_mesh.max(1.0)).round() as usize).max(2);
    for i in 0..=strands {
        let t = i as f32 / strands as f32;
        out.push(DrawCommand::Path {
            points: vec![
                Vec2::new(top_l + top_w * t, b.rim_bottom()),
                Vec2::new(bot_l + bot_w * t, b.net_bottom()),
            ],
            closed: false,
            paint: Paint::Stroke(NET_COLOR, 1.0),
        });
    }
    let rows = ((b.net_height / b.net_mesh.max(1.0)).floor() as usize).max(1);
    for j in 1..=rows {
        let t = j as f32 / rows as f32;
        let y = b.rim_bottom() + (b.net_bottom() - b.rim_bottom()) * t;
        let w = top_w + (bot_w - top_w) * t;
        let l = b.center_x() - w * 0.5;
        out.push(DrawCommand::Path {
            points: vec![Vec2::new(l, y), Vec2::new(l + w, y)],
            closed: false,
            paint: Paint::Stroke(NET_COLOR, 1.0),
        });
    }

    out.push(DrawCommand::Rect {
        center: Vec2::new(b.center_x(), b.y + b.rim_thickness * 0.5),
        size: Vec2::new(b.rim_width, b.rim_thickness),
        rotation_rad: 0.0,
        paint: Paint::Fill(RIM_COLOR),
    });
}

/// Textured ball when the asset is loaded, vector placeholder otherwise.
pub fn push_ball(out: &mut Vec<DrawCommand>, center: Vec2, radius: f32, texture_ready: bool) {
    // Rolling spin derived from horizontal travel.
    let rotation_rad = (center.x / radius).rem_euclid(TAU);
    if texture_ready {
        out.push(DrawCommand::Image {
            asset: Asset::BallTexture,
            center,
            size: Vec2::splat(radius * 2.0),
            rotation_rad,
        });
        return;
    }

    out.push(DrawCommand::Arc {
        center,
        radius,
        start_rad: 0.0,
        end_rad: TAU,
        paint: Paint::Fill(BALL_ORANGE),
    });
    let (s, c) = rotation_rad.sin_cos();
    let axis = Vec2::new(c, s) * radius;
    let perp = Vec2::new(-s, c) * radius;
    for d in [axis, perp] {
        out.push(DrawCommand::Path {
            points: vec![center - d, center + d],
            closed: false,
            paint: Paint::Stroke(BALL_SEAM, 2.0),
        });
    }
    out.push(DrawCommand::Arc {
        center,
        radius,
        start_rad: 0.0,
        end_rad: TAU,
        paint: Paint::Stroke(BALL_SEAM, 2.0),
    });
}

pub fn push_confetti(out: &mut Vec<DrawCommand>, particles: &[ConfettiParticle]) {
    out.extend(particles.iter().map(|p| DrawCommand::Rect {
        center: p.position,
        size: Vec2::splat(p.size),
        rotation_rad: p.rotation_deg.to_radians(),
        paint: Paint::Fill(Color::Hsl(p.hue, 100, 50)),
    }));
}

pub fn push_hand(out: &mut Vec<DrawCommand>, hand: &HandObservation, size: Vec2, mirror: bool) {
    let (line, joint) = hand_colors(hand.handedness());
    let pts: Vec<Vec2> = hand
        .landmarks()
        .iter()
        .map(|p| normalized_to_surface(*p, size, mirror))
        .collect();
    for &(a, b) in HAND_CONNECTIONS.iter() {
        out.push(DrawCommand::Path {
            points: vec![pts[a], pts[b]],
            closed: false,
            paint: Paint::Stroke(line, 3.0),
        });
    }
    out.extend(pts.iter().map(|&center| DrawCommand::Arc {
        center,
        radius: 2.0,
        start_rad: 0.0,
        end_rad: TAU,
        paint: Paint::Fill(joint),
    }));
}

pub fn push_score(out: &mut Vec<DrawCommand>, score: u32, flash_at: Option<Vec2>) {
    out.push(DrawCommand::Text {
        position: Vec2::new(20.0, 44.0),
        text: format!("Score: {score}"),
        size_px: 32.0,
        align: TextAlign::Left,
        paint: Paint::Fill(Color::WHITE),
    });
    if let Some(position) = flash_at {
        out.push(DrawCommand::Text {
            position,
            text: "+1".to_string(),
            size_px: 40.0,
            align: TextAlign::Center,
            paint: Paint::Fill(Color::Rgb(255, 215, 0)),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_colors() {
        assert_eq!(Color::Rgb(1, 2, 3).to_css(), "rgb(1, 2, 3)");
        assert_eq!(Color::Rgba(1, 2, 3, 0.5).to_css(), "rgba(1, 2, 3, 0.500)");
        assert_eq!(Color::Hsl(400.0, 100, 50).to_css(), "hsl(40, 100%, 50%)");
    }

    #[test]
    fn ball_falls_back_to_vector_placeholder() {
        let mut ready = Vec::new();
        push_ball(&mut ready, Vec2::new(100.0, 100.0), 30.0, true);
        assert!(matches!(ready.as_slice(), [DrawCommand::Image { .. }]));

        let mut fallback = Vec::new();
        push_ball(&mut fallback, Vec2::new(100.0, 100.0), 30.0, false);
        assert!(!fallback.is_empty());
        assert!(fallback
            .iter()
            .all(|c| !matches!(c, DrawCommand::Image { .. })));
    }

    fn net_paths(b: &Basket) -> usize {
        let mut out = Vec::new();
        push_basket(&mut out, b);
        out.iter()
            .filter(|c| matches!(c, DrawCommand::Path { paint: Paint::Stroke(color, _), .. } if *color == NET_COLOR))
            .count()
    }

    #[test]
    fn net_density_follows_mesh_size() {
        let mut b = Basket {
            rim_width: 100.0,
            net_height: 60.0,
            net_mesh: 10.0,
            ..Basket::default()
        };
        // 11 strands and 6 rows.
        assert_eq!(net_paths(&b), 17);
        b.net_mesh = 20.0;
        // 6 strands and 3 rows.
        assert_eq!(net_paths(&b), 9);
        b.net_mesh = 500.0;
        assert_eq!(net_paths(&b), 4);
    }
}
