//! Static hoop geometry. The rim's top-left corner anchors everything else:
//! the net hangs below the rim, the backboard stands just right of it.

use crate::constants::{
    BACKBOARD_HEIGHT, BACKBOARD_WIDTH, BASKET_X, BASKET_Y, NET_HEIGHT, NET_MESH, RIM_THICKNESS,
    RIM_WIDTH,
};
use glam::Vec2;

const BACKBOARD_GAP: f32 = 4.0;
const BACKBOARD_RISE: f32 = 90.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basket {
    pub x: f32,
    pub y: f32,
    pub rim_width: f32,
    pub rim_thickness: f32,
    pub net_height: f32,
    pub net_mesh: f32,
    pub backboard_width: f32,
    pub backboard_height: f32,
}

impl Default for Basket {
    fn default() -> Self {
        Self {
            x: BASKET_X,
            y: BASKET_Y,
            rim_width: RIM_WIDTH,
            rim_thickness: RIM_THICKNESS,
            net_height: NET_HEIGHT,
            net_mesh: NET_MESH,
            backboard_width: BACKBOARD_WIDTH,
            backboard_height: BACKBOARD_HEIGHT,
        }
    }
}

impl Basket {
    #[inline]
    pub fn rim_left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn rim_right(&self) -> f32 {
        self.x + self.rim_width
    }

    #[inline]
    pub fn rim_top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn rim_bottom(&self) -> f32 {
        self.y + self.rim_thickness
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.rim_width * 0.5
    }

    /// Line the ball's lower edge must cross to leave the net.
    #[inline]
    pub fn net_bottom(&self) -> f32 {
        self.y + self.net_height
    }

    /// Where confetti bursts from: mid-width, mid-height of the net.
    #[inline]
    pub fn net_center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.y + self.net_height * 0.5)
    }

    /// Backboard rectangle as (top-left, size).
    pub fn backboard(&self) -> (Vec2, Vec2) {
        (
            Vec2::new(self.rim_right() + BACKBOARD_GAP, self.y - BACKBOARD_RISE),
            Vec2::new(self.backboard_width, self.backboard_height),
        )
    }

    /// Axis-aligned bounds of rim, net and backboard as (min, max).
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let (bb_origin, bb_size) = self.backboard();
        let min = Vec2::new(self.x, bb_origin.y.min(self.y));
        let max = Vec2::new(
            (bb_origin.x + bb_size.x).max(self.rim_right()),
            (bb_origin.y + bb_size.y).max(self.net_bottom()),
        );
        (min, max)
    }
}
