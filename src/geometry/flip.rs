//! Fixed-edge fitting: height clamping and one-shot direction flipping.
//!
//! Auto mode never goes through here; it pulls the panel back with the
//! overflow detector instead.

use serde::Serialize;

use crate::config::MenuConfig;
use crate::types::{Dimensions, Direction, Horiz, Rectangle, Vert};
use crate::viewport::Viewport;

/// Room between the activator and each viewport edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenDistance {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub horiz_max: f64,
    pub horiz_max_dir: Horiz,
    pub vert_max: f64,
    pub vert_max_dir: Vert,
}

impl ScreenDistance {
    /// Without `offset_x`/`offset_y` the content overlaps the activator, so
    /// the room is counted from the activator's opposite edge.
    pub fn measure(activator: &Rectangle, viewport: &Viewport, config: &MenuConfig) -> Self {
        let a = activator;
        let top = if config.offset_y { a.top } else { a.bottom };
        let left = if config.offset_x { a.left } else { a.right };
        let bottom = if config.offset_y {
            viewport.height - a.bottom
        } else {
            viewport.height - a.top
        };
        let right = if config.offset_x {
            viewport.width - a.right
        } else {
            viewport.width - a.left
        };

        let (horiz_max, horiz_max_dir) = if left > right {
            (left, Horiz::Left)
        } else {
            (right, Horiz::Right)
        };
        let (vert_max, vert_max_dir) = if top > bottom {
            (top, Vert::Top)
        } else {
            (bottom, Vert::Bottom)
        };

        Self {
            top,
            left,
            bottom,
            right,
            horiz_max,
            horiz_max_dir,
            vert_max,
            vert_max_dir,
        }
    }

    pub fn horiz(&self, dir: Horiz) -> f64 {
        match dir {
            Horiz::Left => self.left,
            Horiz::Right => self.right,
        }
    }

    pub fn vert(&self, dir: Vert) -> f64 {
        match dir {
            Vert::Top => self.top,
            Vert::Bottom => self.bottom,
        }
    }
}

/// Max height to impose when the content is taller than the room in its
/// current vertical direction. Fixed mode only.
pub fn clamp_height(
    dims: &Dimensions,
    direction: Direction,
    dist: &ScreenDistance,
    config: &MenuConfig,
) -> Option<f64> {
    if !config.auto && dims.content.height > dist.vert(direction.vert) {
        Some(dist.vert_max)
    } else {
        None
    }
}

/// Direction with more room on every axis the content does not fit.
///
/// Returns `None` when the current direction is accepted as is.
pub fn flip_direction(
    dims: &Dimensions,
    direction: Direction,
    dist: &ScreenDistance,
    config: &MenuConfig,
) -> Option<Direction> {
    if config.auto {
        return None;
    }

    let c = &dims.content;
    let horiz = if c.width > dist.horiz(direction.horiz) {
        dist.horiz_max_dir
    } else {
        direction.horiz
    };
    let vert = if c.height > dist.vert(direction.vert) {
        dist.vert_max_dir
    } else {
        direction.vert
    };

    let flipped = Direction { horiz, vert };
    (flipped != direction).then_some(flipped)
}
