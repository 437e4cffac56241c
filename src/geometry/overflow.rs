use crate::config::MenuConfig;
use crate::types::{Dimensions, Offset};
use crate::viewport::Viewport;

/// Spill of one axis: positive past the far side, negative past the near side
fn axis_overflow(near: f64, size: f64, limit: f64) -> f64 {
    if near + size > limit {
        near + size - limit
    } else if near < 0.0 {
        near
    } else {
        0.0
    }
}

/// How far the offset content would land outside the viewport.
///
/// Only auto mode pulls the panel back; fixed mode always reports zero and
/// relies on flipping and height clamping instead.
pub fn compute_overflow(
    dims: &Dimensions,
    offset: Offset,
    viewport: &Viewport,
    config: &MenuConfig,
) -> Offset {
    if !config.auto {
        return Offset::default();
    }

    let c = &dims.content;
    Offset {
        horiz: axis_overflow(c.left + offset.horiz, c.width, viewport.width),
        vert: axis_overflow(c.top + offset.vert, c.height, viewport.height),
    }
}
