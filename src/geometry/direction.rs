use crate::config::MenuConfig;
use crate::types::{Direction, Horiz, Vert};

/// Decide which activator edges the content anchors to.
///
/// Explicit overrides (from flip correction) win. Otherwise the static
/// preferences apply, except that auto mode always starts from bottom/right.
pub fn resolve_direction(
    config: &MenuConfig,
    horiz: Option<Horiz>,
    vert: Option<Vert>,
) -> Direction {
    let horiz = horiz.unwrap_or(if config.left && !config.auto {
        Horiz::Left
    } else {
        Horiz::Right
    });
    let vert = vert.unwrap_or(if config.top && !config.auto {
        Vert::Top
    } else {
        Vert::Bottom
    });
    Direction { horiz, vert }
}
