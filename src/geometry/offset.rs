//! Gap between activator and content edges for a resolved direction.

use crate::config::MenuConfig;
use crate::types::{Dimensions, Direction, Horiz, Offset, Vert};

/// Auto-mode correction added to the near-edge gap.
///
/// Zero outside auto mode. Without a selected row (or without a list to
/// measure it against) it is just the configured nudge. With one, the panel
/// is centered on the activator and then shifted so the selected row is not
/// pushed past either end of the scrollable list.
pub fn auto_nudge(dims: &Dimensions, config: &MenuConfig) -> Offset {
    if !config.auto {
        return Offset::default();
    }

    let (selected, list) = match (dims.selected, dims.list) {
        (Some(selected), Some(list)) => (selected, list),
        _ => return Offset::new(config.nudge_x_auto, config.nudge_y_auto),
    };

    let a = &dims.activator;
    let c = &dims.content;
    let offset_bottom = list.height - selected.height - selected.offset_top;
    let scroll_middle = (c.height - selected.height) / 2.0;

    let mut vert = (a.height - c.height + config.nudge_y_auto) / 2.0;
    if selected.offset_top < scroll_middle {
        vert += scroll_middle - selected.offset_top;
    }
    if offset_bottom < scroll_middle {
        vert += offset_bottom - scroll_middle;
    }

    Offset::new(config.nudge_x_auto, vert)
}

/// Pixel gap per axis, expressed for the edge the compositor will fill in.
pub fn compute_offset(dims: &Dimensions, direction: Direction, config: &MenuConfig) -> Offset {
    let a = &dims.activator;
    let c = &dims.content;
    let nudge = auto_nudge(dims, config);

    let horiz = match direction.horiz {
        Horiz::Left if config.offset_x => a.left - c.right,
        Horiz::Left => a.right - c.right + nudge.horiz,
        Horiz::Right if config.offset_x => a.right - c.left,
        Horiz::Right => a.left - c.left + nudge.horiz,
    };
    let vert = match direction.vert {
        Vert::Top if config.offset_y => a.top - c.bottom,
        Vert::Top => a.bottom - c.bottom + nudge.vert,
        Vert::Bottom if config.offset_y => a.bottom - c.top,
        Vert::Bottom => a.top - c.top + nudge.vert,
    };

    Offset { horiz, vert }
}
