use crate::config::MenuConfig;
use crate::types::{Dimensions, Offset};

/// Scroll offset that centers the selected row in the content.
///
/// `None` unless auto mode is on and both the list and a selected row exist.
/// The target is only clamped to the valid scroll range when the panel was
/// pulled back vertically; the vertical pullback is then subtracted so the
/// scroll and the panel move together.
pub fn adjust_scroll(dims: &Dimensions, overflow: Offset, config: &MenuConfig) -> Option<f64> {
    if !config.auto {
        return None;
    }
    let (selected, list) = (dims.selected?, dims.list?);
    let c = &dims.content;

    let scroll_middle = (c.height - selected.height) / 2.0;
    let scroll_max = list.height - c.height;
    let mut offset_top = selected.offset_top - scroll_middle;

    if overflow.vert != 0.0 {
        if offset_top > scroll_max {
            offset_top = scroll_max;
        }
        if offset_top < 0.0 {
            offset_top = 0.0;
        }
    }

    Some(offset_top - overflow.vert)
}
