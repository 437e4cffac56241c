use crate::types::{Direction, EdgeValue, Horiz, Offset, Position, Vert};

/// Pixel edge with negative zero folded into zero
fn px(value: f64) -> EdgeValue {
    EdgeValue::Px(if value == 0.0 { 0.0 } else { value })
}

/// Turn offsets and overflow into the four box offsets.
///
/// Each axis gets one pixel edge, always the one on the far side from the
/// attachment point, so overflow pullback never detaches the near edge.
pub fn compose_position(direction: Direction, offset: Offset, overflow: Offset) -> Position {
    let (left, right) = match direction.horiz {
        Horiz::Left => (EdgeValue::Auto, px(-offset.horiz - overflow.horiz)),
        Horiz::Right => (px(offset.horiz - overflow.horiz), EdgeValue::Auto),
    };
    let (top, bottom) = match direction.vert {
        Vert::Top => (EdgeValue::Auto, px(-offset.vert - overflow.vert)),
        Vert::Bottom => (px(offset.vert - overflow.vert), EdgeValue::Auto),
    };

    Position {
        left,
        top,
        right,
        bottom,
    }
}
