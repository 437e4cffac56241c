//! Pure positioning math.
//!
//! Nothing in this module touches a host; every function maps measured
//! rectangles and preferences to numbers. `crate::menu` feeds it snapshots
//! and writes the results back.

pub mod compose;
pub mod direction;
pub mod flip;
pub mod offset;
pub mod overflow;
pub mod scroll;
pub mod snapshot;

pub use compose::compose_position;
pub use direction::resolve_direction;
pub use flip::{clamp_height, flip_direction, ScreenDistance};
pub use offset::{auto_nudge, compute_offset};
pub use overflow::compute_overflow;
pub use scroll::adjust_scroll;
pub use snapshot::{measure, Snapshot};

use crate::config::MenuConfig;
use crate::types::{Dimensions, Direction, Offset, Position};
use crate::viewport::Viewport;

/// Result of offset, overflow and composition for one direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub offset: Offset,
    pub overflow: Offset,
    pub position: Position,
}

/// Run offset calculation, overflow detection and composition in one go
pub fn compute_layout(
    dims: &Dimensions,
    direction: Direction,
    viewport: &Viewport,
    config: &MenuConfig,
) -> Layout {
    let offset = compute_offset(dims, direction, config);
    let overflow = compute_overflow(dims, offset, viewport, config);
    Layout {
        offset,
        overflow,
        position: compose_position(direction, offset, overflow),
    }
}
