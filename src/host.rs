//! Boundary with the rendering collaborator.
//!
//! The positioner never owns elements. It reads geometry through `LayoutHost`
//! and writes back box offsets, size limits and a scroll offset.

use serde::{Deserialize, Serialize};

use crate::types::{Position, Rectangle};

/// Opaque handle to an element owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub usize);

/// Selector of the scrollable list inside the content
pub const LIST_SELECTOR: &str = ".list";

/// Selector of the active list tile; its parent is the measured row
pub const ACTIVE_TILE_SELECTOR: &str = ".list__tile--active";

/// Activator and content handles of one menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuElements {
    pub activator: ElementId,
    pub content: ElementId,
}

/// Geometry reads and style writes the positioner needs from its host.
///
/// Size limits, display mode and scroll writes are immediate and `rect`
/// reflects them. Box offsets from `apply_position` only land on the next
/// `flush_layout`, which is why a corrective pass after a direction change is
/// deferred to the next `Menu::on_layout_tick`.
pub trait LayoutHost {
    /// First descendant of `root` matching a class selector such as `.list`
    fn query(&self, root: ElementId, selector: &str) -> Option<ElementId>;

    fn parent(&self, element: ElementId) -> Option<ElementId>;

    fn first_child(&self, element: ElementId) -> Option<ElementId>;

    /// Current bounding box, `None` if the element is not in the layout tree
    fn rect(&self, element: ElementId) -> Option<Rectangle>;

    /// Force the element into a measurable display mode (or undo it) without
    /// changing its visibility
    fn set_measurable(&mut self, element: ElementId, measurable: bool);

    /// Synchronously flush pending style changes
    fn flush_layout(&mut self);

    fn apply_position(&mut self, element: ElementId, position: &Position);

    fn set_min_width(&mut self, element: ElementId, width: f64);

    /// Pin the element width; `None` restores its natural width
    fn set_width(&mut self, element: ElementId, width: Option<f64>);

    fn set_max_height(&mut self, element: ElementId, height: Option<f64>);

    fn set_scroll_top(&mut self, element: ElementId, scroll_top: f64);
}
