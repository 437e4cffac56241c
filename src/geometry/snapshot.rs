//! Geometry snapshot: reads the rectangles one positioning pass works from.

use crate::host::{ElementId, LayoutHost, MenuElements, ACTIVE_TILE_SELECTOR, LIST_SELECTOR};
use crate::types::{Dimensions, Rectangle};
use crate::viewport::{Viewport, ViewportProvider};

/// Dimensions plus the viewport they were measured against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub dimensions: Dimensions,
    pub viewport: Viewport,
}

/// Measure `element`, a descendant matching `selector`, or that descendant's
/// parent when `parent` is set.
///
/// Returns `None` if the element or the selector match does not exist.
pub fn measure<H: LayoutHost + ?Sized>(
    host: &H,
    element: ElementId,
    selector: Option<&str>,
    parent: bool,
) -> Option<Rectangle> {
    let target = match selector {
        Some(selector) => host.query(element, selector)?,
        None => element,
    };
    let target = if parent { host.parent(target)? } else { target };
    host.rect(target)
}

/// The element actually measured for the activator: the slotted child when
/// the activator wraps one
pub fn activator_element<H: LayoutHost + ?Sized>(host: &H, activator: ElementId) -> ElementId {
    host.first_child(activator).unwrap_or(activator)
}

/// Measure all four rectangles and the viewport.
///
/// The content must already be in a measurable display mode.
pub fn take<H: LayoutHost + ?Sized>(
    host: &H,
    elements: &MenuElements,
    viewport: &dyn ViewportProvider,
) -> Snapshot {
    let activator = measure(host, activator_element(host, elements.activator), None, false)
        .unwrap_or_else(|| {
            tracing::warn!(
                "Activator {:?} is not laid out, using an empty box",
                elements.activator
            );
            Rectangle::default()
        });
    let content = measure(host, elements.content, None, false).unwrap_or_else(|| {
        tracing::warn!("Content {:?} is not laid out, using an empty box", elements.content);
        Rectangle::default()
    });

    let dimensions = Dimensions {
        activator,
        content,
        list: measure(host, elements.content, Some(LIST_SELECTOR), false),
        selected: measure(host, elements.content, Some(ACTIVE_TILE_SELECTOR), true),
    };

    let (width, height) = viewport.inner_size();
    let snapshot = Snapshot {
        dimensions,
        viewport: Viewport::new(width, height),
    };
    tracing::trace!("Measured {:?}", snapshot);
    snapshot
}
