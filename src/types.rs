//! Geometry value types shared by the positioning pipeline.
//!
//! Everything in here is a plain copyable snapshot. A `Rectangle` is only
//! meaningful for the instant it was measured; any style write on the host
//! invalidates it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bounding box of an element in viewport pixel coordinates.
///
/// `offset_top` is the element's offset inside its offset parent, which is the
/// only coordinate that survives scrolling of the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub offset_top: f64,
}

impl Rectangle {
    /// Build a rectangle from its top-left corner and size
    pub fn from_origin(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            bottom: top + height,
            right: left + width,
            width,
            height,
            offset_top: 0.0,
        }
    }

    pub fn with_offset_top(mut self, offset_top: f64) -> Self {
        self.offset_top = offset_top;
        self
    }
}

/// Everything measured for one positioning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dimensions {
    pub activator: Rectangle,
    pub content: Rectangle,
    /// Scrollable list inside the content, if there is one
    pub list: Option<Rectangle>,
    /// Row holding the active list item, if anything is selected
    pub selected: Option<Rectangle>,
}

/// Horizontal edge of the activator the content attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horiz {
    Left,
    Right,
}

/// Vertical edge of the activator the content attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vert {
    Top,
    Bottom,
}

/// Resolved anchoring of the content against the activator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub horiz: Horiz,
    pub vert: Vert,
}

impl Default for Direction {
    fn default() -> Self {
        Self {
            horiz: Horiz::Right,
            vert: Vert::Bottom,
        }
    }
}

/// One box-offset value handed to the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeValue {
    /// Edge is unconstrained; the opposite edge controls placement
    Auto,
    /// Distance in pixels
    Px(f64),
}

impl EdgeValue {
    pub fn is_auto(&self) -> bool {
        matches!(self, EdgeValue::Auto)
    }

    pub fn px(&self) -> Option<f64> {
        match self {
            EdgeValue::Auto => None,
            EdgeValue::Px(v) => Some(*v),
        }
    }
}

impl fmt::Display for EdgeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeValue::Auto => write!(f, "auto"),
            EdgeValue::Px(v) => write!(f, "{}px", v),
        }
    }
}

impl Serialize for EdgeValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Four box offsets applied to the content element.
///
/// Per axis exactly one edge is `Auto` (the anchored one) and the other holds
/// pixels, once a direction has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub left: EdgeValue,
    pub top: EdgeValue,
    pub right: EdgeValue,
    pub bottom: EdgeValue,
}

impl Position {
    /// Baseline for a freshly resolved direction: anchored edges are `auto`,
    /// the opposite edges start at zero.
    pub fn baseline(direction: Direction) -> Self {
        let (left, right) = match direction.horiz {
            Horiz::Left => (EdgeValue::Auto, EdgeValue::Px(0.0)),
            Horiz::Right => (EdgeValue::Px(0.0), EdgeValue::Auto),
        };
        let (top, bottom) = match direction.vert {
            Vert::Top => (EdgeValue::Auto, EdgeValue::Px(0.0)),
            Vert::Bottom => (EdgeValue::Px(0.0), EdgeValue::Auto),
        };
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::baseline(Direction::default())
    }
}

/// A horizontal/vertical pair of pixel amounts (offsets, overflow, nudges)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Offset {
    pub horiz: f64,
    pub vert: f64,
}

impl Offset {
    pub fn new(horiz: f64, vert: f64) -> Self {
        Self { horiz, vert }
    }
}
