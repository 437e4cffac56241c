//! In-memory layout host.
//!
//! Models the element tree a menu is rendered into: an activator wrapper
//! around a slotted child, and an absolutely positioned content panel holding
//! a scrollable list of uniform rows. The wrapper box coincides with the
//! activator, so box offsets on the content are measured from its edges.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::ConfigError;
use crate::host::{ElementId, LayoutHost, MenuElements};
use crate::types::{EdgeValue, Position, Rectangle};
use crate::viewport::{Viewport, ViewportProvider};

/// Left/top/width/height of a box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxSpec {
    pub fn to_rect(&self) -> Rectangle {
        Rectangle::from_origin(self.left, self.top, self.width, self.height)
    }
}

/// Scenario description, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSpec {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,

    #[serde(default = "default_activator")]
    pub activator: BoxSpec,

    /// Natural content width, used until a width is pinned
    #[serde(default = "default_content_width")]
    pub content_width: f64,

    /// Content height when there is no list
    #[serde(default = "default_content_height")]
    pub content_height: f64,

    /// Number of list rows (0 = content has no list)
    #[serde(default = "default_rows")]
    pub rows: usize,

    #[serde(default = "default_row_height")]
    pub row_height: f64,

    /// Padding above and below the rows inside the list
    #[serde(default = "default_list_padding")]
    pub list_padding: f64,

    /// Index of the active row
    #[serde(default)]
    pub selected: Option<usize>,

    /// Row labels, used for rendering only
    #[serde(default)]
    pub labels: Vec<String>,
}

fn default_viewport() -> Viewport {
    Viewport::new(1000.0, 1000.0)
}

fn default_activator() -> BoxSpec {
    BoxSpec {
        left: 100.0,
        top: 100.0,
        width: 120.0,
        height: 36.0,
    }
}

fn default_content_width() -> f64 {
    160.0
}

fn default_content_height() -> f64 {
    200.0
}

fn default_rows() -> usize {
    10
}

fn default_row_height() -> f64 {
    48.0
}

fn default_list_padding() -> f64 {
    8.0
}

impl Default for SceneSpec {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            activator: default_activator(),
            content_width: default_content_width(),
            content_height: default_content_height(),
            rows: default_rows(),
            row_height: default_row_height(),
            list_padding: default_list_padding(),
            selected: None,
            labels: Vec::new(),
        }
    }
}

impl SceneSpec {
    /// Load a scenario from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let spec: SceneSpec = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return Err(ConfigError::ValidationError(
                "viewport must have a positive size".to_string(),
            ));
        }
        if self.row_height <= 0.0 && self.rows > 0 {
            return Err(ConfigError::ValidationError(
                "row_height must be greater than 0".to_string(),
            ));
        }
        if let Some(selected) = self.selected {
            if selected >= self.rows {
                return Err(ConfigError::ValidationError(format!(
                    "selected row {} out of range ({} rows)",
                    selected, self.rows
                )));
            }
        }
        Ok(())
    }

    /// Full height of the list including padding
    pub fn list_height(&self) -> f64 {
        self.rows as f64 * self.row_height + 2.0 * self.list_padding
    }

    /// Content height before any max-height limit
    pub fn natural_height(&self) -> f64 {
        if self.rows > 0 {
            self.list_height()
        } else {
            self.content_height
        }
    }

    /// Label of a row, falling back to a generated one
    pub fn label(&self, row: usize) -> String {
        self.labels
            .get(row)
            .cloned()
            .unwrap_or_else(|| format!("Item {}", row + 1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    ActivatorWrapper,
    ActivatorSlot,
    Content,
    List,
    Row(usize),
    Tile(usize),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<ElementId>,
    classes: Vec<String>,
}

const ACTIVATOR: ElementId = ElementId(0);
const CONTENT: ElementId = ElementId(2);

/// Element tree plus the styles written to it
#[derive(Debug, Clone)]
pub struct Scene {
    spec: SceneSpec,
    nodes: Vec<Node>,
    /// Box offsets currently laid out
    position: Position,
    /// Box offsets written but not yet flushed
    pending_position: Option<Position>,
    min_width: f64,
    width: Option<f64>,
    max_height: Option<f64>,
    scroll_top: f64,
    measurable: bool,
    shown: bool,
    flushes: usize,
}

impl Scene {
    pub fn from_spec(spec: &SceneSpec) -> Self {
        let mut scene = Self {
            spec: spec.clone(),
            nodes: Vec::new(),
            position: Position::default(),
            pending_position: None,
            min_width: 0.0,
            width: None,
            max_height: None,
            scroll_top: 0.0,
            measurable: false,
            shown: false,
            flushes: 0,
        };
        scene.build_nodes();
        scene
    }

    fn build_nodes(&mut self) {
        let node = |kind, parent, classes: &[&str]| Node {
            kind,
            parent,
            classes: classes.iter().map(|c| c.to_string()).collect(),
        };

        let mut nodes = vec![
            node(NodeKind::ActivatorWrapper, None, &["menu__activator"]),
            node(NodeKind::ActivatorSlot, Some(ACTIVATOR), &["btn"]),
            node(NodeKind::Content, None, &["menu__content"]),
        ];

        if self.spec.rows > 0 {
            let list = ElementId(nodes.len());
            nodes.push(node(NodeKind::List, Some(CONTENT), &["list"]));
            for row in 0..self.spec.rows {
                let row_id = ElementId(nodes.len());
                nodes.push(node(NodeKind::Row(row), Some(list), &[]));
                let mut tile = node(NodeKind::Tile(row), Some(row_id), &["list__tile"]);
                if self.spec.selected == Some(row) {
                    tile.classes.push("list__tile--active".to_string());
                }
                nodes.push(tile);
            }
        }

        self.nodes = nodes;
    }

    pub fn spec(&self) -> &SceneSpec {
        &self.spec
    }

    pub fn elements(&self) -> MenuElements {
        MenuElements {
            activator: ACTIVATOR,
            content: CONTENT,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.spec.viewport
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.spec.viewport.resize(width, height);
    }

    /// Move the activator by a delta, keeping it inside the viewport
    pub fn move_activator(&mut self, dx: f64, dy: f64) {
        let a = &mut self.spec.activator;
        let max_left = (self.spec.viewport.width - a.width).max(0.0);
        let max_top = (self.spec.viewport.height - a.height).max(0.0);
        a.left = (a.left + dx).clamp(0.0, max_left);
        a.top = (a.top + dy).clamp(0.0, max_top);
    }

    /// Change the active row; `None` clears the selection
    pub fn select(&mut self, row: Option<usize>) {
        self.spec.selected = row.filter(|r| *r < self.spec.rows);
        self.build_nodes();
    }

    /// Whether the content is displayed outside measurement
    pub fn set_shown(&mut self, shown: bool) {
        self.shown = shown;
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Box offsets currently laid out
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn min_width(&self) -> f64 {
        self.min_width
    }

    /// Pinned content width, if any
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn max_height(&self) -> Option<f64> {
        self.max_height
    }

    /// Number of layout flushes so far
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    pub fn activator_box(&self) -> Rectangle {
        self.spec.activator.to_rect()
    }

    /// Where the content is laid out, whether or not it is displayed
    pub fn content_box(&self) -> Rectangle {
        let a = self.activator_box();
        let width = self.width.unwrap_or(self.spec.content_width).max(self.min_width);
        let height = match self.max_height {
            Some(max) => self.spec.natural_height().min(max),
            None => self.spec.natural_height(),
        };

        let left = match (self.position.left, self.position.right) {
            (EdgeValue::Px(l), _) => a.left + l,
            (EdgeValue::Auto, EdgeValue::Px(r)) => a.right - r - width,
            (EdgeValue::Auto, EdgeValue::Auto) => a.left,
        };
        let top = match (self.position.top, self.position.bottom) {
            (EdgeValue::Px(t), _) => a.top + t,
            (EdgeValue::Auto, EdgeValue::Px(b)) => a.bottom - b - height,
            (EdgeValue::Auto, EdgeValue::Auto) => a.top,
        };

        Rectangle::from_origin(left, top, width, height)
    }

    /// Largest valid scroll offset of the content
    pub fn scroll_max(&self) -> f64 {
        (self.spec.natural_height() - self.content_box().height).max(0.0)
    }

    fn list_box(&self) -> Rectangle {
        let c = self.content_box();
        Rectangle::from_origin(c.left, c.top - self.scroll_top, c.width, self.spec.list_height())
    }

    /// Box of a list row, in viewport coordinates
    pub fn row_box(&self, row: usize) -> Rectangle {
        let list = self.list_box();
        let offset = self.spec.list_padding + row as f64 * self.spec.row_height;
        Rectangle::from_origin(list.left, list.top + offset, list.width, self.spec.row_height)
            .with_offset_top(offset)
    }

    fn node(&self, element: ElementId) -> Option<&Node> {
        self.nodes.get(element.0)
    }

    fn is_descendant(&self, element: ElementId, root: ElementId) -> bool {
        let mut current = self.node(element).and_then(|n| n.parent);
        while let Some(id) = current {
            if id == root {
                return true;
            }
            current = self.node(id).and_then(|n| n.parent);
        }
        false
    }
}

impl LayoutHost for Scene {
    fn query(&self, root: ElementId, selector: &str) -> Option<ElementId> {
        let class = selector.strip_prefix('.')?;
        (0..self.nodes.len()).map(ElementId).find(|&id| {
            self.nodes[id.0].classes.iter().any(|c| c == class) && self.is_descendant(id, root)
        })
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.node(element)?.parent
    }

    fn first_child(&self, element: ElementId) -> Option<ElementId> {
        (0..self.nodes.len())
            .map(ElementId)
            .find(|&id| self.nodes[id.0].parent == Some(element))
    }

    fn rect(&self, element: ElementId) -> Option<Rectangle> {
        let node = self.node(element)?;
        let displayed = self.measurable || self.shown;
        match node.kind {
            NodeKind::ActivatorWrapper | NodeKind::ActivatorSlot => Some(self.activator_box()),
            _ if !displayed => None,
            NodeKind::Content => Some(self.content_box()),
            NodeKind::List => Some(self.list_box()),
            NodeKind::Row(row) | NodeKind::Tile(row) => Some(self.row_box(row)),
        }
    }

    fn set_measurable(&mut self, element: ElementId, measurable: bool) {
        if element == CONTENT {
            self.measurable = measurable;
        }
    }

    fn flush_layout(&mut self) {
        if let Some(position) = self.pending_position.take() {
            self.position = position;
        }
        self.flushes += 1;
    }

    fn apply_position(&mut self, element: ElementId, position: &Position) {
        if element == CONTENT {
            self.pending_position = Some(*position);
        }
    }

    fn set_min_width(&mut self, element: ElementId, width: f64) {
        if element == CONTENT {
            self.min_width = width;
        }
    }

    fn set_width(&mut self, element: ElementId, width: Option<f64>) {
        if element == CONTENT {
            self.width = width;
        }
    }

    fn set_max_height(&mut self, element: ElementId, height: Option<f64>) {
        if element == CONTENT {
            self.max_height = height;
        }
    }

    fn set_scroll_top(&mut self, element: ElementId, scroll_top: f64) {
        if element == CONTENT {
            self.scroll_top = scroll_top.clamp(0.0, self.scroll_max());
        }
    }
}

impl ViewportProvider for Scene {
    fn inner_size(&self) -> (f64, f64) {
        self.spec.viewport.inner_size()
    }
}
