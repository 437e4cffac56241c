use serde::{Deserialize, Serialize};

/// Source of the current viewport size.
///
/// Passed explicitly into every measurement so the positioner never reaches
/// for global window state.
pub trait ViewportProvider {
    /// Inner (width, height) of the viewport in pixels
    fn inner_size(&self) -> (f64, f64);
}

/// The visible area the menu must fit into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a new viewport
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Update dimensions
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

impl ViewportProvider for Viewport {
    fn inner_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
