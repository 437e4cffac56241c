//! Open-cycle driver for one menu instance.
//!
//! `Menu` owns the direction, position and last measurement of a single panel
//! and sequences the geometry passes against a `LayoutHost`. The host calls
//! `on_layout_tick` after each layout flush; at most two positioning passes
//! run per open cycle (initial, and one flip-corrected pass), and the panel is
//! revealed on the tick after the accepted one.

use serde::Serialize;

use crate::config::MenuConfig;
use crate::event::MenuEvent;
use crate::geometry::{self, snapshot, ScreenDistance};
use crate::host::{LayoutHost, MenuElements};
use crate::types::{Dimensions, Direction, Horiz, Offset, Position, Vert};
use crate::viewport::ViewportProvider;

/// Lifecycle of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MenuState {
    /// Not shown, nothing pending
    Closed,
    /// Direction resolved, waiting for a layout tick to measure
    Measuring,
    /// Geometry final and scroll written, revealed on the next tick
    Positioned,
    /// Transition may run
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Initial,
    /// Runs after a flip and is accepted without another flip check
    Corrected,
    /// Geometry and scroll are written; flip the visibility flag
    Reveal,
}

/// A floating menu anchored to an activator
#[derive(Debug, Clone)]
pub struct Menu {
    config: MenuConfig,
    elements: MenuElements,
    state: MenuState,
    pending: Option<Pass>,
    direction: Direction,
    position: Position,
    dimensions: Dimensions,
    distance: Option<ScreenDistance>,
    overflow: Offset,
    scroll_top: Option<f64>,
    content_active: bool,
}

impl Menu {
    pub fn new(config: MenuConfig, elements: MenuElements) -> Self {
        let direction = geometry::resolve_direction(&config, None, None);
        Self {
            config,
            elements,
            state: MenuState::Closed,
            pending: None,
            direction,
            position: Position::baseline(direction),
            dimensions: Dimensions::default(),
            distance: None,
            overflow: Offset::default(),
            scroll_top: None,
            content_active: false,
        }
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn elements(&self) -> MenuElements {
        self.elements
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != MenuState::Closed
    }

    /// Whether a positioning pass or the reveal is waiting for the next tick
    pub fn has_pending_pass(&self) -> bool {
        self.pending.is_some()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Rectangles from the last pass
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Room around the activator from the last pass
    pub fn screen_distance(&self) -> Option<ScreenDistance> {
        self.distance
    }

    /// Auto-mode pullback from the last pass
    pub fn overflow(&self) -> Offset {
        self.overflow
    }

    /// Scroll offset written in the last presented cycle, if any
    pub fn scroll_top(&self) -> Option<f64> {
        self.scroll_top
    }

    /// Visibility flag consumed by the enter/leave transition
    pub fn is_content_active(&self) -> bool {
        self.content_active
    }

    /// Transform origin hint for the transition
    pub fn transition_origin(&self) -> &str {
        &self.config.origin
    }

    /// Start an open cycle. Only valid from `Closed`; returns whether a cycle
    /// was started.
    pub fn activate<H: LayoutHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.state != MenuState::Closed {
            return false;
        }

        self.set_direction(host, None, None);
        self.scroll_top = None;
        self.state = MenuState::Measuring;
        self.pending = Some(Pass::Initial);
        tracing::debug!("Menu activated, direction {:?}", self.direction);
        true
    }

    /// Close the menu from any state. Direction is kept; the next activation
    /// resolves it again anyway.
    pub fn deactivate(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("Menu closed with a pass pending, dropping it");
        }
        self.state = MenuState::Closed;
        self.content_active = false;
    }

    /// Apply an open/close trigger. Returns whether the state changed.
    pub fn handle_event<H: LayoutHost + ?Sized>(
        &mut self,
        event: MenuEvent,
        host: &mut H,
    ) -> bool {
        match event {
            MenuEvent::ActivatorClicked if self.config.open_on_click => {
                if self.is_open() {
                    self.deactivate();
                    true
                } else {
                    self.activate(host)
                }
            }
            MenuEvent::ContentClicked if self.config.close_on_click && self.is_open() => {
                self.deactivate();
                true
            }
            e if e.is_dismissal() && self.is_open() => {
                self.deactivate();
                true
            }
            _ => false,
        }
    }

    /// Run the pass scheduled for this tick, if any.
    ///
    /// The host must call this after flushing layout. A tick after the menu
    /// was closed does nothing.
    pub fn on_layout_tick<H: LayoutHost + ?Sized>(
        &mut self,
        host: &mut H,
        viewport: &dyn ViewportProvider,
    ) {
        let Some(pass) = self.pending.take() else {
            return;
        };
        match (self.state, pass) {
            (MenuState::Measuring, Pass::Initial | Pass::Corrected) => {
                self.update_position(host, viewport, pass)
            }
            (MenuState::Positioned, Pass::Reveal) => self.reveal(),
            (state, pass) => tracing::warn!("Dropping {:?} pass in state {:?}", pass, state),
        }
    }

    /// Resolve a direction and reset the box offsets to its baseline
    fn set_direction<H: LayoutHost + ?Sized>(
        &mut self,
        host: &mut H,
        horiz: Option<Horiz>,
        vert: Option<Vert>,
    ) {
        self.direction = geometry::resolve_direction(&self.config, horiz, vert);
        self.position = Position::baseline(self.direction);
        host.apply_position(self.elements.content, &self.position);
    }

    fn update_position<H: LayoutHost + ?Sized>(
        &mut self,
        host: &mut H,
        viewport: &dyn ViewportProvider,
        pass: Pass,
    ) {
        let (snapshot, distance) = self.update_dimensions(host, viewport);
        let layout = geometry::compute_layout(
            &self.dimensions,
            self.direction,
            &snapshot.viewport,
            &self.config,
        );

        self.position = layout.position;
        self.overflow = layout.overflow;
        host.apply_position(self.elements.content, &self.position);
        tracing::debug!(
            "{:?} pass: direction {:?}, offset {:?}, overflow {:?}",
            pass,
            self.direction,
            layout.offset,
            layout.overflow
        );

        if pass == Pass::Initial {
            if let Some(flipped) =
                geometry::flip_direction(&self.dimensions, self.direction, &distance, &self.config)
            {
                tracing::debug!("Flipping {:?} -> {:?}", self.direction, flipped);
                self.set_direction(host, Some(flipped.horiz), Some(flipped.vert));
                self.pending = Some(Pass::Corrected);
                return;
            }
        }

        self.settle(host);
    }

    /// Pin size limits, measure, and clamp the height in fixed mode.
    fn update_dimensions<H: LayoutHost + ?Sized>(
        &mut self,
        host: &mut H,
        viewport: &dyn ViewportProvider,
    ) -> (snapshot::Snapshot, ScreenDistance) {
        let content = self.elements.content;
        host.set_measurable(content, true);

        let activator = snapshot::activator_element(host, self.elements.activator);
        let min_width = host.rect(activator).map(|r| r.width).unwrap_or(0.0);
        host.set_min_width(content, min_width);
        host.set_width(content, Some(self.config.width.unwrap_or(min_width)));
        host.set_max_height(content, self.config.max_height);

        let snapshot = snapshot::take(host, &self.elements, viewport);
        self.dimensions = snapshot.dimensions;

        let distance =
            ScreenDistance::measure(&self.dimensions.activator, &snapshot.viewport, &self.config);
        if let Some(max_height) =
            geometry::clamp_height(&self.dimensions, self.direction, &distance, &self.config)
        {
            host.set_max_height(content, Some(max_height));
            if let Some(rect) = snapshot::measure(host, content, None, false) {
                tracing::debug!(
                    "Clamped content height {} -> {}",
                    self.dimensions.content.height,
                    rect.height
                );
                self.dimensions.content = rect;
            }
        }

        host.set_measurable(content, false);
        self.distance = Some(distance);
        (snapshot, distance)
    }

    /// Write the scroll and schedule the reveal for the next frame
    fn settle<H: LayoutHost + ?Sized>(&mut self, host: &mut H) {
        self.scroll_top = geometry::adjust_scroll(&self.dimensions, self.overflow, &self.config);
        if let Some(scroll_top) = self.scroll_top {
            host.set_scroll_top(self.elements.content, scroll_top);
        }
        self.state = MenuState::Positioned;
        self.pending = Some(Pass::Reveal);
    }

    /// Runs once the final position has been flushed
    fn reveal(&mut self) {
        self.state = MenuState::Visible;
        self.content_active = true;
        tracing::debug!("Menu visible at {:?}", self.position);
    }
}
