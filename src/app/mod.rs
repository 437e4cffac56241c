//! Interactive driver: one scene, one menu, keys and mouse.
//!
//! `DemoApp` plays the host's part of the protocol. After every input it
//! flushes the scene and hands the menu its layout ticks until no pass is
//! pending, then mirrors the menu's visibility flag onto the scene.

mod menu_actions;

use ratatui::Frame;
use serde::Serialize;

use crate::config::Config;
use crate::host::LayoutHost;
use crate::keybindings::KeybindingResolver;
use crate::menu::{Menu, MenuState};
use crate::types::{Direction, Position, Rectangle};
use crate::view::render::{self, MenuColors, MenuLayout};
use crate::view::scene::{BoxSpec, Scene, SceneSpec};
use crate::viewport::Viewport;

/// Upper bound on ticks needed to settle one open cycle
const MAX_TICKS: usize = 3;

/// Snapshot of the menu printed by the headless mode
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub state: MenuState,
    pub direction: Direction,
    pub position: Position,
    pub scroll_top: Option<f64>,
    pub max_height: Option<f64>,
    pub activator: Rectangle,
    pub content: Rectangle,
    pub viewport: Viewport,
    pub flushes: usize,
}

pub struct DemoApp {
    scene: Scene,
    menu: Menu,
    config: Config,
    resolver: KeybindingResolver,
    colors: MenuColors,
    layout: MenuLayout,
    should_quit: bool,
}

impl DemoApp {
    pub fn new(config: Config, spec: SceneSpec) -> Self {
        let scene = Scene::from_spec(&spec);
        let menu = Menu::new(config.menu.clone(), scene.elements());
        let resolver = KeybindingResolver::new(&config);
        Self {
            scene,
            menu,
            config,
            resolver,
            colors: MenuColors::default(),
            layout: MenuLayout::default(),
            should_quit: false,
        }
    }

    /// Scenario sized for a terminal, one cell per unit, leaving the last
    /// row for the status line
    pub fn terminal_scene(width: u16, height: u16) -> SceneSpec {
        SceneSpec {
            viewport: Viewport::new(width as f64, height.saturating_sub(1) as f64),
            activator: BoxSpec {
                left: 2.0,
                top: 1.0,
                width: 14.0,
                height: 1.0,
            },
            content_width: 18.0,
            content_height: 6.0,
            rows: 12,
            row_height: 1.0,
            list_padding: 0.0,
            selected: None,
            labels: Vec::new(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// One host frame: flush styles, then let the menu run its pending pass
    pub fn tick(&mut self) {
        self.scene.flush_layout();
        let viewport = self.scene.viewport();
        self.menu.on_layout_tick(&mut self.scene, &viewport);
        self.scene.set_shown(self.menu.is_content_active());
    }

    /// Tick until no positioning pass is pending
    pub fn settle(&mut self) {
        for _ in 0..MAX_TICKS {
            self.tick();
            if !self.menu.has_pending_pass() {
                return;
            }
        }
        tracing::warn!("Menu still has a pass pending after {} ticks", MAX_TICKS);
    }

    /// Open the menu and run it to completion
    pub fn open(&mut self) {
        self.menu.activate(&mut self.scene);
        self.settle();
    }

    /// Terminal resize. An open menu is closed and opened again so it is
    /// measured against the new size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.scene
            .resize(width as f64, height.saturating_sub(1) as f64);
        tracing::debug!("Viewport resized to {}x{}", width, height);
        self.reopen();
        self.settle();
    }

    pub fn report(&self) -> Report {
        Report {
            state: self.menu.state(),
            direction: self.menu.direction(),
            position: self.menu.position(),
            scroll_top: self.menu.scroll_top(),
            max_height: self.scene.max_height(),
            activator: self.scene.activator_box(),
            content: self.scene.content_box(),
            viewport: self.scene.viewport(),
            flushes: self.scene.flush_count(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.layout = render::render_scene(frame, area, &self.scene, &self.menu, &self.colors);
        render::render_status(frame, area, &self.menu, &self.colors);
    }
}
