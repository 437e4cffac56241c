// Test harness driving a Menu against the in-memory Scene host

use menu_positioner::config::MenuConfig;
use menu_positioner::host::LayoutHost;
use menu_positioner::menu::{Menu, MenuState};
use menu_positioner::types::{EdgeValue, Position, Rectangle};
use menu_positioner::view::scene::{BoxSpec, Scene, SceneSpec};

/// Upper bound on ticks one open cycle may take
pub const MAX_TICKS: usize = 3;

/// Plays the host: flushes layout and hands the menu its ticks
pub struct MenuHarness {
    pub scene: Scene,
    pub menu: Menu,
}

impl MenuHarness {
    pub fn new(spec: SceneSpec, config: MenuConfig) -> Self {
        let scene = Scene::from_spec(&spec);
        let menu = Menu::new(config, scene.elements());
        Self { scene, menu }
    }

    /// Default scene with the activator moved to the given box
    pub fn with_activator(left: f64, top: f64, width: f64, height: f64) -> SceneSpec {
        SceneSpec {
            activator: BoxSpec {
                left,
                top,
                width,
                height,
            },
            ..SceneSpec::default()
        }
    }

    /// One host frame
    pub fn tick(&mut self) {
        self.scene.flush_layout();
        let viewport = self.scene.viewport();
        self.menu.on_layout_tick(&mut self.scene, &viewport);
        self.scene.set_shown(self.menu.is_content_active());
    }

    /// Activate and tick until the menu is visible. Returns the number of
    /// ticks it took.
    pub fn open(&mut self) -> usize {
        assert!(self.menu.activate(&mut self.scene), "menu was already open");
        for ticks in 1..=MAX_TICKS {
            self.tick();
            if self.menu.state() == MenuState::Visible {
                return ticks;
            }
        }
        panic!(
            "menu not visible after {} ticks, state {:?}",
            MAX_TICKS,
            self.menu.state()
        );
    }

    /// Close and open again on the same geometry
    pub fn reopen(&mut self) -> usize {
        self.menu.deactivate();
        self.open()
    }

    pub fn content(&self) -> Rectangle {
        self.scene.content_box()
    }

    pub fn position(&self) -> Position {
        self.menu.position()
    }

    /// Every edge of the content lies inside the viewport
    pub fn assert_content_inside_viewport(&self) {
        let c = self.content();
        let vp = self.scene.viewport();
        assert!(
            c.left >= 0.0 && c.top >= 0.0 && c.right <= vp.width && c.bottom <= vp.height,
            "content {:?} outside viewport {:?}",
            c,
            vp
        );
    }

    /// Exactly one edge per axis is `auto`, the other a finite pixel value
    pub fn assert_one_auto_per_axis(&self) {
        let pos = self.position();
        for (a, b) in [(pos.left, pos.right), (pos.top, pos.bottom)] {
            match (a, b) {
                (EdgeValue::Auto, EdgeValue::Px(v)) | (EdgeValue::Px(v), EdgeValue::Auto) => {
                    assert!(v.is_finite(), "non-finite edge in {:?}", pos)
                }
                _ => panic!("expected one auto edge per axis, got {:?}", pos),
            }
        }
    }
}
