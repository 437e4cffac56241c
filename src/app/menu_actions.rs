//! Menu-related action handlers.
//!
//! Key actions and mouse clicks are translated to scene edits and menu events
//! here. Anything that changes geometry while the menu is open restarts the
//! open cycle so the panel is measured again.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::DemoApp;
use crate::event::MenuEvent;
use crate::keybindings::Action;
use crate::menu::Menu;

impl DemoApp {
    /// Handle a key event through the keybinding resolver
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        let action = self.resolver.resolve(&key);
        self.handle_action(action);
    }

    /// Dispatch one action and settle the menu afterwards
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::MoveLeft => self.handle_move(-1.0, 0.0),
            Action::MoveRight => self.handle_move(1.0, 0.0),
            Action::MoveUp => self.handle_move(0.0, -1.0),
            Action::MoveDown => self.handle_move(0.0, 1.0),
            Action::ToggleMenu => self.handle_toggle(),
            Action::CloseMenu => {
                self.menu.handle_event(MenuEvent::EscapePressed, &mut self.scene);
            }
            Action::SelectNext => self.handle_select_step(1),
            Action::SelectPrev => self.handle_select_step(-1),
            Action::ToggleAuto => self.handle_toggle_auto(),
            Action::Quit => self.should_quit = true,
            Action::None => return,
        }
        self.settle();
    }

    /// Handle a mouse event against the layout of the last frame
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let (col, row) = (mouse.column, mouse.row);
        if let Some(item) = self.layout.item_at(col, row) {
            self.scene.select(Some(item));
            if !self.menu.handle_event(MenuEvent::ContentClicked, &mut self.scene) {
                self.reopen();
            }
        } else if self.layout.contains(col, row) {
            self.menu.handle_event(MenuEvent::ContentClicked, &mut self.scene);
        } else if self.layout.is_activator(col, row) {
            self.menu.handle_event(MenuEvent::ActivatorClicked, &mut self.scene);
        } else {
            self.menu.handle_event(MenuEvent::ClickedOutside, &mut self.scene);
        }
        self.settle();
    }

    /// Restart the open cycle if the menu is open
    pub(super) fn reopen(&mut self) {
        if self.menu.is_open() {
            self.menu.deactivate();
            self.menu.activate(&mut self.scene);
        }
    }

    fn handle_move(&mut self, dx: f64, dy: f64) {
        self.scene.move_activator(dx, dy);
        self.reopen();
    }

    /// Keyboard toggle works regardless of `open_on_click`
    fn handle_toggle(&mut self) {
        if self.menu.is_open() {
            self.menu.deactivate();
        } else {
            self.menu.activate(&mut self.scene);
        }
    }

    fn handle_select_step(&mut self, delta: isize) {
        let rows = self.scene.spec().rows;
        if rows == 0 {
            return;
        }
        let next = match self.scene.spec().selected {
            Some(current) => (current as isize + delta).rem_euclid(rows as isize) as usize,
            None if delta > 0 => 0,
            None => rows - 1,
        };
        self.scene.select(Some(next));
        self.reopen();
    }

    /// Preferences are fixed per menu, so switching modes builds a new one
    fn handle_toggle_auto(&mut self) {
        let was_open = self.menu.is_open();
        self.config.menu.auto = !self.config.menu.auto;
        tracing::debug!("Auto mode {}", if self.config.menu.auto { "on" } else { "off" });

        self.menu = Menu::new(self.config.menu.clone(), self.scene.elements());
        if was_open {
            self.menu.activate(&mut self.scene);
        }
    }
}
