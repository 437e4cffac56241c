use crate::config::Config;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// High-level actions of the interactive front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Activator movement
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    // Menu
    ToggleMenu,
    CloseMenu,
    SelectNext,
    SelectPrev,
    ToggleAuto,

    Quit,

    // No-op
    None,
}

impl Action {
    /// Parse action from string (used when loading from config)
    pub fn from_str(s: &str) -> Option<Action> {
        match s {
            "move_left" => Some(Action::MoveLeft),
            "move_right" => Some(Action::MoveRight),
            "move_up" => Some(Action::MoveUp),
            "move_down" => Some(Action::MoveDown),

            "toggle_menu" => Some(Action::ToggleMenu),
            "close_menu" => Some(Action::CloseMenu),
            "select_next" => Some(Action::SelectNext),
            "select_prev" => Some(Action::SelectPrev),
            "toggle_auto" => Some(Action::ToggleAuto),

            "quit" => Some(Action::Quit),

            _ => None,
        }
    }
}

/// Resolves key events to actions based on configuration
pub struct KeybindingResolver {
    /// Map from (key, modifiers) to action
    bindings: HashMap<(KeyCode, KeyModifiers), Action>,

    /// Default bindings (used as fallback)
    default_bindings: HashMap<(KeyCode, KeyModifiers), Action>,
}

impl KeybindingResolver {
    /// Create a new resolver from configuration
    pub fn new(config: &Config) -> Self {
        let mut resolver = Self {
            bindings: HashMap::new(),
            default_bindings: Self::create_default_bindings(),
        };
        resolver.load(config);
        resolver
    }

    fn load(&mut self, config: &Config) {
        for binding in &config.keybindings {
            let Some(key_code) = Self::parse_key(&binding.key) else {
                tracing::warn!("Ignoring binding with unknown key {:?}", binding.key);
                continue;
            };
            let modifiers = Self::parse_modifiers(&binding.modifiers);
            match Action::from_str(&binding.action) {
                Some(action) => {
                    self.bindings.insert((key_code, modifiers), action);
                }
                None => {
                    tracing::warn!("Ignoring binding with unknown action {:?}", binding.action)
                }
            }
        }
    }

    /// Resolve a key event to an action
    pub fn resolve(&self, event: &KeyEvent) -> Action {
        // Try custom bindings first
        if let Some(action) = self.bindings.get(&(event.code, event.modifiers)) {
            return *action;
        }

        // Fall back to default bindings
        if let Some(action) = self.default_bindings.get(&(event.code, event.modifiers)) {
            return *action;
        }

        Action::None
    }

    /// Parse a key string to KeyCode
    fn parse_key(key: &str) -> Option<KeyCode> {
        match key.to_lowercase().as_str() {
            "enter" => Some(KeyCode::Enter),
            "tab" => Some(KeyCode::Tab),
            "esc" | "escape" => Some(KeyCode::Esc),
            "space" => Some(KeyCode::Char(' ')),

            "left" => Some(KeyCode::Left),
            "right" => Some(KeyCode::Right),
            "up" => Some(KeyCode::Up),
            "down" => Some(KeyCode::Down),
            "home" => Some(KeyCode::Home),
            "end" => Some(KeyCode::End),
            "pageup" => Some(KeyCode::PageUp),
            "pagedown" => Some(KeyCode::PageDown),

            s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
            _ => None,
        }
    }

    /// Parse modifiers from strings
    fn parse_modifiers(modifiers: &[String]) -> KeyModifiers {
        let mut result = KeyModifiers::empty();
        for m in modifiers {
            match m.to_lowercase().as_str() {
                "ctrl" | "control" => result |= KeyModifiers::CONTROL,
                "shift" => result |= KeyModifiers::SHIFT,
                "alt" => result |= KeyModifiers::ALT,
                _ => {}
            }
        }
        result
    }

    /// Create default keybindings
    fn create_default_bindings() -> HashMap<(KeyCode, KeyModifiers), Action> {
        let mut bindings = HashMap::new();

        // Activator movement
        bindings.insert((KeyCode::Left, KeyModifiers::empty()), Action::MoveLeft);
        bindings.insert((KeyCode::Right, KeyModifiers::empty()), Action::MoveRight);
        bindings.insert((KeyCode::Up, KeyModifiers::empty()), Action::MoveUp);
        bindings.insert((KeyCode::Down, KeyModifiers::empty()), Action::MoveDown);

        // Menu
        bindings.insert((KeyCode::Char(' '), KeyModifiers::empty()), Action::ToggleMenu);
        bindings.insert((KeyCode::Enter, KeyModifiers::empty()), Action::ToggleMenu);
        bindings.insert((KeyCode::Esc, KeyModifiers::empty()), Action::CloseMenu);
        bindings.insert((KeyCode::Char('j'), KeyModifiers::empty()), Action::SelectNext);
        bindings.insert((KeyCode::Char('k'), KeyModifiers::empty()), Action::SelectPrev);
        bindings.insert((KeyCode::Char('a'), KeyModifiers::empty()), Action::ToggleAuto);

        bindings.insert((KeyCode::Char('q'), KeyModifiers::empty()), Action::Quit);
        bindings.insert((KeyCode::Char('c'), KeyModifiers::CONTROL), Action::Quit);

        bindings
    }
}
