use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default = "Config::default_keybindings")]
    pub keybindings: Vec<Keybinding>,
}

/// Alignment preferences of one menu instance.
///
/// These are fixed for the lifetime of a `Menu`; changing them means building
/// a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MenuConfig {
    /// Prefer opening upward
    #[serde(default)]
    pub top: bool,

    /// Prefer opening toward the left
    #[serde(default)]
    pub left: bool,

    #[serde(default)]
    pub bottom: bool,

    #[serde(default)]
    pub right: bool,

    /// Selection-list mode: center the selected item over the activator and
    /// pull the panel back inside the viewport instead of flipping
    #[serde(default)]
    pub auto: bool,

    /// Measure the horizontal gap from the activator's far edge
    #[serde(default)]
    pub offset_x: bool,

    /// Measure the vertical gap from the activator's far edge
    #[serde(default)]
    pub offset_y: bool,

    /// Manual horizontal correction, auto mode only
    #[serde(default)]
    pub nudge_x_auto: f64,

    /// Manual vertical correction, auto mode only
    #[serde(default)]
    pub nudge_y_auto: f64,

    /// Clicking the activator toggles the menu
    #[serde(default = "default_true")]
    pub open_on_click: bool,

    /// Clicking inside the content closes the menu
    #[serde(default = "default_true")]
    pub close_on_click: bool,

    /// Transform origin hint for the enter/leave transition
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Upper bound on the content height in pixels (None = unbounded)
    #[serde(default)]
    pub max_height: Option<f64>,

    /// Content width in pixels (None = match the activator width)
    #[serde(default)]
    pub width: Option<f64>,
}

fn default_true() -> bool {
    true
}

fn default_origin() -> String {
    "top left".to_string()
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            top: false,
            left: false,
            bottom: false,
            right: false,
            auto: false,
            offset_x: false,
            offset_y: false,
            nudge_x_auto: 0.0,
            nudge_y_auto: 0.0,
            open_on_click: true,
            close_on_click: true,
            origin: default_origin(),
            max_height: None,
            width: None,
        }
    }
}

impl MenuConfig {
    /// Config for a selection list (`auto` mode)
    pub fn auto() -> Self {
        Self {
            auto: true,
            ..Self::default()
        }
    }

    pub fn with_nudge(mut self, x: f64, y: f64) -> Self {
        self.nudge_x_auto = x;
        self.nudge_y_auto = y;
        self
    }

    pub fn with_max_height(mut self, max_height: f64) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Validate the menu preferences
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.nudge_x_auto.is_finite() || !self.nudge_y_auto.is_finite() {
            return Err(ConfigError::ValidationError(
                "nudge_x_auto and nudge_y_auto must be finite".to_string(),
            ));
        }

        if let Some(max_height) = self.max_height {
            if !max_height.is_finite() || max_height <= 0.0 {
                return Err(ConfigError::ValidationError(
                    "max_height must be a positive number".to_string(),
                ));
            }
        }

        if let Some(width) = self.width {
            if !width.is_finite() || width <= 0.0 {
                return Err(ConfigError::ValidationError(
                    "width must be a positive number".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Keybinding definition for the interactive front end
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Keybinding {
    /// Key name (e.g., "a", "Enter", "Left")
    pub key: String,

    /// Modifiers (e.g., ["ctrl"], ["ctrl", "shift"])
    #[serde(default)]
    pub modifiers: Vec<String>,

    /// Action to perform (e.g., "toggle_menu", "move_left")
    pub action: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu: MenuConfig::default(),
            keybindings: Self::default_keybindings(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    fn binding(key: &str, action: &str) -> Keybinding {
        Keybinding {
            key: key.to_string(),
            modifiers: vec![],
            action: action.to_string(),
        }
    }

    /// Default bindings of the interactive front end
    fn default_keybindings() -> Vec<Keybinding> {
        vec![
            Self::binding("Left", "move_left"),
            Self::binding("Right", "move_right"),
            Self::binding("Up", "move_up"),
            Self::binding("Down", "move_down"),
            Self::binding("Space", "toggle_menu"),
            Self::binding("Enter", "toggle_menu"),
            Self::binding("Esc", "close_menu"),
            Self::binding("j", "select_next"),
            Self::binding("k", "select_prev"),
            Self::binding("a", "toggle_auto"),
            Self::binding("q", "quit"),
        ]
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.menu.validate()?;

        for binding in &self.keybindings {
            if binding.key.is_empty() {
                return Err(ConfigError::ValidationError(
                    "keybinding key cannot be empty".to_string(),
                ));
            }
            if binding.action.is_empty() {
                return Err(ConfigError::ValidationError(
                    "keybinding action cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {}", msg),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
