use serde::{Deserialize, Serialize};

/// Input the open/close toggle reacts to.
///
/// Detecting these (hit testing, key decoding) is the host's job; the menu
/// only decides what each one means for its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuEvent {
    /// Click on the activator
    ActivatorClicked,

    /// Click inside the content panel
    ContentClicked,

    /// Escape key while the menu has focus
    EscapePressed,

    /// Click anywhere outside activator and content
    ClickedOutside,
}

impl MenuEvent {
    /// Events that can only ever close the menu
    pub fn is_dismissal(&self) -> bool {
        matches!(self, MenuEvent::EscapePressed | MenuEvent::ClickedOutside)
    }
}
