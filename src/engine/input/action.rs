// Game action definitions and mappings

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use super::joystick::JoystickInput;
use super::symbols::{self, SymbolError};

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Paddle movement (also menu navigation)
    MoveUp,
    MoveDown,

    // Meta actions
    Pause,
    Menu,
    Confirm,
}

/// Represents an input source (keyboard key, mouse button, or joystick input)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
    Joystick { device: usize, input: JoystickInput },
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }

    /// Create a joystick input source on the given device
    pub fn joystick(device: usize, input: JoystickInput) -> Self {
        Self::Joystick { device, input }
    }

    /// Resolve a key or mouse button name ("W", "Escape", "MouseLeft").
    /// Keyboard names are tried first.
    pub fn from_name(name: &str) -> Result<Self, SymbolError> {
        symbols::keyboard()
            .lookup_by_name(name)
            .map(Self::Keyboard)
            .or_else(|_| symbols::mouse().lookup_by_name(name).map(Self::Mouse))
    }

    /// Text form used in the settings file
    pub fn name(&self) -> Result<String, SymbolError> {
        match self {
            Self::Keyboard(code) => symbols::keyboard()
                .lookup_by_value(*code)
                .map(str::to_string),
            Self::Mouse(button) => symbols::mouse()
                .lookup_by_value(*button)
                .map(str::to_string),
            Self::Joystick { input, .. } if input.is_valid() => Ok(input.to_string()),
            Self::Joystick { input, .. } => Err(SymbolError::NotFound(format!("{:?}", input))),
        }
    }
}
