// Name <-> value lookup tables for keys and mouse buttons
//
// Bindings are stored in the settings file as human-readable names ("W",
// "Escape", "MouseLeft"). These tables translate between those names and
// the winit enumerants in both directions.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::LazyLock;

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Symbol lookup errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    #[error("No symbol found for {0}")]
    NotFound(String),
}

/// Immutable two-way mapping between names and values.
///
/// Names are compared ignoring ASCII case only. The table is built from an
/// ordered list of `(name, value)` pairs with these rules:
///
/// - a repeated name keeps the value of its **last** occurrence;
/// - a repeated value keeps the name of its **last** occurrence, which makes
///   that name the canonical one returned by [`SymbolTable::lookup_by_value`].
///
/// Aliases therefore go first and the canonical spelling last.
#[derive(Debug, Clone)]
pub struct SymbolTable<V> {
    by_name: HashMap<String, V>,
    by_value: HashMap<V, String>,
}

impl<V: Copy + Eq + Hash + Debug> SymbolTable<V> {
    /// Build a table from `(name, value)` pairs, last pair wins in both directions
    pub fn new<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, V)>,
    {
        let mut by_name = HashMap::new();
        let mut by_value = HashMap::new();

        for (name, value) in entries {
            by_name.insert(fold_case(name), value);
            by_value.insert(value, name.to_string());
        }

        Self { by_name, by_value }
    }

    /// Find the value registered under `name` (ASCII case-insensitive)
    pub fn lookup_by_name(&self, name: &str) -> Result<V, SymbolError> {
        self.by_name
            .get(&fold_case(name))
            .copied()
            .ok_or_else(|| SymbolError::NotFound(format!("name {:?}", name)))
    }

    /// Find the canonical name of `value`
    pub fn lookup_by_value(&self, value: V) -> Result<&str, SymbolError> {
        self.by_value
            .get(&value)
            .map(String::as_str)
            .ok_or_else(|| SymbolError::NotFound(format!("value {:?}", value)))
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

fn fold_case(name: &str) -> String {
    name.to_ascii_uppercase()
}

/// Keyboard names. Within each group the alias comes before the canonical name.
const KEY_NAMES: &[(&str, KeyCode)] = &[
    ("A", KeyCode::KeyA),
    ("B", KeyCode::KeyB),
    ("C", KeyCode::KeyC),
    ("D", KeyCode::KeyD),
    ("E", KeyCode::KeyE),
    ("F", KeyCode::KeyF),
    ("G", KeyCode::KeyG),
    ("H", KeyCode::KeyH),
    ("I", KeyCode::KeyI),
    ("J", KeyCode::KeyJ),
    ("K", KeyCode::KeyK),
    ("L", KeyCode::KeyL),
    ("M", KeyCode::KeyM),
    ("N", KeyCode::KeyN),
    ("O", KeyCode::KeyO),
    ("P", KeyCode::KeyP),
    ("Q", KeyCode::KeyQ),
    ("R", KeyCode::KeyR),
    ("S", KeyCode::KeyS),
    ("T", KeyCode::KeyT),
    ("U", KeyCode::KeyU),
    ("V", KeyCode::KeyV),
    ("W", KeyCode::KeyW),
    ("X", KeyCode::KeyX),
    ("Y", KeyCode::KeyY),
    ("Z", KeyCode::KeyZ),
    // Top row digits
    ("0", KeyCode::Digit0),
    ("Num0", KeyCode::Digit0),
    ("1", KeyCode::Digit1),
    ("Num1", KeyCode::Digit1),
    ("2", KeyCode::Digit2),
    ("Num2", KeyCode::Digit2),
    ("3", KeyCode::Digit3),
    ("Num3", KeyCode::Digit3),
    ("4", KeyCode::Digit4),
    ("Num4", KeyCode::Digit4),
    ("5", KeyCode::Digit5),
    ("Num5", KeyCode::Digit5),
    ("6", KeyCode::Digit6),
    ("Num6", KeyCode::Digit6),
    ("7", KeyCode::Digit7),
    ("Num7", KeyCode::Digit7),
    ("8", KeyCode::Digit8),
    ("Num8", KeyCode::Digit8),
    ("9", KeyCode::Digit9),
    ("Num9", KeyCode::Digit9),
    // Control keys
    ("Esc", KeyCode::Escape),
    ("Escape", KeyCode::Escape),
    ("LCtrl", KeyCode::ControlLeft),
    ("LControl", KeyCode::ControlLeft),
    ("LShift", KeyCode::ShiftLeft),
    ("LAlt", KeyCode::AltLeft),
    ("LSuper", KeyCode::SuperLeft),
    ("LSystem", KeyCode::SuperLeft),
    ("RCtrl", KeyCode::ControlRight),
    ("RControl", KeyCode::ControlRight),
    ("RShift", KeyCode::ShiftRight),
    ("RAlt", KeyCode::AltRight),
    ("RSuper", KeyCode::SuperRight),
    ("RSystem", KeyCode::SuperRight),
    ("Menu", KeyCode::ContextMenu),
    ("ContextMenu", KeyCode::ContextMenu),
    ("Return", KeyCode::Enter),
    ("Enter", KeyCode::Enter),
    ("BackSpace", KeyCode::Backspace),
    ("Backspace", KeyCode::Backspace),
    ("Tab", KeyCode::Tab),
    ("Space", KeyCode::Space),
    ("CapsLock", KeyCode::CapsLock),
    // Punctuation
    ("LBracket", KeyCode::BracketLeft),
    ("RBracket", KeyCode::BracketRight),
    ("SemiColon", KeyCode::Semicolon),
    ("Semicolon", KeyCode::Semicolon),
    ("Comma", KeyCode::Comma),
    ("Period", KeyCode::Period),
    ("Quote", KeyCode::Quote),
    ("Apostrophe", KeyCode::Quote),
    ("Slash", KeyCode::Slash),
    ("BackSlash", KeyCode::Backslash),
    ("Backslash", KeyCode::Backslash),
    ("Tilde", KeyCode::Backquote),
    ("Grave", KeyCode::Backquote),
    ("Equal", KeyCode::Equal),
    ("Dash", KeyCode::Minus),
    ("Minus", KeyCode::Minus),
    ("Hyphen", KeyCode::Minus),
    // Navigation
    ("PageUp", KeyCode::PageUp),
    ("PageDown", KeyCode::PageDown),
    ("End", KeyCode::End),
    ("Home", KeyCode::Home),
    ("Insert", KeyCode::Insert),
    ("Del", KeyCode::Delete),
    ("Delete", KeyCode::Delete),
    ("Left", KeyCode::ArrowLeft),
    ("Right", KeyCode::ArrowRight),
    ("Up", KeyCode::ArrowUp),
    ("Down", KeyCode::ArrowDown),
    // Numpad
    ("Add", KeyCode::NumpadAdd),
    ("Subtract", KeyCode::NumpadSubtract),
    ("Multiply", KeyCode::NumpadMultiply),
    ("Divide", KeyCode::NumpadDivide),
    ("Numpad0", KeyCode::Numpad0),
    ("Numpad1", KeyCode::Numpad1),
    ("Numpad2", KeyCode::Numpad2),
    ("Numpad3", KeyCode::Numpad3),
    ("Numpad4", KeyCode::Numpad4),
    ("Numpad5", KeyCode::Numpad5),
    ("Numpad6", KeyCode::Numpad6),
    ("Numpad7", KeyCode::Numpad7),
    ("Numpad8", KeyCode::Numpad8),
    ("Numpad9", KeyCode::Numpad9),
    ("NumpadEnter", KeyCode::NumpadEnter),
    // Function keys
    ("F1", KeyCode::F1),
    ("F2", KeyCode::F2),
    ("F3", KeyCode::F3),
    ("F4", KeyCode::F4),
    ("F5", KeyCode::F5),
    ("F6", KeyCode::F6),
    ("F7", KeyCode::F7),
    ("F8", KeyCode::F8),
    ("F9", KeyCode::F9),
    ("F10", KeyCode::F10),
    ("F11", KeyCode::F11),
    ("F12", KeyCode::F12),
    ("F13", KeyCode::F13),
    ("F14", KeyCode::F14),
    ("F15", KeyCode::F15),
    ("Pause", KeyCode::Pause),
];

/// Mouse button names. Prefixed so they never collide with key names like "Left".
const MOUSE_NAMES: &[(&str, MouseButton)] = &[
    ("MouseLeft", MouseButton::Left),
    ("MouseRight", MouseButton::Right),
    ("MouseMiddle", MouseButton::Middle),
    ("MouseBack", MouseButton::Back),
    ("MouseX1", MouseButton::Back),
    ("MouseForward", MouseButton::Forward),
    ("MouseX2", MouseButton::Forward),
];

static KEYBOARD: LazyLock<SymbolTable<KeyCode>> =
    LazyLock::new(|| SymbolTable::new(KEY_NAMES.iter().copied()));

static MOUSE: LazyLock<SymbolTable<MouseButton>> =
    LazyLock::new(|| SymbolTable::new(MOUSE_NAMES.iter().copied()));

/// Process-wide keyboard name table
pub fn keyboard() -> &'static SymbolTable<KeyCode> {
    &KEYBOARD
}

/// Process-wide mouse button name table
pub fn mouse() -> &'static SymbolTable<MouseButton> {
    &MOUSE
}
