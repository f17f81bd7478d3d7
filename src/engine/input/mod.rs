// Input handling system
//
// This module turns keyboard, mouse and gamepad events into per-player
// actions, driven by bindings that are stored as text in the settings file.
//
// ## Architecture
//
// - `symbols`: Two-way name tables for keys and mouse buttons
// - `joystick`: Joystick binding tokens ("JoyB3", "JoyX+", "JoyPovY-")
// - `gamepad`: gilrs polling, translated into `GamepadEvent`
// - `action`: Game actions and input sources
// - `config`: Per-player bindings built from the settings file
// - `player`: Per-player input state
// - `manager`: Main input manager coordinating everything
// - `rebind`: Capturing the next input for live rebinding
//
// ## Usage Example
//
// ```rust
// use engine::input::{Action, InputManager};
//
// let mut input = InputManager::from_settings(&settings.controls);
//
// // In your event loop
// input.process_key(KeyCode::KeyW, ElementState::Pressed);
// for event in gamepads.poll() {
//     input.process_gamepad_event(&event);
// }
//
// // Read paddle direction, then clear per-frame edges
// let dir = input.player(0).map(|p| p.vertical()).unwrap_or(0.0);
// input.update();
// ```

pub mod action;
pub mod config;
pub mod gamepad;
pub mod joystick;
pub mod manager;
pub mod player;
pub mod rebind;
pub mod symbols;

// Re-export commonly used types
pub use action::{Action, InputSource};
#[allow(unused_imports)]
pub use config::{InputConfig, InputConfigManager};
pub use gamepad::{GamepadEvent, Gamepads};
#[allow(unused_imports)]
pub use joystick::{AxisDirection, InputKind, JoystickAxis, JoystickInput};
pub use manager::InputManager;
#[allow(unused_imports)]
pub use player::PlayerInput;
pub use rebind::{Captured, RebindTarget, Rebinder};
#[allow(unused_imports)]
pub use symbols::{SymbolError, SymbolTable};
