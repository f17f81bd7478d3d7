// Gamepad polling through gilrs
//
// Backend events are translated into `GamepadEvent`, which only speaks in
// button numbers and `JoystickAxis` ids. Everything above this module works
// on those, so bindings and tests never touch gilrs directly.

use gilrs::{Axis, Button, EventType, Gilrs};

use super::joystick::{AxisDirection, JoystickAxis, JoystickInput};

/// Fixed button numbering used in `JoyB<n>` tokens
const BUTTON_NUMBERS: &[(Button, u32)] = &[
    (Button::South, 0),
    (Button::East, 1),
    (Button::North, 2),
    (Button::West, 3),
    (Button::LeftTrigger, 4),
    (Button::RightTrigger, 5),
    (Button::LeftTrigger2, 6),
    (Button::RightTrigger2, 7),
    (Button::Select, 8),
    (Button::Start, 9),
    (Button::Mode, 10),
    (Button::LeftThumb, 11),
    (Button::RightThumb, 12),
    (Button::C, 13),
    (Button::Z, 14),
    (Button::DPadUp, 15),
    (Button::DPadDown, 16),
    (Button::DPadLeft, 17),
    (Button::DPadRight, 18),
];

/// Button number for a gilrs button, `None` for unknown buttons
pub fn button_number(button: Button) -> Option<u32> {
    BUTTON_NUMBERS
        .iter()
        .find(|(b, _)| *b == button)
        .map(|(_, n)| *n)
}

/// Axis id for a gilrs axis, `None` for unknown axes
pub fn axis_id(axis: Axis) -> Option<JoystickAxis> {
    match axis {
        Axis::LeftStickX => Some(JoystickAxis::X),
        Axis::LeftStickY => Some(JoystickAxis::Y),
        Axis::LeftZ => Some(JoystickAxis::Z),
        Axis::RightZ => Some(JoystickAxis::R),
        Axis::RightStickX => Some(JoystickAxis::U),
        Axis::RightStickY => Some(JoystickAxis::V),
        Axis::DPadX => Some(JoystickAxis::PovX),
        Axis::DPadY => Some(JoystickAxis::PovY),
        _ => None,
    }
}

/// Backend-independent gamepad event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GamepadEvent {
    Connected(usize),
    Disconnected(usize),
    Button {
        device: usize,
        number: u32,
        pressed: bool,
    },
    Axis {
        device: usize,
        axis: JoystickAxis,
        value: f32,
    },
}

impl GamepadEvent {
    /// Device the event came from
    pub fn device(&self) -> usize {
        match self {
            GamepadEvent::Connected(device) | GamepadEvent::Disconnected(device) => *device,
            GamepadEvent::Button { device, .. } | GamepadEvent::Axis { device, .. } => *device,
        }
    }

    /// Token text a live scan of this event would store, e.g. `"JoyB3"` or
    /// `"JoyX-"`. Releases, hot-plug events and axis values inside the
    /// deadzone describe nothing.
    pub fn describe(&self, deadzone: f32) -> Option<String> {
        match *self {
            GamepadEvent::Button {
                number,
                pressed: true,
                ..
            } => Some(JoystickInput::Button(number).to_string()),
            GamepadEvent::Axis { axis, value, .. } => {
                let direction = AxisDirection::of_value(value, deadzone)?;
                Some(JoystickInput::Axis { axis, direction }.to_string())
            }
            _ => None,
        }
    }
}

/// Owns the gilrs context, if one could be created
pub struct Gamepads {
    gilrs: Option<Gilrs>,
}

impl Gamepads {
    /// Initialise gamepad support. Failure is logged and leaves gamepads disabled.
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => {
                for (id, gamepad) in gilrs.gamepads() {
                    log::info!("Gamepad {} found: {}", usize::from(id), gamepad.name());
                }
                Some(gilrs)
            }
            Err(e) => {
                log::warn!(
                    "Failed to initialize gamepad support: {}. Joystick bindings are disabled.",
                    e
                );
                None
            }
        };

        Self { gilrs }
    }

    /// Drain pending backend events
    pub fn poll(&mut self) -> Vec<GamepadEvent> {
        let Some(gilrs) = self.gilrs.as_mut() else {
            return Vec::new();
        };

        let mut events = Vec::new();
        while let Some(event) = gilrs.next_event() {
            let device = usize::from(event.id);
            let translated = match event.event {
                EventType::Connected => {
                    log::info!("Gamepad {} connected", device);
                    Some(GamepadEvent::Connected(device))
                }
                EventType::Disconnected => {
                    log::info!("Gamepad {} disconnected", device);
                    Some(GamepadEvent::Disconnected(device))
                }
                EventType::ButtonPressed(button, _) => {
                    button_number(button).map(|number| GamepadEvent::Button {
                        device,
                        number,
                        pressed: true,
                    })
                }
                EventType::ButtonReleased(button, _) => {
                    button_number(button).map(|number| GamepadEvent::Button {
                        device,
                        number,
                        pressed: false,
                    })
                }
                EventType::AxisChanged(axis, value, _) => {
                    axis_id(axis).map(|axis| GamepadEvent::Axis {
                        device,
                        axis,
                        value,
                    })
                }
                _ => None,
            };
            events.extend(translated);
        }
        events
    }
}

impl Default for Gamepads {
    fn default() -> Self {
        Self::new()
    }
}
