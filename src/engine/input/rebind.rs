// Live rebinding
//
// The options menu arms a `Rebinder` for one (player, slot) pair; the next
// suitable input is turned into the text stored in the settings file.

use super::action::InputSource;
use super::gamepad::GamepadEvent;
use super::joystick::JoystickInput;
use crate::engine::settings::{BindingSlot, Settings};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Binding being captured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebindTarget {
    pub player_id: usize,
    pub slot: BindingSlot,
}

/// A finished capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub target: RebindTarget,
    /// Text to store in the slot
    pub text: String,
    /// Gamepad the input came from, for joystick slots
    pub device: Option<usize>,
}

impl Captured {
    /// Write the capture into the settings
    pub fn apply(&self, settings: &mut Settings) {
        let Some(controls) = settings.controls.player_mut(self.target.player_id) else {
            return;
        };
        *controls.slot_mut(self.target.slot) = self.text.clone();
        if let Some(device) = self.device {
            controls.joystick = device.to_string();
        }
        log::info!(
            "Player {} {} bound to {}",
            self.target.player_id + 1,
            self.target.slot.label(),
            self.text
        );
    }
}

/// Waits for the next input of the right kind for a target
#[derive(Debug, Default)]
pub struct Rebinder {
    pending: Option<RebindTarget>,
}

impl Rebinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, target: RebindTarget) {
        log::debug!("Waiting for input for {:?}", target);
        self.pending = Some(target);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    pub fn target(&self) -> Option<RebindTarget> {
        self.pending
    }

    /// Offer a key press. Escape cancels a pending capture. Keys are ignored
    /// by joystick slots.
    pub fn capture_key(&mut self, code: KeyCode) -> Option<Captured> {
        let target = self.pending?;
        if code == KeyCode::Escape {
            self.cancel();
            return None;
        }
        if target.slot.is_joystick() {
            return None;
        }
        self.finish_named(target, InputSource::key(code))
    }

    /// Offer a mouse button press
    pub fn capture_mouse(&mut self, button: MouseButton) -> Option<Captured> {
        let target = self.pending?;
        if target.slot.is_joystick() {
            return None;
        }
        self.finish_named(target, InputSource::mouse(button))
    }

    /// Offer a gamepad event. The scanned text is parsed back and anything
    /// that does not form a valid token keeps the capture waiting.
    pub fn capture_gamepad(&mut self, event: &GamepadEvent, deadzone: f32) -> Option<Captured> {
        let target = self.pending?;
        if !target.slot.is_joystick() {
            return None;
        }

        let candidate = event.describe(deadzone)?;
        let input = JoystickInput::parse(&candidate);
        if !input.is_valid() {
            log::debug!("Ignoring unusable joystick input {:?}", candidate);
            return None;
        }

        self.pending = None;
        Some(Captured {
            target,
            text: input.to_string(),
            device: Some(event.device()),
        })
    }

    fn finish_named(&mut self, target: RebindTarget, source: InputSource) -> Option<Captured> {
        match source.name() {
            Ok(text) => {
                self.pending = None;
                Some(Captured {
                    target,
                    text,
                    device: None,
                })
            }
            Err(e) => {
                // Unnamed keys cannot be saved; keep waiting
                log::warn!("{}, pick another input", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::joystick::JoystickAxis;

    fn target(slot: BindingSlot) -> RebindTarget {
        RebindTarget { player_id: 0, slot }
    }

    #[test]
    fn test_idle_rebinder_ignores_input() {
        let mut rebinder = Rebinder::new();
        assert!(!rebinder.is_active());
        assert_eq!(rebinder.capture_key(KeyCode::KeyA), None);
    }

    #[test]
    fn test_capture_key_uses_canonical_name() {
        let mut rebinder = Rebinder::new();
        rebinder.start(target(BindingSlot::Up));

        let captured = rebinder.capture_key(KeyCode::Digit1).unwrap();
        assert_eq!(captured.text, "Num1");
        assert_eq!(captured.device, None);
        assert!(!rebinder.is_active());
    }

    #[test]
    fn test_escape_cancels() {
        let mut rebinder = Rebinder::new();
        rebinder.start(target(BindingSlot::Down));

        assert_eq!(rebinder.capture_key(KeyCode::Escape), None);
        assert!(!rebinder.is_active());
    }

    #[test]
    fn test_unnamed_key_keeps_waiting() {
        let mut rebinder = Rebinder::new();
        rebinder.start(target(BindingSlot::Up));

        assert_eq!(rebinder.capture_key(KeyCode::F30), None);
        assert!(rebinder.is_active());
    }

    #[test]
    fn test_capture_mouse() {
        let mut rebinder = Rebinder::new();
        rebinder.start(target(BindingSlot::Down));

        let captured = rebinder.capture_mouse(MouseButton::Right).unwrap();
        assert_eq!(captured.text, "MouseRight");
    }

    #[test]
    fn test_joystick_slot_ignores_keys() {
        let mut rebinder = Rebinder::new();
        rebinder.start(target(BindingSlot::JoyUp));

        assert_eq!(rebinder.capture_key(KeyCode::KeyA), None);
        assert!(rebinder.is_active());
    }

    #[test]
    fn test_capture_gamepad_axis() {
        let mut rebinder = Rebinder::new();
        rebinder.start(RebindTarget {
            player_id: 1,
            slot: BindingSlot::JoyDown,
        });

        // Inside the deadzone: still waiting
        let resting = GamepadEvent::Axis {
            device: 2,
            axis: JoystickAxis::V,
            value: 0.1,
        };
        assert_eq!(rebinder.capture_gamepad(&resting, 0.25), None);

        let pushed = GamepadEvent::Axis {
            device: 2,
            axis: JoystickAxis::V,
            value: -0.8,
        };
        let captured = rebinder.capture_gamepad(&pushed, 0.25).unwrap();
        assert_eq!(captured.text, "JoyV-");
        assert_eq!(captured.device, Some(2));
    }

    #[test]
    fn test_key_slot_ignores_gamepad() {
        let mut rebinder = Rebinder::new();
        rebinder.start(target(BindingSlot::Up));

        let event = GamepadEvent::Button {
            device: 0,
            number: 1,
            pressed: true,
        };
        assert_eq!(rebinder.capture_gamepad(&event, 0.25), None);
        assert!(rebinder.is_active());
    }

    #[test]
    fn test_apply_writes_settings() {
        let mut settings = Settings::default();
        let captured = Captured {
            target: RebindTarget {
                player_id: 1,
                slot: BindingSlot::JoyUp,
            },
            text: "JoyB3".to_string(),
            device: Some(4),
        };
        captured.apply(&mut settings);

        assert_eq!(settings.controls.player2.joy_up, "JoyB3");
        assert_eq!(settings.controls.player2.joystick, "4");
        assert_eq!(settings.controls.player1, Settings::default().controls.player1);
    }
}
