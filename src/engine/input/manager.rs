// Input manager - Main coordination system for all input

use super::action::{Action, InputSource};
use super::config::{InputConfigManager, DEFAULT_DEADZONE};
use super::gamepad::GamepadEvent;
use super::joystick::{AxisDirection, JoystickInput};
use super::player::PlayerInput;
use crate::engine::settings::ControlSettings;
use std::collections::HashSet;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Main input manager that coordinates all input for all players
pub struct InputManager {
    /// Configuration manager for all players
    config: InputConfigManager,

    /// Input state for each player
    players: Vec<PlayerInput>,

    /// Sources currently held down, across all devices
    held: HashSet<InputSource>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new(config: InputConfigManager) -> Self {
        let players = (0..config.num_players()).map(|_| PlayerInput::default()).collect();

        Self {
            config,
            players,
            held: HashSet::new(),
        }
    }

    /// Create an input manager from the `[controls]` settings
    pub fn from_settings(controls: &ControlSettings) -> Self {
        Self::new(InputConfigManager::from_settings(controls))
    }

    /// Replace all bindings, e.g. after a rebind. Held inputs are dropped.
    pub fn reload(&mut self, controls: &ControlSettings) {
        *self = Self::from_settings(controls);
        log::debug!("Input bindings reloaded");
    }

    /// Process a key transition. Repeats of a held key are ignored.
    pub fn process_key(&mut self, code: KeyCode, state: ElementState) {
        self.set_source(InputSource::key(code), state == ElementState::Pressed);
    }

    /// Process a mouse button transition
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.set_source(InputSource::mouse(button), state == ElementState::Pressed);
    }

    /// Process a translated gamepad event
    pub fn process_gamepad_event(&mut self, event: &GamepadEvent) {
        match *event {
            GamepadEvent::Button {
                device,
                number,
                pressed,
            } => {
                let source = InputSource::joystick(device, JoystickInput::Button(number));
                self.set_source(source, pressed);
            }
            GamepadEvent::Axis {
                device,
                axis,
                value,
            } => {
                let active = AxisDirection::of_value(value, self.deadzone_for(device));
                for direction in [AxisDirection::Positive, AxisDirection::Negative] {
                    let input = JoystickInput::Axis { axis, direction };
                    self.set_source(
                        InputSource::joystick(device, input),
                        active == Some(direction),
                    );
                }
            }
            GamepadEvent::Disconnected(device) => {
                let stale: Vec<InputSource> = self
                    .held
                    .iter()
                    .filter(|source| {
                        matches!(source, InputSource::Joystick { device: d, .. } if *d == device)
                    })
                    .copied()
                    .collect();
                for source in stale {
                    self.set_source(source, false);
                }
            }
            GamepadEvent::Connected(_) => {}
        }
    }

    /// Deadzone of the player listening to `device`
    fn deadzone_for(&self, device: usize) -> f32 {
        (0..self.config.num_players())
            .filter_map(|player_id| self.config.get_config(player_id))
            .find(|config| config.joystick() == Some(device))
            .map(|config| config.deadzone())
            .unwrap_or(DEFAULT_DEADZONE)
    }

    /// Record a source going down or up and update every player bound to it.
    /// A release only releases the action once no other held source of that
    /// player maps to the same action.
    fn set_source(&mut self, source: InputSource, down: bool) {
        let changed = if down {
            self.held.insert(source)
        } else {
            self.held.remove(&source)
        };
        if !changed {
            return;
        }

        for player_id in 0..self.players.len() {
            let Some(action) = self.config.get_action(player_id, source) else {
                continue;
            };

            if down {
                self.players[player_id].press(action);
            } else if !self.is_action_held(player_id, action) {
                self.players[player_id].release(action);
            }
        }
    }

    fn is_action_held(&self, player_id: usize, action: Action) -> bool {
        self.held
            .iter()
            .any(|source| self.config.get_action(player_id, *source) == Some(action))
    }

    /// Update all player input states for a new frame
    /// Call this once per frame after processing all events
    pub fn update(&mut self) {
        for player in &mut self.players {
            player.update();
        }
    }

    /// Get input state for a specific player
    pub fn player(&self, player_id: usize) -> Option<&PlayerInput> {
        self.players.get(player_id)
    }

    /// Get the configuration manager
    pub fn config(&self) -> &InputConfigManager {
        &self.config
    }

    /// Check if any player pressed a specific action this frame
    pub fn any_player_just_pressed(&self, action: Action) -> bool {
        self.players.iter().any(|p| p.just_pressed(action))
    }

    /// Get the number of players
    pub fn num_players(&self) -> usize {
        self.players.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::from_settings(&ControlSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::joystick::JoystickAxis;
    use crate::engine::settings::PlayerControls;

    fn press(manager: &mut InputManager, code: KeyCode) {
        manager.process_key(code, ElementState::Pressed);
    }

    fn release(manager: &mut InputManager, code: KeyCode) {
        manager.process_key(code, ElementState::Released);
    }

    fn axis_event(device: usize, axis: JoystickAxis, value: f32) -> GamepadEvent {
        GamepadEvent::Axis {
            device,
            axis,
            value,
        }
    }

    #[test]
    fn test_manager_creation() {
        let manager = InputManager::default();
        assert_eq!(manager.num_players(), 2);
        assert!(manager.player(1).is_some());
        assert!(manager.player(2).is_none());
    }

    #[test]
    fn test_keyboard_moves_the_right_player() {
        let mut manager = InputManager::default();

        press(&mut manager, KeyCode::KeyW);
        assert!(manager.player(0).unwrap().is_pressed(Action::MoveUp));
        assert!(!manager.player(1).unwrap().is_pressed(Action::MoveUp));

        press(&mut manager, KeyCode::ArrowDown);
        assert!(manager.player(1).unwrap().is_pressed(Action::MoveDown));
    }

    #[test]
    fn test_key_release() {
        let mut manager = InputManager::default();

        press(&mut manager, KeyCode::KeyS);
        manager.update();
        release(&mut manager, KeyCode::KeyS);

        let player = manager.player(0).unwrap();
        assert!(!player.is_pressed(Action::MoveDown));
        assert!(player.just_released(Action::MoveDown));
    }

    #[test]
    fn test_key_repeat_is_ignored() {
        let mut manager = InputManager::default();

        press(&mut manager, KeyCode::KeyW);
        manager.update();
        press(&mut manager, KeyCode::KeyW);
        assert!(!manager.player(0).unwrap().just_pressed(Action::MoveUp));
        assert!(manager.player(0).unwrap().is_pressed(Action::MoveUp));
    }

    #[test]
    fn test_global_actions_reach_every_player() {
        let mut manager = InputManager::default();

        press(&mut manager, KeyCode::Escape);
        assert!(manager.player(0).unwrap().just_pressed(Action::Menu));
        assert!(manager.player(1).unwrap().just_pressed(Action::Menu));
        assert!(manager.any_player_just_pressed(Action::Menu));

        manager.update();
        assert!(!manager.any_player_just_pressed(Action::Menu));
        assert!(manager.player(0).unwrap().is_pressed(Action::Menu));
    }

    #[test]
    fn test_mouse_binding() {
        let mut controls = ControlSettings::default();
        controls.player1.up = "MouseLeft".to_string();
        let mut manager = InputManager::from_settings(&controls);

        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(manager.player(0).unwrap().is_pressed(Action::MoveUp));

        manager.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert!(!manager.player(0).unwrap().is_pressed(Action::MoveUp));
    }

    #[test]
    fn test_joystick_button() {
        let mut controls = ControlSettings::default();
        controls.player2.joy_up = "JoyB0".to_string();
        let mut manager = InputManager::from_settings(&controls);

        manager.process_gamepad_event(&GamepadEvent::Button {
            device: 1,
            number: 0,
            pressed: true,
        });
        assert!(manager.player(1).unwrap().is_pressed(Action::MoveUp));
        assert!(!manager.player(0).unwrap().is_pressed(Action::MoveUp));

        // Same button on another pad is not bound
        manager.process_gamepad_event(&GamepadEvent::Button {
            device: 0,
            number: 0,
            pressed: true,
        });
        assert!(!manager.player(0).unwrap().is_pressed(Action::MoveUp));
    }

    #[test]
    fn test_joystick_axis_respects_deadzone() {
        let mut manager = InputManager::default();

        manager.process_gamepad_event(&axis_event(0, JoystickAxis::Y, 0.1));
        assert!(!manager.player(0).unwrap().is_pressed(Action::MoveUp));

        manager.process_gamepad_event(&axis_event(0, JoystickAxis::Y, 0.9));
        assert!(manager.player(0).unwrap().is_pressed(Action::MoveUp));

        manager.process_gamepad_event(&axis_event(0, JoystickAxis::Y, -0.9));
        let player = manager.player(0).unwrap();
        assert!(!player.is_pressed(Action::MoveUp));
        assert!(player.is_pressed(Action::MoveDown));

        manager.process_gamepad_event(&axis_event(0, JoystickAxis::Y, 0.0));
        assert_eq!(manager.player(0).unwrap().vertical(), 0.0);
    }

    #[test]
    fn test_per_player_deadzone() {
        let mut controls = ControlSettings::default();
        controls.player1 = PlayerControls {
            deadzone: 0.6,
            ..controls.player1.clone()
        };
        let mut manager = InputManager::from_settings(&controls);

        manager.process_gamepad_event(&axis_event(0, JoystickAxis::Y, 0.5));
        assert!(!manager.player(0).unwrap().is_pressed(Action::MoveUp));

        manager.process_gamepad_event(&axis_event(0, JoystickAxis::Y, 0.7));
        assert!(manager.player(0).unwrap().is_pressed(Action::MoveUp));
    }

    #[test]
    fn test_axis_centering_keeps_held_key() {
        let mut manager = InputManager::default();

        press(&mut manager, KeyCode::KeyW);
        manager.process_gamepad_event(&axis_event(0, JoystickAxis::Y, 1.0));
        manager.process_gamepad_event(&axis_event(0, JoystickAxis::Y, 0.0));
        assert!(manager.player(0).unwrap().is_pressed(Action::MoveUp));

        release(&mut manager, KeyCode::KeyW);
        assert!(!manager.player(0).unwrap().is_pressed(Action::MoveUp));
    }

    #[test]
    fn test_disconnect_releases_pad_inputs() {
        let mut manager = InputManager::default();

        manager.process_gamepad_event(&axis_event(0, JoystickAxis::Y, -1.0));
        assert!(manager.player(0).unwrap().is_pressed(Action::MoveDown));

        manager.process_gamepad_event(&GamepadEvent::Disconnected(0));
        assert!(!manager.player(0).unwrap().is_pressed(Action::MoveDown));
    }

    #[test]
    fn test_reload_applies_new_bindings() {
        let mut manager = InputManager::default();
        let mut controls = ControlSettings::default();
        controls.player1.up = "I".to_string();
        manager.reload(&controls);

        press(&mut manager, KeyCode::KeyW);
        assert!(!manager.player(0).unwrap().is_pressed(Action::MoveUp));
        press(&mut manager, KeyCode::KeyI);
        assert!(manager.player(0).unwrap().is_pressed(Action::MoveUp));
    }
}
