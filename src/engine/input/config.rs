// Input configuration and remapping system

use super::action::{Action, InputSource};
use super::joystick::JoystickInput;
use crate::engine::settings::{ControlSettings, PlayerControls};
use std::collections::HashMap;

/// Deadzone used when a config is not built from settings
pub const DEFAULT_DEADZONE: f32 = 0.25;

/// Input configuration for a single player
/// Maps input sources (keys/buttons/joystick inputs) to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Gamepad this player listens to
    joystick: Option<usize>,

    /// Axis values at or below this magnitude count as released
    deadzone: f32,
}

impl InputConfig {
    /// Create a new, empty input configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            joystick: None,
            deadzone: DEFAULT_DEADZONE,
        }
    }

    /// Build a player's configuration from the settings file entries.
    ///
    /// Names that do not resolve are logged and left unbound.
    pub fn from_controls(player_id: usize, controls: &PlayerControls) -> Self {
        let mut config = Self::new();
        config.deadzone = controls.deadzone;
        let owner = format!("Player {}", player_id + 1);

        for (name, action) in [
            (&controls.up, Action::MoveUp),
            (&controls.down, Action::MoveDown),
        ] {
            if let Some(source) = resolve_name(&owner, name) {
                config.bind(source, action);
            }
        }

        config.joystick = parse_device(&owner, &controls.joystick);
        if let Some(device) = config.joystick {
            for (token, action) in [
                (&controls.joy_up, Action::MoveUp),
                (&controls.joy_down, Action::MoveDown),
            ] {
                if let Some(input) = resolve_token(&owner, token) {
                    config.bind(InputSource::joystick(device, input), action);
                }
            }
        }

        config
    }

    /// Gamepad index bound to this player
    pub fn joystick(&self) -> Option<usize> {
        self.joystick
    }

    pub fn deadzone(&self) -> f32 {
        self.deadzone
    }

    /// Bind an input source to an action, replacing any previous action
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.bindings.insert(source, action);
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty names mean "unbound" and are skipped silently
fn resolve_name(owner: &str, name: &str) -> Option<InputSource> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    match InputSource::from_name(name) {
        Ok(source) => Some(source),
        Err(e) => {
            log::warn!("{}: {}, binding left as Unknown", owner, e);
            None
        }
    }
}

fn resolve_token(owner: &str, token: &str) -> Option<JoystickInput> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    let input = JoystickInput::parse(token);
    if !input.is_valid() {
        log::warn!("{}: invalid joystick binding {:?}, ignored", owner, token);
        return None;
    }
    Some(input)
}

fn parse_device(owner: &str, text: &str) -> Option<usize> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    match text.parse() {
        Ok(device) => Some(device),
        Err(_) => {
            log::warn!(
                "{}: joystick index {:?} is not a number, joystick disabled",
                owner,
                text
            );
            None
        }
    }
}

/// Manager for all player input configurations
#[derive(Debug)]
pub struct InputConfigManager {
    /// Configurations for each player
    configs: Vec<InputConfig>,

    /// Global bindings (not player-specific)
    global_config: InputConfig,
}

impl InputConfigManager {
    /// Build every configuration from the `[controls]` settings
    pub fn from_settings(controls: &ControlSettings) -> Self {
        let configs = vec![
            InputConfig::from_controls(0, &controls.player1),
            InputConfig::from_controls(1, &controls.player2),
        ];

        let mut global_config = InputConfig::new();
        for (name, action) in [
            (&controls.pause, Action::Pause),
            (&controls.menu, Action::Menu),
            (&controls.confirm, Action::Confirm),
        ] {
            if let Some(source) = resolve_name("Global controls", name) {
                global_config.bind(source, action);
            }
        }

        Self {
            configs,
            global_config,
        }
    }

    /// Get a player's configuration
    pub fn get_config(&self, player_id: usize) -> Option<&InputConfig> {
        self.configs.get(player_id)
    }

    /// Number of player configurations
    pub fn num_players(&self) -> usize {
        self.configs.len()
    }

    /// Get the action for a given input source and player
    /// Checks player-specific bindings first, then global bindings
    pub fn get_action(&self, player_id: usize, source: InputSource) -> Option<Action> {
        // Check player-specific bindings first
        if let Some(config) = self.get_config(player_id) {
            if let Some(action) = config.get_action(source) {
                return Some(action);
            }
        }

        // Check global bindings
        self.global_config.get_action(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::joystick::{AxisDirection, JoystickAxis};
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    fn axis(axis: JoystickAxis, direction: AxisDirection) -> JoystickInput {
        JoystickInput::Axis { axis, direction }
    }

    fn default_manager() -> InputConfigManager {
        InputConfigManager::from_settings(&ControlSettings::default())
    }

    #[test]
    fn test_config_creation() {
        let config = InputConfig::new();
        assert_eq!(config.joystick(), None);
        assert_eq!(config.deadzone(), DEFAULT_DEADZONE);
        assert_eq!(config.get_action(InputSource::key(KeyCode::KeyW)), None);
    }

    #[test]
    fn test_bind_action() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyA);
        config.bind(source, Action::MoveUp);

        assert_eq!(config.get_action(source), Some(Action::MoveUp));
    }

    #[test]
    fn test_rebind_source() {
        let mut config = InputConfig::new();
        let source = InputSource::key(KeyCode::KeyA);

        config.bind(source, Action::MoveUp);
        config.bind(source, Action::MoveDown);

        assert_eq!(config.get_action(source), Some(Action::MoveDown));
    }

    #[test]
    fn test_from_controls_defaults() {
        let controls = ControlSettings::default();
        let config = InputConfig::from_controls(0, &controls.player1);

        assert_eq!(
            config.get_action(InputSource::key(KeyCode::KeyW)),
            Some(Action::MoveUp)
        );
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::KeyS)),
            Some(Action::MoveDown)
        );
        assert_eq!(config.joystick(), Some(0));
        assert_eq!(
            config.get_action(InputSource::joystick(
                0,
                axis(JoystickAxis::Y, AxisDirection::Positive)
            )),
            Some(Action::MoveUp)
        );
    }

    #[test]
    fn test_from_controls_mouse_and_case() {
        let controls = PlayerControls {
            up: "mouseleft".to_string(),
            down: "PAGEDOWN".to_string(),
            ..PlayerControls::default()
        };
        let config = InputConfig::from_controls(0, &controls);

        assert_eq!(
            config.get_action(InputSource::mouse(MouseButton::Left)),
            Some(Action::MoveUp)
        );
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::PageDown)),
            Some(Action::MoveDown)
        );
    }

    #[test]
    fn test_from_controls_unknown_names_are_skipped() {
        let controls = PlayerControls {
            up: "NoSuchKey".to_string(),
            down: String::new(),
            joy_up: "JoyQ+".to_string(),
            joy_down: "JoyB2".to_string(),
            joystick: "3".to_string(),
            ..PlayerControls::default()
        };
        let config = InputConfig::from_controls(0, &controls);

        // Default keys are gone and nothing took their place
        assert_eq!(config.get_action(InputSource::key(KeyCode::KeyW)), None);
        assert_eq!(config.get_action(InputSource::key(KeyCode::KeyS)), None);
        assert_eq!(
            config.get_action(InputSource::joystick(3, JoystickInput::Button(2))),
            Some(Action::MoveDown)
        );
        assert_eq!(config.bindings.len(), 1);
    }

    #[test]
    fn test_from_controls_bad_joystick_index() {
        let controls = PlayerControls {
            joystick: "two".to_string(),
            ..PlayerControls::default()
        };
        let config = InputConfig::from_controls(0, &controls);

        assert_eq!(config.joystick(), None);
        assert!(config
            .bindings
            .keys()
            .all(|source| !matches!(source, InputSource::Joystick { .. })));
    }

    #[test]
    fn test_from_controls_deadzone() {
        let controls = PlayerControls {
            deadzone: 0.4,
            ..PlayerControls::default()
        };
        let config = InputConfig::from_controls(1, &controls);
        assert_eq!(config.deadzone(), 0.4);
    }

    #[test]
    fn test_config_manager_from_settings() {
        let manager = default_manager();
        assert_eq!(manager.num_players(), 2);
        assert!(manager.get_config(1).is_some());
        assert!(manager.get_config(2).is_none());

        assert_eq!(
            manager.get_action(0, InputSource::key(KeyCode::KeyW)),
            Some(Action::MoveUp)
        );
        assert_eq!(
            manager.get_action(1, InputSource::key(KeyCode::ArrowUp)),
            Some(Action::MoveUp)
        );
        // Player 1's keys do not move player 2
        assert_eq!(manager.get_action(1, InputSource::key(KeyCode::KeyW)), None);
    }

    #[test]
    fn test_config_manager_global_bindings() {
        let manager = default_manager();
        let menu_key = InputSource::key(KeyCode::Escape);

        // Global bindings work for any player
        assert_eq!(manager.get_action(0, menu_key), Some(Action::Menu));
        assert_eq!(manager.get_action(1, menu_key), Some(Action::Menu));
        assert_eq!(
            manager.get_action(0, InputSource::key(KeyCode::KeyP)),
            Some(Action::Pause)
        );
        assert_eq!(
            manager.get_action(1, InputSource::key(KeyCode::Enter)),
            Some(Action::Confirm)
        );
    }

    #[test]
    fn test_config_manager_custom_globals() {
        let controls = ControlSettings {
            pause: "Space".to_string(),
            ..ControlSettings::default()
        };
        let manager = InputConfigManager::from_settings(&controls);

        assert_eq!(
            manager.get_action(0, InputSource::key(KeyCode::Space)),
            Some(Action::Pause)
        );
        assert_eq!(manager.get_action(0, InputSource::key(KeyCode::KeyP)), None);
    }

    #[test]
    fn test_player_binding_shadows_global() {
        let mut controls = ControlSettings::default();
        controls.player1.up = "P".to_string();
        let manager = InputConfigManager::from_settings(&controls);

        let p = InputSource::key(KeyCode::KeyP);
        assert_eq!(manager.get_action(0, p), Some(Action::MoveUp));
        assert_eq!(manager.get_action(1, p), Some(Action::Pause));
    }
}
