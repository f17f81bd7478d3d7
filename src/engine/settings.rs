// Settings file
//
// Human-editable TOML with INI-style dotted keys:
//
//   [controls.player1]
//   up = "W"
//   joystick = "0"
//   joy_up = "JoyY+"
//
// Bindings stay as text here. Turning them into input sources happens in
// `input::config`, which logs and skips names it cannot resolve.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default settings file name
pub const DEFAULT_PATH: &str = "pong.toml";

/// Settings loading errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub game: GameSettings,
    pub controls: ControlSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 960,
            height: 720,
            fullscreen: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Points needed to win a match
    pub winning_score: u8,
    /// Serve speed (arena units/second)
    pub ball_speed: f32,
    /// Speed cap after repeated paddle hits
    pub ball_speed_max: f32,
    pub paddle_speed: f32,
    /// Seconds between a point and the next serve
    pub serve_delay: f32,
    /// 0.0 (sleepy) to 1.0 (sharp)
    pub ai_skill: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            winning_score: 10,
            ball_speed: 12.0,
            ball_speed_max: 26.0,
            paddle_speed: 18.0,
            serve_delay: 1.0,
            ai_skill: 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    pub pause: String,
    pub menu: String,
    pub confirm: String,
    pub player1: PlayerControls,
    pub player2: PlayerControls,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            pause: "P".to_string(),
            menu: "Escape".to_string(),
            confirm: "Enter".to_string(),
            player1: PlayerControls::default_player1(),
            player2: PlayerControls::default_player2(),
        }
    }
}

impl ControlSettings {
    pub fn player(&self, player_id: usize) -> Option<&PlayerControls> {
        match player_id {
            0 => Some(&self.player1),
            1 => Some(&self.player2),
            _ => None,
        }
    }

    pub fn player_mut(&mut self, player_id: usize) -> Option<&mut PlayerControls> {
        match player_id {
            0 => Some(&mut self.player1),
            1 => Some(&mut self.player2),
            _ => None,
        }
    }
}

/// One player's controls as written in the file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerControls {
    /// Paddle driven by the computer
    pub ai: bool,
    /// Key or mouse button names
    pub up: String,
    pub down: String,
    /// Gamepad index as text; empty for none
    pub joystick: String,
    /// Joystick tokens such as "JoyY+" or "JoyB3"
    pub joy_up: String,
    pub joy_down: String,
    /// Axis deadzone, fraction of full deflection
    pub deadzone: f32,
}

impl PlayerControls {
    fn default_player1() -> Self {
        Self {
            ai: false,
            up: "W".to_string(),
            down: "S".to_string(),
            joystick: "0".to_string(),
            joy_up: "JoyY+".to_string(),
            joy_down: "JoyY-".to_string(),
            deadzone: 0.25,
        }
    }

    fn default_player2() -> Self {
        Self {
            ai: true,
            up: "Up".to_string(),
            down: "Down".to_string(),
            joystick: "1".to_string(),
            joy_up: "JoyY+".to_string(),
            joy_down: "JoyY-".to_string(),
            deadzone: 0.25,
        }
    }

    /// Text of one binding slot
    pub fn slot(&self, slot: BindingSlot) -> &str {
        match slot {
            BindingSlot::Up => &self.up,
            BindingSlot::Down => &self.down,
            BindingSlot::JoyUp => &self.joy_up,
            BindingSlot::JoyDown => &self.joy_down,
        }
    }

    pub fn slot_mut(&mut self, slot: BindingSlot) -> &mut String {
        match slot {
            BindingSlot::Up => &mut self.up,
            BindingSlot::Down => &mut self.down,
            BindingSlot::JoyUp => &mut self.joy_up,
            BindingSlot::JoyDown => &mut self.joy_down,
        }
    }
}

impl Default for PlayerControls {
    fn default() -> Self {
        Self::default_player1()
    }
}

/// A rebindable entry of `PlayerControls`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingSlot {
    Up,
    Down,
    JoyUp,
    JoyDown,
}

impl BindingSlot {
    pub const ALL: [BindingSlot; 4] = [
        BindingSlot::Up,
        BindingSlot::Down,
        BindingSlot::JoyUp,
        BindingSlot::JoyDown,
    ];

    /// Slot takes a joystick token rather than a key name
    pub fn is_joystick(self) -> bool {
        matches!(self, BindingSlot::JoyUp | BindingSlot::JoyDown)
    }

    pub fn label(self) -> &'static str {
        match self {
            BindingSlot::Up => "Up",
            BindingSlot::Down => "Down",
            BindingSlot::JoyUp => "Joystick up",
            BindingSlot::JoyDown => "Joystick down",
        }
    }
}

impl Settings {
    /// Parse settings from TOML text, then clamp values into range.
    ///
    /// The text is layered over the serialized defaults key by key, so a
    /// partial `[controls.player2]` keeps player two's own defaults.
    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        let mut merged = toml::Value::try_from(Settings::default())?;
        let overrides: toml::Table = toml::from_str(text)?;
        merge_into(&mut merged, overrides);

        let mut settings: Settings = merged.try_into()?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load settings from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Load settings, falling back to defaults when the file is missing or broken
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    /// Write settings to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml()?)?;
        log::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Clamp numeric values into playable ranges. NaN and infinite values
    /// are replaced by their defaults first.
    pub fn sanitize(&mut self) {
        let defaults = GameSettings::default();
        let game = &mut self.game;
        finite_or(&mut game.ball_speed, defaults.ball_speed, "game.ball_speed");
        finite_or(
            &mut game.ball_speed_max,
            defaults.ball_speed_max,
            "game.ball_speed_max",
        );
        finite_or(&mut game.paddle_speed, defaults.paddle_speed, "game.paddle_speed");
        finite_or(&mut game.serve_delay, defaults.serve_delay, "game.serve_delay");
        finite_or(&mut game.ai_skill, defaults.ai_skill, "game.ai_skill");

        game.winning_score = game.winning_score.clamp(1, 99);
        game.ball_speed = game.ball_speed.clamp(1.0, 100.0);
        game.ball_speed_max = game.ball_speed_max.clamp(game.ball_speed, 200.0);
        game.paddle_speed = game.paddle_speed.clamp(1.0, 100.0);
        game.serve_delay = game.serve_delay.clamp(0.0, 10.0);
        game.ai_skill = game.ai_skill.clamp(0.0, 1.0);

        let controls = &mut self.controls;
        for (key, player, default) in [
            (
                "controls.player1.deadzone",
                &mut controls.player1,
                PlayerControls::default_player1(),
            ),
            (
                "controls.player2.deadzone",
                &mut controls.player2,
                PlayerControls::default_player2(),
            ),
        ] {
            finite_or(&mut player.deadzone, default.deadzone, key);
            player.deadzone = player.deadzone.clamp(0.0, 0.95);
        }

        self.window.width = self.window.width.max(320);
        self.window.height = self.window.height.max(240);
    }
}

fn finite_or(value: &mut f32, default: f32, key: &str) {
    if !value.is_finite() {
        log::warn!("{} = {} is not a finite number, using {}", key, value, default);
        *value = default;
    }
}

/// Recursively overwrite `base` with the keys present in `overrides`
fn merge_into(base: &mut toml::Value, overrides: toml::Table) {
    let toml::Value::Table(base) = base else {
        return;
    };

    for (key, value) in overrides {
        match value {
            toml::Value::Table(table) if matches!(base.get(&key), Some(toml::Value::Table(_))) => {
                if let Some(existing) = base.get_mut(&key) {
                    merge_into(existing, table);
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}
