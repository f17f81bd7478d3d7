// Application state shared by the window loop
//
// Owns settings, input, the match and the options menu. The window loop
// feeds it raw events and calls `frame()` once per iteration; everything
// here is independent of the actual window so it can be driven in tests.

use std::path::PathBuf;

use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use crate::engine::game_loop::GameLoop;
use crate::engine::input::{Action, Captured, GamepadEvent, InputManager, Rebinder};
use crate::engine::settings::Settings;
use crate::game::{AiController, ArenaConfig, MenuCommand, OptionsMenu, PongGame, Side};

/// Which screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Game,
    Options,
}

pub struct App {
    settings: Settings,
    settings_path: PathBuf,
    input: InputManager,
    game: PongGame,
    clock: GameLoop,
    screen: Screen,
    menu: OptionsMenu,
    rebinder: Rebinder,
}

impl App {
    pub fn new(settings: Settings, settings_path: PathBuf) -> Self {
        let game = PongGame::new(ArenaConfig::from(&settings.game));
        Self::with_game(settings, settings_path, game)
    }

    fn with_game(settings: Settings, settings_path: PathBuf, game: PongGame) -> Self {
        let input = InputManager::from_settings(&settings.controls);
        let menu = OptionsMenu::new(input.num_players());

        Self {
            settings,
            settings_path,
            input,
            game,
            clock: GameLoop::new(),
            screen: Screen::Game,
            menu,
            rebinder: Rebinder::new(),
        }
    }

    /// Key transition from the window. A pending rebind swallows presses.
    /// Keyboard event from the window. Auto-repeats never complete a rebind.
    pub fn on_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) {
        if self.rebinder.is_active() && state == ElementState::Pressed {
            if repeat {
                return;
            }
            if let Some(captured) = self.rebinder.capture_key(code) {
                self.apply_capture(captured);
            }
            return;
        }
        self.input.process_key(code, state);
    }

    pub fn on_mouse(&mut self, button: MouseButton, state: ElementState) {
        if self.rebinder.is_active() && state == ElementState::Pressed {
            if let Some(captured) = self.rebinder.capture_mouse(button) {
                self.apply_capture(captured);
            }
            return;
        }
        self.input.process_mouse_button(button, state);
    }

    /// Gamepad event from the backend. Hot-plug events always reach the
    /// input manager so a disconnect releases that pad's held inputs.
    pub fn on_gamepad(&mut self, event: &GamepadEvent) {
        let hotplug = matches!(
            event,
            GamepadEvent::Connected(_) | GamepadEvent::Disconnected(_)
        );
        if let Some(target) = self.rebinder.target().filter(|_| !hotplug) {
            let deadzone = self
                .settings
                .controls
                .player(target.player_id)
                .map(|controls| controls.deadzone)
                .unwrap_or_default();
            if let Some(captured) = self.rebinder.capture_gamepad(event, deadzone) {
                self.apply_capture(captured);
            }
            return;
        }
        self.input.process_gamepad_event(event);
    }

    fn apply_capture(&mut self, captured: Captured) {
        captured.apply(&mut self.settings);
        self.apply_settings();
    }

    /// Run one window-loop iteration against the real clock
    pub fn frame(&mut self) {
        let steps = self.clock.begin_frame();
        self.tick(steps);
    }

    /// React to this frame's actions, then run `steps` fixed simulation steps
    pub fn tick(&mut self, steps: u32) {
        match self.screen {
            Screen::Game => self.handle_game_actions(),
            Screen::Options if !self.rebinder.is_active() => {
                let command = self.menu.handle(&self.input, &mut self.settings);
                self.run_command(command);
            }
            Screen::Options => {}
        }

        if self.screen == Screen::Game {
            let dt = self.clock.fixed_timestep();
            for _ in 0..steps {
                let intents = self.intents();
                self.game.step(dt, intents);
            }
        }

        self.input.update();
    }

    fn handle_game_actions(&mut self) {
        if self.input.any_player_just_pressed(Action::Menu) {
            self.open_options();
        } else if self.input.any_player_just_pressed(Action::Pause) {
            self.game.toggle_pause();
        } else if self.game.is_over() && self.input.any_player_just_pressed(Action::Confirm) {
            self.game.restart();
        }
    }

    fn open_options(&mut self) {
        self.screen = Screen::Options;
        self.menu.reset_cursor();
        self.clock.pause();
        log::debug!("Options opened");
        for line in self.menu_lines() {
            log::debug!("{}", line);
        }
    }

    fn close_options(&mut self) {
        self.rebinder.cancel();
        self.screen = Screen::Game;
        self.clock.resume();
        log::debug!("Options closed");
    }

    fn run_command(&mut self, command: MenuCommand) {
        match command {
            MenuCommand::None => {}
            MenuCommand::Close => self.close_options(),
            MenuCommand::Save => {
                if let Err(e) = self.settings.save(&self.settings_path) {
                    log::error!(
                        "Failed to save settings to {}: {}",
                        self.settings_path.display(),
                        e
                    );
                }
            }
            MenuCommand::Rebind(target) => self.rebinder.start(target),
            MenuCommand::SettingsChanged => self.apply_settings(),
        }
    }

    /// Push edited settings into input bindings and the match
    fn apply_settings(&mut self) {
        self.settings.sanitize();
        self.input.reload(&self.settings.controls);
        self.game.set_config(ArenaConfig::from(&self.settings.game));
    }

    /// Paddle intents, from the AI or the bound inputs
    fn intents(&self) -> [f32; 2] {
        Side::BOTH.map(|side| {
            let id = side.index();
            let ai = self
                .settings
                .controls
                .player(id)
                .is_some_and(|controls| controls.ai);

            if ai {
                AiController::new(side, self.settings.game.ai_skill).intent(
                    self.game.ball(),
                    self.game.paddle(side),
                    self.game.config(),
                )
            } else {
                self.input.player(id).map(|p| p.vertical()).unwrap_or(0.0)
            }
        })
    }

    /// Window title text: match status, or the menu state
    pub fn title(&self) -> String {
        match self.screen {
            Screen::Game => format!("Pong  |  {}", self.game.status_line()),
            Screen::Options => match self.rebinder.target() {
                Some(target) => {
                    let prompt = if target.slot.is_joystick() {
                        "Move a gamepad control"
                    } else {
                        "Press a key or mouse button"
                    };
                    format!(
                        "Options  |  {} for Player {} {} (Esc cancels)",
                        prompt,
                        target.player_id + 1,
                        target.slot.label()
                    )
                }
                None => format!(
                    "Options  |  {}",
                    self.menu.label(self.menu.selected(), &self.settings)
                ),
            },
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn game(&self) -> &PongGame {
        &self.game
    }

    /// Menu entries as text, the selected one marked
    pub fn menu_lines(&self) -> Vec<String> {
        self.menu.lines(&self.settings)
    }
}
