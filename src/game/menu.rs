// Options menu model
//
// A flat list of entries driven by the same actions as the game. The menu
// only edits `Settings`; applying, saving and rebinding are reported back
// to the caller as a `MenuCommand`.

use crate::engine::input::{Action, InputManager, RebindTarget};
use crate::engine::settings::{BindingSlot, Settings};

const WINNING_SCORES: [u8; 6] = [3, 5, 7, 10, 15, 21];
const AI_SKILLS: [f32; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
const DEADZONES: [f32; 5] = [0.1, 0.15, 0.25, 0.35, 0.5];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Resume,
    PlayerAi(usize),
    WinningScore,
    AiSkill,
    Binding(RebindTarget),
    Deadzone(usize),
    Save,
    ResetDefaults,
}

/// What the caller should do after a menu interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    None,
    Close,
    Save,
    Rebind(RebindTarget),
    SettingsChanged,
}

pub struct OptionsMenu {
    items: Vec<MenuItem>,
    cursor: usize,
}

impl OptionsMenu {
    pub fn new(num_players: usize) -> Self {
        let mut items = vec![MenuItem::Resume, MenuItem::WinningScore, MenuItem::AiSkill];
        for player_id in 0..num_players {
            items.push(MenuItem::PlayerAi(player_id));
            for slot in BindingSlot::ALL {
                items.push(MenuItem::Binding(RebindTarget { player_id, slot }));
            }
            items.push(MenuItem::Deadzone(player_id));
        }
        items.push(MenuItem::Save);
        items.push(MenuItem::ResetDefaults);

        Self { items, cursor: 0 }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected(&self) -> MenuItem {
        self.items[self.cursor]
    }

    /// Move the cursor by `delta` entries, wrapping around
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.items.len() as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    /// Put the cursor back on the first entry
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Read this frame's actions and act on them
    pub fn handle(&mut self, input: &InputManager, settings: &mut Settings) -> MenuCommand {
        if input.any_player_just_pressed(Action::Menu) {
            return MenuCommand::Close;
        }
        if input.any_player_just_pressed(Action::MoveUp) {
            self.move_cursor(-1);
        }
        if input.any_player_just_pressed(Action::MoveDown) {
            self.move_cursor(1);
        }
        if input.any_player_just_pressed(Action::Confirm) {
            return self.activate(settings);
        }
        MenuCommand::None
    }

    /// Activate the selected entry
    pub fn activate(&mut self, settings: &mut Settings) -> MenuCommand {
        match self.selected() {
            MenuItem::Resume => MenuCommand::Close,
            MenuItem::PlayerAi(player_id) => match settings.controls.player_mut(player_id) {
                Some(controls) => {
                    controls.ai = !controls.ai;
                    MenuCommand::SettingsChanged
                }
                None => MenuCommand::None,
            },
            MenuItem::WinningScore => {
                let game = &mut settings.game;
                game.winning_score = next_step(&WINNING_SCORES, game.winning_score);
                MenuCommand::SettingsChanged
            }
            MenuItem::AiSkill => {
                let game = &mut settings.game;
                game.ai_skill = next_step(&AI_SKILLS, game.ai_skill);
                MenuCommand::SettingsChanged
            }
            MenuItem::Binding(target) => MenuCommand::Rebind(target),
            MenuItem::Deadzone(player_id) => match settings.controls.player_mut(player_id) {
                Some(controls) => {
                    controls.deadzone = next_step(&DEADZONES, controls.deadzone);
                    MenuCommand::SettingsChanged
                }
                None => MenuCommand::None,
            },
            MenuItem::Save => MenuCommand::Save,
            MenuItem::ResetDefaults => {
                *settings = Settings::default();
                log::info!("Settings reset to defaults");
                MenuCommand::SettingsChanged
            }
        }
    }

    /// Text for one entry with its current value
    pub fn label(&self, item: MenuItem, settings: &Settings) -> String {
        match item {
            MenuItem::Resume => "Resume".to_string(),
            MenuItem::PlayerAi(player_id) => {
                let ai = settings
                    .controls
                    .player(player_id)
                    .is_some_and(|controls| controls.ai);
                format!(
                    "Player {} control: {}",
                    player_id + 1,
                    if ai { "computer" } else { "human" }
                )
            }
            MenuItem::WinningScore => format!("Winning score: {}", settings.game.winning_score),
            MenuItem::AiSkill => {
                format!("AI skill: {:.0}%", settings.game.ai_skill * 100.0)
            }
            MenuItem::Binding(target) => {
                let value = settings
                    .controls
                    .player(target.player_id)
                    .map(|controls| controls.slot(target.slot))
                    .filter(|text| !text.is_empty())
                    .unwrap_or("(none)");
                format!(
                    "Player {} {}: {}",
                    target.player_id + 1,
                    target.slot.label(),
                    value
                )
            }
            MenuItem::Deadzone(player_id) => {
                let deadzone = settings
                    .controls
                    .player(player_id)
                    .map(|controls| controls.deadzone)
                    .unwrap_or_default();
                format!("Player {} deadzone: {:.2}", player_id + 1, deadzone)
            }
            MenuItem::Save => "Save settings".to_string(),
            MenuItem::ResetDefaults => "Reset defaults".to_string(),
        }
    }

    /// All entries, the selected one marked with `>`
    pub fn lines(&self, settings: &Settings) -> Vec<String> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let marker = if index == self.cursor { ">" } else { " " };
                format!("{} {}", marker, self.label(*item, settings))
            })
            .collect()
    }
}

/// The first step above `current`, wrapping to the smallest
fn next_step<T: Copy + PartialOrd>(steps: &[T], current: T) -> T {
    steps
        .iter()
        .copied()
        .find(|step| *step > current)
        .unwrap_or(steps[0])
}
