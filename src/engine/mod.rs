// Engine modules: game loop, input, settings

pub mod game_loop;
pub mod input;
pub mod settings;
