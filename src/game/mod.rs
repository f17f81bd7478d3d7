// Pong gameplay
//
// - `arena`: Playfield geometry and tuning
// - `paddle`, `ball`: Moving pieces
// - `collision`: Wall and paddle bounces
// - `score`: Points per side
// - `ai`: Computer-controlled paddle
// - `pong`: Match state machine
// - `menu`: Options menu model

pub mod ai;
pub mod arena;
pub mod ball;
pub mod collision;
pub mod menu;
pub mod paddle;
pub mod pong;
pub mod score;

pub use ai::AiController;
pub use arena::{ArenaConfig, Side};
pub use menu::{MenuCommand, MenuItem, OptionsMenu};
pub use pong::PongGame;

#[allow(unused_imports)]
pub use pong::{FrameEvents, Phase};
#[allow(unused_imports)]
pub use score::Score;
