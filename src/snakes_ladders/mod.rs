mod board;
pub use board::Board;
pub use board::Jump;
pub use board::JumpTable;
pub use board::LayoutError;
pub use board::Square;

mod player;
pub use player::Player;

mod dice;
pub use dice::Dice;
pub use dice::DiceRoll;

pub(crate) mod random;
pub use random::RandomSource;
pub use random::SeededRandom;
pub use random::ThreadRandom;

mod config;
pub use config::EngineConfig;
pub use config::DEFAULT_TURN_DELAY_FRAMES;

mod input;
pub use input::InputEvent;
pub use input::InputQueue;

mod turn;
pub use turn::MoveRecord;
pub use turn::Snapshot;
pub use turn::TurnEngine;
pub use turn::TurnState;
