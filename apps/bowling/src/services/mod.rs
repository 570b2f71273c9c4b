pub mod game_engine;
pub mod games;

pub use game_engine::GameEngine;
pub use games::{GameService, GameSummary};
