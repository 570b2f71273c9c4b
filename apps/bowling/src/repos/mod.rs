//! Repository layer: domain models for stored games and rolls, plus thin
//! free functions over the store contracts in [`crate::db`].

pub mod games;
pub mod rolls;

pub type GameId = i64;
pub type RollId = i64;
pub type PlayerId = String;

pub use games::{Game, GameCreate, GameUpdate};
pub use rolls::Roll;
