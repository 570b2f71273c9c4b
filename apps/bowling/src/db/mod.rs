//! Store contracts the services run against, plus the in-memory store.
//!
//! Reads go through [`DbConn`]. Roll appends only happen inside a
//! [`Transaction`] opened for one (game, player) pair; the store serializes
//! transactions on the same pair and lets different pairs run in parallel.

pub mod memory;
pub mod txn;

use crate::errors::domain::DomainError;
use crate::repos::{Game, GameCreate, GameId, GameUpdate, PlayerId, Roll, RollId};

pub use memory::MemoryDb;
pub use txn::with_txn;

/// Read access to games and rolls.
pub trait DbConn {
    fn find_game(&self, game_id: GameId) -> Result<Option<Game>, DomainError>;

    /// All games, ordered by id.
    fn list_games(&self) -> Result<Vec<Game>, DomainError>;

    /// Rolls in ascending creation order. An unknown game has no rolls.
    fn list_rolls(
        &self,
        game_id: GameId,
        player_id: Option<&str>,
    ) -> Result<Vec<Roll>, DomainError>;

    fn find_roll(&self, game_id: GameId, roll_id: RollId) -> Result<Option<Roll>, DomainError>;
}

/// Which writer a transaction excludes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxnScope {
    pub game_id: GameId,
    pub player_id: PlayerId,
}

impl TxnScope {
    pub fn player(game_id: GameId, player_id: impl Into<PlayerId>) -> Self {
        Self {
            game_id,
            player_id: player_id.into(),
        }
    }
}

/// A unit of work holding the scope's write lock until it ends.
///
/// Reads made through the transaction see its own staged rolls. Dropping it
/// without committing discards them.
pub trait Transaction: DbConn {
    fn append_roll(
        &mut self,
        game_id: GameId,
        player_id: &str,
        score: u8,
    ) -> Result<Roll, DomainError>;

    fn commit(self) -> Result<(), DomainError>
    where
        Self: Sized;

    fn rollback(self) -> Result<(), DomainError>
    where
        Self: Sized;
}

pub trait Database: DbConn + Send + Sync {
    type Txn<'a>: Transaction
    where
        Self: 'a;

    /// Open a transaction, waiting for any other writer on the same scope.
    fn begin(&self, scope: TxnScope) -> Result<Self::Txn<'_>, DomainError>;

    fn insert_game(&self, create: GameCreate) -> Result<Game, DomainError>;

    fn update_game(&self, game_id: GameId, update: GameUpdate) -> Result<Game, DomainError>;

    /// Removes the game and every roll it owns.
    fn delete_game(&self, game_id: GameId) -> Result<(), DomainError>;
}
