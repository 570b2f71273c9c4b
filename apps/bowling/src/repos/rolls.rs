//! Roll repository functions.

use serde::Serialize;
use time::OffsetDateTime;

use super::{GameId, PlayerId, RollId};
use crate::db::{DbConn, Transaction};
use crate::errors::domain::{DomainError, NotFoundKind};

/// A stored roll. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roll {
    pub id: RollId,
    pub game_id: GameId,
    pub player_id: PlayerId,
    /// Pins knocked down, 0..=10.
    pub score: u8,
    pub created_at: OffsetDateTime,
}

/// Rolls of a game in ascending creation order, optionally for one player.
pub fn list_rolls<C: DbConn + ?Sized>(
    conn: &C,
    game_id: GameId,
    player_id: Option<&str>,
) -> Result<Vec<Roll>, DomainError> {
    conn.list_rolls(game_id, player_id)
}

/// Pin counts of one player's rolls, oldest first.
pub fn player_pins<C: DbConn + ?Sized>(
    conn: &C,
    game_id: GameId,
    player_id: &str,
) -> Result<Vec<u8>, DomainError> {
    Ok(list_rolls(conn, game_id, Some(player_id))?
        .into_iter()
        .map(|r| r.score)
        .collect())
}

pub fn require_roll<C: DbConn + ?Sized>(
    conn: &C,
    game_id: GameId,
    roll_id: RollId,
) -> Result<Roll, DomainError> {
    conn.find_roll(game_id, roll_id)?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Roll,
            format!("roll {roll_id} not found in game {game_id}"),
        )
    })
}

/// Stage a roll inside a transaction. It becomes visible to other readers
/// only when the transaction commits.
pub fn append_roll<T: Transaction>(
    txn: &mut T,
    game_id: GameId,
    player_id: &str,
    score: u8,
) -> Result<Roll, DomainError> {
    txn.append_roll(game_id, player_id, score)
}
