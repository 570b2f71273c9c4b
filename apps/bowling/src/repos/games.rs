//! Game repository functions.

use std::collections::BTreeSet;

use serde::Serialize;
use time::OffsetDateTime;

use super::{GameId, PlayerId};
use crate::db::{Database, DbConn};
use crate::errors::domain::DomainError;

/// Game domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    /// Players allowed to roll in this game.
    pub roster: BTreeSet<PlayerId>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Game {
    pub fn has_player(&self, player_id: &str) -> bool {
        self.roster.contains(player_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCreate {
    pub name: String,
    pub roster: Vec<PlayerId>,
}

impl GameCreate {
    pub fn new<I, P>(name: impl Into<String>, roster: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PlayerId>,
    {
        Self {
            name: name.into(),
            roster: roster.into_iter().map(Into::into).collect(),
        }
    }
}

/// Partial update; `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameUpdate {
    pub name: Option<String>,
    /// Replaces the whole roster. Rolls already stored are kept as they are.
    pub roster: Option<Vec<PlayerId>>,
}

pub fn find_game<C: DbConn + ?Sized>(
    conn: &C,
    game_id: GameId,
) -> Result<Option<Game>, DomainError> {
    conn.find_game(game_id)
}

pub fn require_game<C: DbConn + ?Sized>(conn: &C, game_id: GameId) -> Result<Game, DomainError> {
    find_game(conn, game_id)?.ok_or_else(|| DomainError::game_not_found(game_id))
}

pub fn roster_contains<C: DbConn + ?Sized>(
    conn: &C,
    game_id: GameId,
    player_id: &str,
) -> Result<bool, DomainError> {
    Ok(require_game(conn, game_id)?.has_player(player_id))
}

pub fn list_games<C: DbConn + ?Sized>(conn: &C) -> Result<Vec<Game>, DomainError> {
    conn.list_games()
}

pub fn create_game<D: Database>(db: &D, create: GameCreate) -> Result<Game, DomainError> {
    db.insert_game(create)
}

pub fn update_game<D: Database>(
    db: &D,
    game_id: GameId,
    update: GameUpdate,
) -> Result<Game, DomainError> {
    db.update_game(game_id, update)
}

/// Delete a game together with all of its rolls.
pub fn delete_game<D: Database>(db: &D, game_id: GameId) -> Result<(), DomainError> {
    db.delete_game(game_id)
}
