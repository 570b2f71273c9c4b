//! Game management services.

use serde::Serialize;
use tracing::info;

use crate::db::{Database, DbConn};
use crate::domain::PlayerResult;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::{games, rolls, Game, GameCreate, GameId, GameUpdate, Roll, RollId};
use crate::services::GameEngine;

/// A game with its current scoresheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub id: GameId,
    pub name: String,
    pub results: Vec<PlayerResult>,
}

/// Game domain service.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    pub fn create_game<D: Database>(&self, db: &D, create: GameCreate) -> Result<Game, DomainError> {
        validate_name(&create.name)?;
        validate_roster(&create.roster)?;
        let game = games::create_game(db, create)?;
        info!(game_id = game.id, players = game.roster.len(), "Game created");
        Ok(game)
    }

    pub fn list_games<C: DbConn + ?Sized>(&self, conn: &C) -> Result<Vec<Game>, DomainError> {
        games::list_games(conn)
    }

    pub fn get_game<C: DbConn + ?Sized>(
        &self,
        conn: &C,
        game_id: GameId,
    ) -> Result<Game, DomainError> {
        games::require_game(conn, game_id)
    }

    /// Rename a game and/or replace its roster. Rolls already stored for
    /// players dropped from the roster stay and keep being scored.
    pub fn update_game<D: Database>(
        &self,
        db: &D,
        game_id: GameId,
        update: GameUpdate,
    ) -> Result<Game, DomainError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(roster) = &update.roster {
            validate_roster(roster)?;
        }
        games::update_game(db, game_id, update)
    }

    pub fn delete_game<D: Database>(&self, db: &D, game_id: GameId) -> Result<(), DomainError> {
        games::delete_game(db, game_id)?;
        info!(game_id, "Game deleted");
        Ok(())
    }

    pub fn list_rolls<C: DbConn + ?Sized>(
        &self,
        conn: &C,
        game_id: GameId,
    ) -> Result<Vec<Roll>, DomainError> {
        games::require_game(conn, game_id)?;
        rolls::list_rolls(conn, game_id, None)
    }

    pub fn get_roll<C: DbConn + ?Sized>(
        &self,
        conn: &C,
        game_id: GameId,
        roll_id: RollId,
    ) -> Result<Roll, DomainError> {
        games::require_game(conn, game_id)?;
        rolls::require_roll(conn, game_id, roll_id)
    }

    pub fn game_summary<C: DbConn + ?Sized>(
        &self,
        conn: &C,
        game_id: GameId,
    ) -> Result<GameSummary, DomainError> {
        let game = games::require_game(conn, game_id)?;
        let results = GameEngine::new().get_results(conn, game_id)?;
        Ok(GameSummary {
            id: game.id,
            name: game.name,
            results,
        })
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidGameName,
            "Game name must not be blank",
        ));
    }
    Ok(())
}

fn validate_roster(roster: &[String]) -> Result<(), DomainError> {
    if roster.iter().any(|p| p.trim().is_empty()) {
        return Err(DomainError::invalid_player("Roster entries must not be blank"));
    }
    Ok(())
}
