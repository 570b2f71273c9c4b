//! Roll submission and scoring facade.

use tracing::{debug, info, warn};

use crate::db::{with_txn, Database, DbConn, TxnScope};
use crate::domain::scoring::{compute_results, PlayerResult};
use crate::domain::{check_sequence, is_legal_prefix, pins_from_score, valid_pin_range};
use crate::errors::domain::DomainError;
use crate::repos::{games, rolls, GameId, Roll};

/// Stateless: every call reads what it needs from the store it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameEngine;

impl GameEngine {
    pub fn new() -> Self {
        Self
    }

    /// Validate a roll against the player's history and append it.
    ///
    /// Lookup, validation and append run in one transaction scoped to the
    /// (game, player) pair, so two submissions for the same player can never
    /// both pass against the same stale history. A rejected roll is never
    /// stored.
    pub fn submit_roll<D: Database>(
        &self,
        db: &D,
        game_id: GameId,
        player_id: &str,
        score: i32,
    ) -> Result<Roll, DomainError> {
        debug!(game_id, player_id, score, "Submitting roll");

        // Unknown games and strangers never get a write lock. The check is
        // repeated inside the transaction against fresh state.
        let outcome = ensure_on_roster(db, game_id, player_id).and_then(|()| {
            with_txn(db, TxnScope::player(game_id, player_id), |txn| {
                let pins = checked_pins(&*txn, game_id, player_id, score)?;
                rolls::append_roll(txn, game_id, player_id, pins)
            })
        });

        match &outcome {
            Ok(roll) => info!(
                game_id,
                player_id,
                roll_id = roll.id,
                score = roll.score,
                "Roll accepted"
            ),
            Err(err) => warn!(game_id, player_id, score, error = %err, "Roll rejected"),
        }
        outcome
    }

    /// Run every check `submit_roll` would, without storing anything.
    ///
    /// Returns the pin count the roll would be stored with. Takes no lock, so
    /// the answer can be stale by the time a real submission arrives.
    pub fn check_roll<C: DbConn + ?Sized>(
        &self,
        conn: &C,
        game_id: GameId,
        player_id: &str,
        score: i32,
    ) -> Result<u8, DomainError> {
        checked_pins(conn, game_id, player_id, score)
    }

    /// Scoresheets for every player who has rolled, in order of first roll.
    pub fn get_results<C: DbConn + ?Sized>(
        &self,
        conn: &C,
        game_id: GameId,
    ) -> Result<Vec<PlayerResult>, DomainError> {
        games::require_game(conn, game_id)?;
        let rolls = rolls::list_rolls(conn, game_id, None)?;
        debug!(game_id, rolls = rolls.len(), "Computing results");

        Ok(compute_results(
            rolls.iter().map(|r| (r.player_id.as_str(), r.score)),
        ))
    }
}

fn ensure_on_roster<C: DbConn + ?Sized>(
    conn: &C,
    game_id: GameId,
    player_id: &str,
) -> Result<(), DomainError> {
    if !games::roster_contains(conn, game_id, player_id)? {
        return Err(DomainError::invalid_player(format!(
            "player '{player_id}' is not on the roster of game {game_id}"
        )));
    }
    Ok(())
}

fn checked_pins<C: DbConn + ?Sized>(
    conn: &C,
    game_id: GameId,
    player_id: &str,
    score: i32,
) -> Result<u8, DomainError> {
    ensure_on_roster(conn, game_id, player_id)?;

    let pins = pins_from_score(score).ok_or_else(|| {
        DomainError::invalid_score(format!(
            "score {score} is outside {:?}",
            valid_pin_range()
        ))
    })?;

    let mut history = rolls::player_pins(conn, game_id, player_id)?;
    if !is_legal_prefix(&history) {
        warn!(game_id, player_id, stored = ?history, "Stored rolls already break the rules");
    }

    history.push(pins);
    check_sequence(&history)
        .map_err(|violation| DomainError::illegal_sequence(violation.to_string()))?;
    Ok(pins)
}
