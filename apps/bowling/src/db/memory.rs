//! In-memory store.
//!
//! Games and their rolls live in a `DashMap` keyed by game id. Each
//! (game, player) pair gets its own `parking_lot` mutex; a transaction holds
//! it from `begin` until it commits, rolls back or is dropped.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::{ArcMutexGuard, Mutex, RawMutex};
use time::OffsetDateTime;
use tracing::debug;

use super::{Database, DbConn, Transaction, TxnScope};
use crate::config::db::DbConfig;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::{Game, GameCreate, GameId, GameUpdate, PlayerId, Roll, RollId};

#[derive(Debug)]
struct GameRow {
    game: Game,
    /// Creation order.
    rolls: Vec<Roll>,
}

type PlayerLock = Arc<Mutex<()>>;

#[derive(Debug)]
pub struct MemoryDb {
    config: DbConfig,
    games: DashMap<GameId, GameRow>,
    player_locks: DashMap<(GameId, PlayerId), PlayerLock>,
    next_game_id: AtomicI64,
    next_roll_id: AtomicI64,
}

impl Default for MemoryDb {
    fn default() -> Self {
        Self::new(DbConfig::default())
    }
}

impl MemoryDb {
    pub fn new(config: DbConfig) -> Self {
        Self {
            config,
            games: DashMap::new(),
            player_locks: DashMap::new(),
            next_game_id: AtomicI64::new(1),
            next_roll_id: AtomicI64::new(1),
        }
    }

    fn lock_for(&self, scope: &TxnScope) -> PlayerLock {
        // Clone the Arc out so the map shard is released before we wait.
        self.player_locks
            .entry((scope.game_id, scope.player_id.clone()))
            .or_default()
            .value()
            .clone()
    }

    fn rolls_matching(&self, game_id: GameId, player_id: Option<&str>) -> Vec<Roll> {
        self.games
            .get(&game_id)
            .map(|row| {
                row.rolls
                    .iter()
                    .filter(|r| player_id.map_or(true, |p| r.player_id == p))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl DbConn for MemoryDb {
    fn find_game(&self, game_id: GameId) -> Result<Option<Game>, DomainError> {
        Ok(self.games.get(&game_id).map(|row| row.game.clone()))
    }

    fn list_games(&self) -> Result<Vec<Game>, DomainError> {
        let mut games: Vec<Game> = self.games.iter().map(|row| row.game.clone()).collect();
        games.sort_by_key(|g| g.id);
        Ok(games)
    }

    fn list_rolls(
        &self,
        game_id: GameId,
        player_id: Option<&str>,
    ) -> Result<Vec<Roll>, DomainError> {
        Ok(self.rolls_matching(game_id, player_id))
    }

    fn find_roll(&self, game_id: GameId, roll_id: RollId) -> Result<Option<Roll>, DomainError> {
        Ok(self
            .games
            .get(&game_id)
            .and_then(|row| row.rolls.iter().find(|r| r.id == roll_id).cloned()))
    }
}

impl Database for MemoryDb {
    type Txn<'a> = MemoryTxn<'a>;

    fn begin(&self, scope: TxnScope) -> Result<MemoryTxn<'_>, DomainError> {
        if !self.games.contains_key(&scope.game_id) {
            return Err(DomainError::game_not_found(scope.game_id));
        }
        let lock = self.lock_for(&scope);
        let guard = lock
            .try_lock_arc_for(self.config.lock_timeout)
            .ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::Timeout,
                    format!(
                        "timed out after {:?} waiting for writer lock on game {} player {}",
                        self.config.lock_timeout, scope.game_id, scope.player_id
                    ),
                )
            })?;

        debug!(game_id = scope.game_id, player_id = %scope.player_id, "transaction started");
        Ok(MemoryTxn {
            db: self,
            scope,
            staged: Vec::new(),
            _guard: guard,
        })
    }

    fn insert_game(&self, create: GameCreate) -> Result<Game, DomainError> {
        let now = OffsetDateTime::now_utc();
        let game = Game {
            id: self.next_game_id.fetch_add(1, Ordering::Relaxed),
            name: create.name,
            roster: create.roster.into_iter().collect::<BTreeSet<_>>(),
            created_at: now,
            updated_at: now,
        };
        self.games.insert(
            game.id,
            GameRow {
                game: game.clone(),
                rolls: Vec::new(),
            },
        );
        Ok(game)
    }

    fn update_game(&self, game_id: GameId, update: GameUpdate) -> Result<Game, DomainError> {
        let mut row = self
            .games
            .get_mut(&game_id)
            .ok_or_else(|| DomainError::game_not_found(game_id))?;

        if let Some(name) = update.name {
            row.game.name = name;
        }
        if let Some(roster) = update.roster {
            row.game.roster = roster.into_iter().collect();
        }
        row.game.updated_at = OffsetDateTime::now_utc();
        Ok(row.game.clone())
    }

    fn delete_game(&self, game_id: GameId) -> Result<(), DomainError> {
        let (_, row) = self
            .games
            .remove(&game_id)
            .ok_or_else(|| DomainError::game_not_found(game_id))?;
        self.player_locks.retain(|(locked_game, _), _| *locked_game != game_id);
        debug!(game_id, rolls = row.rolls.len(), "game deleted with its rolls");
        Ok(())
    }
}

/// Transaction over [`MemoryDb`]. Staged rolls are invisible to other
/// readers until [`Transaction::commit`].
pub struct MemoryTxn<'a> {
    db: &'a MemoryDb,
    scope: TxnScope,
    staged: Vec<Roll>,
    _guard: ArcMutexGuard<RawMutex, ()>,
}

impl DbConn for MemoryTxn<'_> {
    fn find_game(&self, game_id: GameId) -> Result<Option<Game>, DomainError> {
        self.db.find_game(game_id)
    }

    fn list_games(&self) -> Result<Vec<Game>, DomainError> {
        self.db.list_games()
    }

    fn list_rolls(
        &self,
        game_id: GameId,
        player_id: Option<&str>,
    ) -> Result<Vec<Roll>, DomainError> {
        let mut rolls = self.db.rolls_matching(game_id, player_id);
        rolls.extend(
            self.staged
                .iter()
                .filter(|r| r.game_id == game_id && player_id.map_or(true, |p| r.player_id == p))
                .cloned(),
        );
        Ok(rolls)
    }

    fn find_roll(&self, game_id: GameId, roll_id: RollId) -> Result<Option<Roll>, DomainError> {
        if let Some(staged) = self
            .staged
            .iter()
            .find(|r| r.game_id == game_id && r.id == roll_id)
        {
            return Ok(Some(staged.clone()));
        }
        self.db.find_roll(game_id, roll_id)
    }
}

impl Transaction for MemoryTxn<'_> {
    fn append_roll(
        &mut self,
        game_id: GameId,
        player_id: &str,
        score: u8,
    ) -> Result<Roll, DomainError> {
        if game_id != self.scope.game_id || player_id != self.scope.player_id {
            return Err(DomainError::infra(
                InfraErrorKind::Other("SCOPE".into()),
                format!(
                    "roll for game {game_id} player {player_id} outside transaction scope (game {}, player {})",
                    self.scope.game_id, self.scope.player_id
                ),
            ));
        }
        if !self.db.games.contains_key(&game_id) {
            return Err(DomainError::game_not_found(game_id));
        }

        let roll = Roll {
            id: self.db.next_roll_id.fetch_add(1, Ordering::Relaxed),
            game_id,
            player_id: player_id.to_string(),
            score,
            created_at: OffsetDateTime::now_utc(),
        };
        self.staged.push(roll.clone());
        Ok(roll)
    }

    fn commit(self) -> Result<(), DomainError> {
        if self.staged.is_empty() {
            return Ok(());
        }
        let game_id = self.scope.game_id;
        let mut row = self
            .db
            .games
            .get_mut(&game_id)
            .ok_or_else(|| DomainError::game_not_found(game_id))?;
        debug!(game_id, rolls = self.staged.len(), "transaction committed");
        row.rolls.extend(self.staged);
        // Ids are handed out at append time; another player's transaction may
        // have committed a later id first.
        row.rolls.sort_by_key(|r| r.id);
        Ok(())
    }

    fn rollback(self) -> Result<(), DomainError> {
        debug!(
            game_id = self.scope.game_id,
            player_id = %self.scope.player_id,
            discarded = self.staged.len(),
            "transaction rolled back"
        );
        Ok(())
    }
}
