#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Ten-pin bowling scoring: roll validation, frame replay and per-player
//! scoresheets, behind a store-agnostic service facade.

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use config::db::DbConfig;
pub use config::telemetry::LogFormat;
pub use db::{Database, DbConn, MemoryDb, Transaction, TxnScope};
pub use domain::{Frame, FrameKind, FrameStatus, PlayerResult, SequenceViolation};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use repos::{Game, GameCreate, GameId, GameUpdate, PlayerId, Roll, RollId};
pub use services::{GameEngine, GameService, GameSummary};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    bowling_test_support::logging::init();
}
