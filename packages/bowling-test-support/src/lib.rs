//! Test support utilities for the bowling crate
//!
//! Provides the unified logging initialization shared by unit tests and
//! integration tests.

pub mod logging;
