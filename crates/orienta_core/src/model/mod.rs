//! Domain model for the guidance document store.
//!
//! # Responsibility
//! - Define canonical record types for the persisted root document.
//! - Keep required vs. optional fields explicit at the type level.
//!
//! # Invariants
//! - Every entity carries a stable id; uniqueness is checked by
//!   `Document::validate` before any persisted write.

pub mod catalog;
pub mod document;
pub mod user;

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current wall-clock time as Unix epoch milliseconds.
///
/// Clamped to zero for clocks set before the epoch, so callers never
/// deal with negative timestamps.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
