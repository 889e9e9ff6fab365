//! steady-core
//!
//! Pure domain types, the goal progress/streak engine, and storage key
//! conventions. No AWS SDK dependency — this is the shared vocabulary of
//! the Steady system.

pub mod error;
pub mod models;
pub mod progress;
pub mod storage_keys;
pub mod streak;
