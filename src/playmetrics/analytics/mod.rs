//! Processors for player activity analytics
//!
//! This module contains one specialized processor per analysis:
//! - First-login device lookup (group-min + join back)
//! - First-login date lookup (sort + dedup)
//! - Cumulative games played (sort + per-player running sum)
//! - Day-1 retention fraction (group-min + next-day membership)
//!
//! Processors are independent of each other: each reads the input table,
//! applies one relational pipeline, and returns a derived table. None of
//! them mutates its input.

pub mod cumulative;
pub mod first_device;
pub mod first_login;
pub mod retention;

pub use cumulative::CumulativeGamesProcessor;
pub use first_device::FirstDeviceProcessor;
pub use first_login::FirstLoginProcessor;
pub use retention::RetentionProcessor;
