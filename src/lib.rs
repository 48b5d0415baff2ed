//! # playmetrics
//!
//! Stateless analytics over an in-memory player activity table. Each analysis
//! is a pure function from one input table to one derived table: no shared
//! state, no I/O, no persistence.
//!
//! ## Features
//!
//! - **First-Login Device Lookup**: the device each player used on their
//!   earliest recorded date
//! - **First-Login Date Lookup**: the earliest recorded date per player
//! - **Cumulative Games Played**: running per-player totals ordered by date
//! - **Day-1 Retention**: the fraction of players active exactly one
//!   calendar day after their first login
//!
//! ## Quick Start
//!
//! ```rust
//! use playmetrics::{ActivityRecord, ActivityTable, RetentionProcessor};
//! use chrono::NaiveDate;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = ActivityTable::from_records(vec![
//!         ActivityRecord::new(1, NaiveDate::from_ymd_opt(2016, 3, 1).unwrap(), 2, 5),
//!         ActivityRecord::new(1, NaiveDate::from_ymd_opt(2016, 3, 2).unwrap(), 2, 6),
//!         ActivityRecord::new(2, NaiveDate::from_ymd_opt(2017, 6, 25).unwrap(), 5, 1),
//!     ]);
//!
//!     let retention = RetentionProcessor::process(&table)?;
//!     println!("day-1 retention: {}", retention.fraction);
//!
//!     Ok(())
//! }
//! ```

pub mod playmetrics;

// Re-export main API at crate root for easy access
pub use playmetrics::analytics::{
    CumulativeGamesProcessor,
    FirstDeviceProcessor,
    FirstLoginProcessor,
    RetentionProcessor,
};
pub use playmetrics::error::AnalyticsError;
pub use playmetrics::table::{
    ActivityRecord,
    ActivityTable,
    CumulativeActivityRecord,
    FirstLoginRecord,
    PlayerDevice,
    RetentionFraction,
};
