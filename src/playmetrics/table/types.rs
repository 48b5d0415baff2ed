//! Core activity analytics data types.
//!
//! This module contains the data types used throughout the analytics
//! processors:
//! - [`ActivityRecord`] - one row of the player activity table
//! - [`ActivityTable`] - the caller-owned input table
//! - Derived row types emitted by the processors ([`PlayerDevice`],
//!   [`FirstLoginRecord`], [`CumulativeActivityRecord`],
//!   [`RetentionFraction`])

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One row of the player activity table.
///
/// Captures a single player's activity on a single calendar date: the device
/// they logged in from and how many games they played. For a given
/// `(player_id, event_date)` pair at most one record is assumed; duplicate
/// pairs are not rejected, but they fan out in the join-based analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Player identifier
    pub player_id: i64,
    /// Calendar date of the activity
    pub event_date: NaiveDate,
    /// Device identifier, stable per login session
    pub device_id: i64,
    /// Number of games played on that date (expected non-negative)
    pub games_played: i64,
}

impl ActivityRecord {
    /// Create a new activity record
    pub fn new(player_id: i64, event_date: NaiveDate, device_id: i64, games_played: i64) -> Self {
        Self {
            player_id,
            event_date,
            device_id,
            games_played,
        }
    }
}

/// The input table for all analytics processors.
///
/// An order-irrelevant collection of [`ActivityRecord`], owned entirely by
/// the caller. Processors never mutate the table; each produces a freshly
/// allocated derived table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTable {
    records: Vec<ActivityRecord>,
}

impl ActivityTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create a table from a vector of records
    pub fn from_records(records: Vec<ActivityRecord>) -> Self {
        Self { records }
    }

    /// All records in the table, in insertion order
    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    /// Iterate over the records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, ActivityRecord> {
        self.records.iter()
    }

    /// Number of records in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record to the table
    pub fn push(&mut self, record: ActivityRecord) {
        self.records.push(record);
    }

    /// Number of distinct players with any activity
    pub fn player_count(&self) -> usize {
        self.records
            .iter()
            .map(|record| record.player_id)
            .collect::<HashSet<_>>()
            .len()
    }
}

impl From<Vec<ActivityRecord>> for ActivityTable {
    fn from(records: Vec<ActivityRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<ActivityRecord> for ActivityTable {
    fn from_iter<I: IntoIterator<Item = ActivityRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<ActivityRecord> for ActivityTable {
    fn extend<I: IntoIterator<Item = ActivityRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for ActivityTable {
    type Item = ActivityRecord;
    type IntoIter = std::vec::IntoIter<ActivityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ActivityTable {
    type Item = &'a ActivityRecord;
    type IntoIter = std::slice::Iter<'a, ActivityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Device a player used on their first login date.
///
/// Emitted by the first-login device lookup. When a player has several
/// records tied on the minimum date, one row is emitted per tied record
/// (join fan-out); callers that need a single device per player must pick
/// one themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDevice {
    /// Player identifier
    pub player_id: i64,
    /// Device used on the player's first login date
    pub device_id: i64,
}

/// A player's first login date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstLoginRecord {
    /// Player identifier
    pub player_id: i64,
    /// Earliest event date recorded for the player
    pub first_login: NaiveDate,
}

/// One input record annotated with the player's running games total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeActivityRecord {
    /// Player identifier
    pub player_id: i64,
    /// Calendar date of the activity
    pub event_date: NaiveDate,
    /// Games played by this player up to and including `event_date`
    pub games_played_so_far: i64,
}

/// Day-1 retention result: a single scalar fraction.
///
/// The fraction is in `[0, 1]` and rounded to 2 decimal places with
/// round-half-away-from-zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionFraction {
    /// Share of players active exactly one day after their first login
    pub fraction: Decimal,
}
