//! First-Login Date Lookup Processor
//!
//! Finds each player's earliest recorded date by stable-sorting on
//! `(player_id, event_date)` and keeping the first surviving row per
//! player. Produces the same first-login value as the device lookup, built
//! the other way around (dedup-after-sort instead of group-min + join);
//! device information is not retrieved here.

use crate::playmetrics::table::{ActivityRecord, ActivityTable, FirstLoginRecord};
use std::collections::HashSet;

/// Processor for the first-login date lookup
pub struct FirstLoginProcessor;

impl FirstLoginProcessor {
    /// Compute the first login date for every player
    ///
    /// # Arguments
    ///
    /// * `table` - Input activity table
    ///
    /// # Returns
    ///
    /// One `FirstLoginRecord` per player, ordered by ascending `player_id`.
    pub fn process(table: &ActivityTable) -> Vec<FirstLoginRecord> {
        let mut sorted: Vec<&ActivityRecord> = table.iter().collect();
        sorted.sort_by_key(|record| (record.player_id, record.event_date));

        let mut seen: HashSet<i64> = HashSet::new();
        sorted
            .into_iter()
            .filter(|record| seen.insert(record.player_id))
            .map(|record| FirstLoginRecord {
                player_id: record.player_id,
                first_login: record.event_date,
            })
            .collect()
    }
}
