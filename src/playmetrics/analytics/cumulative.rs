//! Cumulative Games Played Processor
//!
//! Annotates every activity record with the player's running games total.
//! Records are stable-sorted by `(player_id, event_date)`; within each
//! player partition the running sum is inclusive of the current row.

use crate::playmetrics::table::{ActivityRecord, ActivityTable, CumulativeActivityRecord};

/// Processor for per-player running games totals
pub struct CumulativeGamesProcessor;

impl CumulativeGamesProcessor {
    /// Compute the running games total for every record
    ///
    /// # Arguments
    ///
    /// * `table` - Input activity table
    ///
    /// # Returns
    ///
    /// One `CumulativeActivityRecord` per input record, in
    /// `(player_id, event_date)` order. Records tied on the same date keep
    /// their input order (stable sort); the running sum is well-defined
    /// either way, and the final total per player equals the sum of all
    /// that player's `games_played`.
    pub fn process(table: &ActivityTable) -> Vec<CumulativeActivityRecord> {
        let mut sorted: Vec<&ActivityRecord> = table.iter().collect();
        sorted.sort_by_key(|record| (record.player_id, record.event_date));

        let mut results = Vec::with_capacity(sorted.len());
        let mut current_player: Option<i64> = None;
        let mut running_total = 0i64;

        for record in sorted {
            if current_player != Some(record.player_id) {
                // New player partition: reset the accumulator
                current_player = Some(record.player_id);
                running_total = 0;
            }
            running_total += record.games_played;
            results.push(CumulativeActivityRecord {
                player_id: record.player_id,
                event_date: record.event_date,
                games_played_so_far: running_total,
            });
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playmetrics::table::ActivityRecord;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_cumulative_resets_between_players() {
        let table = ActivityTable::from_records(vec![
            ActivityRecord::new(1, date(2016, 3, 1), 2, 5),
            ActivityRecord::new(2, date(2016, 3, 1), 3, 7),
            ActivityRecord::new(1, date(2016, 5, 2), 2, 6),
        ]);

        let results = CumulativeGamesProcessor::process(&table);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].player_id, 1);
        assert_eq!(results[0].games_played_so_far, 5);
        assert_eq!(results[1].player_id, 1);
        assert_eq!(results[1].games_played_so_far, 11);
        assert_eq!(results[2].player_id, 2);
        assert_eq!(results[2].games_played_so_far, 7);
    }

    #[test]
    fn test_cumulative_same_date_ties_accumulate() {
        // Duplicate dates are not rejected; the final total after all
        // tied rows is the player's full sum
        let table = ActivityTable::from_records(vec![
            ActivityRecord::new(1, date(2016, 3, 1), 2, 5),
            ActivityRecord::new(1, date(2016, 3, 1), 3, 4),
        ]);

        let results = CumulativeGamesProcessor::process(&table);

        assert_eq!(results.len(), 2);
        assert_eq!(results[1].games_played_so_far, 9);
    }

    #[test]
    fn test_cumulative_empty_table() {
        let results = CumulativeGamesProcessor::process(&ActivityTable::new());
        assert!(results.is_empty());
    }
}
