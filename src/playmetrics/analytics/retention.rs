//! Day-1 Retention Processor
//!
//! Computes the fraction of players who came back exactly one calendar day
//! after their first login. The first login is a group-by MIN over
//! `event_date`; a player counts as retained if any of their records falls
//! on `first_login + 1 day`. The fraction is distinct retained players over
//! distinct total players, computed in decimal arithmetic and rounded to
//! 2 decimal places with round-half-away-from-zero.

use crate::playmetrics::error::AnalyticsError;
use crate::playmetrics::table::{ActivityTable, RetentionFraction};
use chrono::{Days, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::{HashMap, HashSet};

/// Processor for the day-1 retention fraction
pub struct RetentionProcessor;

impl RetentionProcessor {
    /// Compute the day-1 retention fraction over the whole table
    ///
    /// # Arguments
    ///
    /// * `table` - Input activity table
    ///
    /// # Returns
    ///
    /// The retention fraction in `[0, 1]`, rounded to 2 decimal places, or
    /// `AnalyticsError::EmptyInput` if the table holds no records (the
    /// fraction is undefined over zero players).
    pub fn process(table: &ActivityTable) -> Result<RetentionFraction, AnalyticsError> {
        if table.is_empty() {
            return Err(AnalyticsError::empty_input("day-1 retention"));
        }

        let mut first_logins: HashMap<i64, NaiveDate> = HashMap::new();
        for record in table.iter() {
            first_logins
                .entry(record.player_id)
                .and_modify(|first| {
                    if record.event_date < *first {
                        *first = record.event_date;
                    }
                })
                .or_insert(record.event_date);
        }

        let mut retained: HashSet<i64> = HashSet::new();
        for record in table.iter() {
            // first_logins covers every player seen in the table
            let first = first_logins[&record.player_id];
            // checked: first_login at the calendar maximum has no next day
            if let Some(next_day) = first.checked_add_days(Days::new(1)) {
                if record.event_date == next_day {
                    retained.insert(record.player_id);
                }
            }
        }

        let total_players = first_logins.len();
        let retained_count = retained.len();

        let fraction = (Decimal::from(retained_count as u64)
            / Decimal::from(total_players as u64))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        log::debug!(
            "Day-1 retention: {} of {} players retained",
            retained_count,
            total_players
        );

        Ok(RetentionFraction { fraction })
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
    fn test_retention_half_retained() {
        // Player 1 returns the day after first login, player 2 does not
        let table = ActivityTable::from_records(vec![
            ActivityRecord::new(1, date(2016, 3, 1), 2, 5),
            ActivityRecord::new(1, date(2016, 3, 2), 2, 6),
            ActivityRecord::new(2, date(2017, 6, 25), 5, 1),
        ]);

        let result = RetentionProcessor::process(&table).unwrap();
        assert_eq!(result.fraction, Decimal::new(50, 2)); // 0.50
    }

    #[test]
    fn test_retention_no_next_day_activity() {
        let table = ActivityTable::from_records(vec![ActivityRecord::new(
            1,
            date(2016, 3, 1),
            2,
            5,
        )]);

        let result = RetentionProcessor::process(&table).unwrap();
        assert_eq!(result.fraction, Decimal::new(0, 2)); // 0.00
    }

    #[test]
    fn test_retention_rounds_half_away_from_zero() {
        // 1 of 8 retained = 0.125, which rounds to 0.13
        let mut records = vec![
            ActivityRecord::new(1, date(2020, 1, 1), 1, 1),
            ActivityRecord::new(1, date(2020, 1, 2), 1, 1),
        ];
        for player_id in 2..=8 {
            records.push(ActivityRecord::new(player_id, date(2020, 1, 1), 1, 1));
        }

        let result = RetentionProcessor::process(&ActivityTable::from_records(records)).unwrap();
        assert_eq!(result.fraction, Decimal::new(13, 2)); // 0.13
    }

    #[test]
    fn test_retention_later_gap_does_not_count() {
        // Activity two days after first login is not day-1 retention
        let table = ActivityTable::from_records(vec![
            ActivityRecord::new(1, date(2016, 3, 1), 2, 5),
            ActivityRecord::new(1, date(2016, 3, 3), 2, 6),
        ]);

        let result = RetentionProcessor::process(&table).unwrap();
        assert_eq!(result.fraction, Decimal::new(0, 2));
    }

    #[test]
    fn test_retention_empty_table_is_an_error() {
        let result = RetentionProcessor::process(&ActivityTable::new());
        assert_eq!(
            result,
            Err(AnalyticsError::empty_input("day-1 retention"))
        );
    }

    #[test]
    fn test_retention_month_boundary() {
        // Jan 31 -> Feb 1 is one calendar day
        let table = ActivityTable::from_records(vec![
            ActivityRecord::new(1, date(2016, 1, 31), 2, 5),
            ActivityRecord::new(1, date(2016, 2, 1), 2, 6),
        ]);

        let result = RetentionProcessor::process(&table).unwrap();
        assert_eq!(result.fraction, Decimal::new(100, 2)); // 1.00
    }
}
