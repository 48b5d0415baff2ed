//! First-Login Device Lookup Processor
//!
//! Resolves the device each player used on their earliest recorded date.
//! The earliest date is found with a group-by MIN over `event_date`, then
//! joined back against the original table on `(player_id, event_date)` to
//! recover the `device_id` active on that date.

use crate::playmetrics::table::{ActivityTable, PlayerDevice};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Processor for the first-login device lookup
pub struct FirstDeviceProcessor;

impl FirstDeviceProcessor {
    /// Resolve the device used on each player's first login date
    ///
    /// # Arguments
    ///
    /// * `table` - Input activity table
    ///
    /// # Returns
    ///
    /// One `PlayerDevice` row per record matching its player's minimum
    /// `event_date`, ordered by ascending `player_id`. When several records
    /// tie on the minimum date, all of them survive the join (fan-out), in
    /// input order within the player.
    pub fn process(table: &ActivityTable) -> Vec<PlayerDevice> {
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

        // Join back on (player_id, event_date); tied minimum dates fan out
        let mut devices: Vec<PlayerDevice> = table
            .iter()
            .filter(|record| first_logins.get(&record.player_id) == Some(&record.event_date))
            .map(|record| PlayerDevice {
                player_id: record.player_id,
                device_id: record.device_id,
            })
            .collect();

        // Stable sort: within a player, fan-out rows keep input order
        devices.sort_by_key(|device| device.player_id);

        log::debug!(
            "Resolved first-login devices for {} players across {} records",
            first_logins.len(),
            table.len()
        );

        devices
    }
}
