pub mod analytics;
pub mod error;
pub mod table;

// Re-export the main types for callers that import through this module
pub use analytics::{
    CumulativeGamesProcessor, FirstDeviceProcessor, FirstLoginProcessor, RetentionProcessor,
};
pub use error::AnalyticsError;
pub use table::{
    ActivityRecord, ActivityTable, CumulativeActivityRecord, FirstLoginRecord, PlayerDevice,
    RetentionFraction,
};
