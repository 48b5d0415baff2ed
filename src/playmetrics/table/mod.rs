/*!
# Activity Table Module

This module provides the data model for player activity analytics: the input
table of per-day activity records and the derived row types the analytics
processors emit.

## Core Components

- `types`: `ActivityRecord`, `ActivityTable` and the derived row types

## Re-exports

Public interface for the activity data model.
*/

pub mod types;

// Re-export public types
pub use types::{
    ActivityRecord, ActivityTable, CumulativeActivityRecord, FirstLoginRecord, PlayerDevice,
    RetentionFraction,
};
