/*!
# Analytics Error Handling

Error type shared by the activity analytics processors. The processors are
one-shot pure computations, so there is no retry or recovery machinery;
the only structured failure today is running the retention analysis over a
table with no players.

Errors implement the standard Rust error traits (`std::error::Error`,
`Display`, `Debug`) for seamless integration with caller-side error
handling.
*/

use std::fmt;

/// Errors produced by the activity analytics processors.
///
/// # Examples
///
/// ```rust
/// use playmetrics::AnalyticsError;
///
/// let error = AnalyticsError::empty_input("day-1 retention");
/// println!("{}", error); // "Empty input for 'day-1 retention': at least one activity record is required"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// The input table carries no records for an operation that requires
    /// at least one player.
    ///
    /// Returned by the retention processor, whose fraction is undefined
    /// over zero players.
    EmptyInput {
        /// Name of the analysis that rejected the input
        operation: String,
    },
}

impl AnalyticsError {
    /// Create an empty-input error for the named analysis
    pub fn empty_input(operation: impl Into<String>) -> Self {
        AnalyticsError::EmptyInput {
            operation: operation.into(),
        }
    }
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsError::EmptyInput { operation } => {
                write!(
                    f,
                    "Empty input for '{}': at least one activity record is required",
                    operation
                )
            }
        }
    }
}

impl std::error::Error for AnalyticsError {}

/// Result type for analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
