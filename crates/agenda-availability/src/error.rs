//! Error types for availability operations.

/// Errors that can occur when building grids or serializing schedules.
#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    /// A grid was built from row data with the wrong number of rows.
    #[error("availability grid must have 7 rows, got {rows}")]
    InvalidRowCount {
        /// Number of rows in the input.
        rows: usize,
    },

    /// A grid row has the wrong number of columns.
    #[error("availability grid row {row} must have 24 columns, got {cols}")]
    InvalidColumnCount {
        /// Index of the offending row.
        row: usize,
        /// Number of columns in that row.
        cols: usize,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for availability operations.
pub type Result<T> = std::result::Result<T, AvailabilityError>;
