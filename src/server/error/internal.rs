use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A value stored in the database does not map onto its domain type
    ///
    /// Occurs when a role or status column holds a string that no enum variant
    /// parses from, which means the row was written outside the application.
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unrecognized value '{value}' stored in column {column}")]
    InvalidStoredValue {
        /// The column the value was read from
        column: &'static str,
        /// The stored value
        value: String,
    },
}
