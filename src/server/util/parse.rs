use std::str::FromStr;

use crate::server::error::{internal::InternalError, AppError};

/// Parses an enum-like value stored as a string column.
///
/// # Arguments
/// - `column` - Name of the column the value came from, used in the error
/// - `value` - The stored string to parse
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::InternalErr(InvalidStoredValue))` - The stored string does not
///   name any variant of `T`
pub fn parse_stored<T: FromStr>(column: &'static str, value: String) -> Result<T, AppError> {
    let result = value
        .parse::<T>()
        .map_err(|_| InternalError::InvalidStoredValue { column, value })?;

    Ok(result)
}
