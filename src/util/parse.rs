use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// Guild ids are stored as text; this turns them back into snowflakes.
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflake() {
        let id = parse_u64_from_string("123456789012345678".to_string()).unwrap();
        assert_eq!(id, 123456789012345678);
    }

    #[test]
    fn rejects_non_numeric() {
        let result = parse_u64_from_string("guild".to_string());
        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::ParseStringId { .. }))
        ));
    }
}
