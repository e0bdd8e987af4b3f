use crate::error::internal::InternalError;

/// Parses a u64 value from a stored id string
///
/// # Arguments
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed the string to `u64`
/// - `Err(InternalError::ParseStringId)` - Failed to parse the string as a u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, InternalError> {
    value
        .parse::<u64>()
        .map_err(|source| InternalError::ParseStringId {
            value: value.to_string(),
            source,
        })
}

/// Parses an optional stored id string
pub fn parse_optional_u64(value: Option<&str>) -> Result<Option<u64>, InternalError> {
    value.map(parse_u64_from_string).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflake() {
        assert_eq!(
            parse_u64_from_string("123456789012345678").unwrap(),
            123456789012345678
        );
    }

    #[test]
    fn rejects_non_numeric_id() {
        let err = parse_u64_from_string("abc").unwrap_err();
        assert!(matches!(err, InternalError::ParseStringId { ref value, .. } if value == "abc"));
    }

    #[test]
    fn passes_through_missing_id() {
        assert_eq!(parse_optional_u64(None).unwrap(), None);
        assert_eq!(parse_optional_u64(Some("42")).unwrap(), Some(42));
    }
}
