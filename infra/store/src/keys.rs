use crate::error::StoreError;

/// Validates a storage key.
///
/// Keys name a single value inside a namespace and double as file names on
/// the disk backend, so they must be flat: ASCII alphanumerics, `_`, `-` and
/// interior dots only. Anything that could be interpreted as a path segment
/// is rejected.
pub(crate) fn validate_key(key: &str) -> Result<&str, StoreError> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey {
            message: "EMPTY".into(),
            context: Some("Key cannot be empty".into()),
        });
    }

    if key.starts_with('.') || key.ends_with('.') {
        return Err(StoreError::InvalidKey {
            message: key.to_owned().into(),
            context: Some("Key cannot start or end with a dot".into()),
        });
    }

    if !key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')) {
        return Err(StoreError::InvalidKey {
            message: key.to_owned().into(),
            context: Some("Key contains illegal characters".into()),
        });
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_flat_keys() {
        assert!(validate_key("mock_user").is_ok());
        assert!(validate_key("category-permissions").is_ok());
        assert!(validate_key("appearance.v2").is_ok());
    }

    #[test]
    fn rejects_path_like_keys() {
        assert!(validate_key("").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("trailing.").is_err());
    }
}
