//! `Bot API 6.9+` Cloud storage limits.
//!
//! The client rejects calls violating these limits before contacting Telegram servers, so checking
//! them upfront gives an error instead of a silently failed callback.

use crate::{Result, char_len, ensure_param};

/// Maximal length of a key.
pub const MAX_KEY_LEN: usize = 128;
/// Maximal length of a value.
pub const MAX_VALUE_LEN: usize = 4096;
/// Maximal number of keys stored per user.
pub const MAX_KEYS: usize = 1024;

/// Check a cloud storage key.
///
/// # Errors
///
/// Fails unless `key` has 1-128 characters from `A-Z`, `a-z`, `0-9`, `_` and `-`.
pub fn validate_key(key: &str) -> Result<()> {
    ensure_param(
        !key.is_empty() && key.len() <= MAX_KEY_LEN,
        "key",
        "must be 1-128 characters long",
    )?;
    ensure_param(
        key.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
        "key",
        "may contain only A-Z, a-z, 0-9, _ and -",
    )
}

/// Check a cloud storage value.
///
/// # Errors
///
/// Fails if `value` is longer than 4096 characters.
pub fn validate_value(value: &str) -> Result<()> {
    ensure_param(
        char_len(value) <= MAX_VALUE_LEN,
        "value",
        "must be at most 4096 characters",
    )
}

/// Check a batch of keys for `getItems` / `removeItems`.
///
/// # Errors
///
/// Fails on the first invalid key or if there are more than 1024 keys.
pub fn validate_keys<'key>(keys: impl IntoIterator<Item = &'key str>) -> Result<()> {
    let mut count = 0_usize;
    for key in keys {
        validate_key(key)?;
        count = count.saturating_add(1);
        ensure_param(count <= MAX_KEYS, "keys", "must be at most 1024 keys")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn valid_keys() {
        for key in ["a", "user_settings", "draft-42", &"k".repeat(128)] {
            assert_eq!(validate_key(key), Ok(()), "key: {key}");
        }
    }

    #[test]
    fn invalid_keys() {
        assert_eq!(
            validate_key(""),
            Err(Error::InvalidParam {
                param: "key",
                reason: "must be 1-128 characters long",
            })
        );
        assert!(validate_key(&"k".repeat(129)).is_err());
        assert_eq!(
            validate_key("with space"),
            Err(Error::InvalidParam {
                param: "key",
                reason: "may contain only A-Z, a-z, 0-9, _ and -",
            })
        );
        assert!(validate_key("ключ").is_err());
    }

    #[test]
    fn value_length() {
        assert!(validate_value("").is_ok());
        assert!(validate_value(&"v".repeat(4096)).is_ok());
        assert!(validate_value(&"v".repeat(4097)).is_err());
    }

    #[test]
    fn batch_stops_on_first_invalid_key() {
        assert!(validate_keys(["a", "b"]).is_ok());
        assert!(validate_keys(["a", "b c"]).is_err());
    }

    #[test]
    fn batch_is_limited_to_storage_capacity() {
        let keys: Vec<String> = (0..=MAX_KEYS).map(|i| format!("key_{i}")).collect();

        assert_eq!(validate_keys(keys.iter().take(MAX_KEYS).map(String::as_str)), Ok(()));
        assert_eq!(
            validate_keys(keys.iter().map(String::as_str)),
            Err(Error::InvalidParam {
                param: "keys",
                reason: "must be at most 1024 keys",
            })
        );
    }
}
