use std::{env, fmt::Debug, str::FromStr};

/// Reads `key`, falling back to `default` when it is unset or does not parse.
/// A `default` that does not parse either yields `T::default()`.
pub fn parse_env<T>(key: &str, default: &str) -> T
where
    T: FromStr + Default,
    <T as FromStr>::Err: Debug,
{
    if let Ok(raw) = env::var(key) {
        match raw.parse() {
            Ok(value) => return value,
            Err(e) => tracing::warn!(key, value = %raw, error = ?e, "invalid environment value, using default"),
        }
    }
    default.parse().unwrap_or_default()
}
