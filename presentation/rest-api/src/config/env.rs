use std::str::FromStr;

use anyhow::{Context, anyhow};

/// Reads a variable that has no sensible default.
pub fn required(key: &str) -> anyhow::Result<String> {
    let value = std::env::var(key).with_context(|| format!("{key} must be set"))?;
    if value.trim().is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

/// Reads a variable, falling back to `default` when it is absent.
pub fn optional_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Reads and parses a variable, falling back to `default` when it is absent.
pub fn parsed_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(parse_value(key, std::env::var(key).ok())?.unwrap_or(default))
}

/// Reads and parses a variable that may be left unset.
pub fn parsed_optional<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, std::env::var(key).ok())
}

/// Blank values count as unset.
pub fn parse_value<T>(key: &str, raw: Option<String>) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow!("{key} has an invalid value '{raw}': {e}")),
        _ => Ok(None),
    }
}
