//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.
//! Empty values are treated the same as unset ones.

use std::env;
use std::str::FromStr;

/// Get a required environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    get_env_opt(name).ok_or(Error::MissingEnv(name))
}

/// Get an environment variable, `None` when unset or blank.
pub fn get_env_opt(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Get an environment variable or fall back to `default`.
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env_opt(name).unwrap_or_else(|| default.to_string())
}

/// Get and parse a required environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.parse::<T>().map_err(|_| Error::WrongFormat(name))
}

// region:    --- Error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
    #[error("environment variable {0} has the wrong format")]
    WrongFormat(&'static str),
}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name; the process environment is shared.

    #[test]
    fn test_get_env_or_default_when_unset() {
        assert_eq!(get_env_or("LIB_UTILS_TEST_UNSET", "fallback"), "fallback");
        assert!(matches!(get_env("LIB_UTILS_TEST_UNSET"), Err(Error::MissingEnv(_))));
    }

    #[test]
    fn test_blank_value_counts_as_unset() {
        env::set_var("LIB_UTILS_TEST_BLANK", "   ");
        assert_eq!(get_env_opt("LIB_UTILS_TEST_BLANK"), None);
        assert_eq!(get_env_or("LIB_UTILS_TEST_BLANK", "x"), "x");
    }

    #[test]
    fn test_get_env_parse() {
        env::set_var("LIB_UTILS_TEST_PORT", "8899");
        assert_eq!(get_env_parse::<u16>("LIB_UTILS_TEST_PORT").unwrap(), 8899);

        env::set_var("LIB_UTILS_TEST_BAD_PORT", "eighty");
        assert!(matches!(
            get_env_parse::<u16>("LIB_UTILS_TEST_BAD_PORT"),
            Err(Error::WrongFormat("LIB_UTILS_TEST_BAD_PORT"))
        ));
    }
}
