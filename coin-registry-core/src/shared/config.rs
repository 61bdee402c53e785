//! Registry configuration
//!
//! Values come from the process environment, after loading `.env` when one is
//! present. Anything unset falls back to a safe default.

use std::env;
use std::fmt;
use std::str::FromStr;

use dotenv::dotenv;

use crate::domain::entities::CoinType;
use crate::shared::constants::{
    DEFAULT_COIN, DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT, DEFAULT_STRICT_AUDIT, ENV_DEFAULT_COIN,
    ENV_LOG_LEVEL, ENV_OUTPUT, ENV_STRICT_AUDIT,
};
use crate::shared::error::{RegistryError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = RegistryError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(RegistryError::config(format!(
                "{} must be 'text' or 'json', got '{}'",
                ENV_OUTPUT, other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub default_coin: CoinType,
    pub output: OutputFormat,
    pub strict_audit: bool,
    pub log_level: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_coin: CoinType::Bitcoin,
            output: OutputFormat::Text,
            strict_audit: DEFAULT_STRICT_AUDIT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Load from `.env` and the process environment
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let coin = lookup(ENV_DEFAULT_COIN).unwrap_or_else(|| DEFAULT_COIN.to_string());
        let output = lookup(ENV_OUTPUT).unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
        let strict_audit = match lookup(ENV_STRICT_AUDIT) {
            Some(raw) => parse_bool(ENV_STRICT_AUDIT, &raw)?,
            None => DEFAULT_STRICT_AUDIT,
        };
        let log_level = lookup(ENV_LOG_LEVEL)
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            default_coin: parse_coin(&coin)?,
            output: output.parse()?,
            strict_audit,
            log_level,
        })
    }
}

/// Accepts a short id (`ethereum`) or a numeric identifier (`60`)
pub fn parse_coin(value: &str) -> Result<CoinType> {
    let value = value.trim();
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        let identifier: u32 = value.parse()?;
        return CoinType::try_from(identifier);
    }
    value.parse()
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(RegistryError::config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = RegistryConfig::from_lookup(lookup_from(&[
            (ENV_DEFAULT_COIN, "stellar"),
            (ENV_OUTPUT, "JSON"),
            (ENV_STRICT_AUDIT, "false"),
            (ENV_LOG_LEVEL, "debug"),
        ]))
        .unwrap();

        assert_eq!(config.default_coin, CoinType::Stellar);
        assert_eq!(config.output, OutputFormat::Json);
        assert!(!config.strict_audit);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_numeric_coin() {
        assert_eq!(parse_coin("10000714"), Ok(CoinType::Bsc));
        assert_eq!(parse_coin(" 60 "), Ok(CoinType::Ethereum));
        assert_eq!(parse_coin("1"), Err(RegistryError::UnknownCoin(1)));
    }

    #[test]
    fn test_invalid_values() {
        let bad_output = RegistryConfig::from_lookup(lookup_from(&[(ENV_OUTPUT, "yaml")]));
        assert!(matches!(bad_output, Err(RegistryError::Config(_))));

        let bad_bool = RegistryConfig::from_lookup(lookup_from(&[(ENV_STRICT_AUDIT, "maybe")]));
        assert!(matches!(bad_bool, Err(RegistryError::Config(_))));

        let bad_coin = RegistryConfig::from_lookup(lookup_from(&[(ENV_DEFAULT_COIN, "dogecoin")]));
        assert!(matches!(bad_coin, Err(RegistryError::UnknownCoinId(_))));
    }

    #[test]
    fn test_numeric_overflow_is_config_error() {
        assert!(matches!(parse_coin("99999999999"), Err(RegistryError::Config(_))));
    }
}
