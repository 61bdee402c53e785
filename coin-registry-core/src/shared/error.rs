//! Error handling for the coin registry
//!
//! This module defines the error types used throughout the registry.

use thiserror::Error;

/// Registry error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown coin: {0}")]
    UnknownCoin(u32),

    #[error("Unknown coin id: {0}")]
    UnknownCoinId(String),

    #[error("Invalid derivation path: {0}")]
    InvalidDerivationPath(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// Create an unknown coin error
    pub fn unknown_coin(identifier: u32) -> Self {
        Self::UnknownCoin(identifier)
    }

    /// Create an unknown short id error
    pub fn unknown_coin_id(short_id: impl Into<String>) -> Self {
        Self::UnknownCoinId(short_id.into())
    }

    /// Create an invalid derivation path error
    pub fn invalid_derivation_path(message: impl Into<String>) -> Self {
        Self::InvalidDerivationPath(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// True for the two lookup-miss variants
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::UnknownCoin(_) | Self::UnknownCoinId(_))
    }
}

impl From<bip32::Error> for RegistryError {
    fn from(err: bip32::Error) -> Self {
        Self::invalid_derivation_path(format!("BIP-32 error: {}", err))
    }
}

impl From<std::num::ParseIntError> for RegistryError {
    fn from(err: std::num::ParseIntError) -> Self {
        Self::config(format!("Integer parse error: {}", err))
    }
}

/// Result alias used across the registry
pub type Result<T> = std::result::Result<T, RegistryError>;
