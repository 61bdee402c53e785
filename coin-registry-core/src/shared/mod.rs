//! Shared types, constants, configuration and errors
//!
//! This module contains common functionality used throughout the registry.

pub mod config;
pub mod constants;
pub mod error;

// Re-export shared components
pub use config::*;
pub use error::*;
