//! Domain layer - the coin entities
//!
//! Everything here is immutable reference data; lookups over it live in
//! `core::registry`.

pub mod entities;

// Re-export domain components
pub use entities::*;
