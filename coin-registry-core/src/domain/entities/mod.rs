//! Domain entities and value objects
//!
//! This module contains the coin table and the derivation path value object
//! built from it.

pub mod coin;
pub mod derivation_path;

// Re-export entities
pub use coin::*;
pub use derivation_path::*;
