//! Core functionality for the coin registry

pub mod registry;

pub use registry::{AuditReport, CoinRegistry, RegistryAudit};
