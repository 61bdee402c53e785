//! Coin Registry Core
//!
//! Static SLIP-44 coin registry: for every supported network, its short id,
//! display name, ticker symbol, decimals, SLIP-44 index and default
//! derivation path template.
//!
//! ## Architecture
//!
//! - **Domain**: `CoinType`, `CoinRecord` and the `DerivationPath` value object
//! - **Core**: the `CoinRegistry` lookup service and the table audit
//! - **Shared**: errors, configuration and constants
//!
//! ## Usage
//!
//! ```rust
//! use coin_registry_core::{CoinRegistry, CoinType, RegistryError};
//!
//! let registry = CoinRegistry::global();
//! assert_eq!(registry.symbol(0), Ok("BTC"));
//! assert_eq!(registry.slip44(CoinType::Bsc.value()), Ok(714));
//! assert_eq!(registry.decimals(1), Err(RegistryError::UnknownCoin(1)));
//! ```

pub mod core;
pub mod domain;
pub mod shared;

// Re-export main types
pub use crate::core::registry::{AuditIssue, AuditReport, CoinRegistry, RegistryAudit, ReviewFlag};
pub use crate::domain::entities::{CoinRecord, CoinType, DerivationPath, PathIndex};
pub use crate::shared::config::{OutputFormat, RegistryConfig};
pub use crate::shared::error::{RegistryError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

// Feature flags
#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "ffi")]
pub use ffi::*;

/// Initialize logging. `RUST_LOG` wins over `default_level`.
///
/// Safe to call more than once; later calls leave the first logger in place.
pub fn init(default_level: &str) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or(default_level);
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        log::debug!("Logger already initialized: {}", e);
    }
    Ok(())
}

/// Registry handle returned by `init_registry`
#[derive(Debug)]
pub struct RegistryCore {
    pub registry: &'static CoinRegistry,
    pub config: RegistryConfig,
    pub audit: AuditReport,
}

/// Load configuration, start logging and audit the coin table.
///
/// With `strict_audit` set, a table with audit issues is rejected.
pub fn init_registry() -> Result<RegistryCore> {
    let config = RegistryConfig::from_env()?;
    init(&config.log_level)?;
    open_registry(config)
}

/// Audit the table under `config` and hand out the registry
pub fn open_registry(config: RegistryConfig) -> Result<RegistryCore> {
    let audit = RegistryAudit::run();
    if config.strict_audit {
        if let Err(e) = audit.clone().into_result() {
            log::error!("Coin table rejected: {}", e);
            return Err(e);
        }
    } else if !audit.is_valid() {
        log::warn!(
            "Coin table has {} audit issue(s); continuing because strict audit is off",
            audit.issues.len()
        );
    }

    let registry = CoinRegistry::global();
    log::info!("{} {} ready with {} coins", NAME, VERSION, registry.len());
    Ok(RegistryCore {
        registry,
        config,
        audit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        assert!(init("warn").is_ok());
        assert!(init("debug").is_ok());
    }

    #[test]
    fn test_open_registry_strict() {
        let core = open_registry(RegistryConfig::default()).expect("shipped table passes the audit");
        assert_eq!(core.registry.len(), CoinType::ALL.len());
        assert_eq!(core.registry.short_id(core.config.default_coin.value()), Ok("bitcoin"));
        assert!(core.audit.is_valid());
        assert_eq!(core.audit.flagged_short_ids().len(), 3);
    }
}
