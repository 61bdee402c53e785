//! Coin registry lookups
//!
//! The registry answers metadata queries for a raw identifier. Identifiers
//! outside the supported set fail with `RegistryError::UnknownCoin` instead of
//! producing a default. The index is built once, on first access, and is
//! read-only afterwards, so `&'static CoinRegistry` can be shared freely
//! across threads.

pub mod audit;

pub use audit::{AuditIssue, AuditReport, RegistryAudit, ReviewFlag};

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::domain::entities::{CoinRecord, CoinType, DerivationPath};
use crate::shared::error::{RegistryError, Result};

lazy_static! {
    static ref REGISTRY: CoinRegistry = CoinRegistry::build();
}

/// Index over the static coin table
#[derive(Debug)]
pub struct CoinRegistry {
    by_identifier: HashMap<u32, CoinType>,
    by_short_id: HashMap<&'static str, CoinType>,
}

impl CoinRegistry {
    /// Process-wide registry
    pub fn global() -> &'static CoinRegistry {
        &REGISTRY
    }

    fn build() -> Self {
        let mut by_identifier = HashMap::with_capacity(CoinType::ALL.len());
        let mut by_short_id = HashMap::with_capacity(CoinType::ALL.len());

        for &coin in CoinType::ALL {
            by_identifier.insert(coin.value(), coin);
            by_short_id.insert(coin.short_id(), coin);
        }

        log::debug!("Coin registry built with {} entries", by_identifier.len());

        Self {
            by_identifier,
            by_short_id,
        }
    }

    pub fn coin_type(&self, identifier: u32) -> Result<CoinType> {
        self.by_identifier
            .get(&identifier)
            .copied()
            .ok_or_else(|| RegistryError::unknown_coin(identifier))
    }

    /// Exact match on the lowercase short id
    pub fn by_short_id(&self, short_id: &str) -> Result<CoinType> {
        self.by_short_id
            .get(short_id)
            .copied()
            .ok_or_else(|| RegistryError::unknown_coin_id(short_id))
    }

    pub fn record(&self, identifier: u32) -> Result<&'static CoinRecord> {
        self.coin_type(identifier).map(CoinType::record)
    }

    pub fn short_id(&self, identifier: u32) -> Result<&'static str> {
        Ok(self.record(identifier)?.short_id)
    }

    pub fn display_name(&self, identifier: u32) -> Result<&'static str> {
        Ok(self.record(identifier)?.display_name)
    }

    pub fn symbol(&self, identifier: u32) -> Result<&'static str> {
        Ok(self.record(identifier)?.symbol)
    }

    pub fn decimals(&self, identifier: u32) -> Result<u8> {
        Ok(self.record(identifier)?.decimals)
    }

    /// Registered SLIP-44 index, which may differ from `identifier`
    pub fn slip44(&self, identifier: u32) -> Result<u32> {
        Ok(self.record(identifier)?.slip44)
    }

    pub fn derivation_path(&self, identifier: u32) -> Result<&'static str> {
        Ok(self.record(identifier)?.derivation_path)
    }

    pub fn parsed_derivation_path(&self, identifier: u32) -> Result<DerivationPath> {
        self.record(identifier)?.parsed_derivation_path()
    }

    pub fn contains(&self, identifier: u32) -> bool {
        self.by_identifier.contains_key(&identifier)
    }

    /// Records in table order
    pub fn iter(&self) -> impl Iterator<Item = &'static CoinRecord> {
        CoinType::ALL.iter().map(|coin| coin.record())
    }

    pub fn len(&self) -> usize {
        self.by_identifier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_identifier.is_empty()
    }

    /// All coins sharing a ticker, in table order
    pub fn with_symbol(&self, symbol: &str) -> Vec<CoinType> {
        CoinType::ALL
            .iter()
            .copied()
            .filter(|coin| coin.symbol() == symbol)
            .collect()
    }
}
