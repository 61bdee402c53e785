//! Coin entity for the registry
//!
//! `CoinType` is the closed set of supported networks. Each variant's
//! discriminant is its registry identifier, which is also what callers
//! persist, so the values below must never change.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::core::registry::CoinRegistry;
use crate::domain::entities::derivation_path::DerivationPath;
use crate::shared::error::{RegistryError, Result};

/// Metadata for one supported network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CoinRecord {
    pub identifier: u32,
    pub short_id: &'static str,
    pub display_name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
    pub slip44: u32,
    pub derivation_path: &'static str,
}

impl CoinRecord {
    /// Parse this record's path template
    pub fn parsed_derivation_path(&self) -> Result<DerivationPath> {
        self.derivation_path.parse()
    }
}

// One row yields both the variant and its record, so no variant can be
// missing from any projection.
macro_rules! define_coins {
    ($($variant:ident = $id:literal => ($short:literal, $name:literal, $symbol:literal, $decimals:literal, $slip44:literal, $path:literal)),+ $(,)?) => {
        /// Supported coin types, keyed by registry identifier
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u32)]
        pub enum CoinType {
            $($variant = $id,)+
        }

        impl CoinType {
            /// Every supported coin, in table order
            pub const ALL: &'static [CoinType] = &[$(CoinType::$variant,)+];

            /// The full record for this coin
            pub fn record(self) -> &'static CoinRecord {
                match self {
                    $(CoinType::$variant => &CoinRecord {
                        identifier: $id,
                        short_id: $short,
                        display_name: $name,
                        symbol: $symbol,
                        decimals: $decimals,
                        slip44: $slip44,
                        derivation_path: $path,
                    },)+
                }
            }
        }
    };
}

define_coins! {
    Bitcoin = 0 => ("bitcoin", "Bitcoin", "BTC", 8, 0, "m/84'/0'/0'/0/0"),
    Litecoin = 2 => ("litecoin", "Litecoin", "LTC", 8, 2, "m/84'/2'/0'/0/0"),
    Doge = 3 => ("doge", "Dogecoin", "DOGE", 8, 3, "m/44'/3'/0'/0/0"),
    Dash = 5 => ("dash", "Dash", "DASH", 8, 5, "m/44'/5'/0'/0/0"),
    Viacoin = 14 => ("viacoin", "Viacoin", "VIA", 8, 14, "m/84'/14'/0'/0/0"),
    Groestlcoin = 17 => ("groestlcoin", "Groestlcoin", "GRS", 8, 17, "m/84'/17'/0'/0/0"),
    Digibyte = 20 => ("digibyte", "DigiByte", "DGB", 8, 20, "m/84'/20'/0'/0/0"),
    Monacoin = 22 => ("monacoin", "Monacoin", "MONA", 8, 22, "m/44'/22'/0'/0/0"),
    Decred = 42 => ("decred", "Decred", "DCR", 8, 42, "m/44'/42'/0'/0/0"),
    Ethereum = 60 => ("ethereum", "Ethereum", "ETH", 18, 60, "m/44'/60'/0'/0/0"),
    Classic = 61 => ("classic", "Ethereum Classic", "ETC", 18, 61, "m/44'/61'/0'/0/0"),
    Icon = 74 => ("icon", "ICON", "ICX", 18, 74, "m/44'/74'/0'/0/0"),
    Cosmos = 118 => ("cosmos", "Cosmos", "ATOM", 6, 118, "m/44'/118'/0'/0/0"),
    Zcash = 133 => ("zcash", "Zcash", "ZEC", 8, 133, "m/44'/133'/0'/0/0"),
    Zcoin = 136 => ("zcoin", "Zcoin", "FIRO", 8, 136, "m/44'/136'/0'/0/0"),
    Ripple = 144 => ("ripple", "XRP", "XRP", 6, 144, "m/44'/144'/0'/0/0"),
    Bitcoincash = 145 => ("bitcoincash", "Bitcoin Cash", "BCH", 8, 145, "m/44'/145'/0'/0/0"),
    Stellar = 148 => ("stellar", "Stellar", "XLM", 7, 148, "m/44'/148'/0'"),
    Bitcoingold = 156 => ("bitcoingold", "Bitcoin Gold", "BTG", 8, 156, "m/84'/156'/0'/0/0"),
    Nano = 165 => ("nano", "Nano", "NANO", 30, 165, "m/44'/165'/0'"),
    Ravencoin = 175 => ("ravencoin", "Ravencoin", "RVN", 8, 175, "m/44'/175'/0'/0/0"),
    Poa = 178 => ("poa", "POA Network", "POA", 18, 178, "m/44'/178'/0'/0/0"),
    Eos = 194 => ("eos", "EOS", "EOS", 4, 194, "m/44'/194'/0'/0/0"),
    Tron = 195 => ("tron", "Tron", "TRX", 6, 195, "m/44'/195'/0'/0/0"),
    Fio = 235 => ("fio", "FIO", "FIO", 9, 235, "m/44'/235'/0'/0/0"),
    Nimiq = 242 => ("nimiq", "Nimiq", "NIM", 5, 242, "m/44'/242'/0'/0'"),
    Algorand = 283 => ("algorand", "Algorand", "ALGO", 6, 283, "m/44'/283'/0'/0'/0'"),
    Iotex = 304 => ("iotex", "IoTeX", "IOTX", 18, 304, "m/44'/304'/0'/0/0"),
    Zilliqa = 313 => ("zilliqa", "Zilliqa", "ZIL", 12, 313, "m/44'/313'/0'/0/0"),
    Terra = 330 => ("terra", "Terra", "LUNA", 6, 330, "m/44'/330'/0'/0/0"),
    Polkadot = 354 => ("polkadot", "Polkadot", "DOT", 10, 354, "m/44'/354'/0'/0'/0'"),
    Ton = 396 => ("ton", "TON", "GRAM", 9, 396, "m/44'/396'/0'"),
    Near = 397 => ("near", "NEAR", "NEAR", 24, 397, "m/44'/397'/0'"),
    Aion = 425 => ("aion", "Aion", "AION", 18, 425, "m/44'/425'/0'/0'/0'"),
    Kusama = 434 => ("kusama", "Kusama", "KSM", 12, 434, "m/44'/434'/0'/0'/0'"),
    Aeternity = 457 => ("aeternity", "Aeternity", "AE", 18, 457, "m/44'/457'/0'/0'/0'"),
    Kava = 459 => ("kava", "Kava", "KAVA", 6, 459, "m/44'/459'/0'/0/0"),
    Filecoin = 461 => ("filecoin", "Filecoin", "FIL", 18, 461, "m/44'/461'/0'/0/0"),
    Band = 494 => ("band", "BandChain", "BAND", 6, 494, "m/44'/494'/0'/0/0"),
    Theta = 500 => ("theta", "Theta", "THETA", 18, 500, "m/44'/500'/0'/0/0"),
    Solana = 501 => ("solana", "Solana", "SOL", 9, 501, "m/44'/501'/0'"),
    Elrond = 508 => ("elrond", "Elrond", "eGLD", 18, 508, "m/44'/508'/0'/0'/0'"),
    Binance = 714 => ("binance", "Binance", "BNB", 8, 714, "m/44'/714'/0'/0/0"),
    Vechain = 818 => ("vechain", "VeChain", "VET", 18, 818, "m/44'/818'/0'/0/0"),
    Callisto = 820 => ("callisto", "Callisto", "CLO", 18, 820, "m/44'/820'/0'/0/0"),
    Neo = 888 => ("neo", "NEO", "NEO", 8, 888, "m/44'/888'/0'/0/0"),
    Tomochain = 889 => ("tomochain", "TomoChain", "TOMO", 18, 889, "m/44'/889'/0'/0/0"),
    Thundertoken = 1001 => ("thundertoken", "Thunder Token", "TT", 18, 1001, "m/44'/1001'/0'/0/0"),
    Harmony = 1023 => ("harmony", "Harmony", "ONE", 18, 1023, "m/44'/1023'/0'/0/0"),
    Oasis = 474 => ("oasis", "Oasis", "ROSE", 9, 474, "m/44'/474'/0'/0'/0'"),
    Ontology = 1024 => ("ontology", "Ontology", "ONT", 0, 1024, "m/44'/1024'/0'/0/0"),
    Tezos = 1729 => ("tezos", "Tezos", "XTZ", 6, 1729, "m/44'/1729'/0'/0'"),
    Cardano = 1815 => ("cardano", "Cardano", "ADA", 6, 1815, "m/1852'/1815'/0'/0/0"),
    Kin = 2017 => ("kin", "Kin", "KIN", 5, 2017, "m/44'/2017'/0'"),
    Qtum = 2301 => ("qtum", "Qtum", "QTUM", 8, 2301, "m/44'/2301'/0'/0/0"),
    Nebulas = 2718 => ("nebulas", "Nebulas", "NAS", 18, 2718, "m/44'/2718'/0'/0/0"),
    Gochain = 6060 => ("gochain", "GoChain", "GO", 18, 6060, "m/44'/6060'/0'/0/0"),
    Nuls = 8964 => ("nuls", "NULS", "NULS", 8, 8964, "m/44'/8964'/0'/0/0"),
    Zelcash = 19167 => ("zelcash", "Zelcash", "FLUX", 8, 19167, "m/44'/19167'/0'/0/0"),
    Wanchain = 5718350 => ("wanchain", "Wanchain", "WAN", 18, 5718350, "m/44'/5718350'/0'/0/0"),
    Waves = 5741564 => ("waves", "Waves", "WAVES", 8, 5741564, "m/44'/5741564'/0'/0'/0'"),
    Bsc = 10000714 => ("bsc", "Smart Chain Legacy", "BNB", 18, 714, "m/44'/714'/0'/0/0"),
    Smartchain = 20000714 => ("smartchain", "Smart Chain", "BNB", 18, 714, "m/44'/60'/0'/0/0"),
    Polygon = 966 => ("polygon", "Polygon", "MATIC", 18, 60, "m/44'/60'/0'/0/0"),
    Thorchain = 931 => ("thorchain", "THORChain", "RUNE", 18, 931, "m/44'/931'/0'/0/0"),
}

impl CoinType {
    /// Registry identifier (the enum discriminant)
    pub fn value(self) -> u32 {
        self as u32
    }

    pub fn short_id(self) -> &'static str {
        self.record().short_id
    }

    pub fn display_name(self) -> &'static str {
        self.record().display_name
    }

    pub fn symbol(self) -> &'static str {
        self.record().symbol
    }

    pub fn decimals(self) -> u8 {
        self.record().decimals
    }

    /// Registered SLIP-44 index. Not always equal to `value()`.
    pub fn slip44(self) -> u32 {
        self.record().slip44
    }

    /// Default derivation path template
    pub fn derivation_path(self) -> &'static str {
        self.record().derivation_path
    }

    pub fn parsed_derivation_path(self) -> Result<DerivationPath> {
        self.record().parsed_derivation_path()
    }
}

impl TryFrom<u32> for CoinType {
    type Error = RegistryError;

    fn try_from(identifier: u32) -> Result<Self> {
        CoinRegistry::global().coin_type(identifier)
    }
}

impl From<CoinType> for u32 {
    fn from(coin: CoinType) -> Self {
        coin.value()
    }
}

impl FromStr for CoinType {
    type Err = RegistryError;

    fn from_str(short_id: &str) -> Result<Self> {
        CoinRegistry::global().by_short_id(short_id)
    }
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_id())
    }
}

impl Serialize for CoinType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.short_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitcoin_record() {
        let coin = CoinType::Bitcoin;
        assert_eq!(coin.value(), 0);
        assert_eq!(coin.short_id(), "bitcoin");
        assert_eq!(coin.symbol(), "BTC");
        assert_eq!(coin.decimals(), 8);
        assert_eq!(coin.slip44(), 0);
        assert_eq!(coin.derivation_path(), "m/84'/0'/0'/0/0");
    }

    #[test]
    fn test_ethereum_record() {
        let coin = CoinType::Ethereum;
        assert_eq!(coin.display_name(), "Ethereum");
        assert_eq!(coin.decimals(), 18);
        assert_eq!(coin.derivation_path(), "m/44'/60'/0'/0/0");
    }

    #[test]
    fn test_record_identifier_matches_discriminant() {
        for coin in CoinType::ALL {
            assert_eq!(coin.record().identifier, coin.value(), "{}", coin);
        }
    }

    #[test]
    fn test_table_size() {
        assert_eq!(CoinType::ALL.len(), 65);
    }

    #[test]
    fn test_bsc_identifier_and_slip44_diverge() {
        assert_eq!(CoinType::Bsc.value(), 10000714);
        assert_eq!(CoinType::Bsc.slip44(), 714);
        assert_eq!(CoinType::Bsc.symbol(), "BNB");
    }

    #[test]
    fn test_try_from_and_from_str() {
        assert_eq!(CoinType::try_from(60u32), Ok(CoinType::Ethereum));
        assert_eq!("stellar".parse::<CoinType>(), Ok(CoinType::Stellar));
        assert_eq!(CoinType::try_from(1u32), Err(RegistryError::UnknownCoin(1)));
        assert!(matches!(
            "Bitcoin".parse::<CoinType>(),
            Err(RegistryError::UnknownCoinId(_))
        ));
    }

    #[test]
    fn test_display_and_serialize_use_short_id() {
        assert_eq!(CoinType::Smartchain.to_string(), "smartchain");
        let json = serde_json::to_string(&CoinType::Polygon).unwrap();
        assert_eq!(json, "\"polygon\"");
    }

    #[test]
    fn test_record_serializes() {
        let json = serde_json::to_value(CoinType::Ontology.record()).unwrap();
        assert_eq!(json["identifier"], 1024);
        assert_eq!(json["decimals"], 0);
        assert_eq!(json["symbol"], "ONT");
    }
}
