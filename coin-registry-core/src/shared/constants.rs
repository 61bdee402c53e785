//! Constants for the coin registry

// Environment keys
pub const ENV_DEFAULT_COIN: &str = "COIN_REGISTRY_DEFAULT_COIN";
pub const ENV_OUTPUT: &str = "COIN_REGISTRY_OUTPUT";
pub const ENV_STRICT_AUDIT: &str = "COIN_REGISTRY_STRICT_AUDIT";
pub const ENV_LOG_LEVEL: &str = "COIN_REGISTRY_LOG_LEVEL";

// Configuration defaults
pub const DEFAULT_COIN: &str = "bitcoin";
pub const DEFAULT_OUTPUT: &str = "text";
pub const DEFAULT_STRICT_AUDIT: bool = true;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Derivation path grammar
pub const PATH_ROOT: &str = "m";
pub const PATH_SEPARATOR: char = '/';
pub const HARDENED_MARKER: char = '\'';

// Positions inside a BIP-44 style path, root excluded
pub const PURPOSE_DEPTH: usize = 0;
pub const COIN_DEPTH: usize = 1;
pub const ACCOUNT_DEPTH: usize = 2;
pub const CHANGE_DEPTH: usize = 3;
pub const ADDRESS_INDEX_DEPTH: usize = 4;

// FFI error codes
pub const FFI_OK: i32 = 0;
pub const FFI_UNKNOWN_COIN: i32 = 1;
pub const FFI_STRING_CONVERSION: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_depths() {
        assert_eq!(PURPOSE_DEPTH, 0);
        assert_eq!(COIN_DEPTH, 1);
        assert_eq!(ADDRESS_INDEX_DEPTH, 4);
    }

    #[test]
    fn test_ffi_codes_distinct() {
        assert_ne!(FFI_OK, FFI_UNKNOWN_COIN);
        assert_ne!(FFI_UNKNOWN_COIN, FFI_STRING_CONVERSION);
    }
}
