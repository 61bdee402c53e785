//! FFI bindings for the coin registry
//!
//! C-compatible lookups over the registry. String results are owned by the
//! caller and must be released with `coin_registry_free_string` or
//! `coin_registry_free_result`. A failed lookup never hands out a default
//! value: `success` is false and `error_code` says why.

use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use crate::core::registry::CoinRegistry;
use crate::shared::constants::{FFI_OK, FFI_STRING_CONVERSION, FFI_UNKNOWN_COIN};
use crate::shared::error::Result;

/// String lookup result
#[repr(C)]
#[derive(Debug)]
pub struct RegistryStringResult {
    pub success: bool,
    pub data: *mut c_char,
    pub error_code: i32,
}

impl RegistryStringResult {
    fn success(data: &str) -> Self {
        match CString::new(data) {
            Ok(c_string) => Self {
                success: true,
                data: c_string.into_raw(),
                error_code: FFI_OK,
            },
            Err(_) => Self::error(FFI_STRING_CONVERSION),
        }
    }

    fn error(error_code: i32) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error_code,
        }
    }

    fn from_lookup(result: Result<&str>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(_) => Self::error(FFI_UNKNOWN_COIN),
        }
    }
}

/// Numeric lookup result
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RegistryNumberResult {
    pub success: bool,
    pub value: u32,
    pub error_code: i32,
}

impl RegistryNumberResult {
    fn from_lookup(result: Result<u32>) -> Self {
        match result {
            Ok(value) => Self {
                success: true,
                value,
                error_code: FFI_OK,
            },
            Err(_) => Self {
                success: false,
                value: 0,
                error_code: FFI_UNKNOWN_COIN,
            },
        }
    }
}

#[no_mangle]
pub extern "C" fn coin_registry_short_id(coin: u32) -> RegistryStringResult {
    RegistryStringResult::from_lookup(CoinRegistry::global().short_id(coin))
}

#[no_mangle]
pub extern "C" fn coin_registry_display_name(coin: u32) -> RegistryStringResult {
    RegistryStringResult::from_lookup(CoinRegistry::global().display_name(coin))
}

#[no_mangle]
pub extern "C" fn coin_registry_symbol(coin: u32) -> RegistryStringResult {
    RegistryStringResult::from_lookup(CoinRegistry::global().symbol(coin))
}

#[no_mangle]
pub extern "C" fn coin_registry_derivation_path(coin: u32) -> RegistryStringResult {
    RegistryStringResult::from_lookup(CoinRegistry::global().derivation_path(coin))
}

#[no_mangle]
pub extern "C" fn coin_registry_decimals(coin: u32) -> RegistryNumberResult {
    RegistryNumberResult::from_lookup(CoinRegistry::global().decimals(coin).map(u32::from))
}

#[no_mangle]
pub extern "C" fn coin_registry_slip44(coin: u32) -> RegistryNumberResult {
    RegistryNumberResult::from_lookup(CoinRegistry::global().slip44(coin))
}

/// Free a C string returned by this module
///
/// # Safety
///
/// `ptr` must be null or a pointer handed out by this module that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn coin_registry_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Free the string held by a result and null it out
///
/// # Safety
///
/// `result` must be null or point to a valid `RegistryStringResult` whose
/// `data` is null or still owned by the caller.
#[no_mangle]
pub unsafe extern "C" fn coin_registry_free_result(result: *mut RegistryStringResult) {
    if let Some(result_ref) = result.as_mut() {
        if !result_ref.data.is_null() {
            drop(CString::from_raw(result_ref.data));
            result_ref.data = ptr::null_mut();
        }
    }
}
