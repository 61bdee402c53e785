//! Derivation path templates
//!
//! Templates must match `m(/\d+'?)+` textually, and are then parsed with
//! `bip32` so index ranges match what a key derivation consumer will accept.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::shared::constants::{
    ACCOUNT_DEPTH, ADDRESS_INDEX_DEPTH, CHANGE_DEPTH, COIN_DEPTH, HARDENED_MARKER, PATH_ROOT,
    PATH_SEPARATOR, PURPOSE_DEPTH,
};
use crate::shared::error::{RegistryError, Result};

/// One path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathIndex {
    pub value: u32,
    pub hardened: bool,
}

impl PathIndex {
    pub fn new(value: u32, hardened: bool) -> Self {
        Self { value, hardened }
    }

    pub fn hardened(value: u32) -> Self {
        Self::new(value, true)
    }

    pub fn normal(value: u32) -> Self {
        Self::new(value, false)
    }
}

impl fmt::Display for PathIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if self.hardened {
            write!(f, "{}", HARDENED_MARKER)?;
        }
        Ok(())
    }
}

impl From<bip32::ChildNumber> for PathIndex {
    fn from(child: bip32::ChildNumber) -> Self {
        Self::new(child.index(), child.is_hardened())
    }
}

/// A parsed derivation path template such as `m/44'/60'/0'/0/0`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    segments: Vec<PathIndex>,
}

impl DerivationPath {
    pub fn new(segments: Vec<PathIndex>) -> Result<Self> {
        if segments.is_empty() {
            return Err(RegistryError::invalid_derivation_path(
                "Path must contain at least one segment",
            ));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[PathIndex] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for a successfully built path
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn at(&self, depth: usize) -> Option<PathIndex> {
        self.segments.get(depth).copied()
    }

    pub fn purpose(&self) -> Option<PathIndex> {
        self.at(PURPOSE_DEPTH)
    }

    pub fn coin(&self) -> Option<PathIndex> {
        self.at(COIN_DEPTH)
    }

    pub fn account(&self) -> Option<PathIndex> {
        self.at(ACCOUNT_DEPTH)
    }

    pub fn change(&self) -> Option<PathIndex> {
        self.at(CHANGE_DEPTH)
    }

    pub fn address_index(&self) -> Option<PathIndex> {
        self.at(ADDRESS_INDEX_DEPTH)
    }

    /// Copy of this path with the account segment replaced, hardened flag kept.
    ///
    /// Fails when the template is too short to have an account segment.
    pub fn with_account(&self, account: u32) -> Result<Self> {
        let current = self.account().ok_or_else(|| {
            RegistryError::invalid_derivation_path(format!("{} has no account segment", self))
        })?;

        let mut segments = self.segments.clone();
        segments[ACCOUNT_DEPTH] = PathIndex::new(account, current.hardened);
        // Round-trip through the parser so out-of-range values are rejected
        segments_to_string(&segments).parse()
    }
}

fn segments_to_string(segments: &[PathIndex]) -> String {
    let mut out = String::from(PATH_ROOT);
    for segment in segments {
        out.push(PATH_SEPARATOR);
        out.push_str(&segment.to_string());
    }
    out
}

/// Enforce `m(/\d+'?)+` on the raw text. `bip32` alone also accepts forms
/// such as `44h` and `+44'` and normalises them away.
fn check_grammar(path: &str) -> Result<()> {
    let mut parts = path.split(PATH_SEPARATOR);
    if parts.next() != Some(PATH_ROOT) {
        return Err(RegistryError::invalid_derivation_path(format!(
            "{}: must start with '{}{}'",
            path, PATH_ROOT, PATH_SEPARATOR
        )));
    }

    let mut count = 0;
    for part in parts {
        let digits = part.strip_suffix(HARDENED_MARKER).unwrap_or(part);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(RegistryError::invalid_derivation_path(format!(
                "{}: bad segment '{}'",
                path, part
            )));
        }
        count += 1;
    }

    if count == 0 {
        return Err(RegistryError::invalid_derivation_path(format!(
            "{}: path has no segments",
            path
        )));
    }
    Ok(())
}

impl FromStr for DerivationPath {
    type Err = RegistryError;

    fn from_str(path: &str) -> Result<Self> {
        check_grammar(path)?;
        let parsed = bip32::DerivationPath::from_str(path)?;

        let segments = parsed.into_iter().map(PathIndex::from).collect::<Vec<_>>();
        Self::new(segments).map_err(|_| {
            RegistryError::invalid_derivation_path(format!("{}: path has no segments", path))
        })
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&segments_to_string(&self.segments))
    }
}

impl Serialize for DerivationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
