//! Schema validation for the coin table
//!
//! Issues are hard failures: the table cannot be trusted while any exist.
//! Review flags mark rows whose identifier, SLIP-44 index and path coin
//! segment disagree. Those rows are kept as-is; the flag only asks a
//! maintainer to confirm the mapping.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::entities::{CoinRecord, DerivationPath};
use crate::shared::error::{RegistryError, Result};

/// A defect that makes the table invalid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditIssue {
    DuplicateIdentifier { identifier: u32, short_ids: Vec<&'static str> },
    DuplicateShortId { short_id: &'static str, identifiers: Vec<u32> },
    EmptyField { identifier: u32, field: &'static str },
    ShortIdNotLowercase { identifier: u32, short_id: &'static str },
    InvalidPath { short_id: &'static str, path: &'static str, reason: String },
}

/// A row that needs manual confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReviewFlag {
    IdentifierDiffersFromSlip44 { short_id: &'static str, identifier: u32, slip44: u32 },
    PathCoinDiffersFromSlip44 { short_id: &'static str, path_coin: u32, slip44: u32 },
}

impl ReviewFlag {
    pub fn short_id(&self) -> &'static str {
        match self {
            ReviewFlag::IdentifierDiffersFromSlip44 { short_id, .. } => *short_id,
            ReviewFlag::PathCoinDiffersFromSlip44 { short_id, .. } => *short_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub checked: usize,
    pub issues: Vec<AuditIssue>,
    pub review_flags: Vec<ReviewFlag>,
}

impl AuditReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Short ids carrying at least one review flag, deduplicated, in flag order
    pub fn flagged_short_ids(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for flag in &self.review_flags {
            if !out.contains(&flag.short_id()) {
                out.push(flag.short_id());
            }
        }
        out
    }

    /// Fails with `RegistryError::Validation` when any issue was found
    pub fn into_result(self) -> Result<AuditReport> {
        if self.is_valid() {
            return Ok(self);
        }
        Err(RegistryError::validation(format!(
            "{} issue(s) in coin table: {:?}",
            self.issues.len(),
            self.issues
        )))
    }
}

#[derive(Debug)]
pub struct RegistryAudit;

impl RegistryAudit {
    /// Audit the shipped table
    pub fn run() -> AuditReport {
        let report = Self::check(super::CoinRegistry::global().iter());

        for flag in &report.review_flags {
            log::warn!("Coin table entry needs review: {:?}", flag);
        }
        log::info!(
            "Coin table audit: {} entries, {} issue(s), {} review flag(s)",
            report.checked,
            report.issues.len(),
            report.review_flags.len()
        );

        report
    }

    pub fn check<'a, I>(records: I) -> AuditReport
    where
        I: IntoIterator<Item = &'a CoinRecord>,
    {
        let mut report = AuditReport::default();
        let mut identifiers: HashMap<u32, Vec<&'static str>> = HashMap::new();
        let mut short_ids: HashMap<&'static str, Vec<u32>> = HashMap::new();
        let mut order: Vec<(u32, &'static str)> = Vec::new();

        for record in records {
            report.checked += 1;
            identifiers.entry(record.identifier).or_default().push(record.short_id);
            short_ids.entry(record.short_id).or_default().push(record.identifier);
            order.push((record.identifier, record.short_id));

            Self::check_fields(record, &mut report.issues);
            Self::check_path(record, &mut report);

            if record.identifier != record.slip44 {
                report.review_flags.push(ReviewFlag::IdentifierDiffersFromSlip44 {
                    short_id: record.short_id,
                    identifier: record.identifier,
                    slip44: record.slip44,
                });
            }
        }

        // Report duplicates once, at the position of their first occurrence
        for (identifier, short_id) in order {
            if let Some(ids) = identifiers.remove(&identifier) {
                if ids.len() > 1 {
                    report.issues.push(AuditIssue::DuplicateIdentifier {
                        identifier,
                        short_ids: ids,
                    });
                }
            }
            if let Some(dupes) = short_ids.remove(short_id) {
                if dupes.len() > 1 {
                    report.issues.push(AuditIssue::DuplicateShortId {
                        short_id,
                        identifiers: dupes,
                    });
                }
            }
        }

        report
    }

    fn check_fields(record: &CoinRecord, issues: &mut Vec<AuditIssue>) {
        let fields = [
            ("short_id", record.short_id),
            ("display_name", record.display_name),
            ("symbol", record.symbol),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                issues.push(AuditIssue::EmptyField {
                    identifier: record.identifier,
                    field,
                });
            }
        }

        let lowercase = record
            .short_id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        if !record.short_id.is_empty() && !lowercase {
            issues.push(AuditIssue::ShortIdNotLowercase {
                identifier: record.identifier,
                short_id: record.short_id,
            });
        }
    }

    fn check_path(record: &CoinRecord, report: &mut AuditReport) {
        match record.derivation_path.parse::<DerivationPath>() {
            Ok(path) => {
                if let Some(coin) = path.coin() {
                    if coin.value != record.slip44 {
                        report.review_flags.push(ReviewFlag::PathCoinDiffersFromSlip44 {
                            short_id: record.short_id,
                            path_coin: coin.value,
                            slip44: record.slip44,
                        });
                    }
                }
            }
            Err(e) => report.issues.push(AuditIssue::InvalidPath {
                short_id: record.short_id,
                path: record.derivation_path,
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CoinType;

    fn record(identifier: u32, short_id: &'static str, slip44: u32, path: &'static str) -> CoinRecord {
        CoinRecord {
            identifier,
            short_id,
            display_name: "Test",
            symbol: "TST",
            decimals: 8,
            slip44,
            derivation_path: path,
        }
    }

    #[test]
    fn test_shipped_table_is_valid() {
        let report = RegistryAudit::run();
        assert_eq!(report.checked, CoinType::ALL.len());
        assert!(report.is_valid(), "{:?}", report.issues);
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_shipped_table_review_flags() {
        let report = RegistryAudit::run();
        assert_eq!(report.flagged_short_ids(), vec!["bsc", "smartchain", "polygon"]);
        assert_eq!(report.review_flags.len(), 4);
        assert!(report.review_flags.contains(&ReviewFlag::PathCoinDiffersFromSlip44 {
            short_id: "smartchain",
            path_coin: 60,
            slip44: 714,
        }));
    }

    #[test]
    fn test_detects_duplicates() {
        let rows = [
            record(1, "one", 1, "m/44'/1'/0'"),
            record(1, "uno", 1, "m/44'/1'/0'"),
            record(2, "one", 2, "m/44'/2'/0'"),
        ];
        let report = RegistryAudit::check(rows.iter());

        assert_eq!(
            report.issues,
            vec![
                AuditIssue::DuplicateIdentifier { identifier: 1, short_ids: vec!["one", "uno"] },
                AuditIssue::DuplicateShortId { short_id: "one", identifiers: vec![1, 2] },
            ]
        );
    }

    #[test]
    fn test_detects_bad_path_and_fields() {
        let mut bad = record(7, "Seven", 7, "m/44'/7'/x");
        bad.symbol = " ";
        let report = RegistryAudit::check([&bad]);

        assert_eq!(report.issues.len(), 3);
        assert!(report
            .issues
            .iter()
            .any(|issue| matches!(issue, AuditIssue::InvalidPath { short_id: "Seven", .. })));
        assert!(report
            .issues
            .contains(&AuditIssue::EmptyField { identifier: 7, field: "symbol" }));
        assert!(report.issues.contains(&AuditIssue::ShortIdNotLowercase {
            identifier: 7,
            short_id: "Seven"
        }));
    }

    #[test]
    fn test_rejects_non_canonical_path_text() {
        let rows = [
            record(1, "one", 1, "m/44h/1h/0h"),
            record(60, "sixty", 60, "m/+44'/60'"),
        ];
        let report = RegistryAudit::check(rows.iter());

        assert_eq!(report.issues.len(), 2, "{:?}", report.issues);
        assert!(report
            .issues
            .iter()
            .all(|issue| matches!(issue, AuditIssue::InvalidPath { .. })));
    }

    #[test]
    fn test_invalid_report_becomes_validation_error() {
        let rows = [record(3, "three", 3, "three")];
        let result = RegistryAudit::check(rows.iter()).into_result();
        assert!(matches!(result, Err(RegistryError::Validation(_))));
    }

    #[test]
    fn test_report_serializes_with_kind_tags() {
        let rows = [record(10, "ten", 9, "m/44'/9'/0'")];
        let report = RegistryAudit::check(rows.iter());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["checked"], 1);
        assert_eq!(json["review_flags"][0]["kind"], "identifier_differs_from_slip44");
    }
}
