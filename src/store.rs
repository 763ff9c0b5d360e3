use std::path::Path;

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::models::{ParseWarning, Transaction};
use crate::parser::parse_csv;

/// Outcome of a (re)load.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub warnings: usize,
    /// True when the file content hashed identically to the previous load;
    /// the store keeps the existing snapshot and skips re-parsing.
    pub unchanged: bool,
}

/// Owned snapshot of the session's transactions.
///
/// The set is replaced wholesale on a successful load and never patched in
/// place; readers always see one consistent snapshot. A failed load leaves
/// the prior data untouched.
#[derive(Debug, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    warnings: Vec<ParseWarning>,
    checksum: Option<String>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse `path`, installing the new snapshot atomically.
    /// `today` is the substitute for unparsable dates.
    pub fn load(&mut self, path: &Path, today: NaiveDate) -> Result<LoadSummary> {
        let data = std::fs::read(path)?;

        let mut hasher = Sha256::new();
        hasher.update(&data);
        let checksum = hex::encode(hasher.finalize());

        if self.checksum.as_deref() == Some(checksum.as_str()) {
            return Ok(LoadSummary {
                loaded: self.transactions.len(),
                warnings: self.warnings.len(),
                unchanged: true,
            });
        }

        let text = String::from_utf8_lossy(&data);
        let outcome = parse_csv(&text, today)?;

        let summary = LoadSummary {
            loaded: outcome.transactions.len(),
            warnings: outcome.warnings.len(),
            unchanged: false,
        };
        self.transactions = outcome.transactions;
        self.warnings = outcome.warnings;
        self.checksum = Some(checksum);
        Ok(summary)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn write_csv(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let content = format!(
            "Purchase Date,Category,Item,Amount,Payment Type,Additional Information\n{body}"
        );
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_installs_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "t.csv", "05/03/2024,Food,Lunch,10,Card,\n");
        let mut store = TransactionStore::new();
        let summary = store.load(&path, today()).unwrap();
        assert_eq!(summary.loaded, 1);
        assert_eq!(summary.warnings, 0);
        assert!(!summary.unchanged);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_file_keeps_prior_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "t.csv", "05/03/2024,Food,Lunch,10,Card,\n");
        let mut store = TransactionStore::new();
        store.load(&path, today()).unwrap();

        let err = store.load(&dir.path().join("nope.csv"), today());
        assert!(err.is_err());
        assert_eq!(store.len(), 1, "failed load must not disturb the snapshot");
    }

    #[test]
    fn test_unchanged_reload_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "t.csv", "05/03/2024,Food,Lunch,10,Card,\n");
        let mut store = TransactionStore::new();
        assert!(!store.load(&path, today()).unwrap().unchanged);
        let again = store.load(&path, today()).unwrap();
        assert!(again.unchanged);
        assert_eq!(again.loaded, 1);
    }

    #[test]
    fn test_changed_file_replaces_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "t.csv", "05/03/2024,Food,Lunch,10,Card,\n");
        let mut store = TransactionStore::new();
        store.load(&path, today()).unwrap();

        let path = write_csv(
            dir.path(),
            "t.csv",
            "06/03/2024,Travel fare,Metro,5,Cash,\n07/03/2024,Food,Dinner,20,Card,\n",
        );
        let summary = store.load(&path, today()).unwrap();
        assert!(!summary.unchanged);
        assert_eq!(store.len(), 2);
        assert_eq!(store.transactions()[0].item, "Metro");
    }

    #[test]
    fn test_empty_successful_load_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "t.csv", "");
        let mut store = TransactionStore::new();
        let summary = store.load(&path, today()).unwrap();
        assert_eq!(summary.loaded, 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_warnings_surface_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "t.csv", "bad-date,Food,Lunch,abc,Card,\n");
        let mut store = TransactionStore::new();
        let summary = store.load(&path, today()).unwrap();
        assert_eq!(summary.loaded, 1);
        assert_eq!(summary.warnings, 2);
        assert_eq!(store.warnings().len(), 2);
    }
}
